/// Removes one pair of matching single or double quotes around `s`.
#[inline]
pub fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

/// Splits one delimited record into trimmed fields.
///
/// Delimiters inside single- or double-quoted sections do not split; quotes
/// are kept so callers can tell quoted fields apart (see [`unquote`]).
pub fn split_record(line: &str, delimiter: char) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;

    for (i, ch) in line.char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == delimiter => {
                out.push(line[start..i].trim());
                start = i + ch.len_utf8();
            }
            None => {}
        }
    }
    let tail = line[start..].trim();
    if !tail.is_empty() || !out.is_empty() {
        out.push(tail);
    }
    out
}
