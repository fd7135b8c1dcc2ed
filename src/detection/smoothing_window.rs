use crate::core::ConfigError;

/// Moving-average pre-filter over the last `N` samples.
///
/// The buffer is allocated once and starts zero-filled, so the first `N - 1`
/// outputs are pulled toward zero. A window of one passes samples through.
#[derive(Debug, Clone)]
pub struct SmoothingWindow {
    slots: Box<[i32]>,
    index: usize,
    sum: i64,
}

impl SmoothingWindow {
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptySmoothingWindow);
        }
        Ok(Self {
            slots: vec![0; size].into_boxed_slice(),
            index: 0,
            sum: 0,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Replaces the oldest slot with `sample` and returns the window mean,
    /// truncated toward zero.
    pub fn push(&mut self, sample: i32) -> i32 {
        let slot = &mut self.slots[self.index];
        self.sum += i64::from(sample) - i64::from(*slot);
        *slot = sample;
        self.index = (self.index + 1) % self.slots.len();
        // The mean of i32 values always fits back into an i32.
        (self.sum / self.slots.len() as i64) as i32
    }

    pub fn reset(&mut self) {
        self.slots.fill(0);
        self.index = 0;
        self.sum = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_window() {
        assert_eq!(
            SmoothingWindow::new(0).unwrap_err(),
            ConfigError::EmptySmoothingWindow
        );
    }

    #[test]
    fn size_one_is_identity() {
        let mut w = SmoothingWindow::new(1).unwrap();
        for v in [5, -3, 2500, i32::MAX, i32::MIN] {
            assert_eq!(w.push(v), v);
        }
    }

    #[test]
    fn zero_filled_start_then_rotating_mean() {
        let mut w = SmoothingWindow::new(4).unwrap();
        assert_eq!(w.push(400), 100);
        assert_eq!(w.push(400), 200);
        assert_eq!(w.push(400), 300);
        assert_eq!(w.push(400), 400);
        // oldest 400 replaced by 0
        assert_eq!(w.push(0), 300);
    }

    #[test]
    fn mean_truncates_toward_zero() {
        let mut w = SmoothingWindow::new(5).unwrap();
        assert_eq!(w.push(7), 1);
        assert_eq!(w.push(-14), -1);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let mut w = SmoothingWindow::new(3).unwrap();
        for _ in 0..3 {
            w.push(i32::MAX);
        }
        assert_eq!(w.push(i32::MAX), i32::MAX);
    }

    #[test]
    fn reset_zero_fills() {
        let mut w = SmoothingWindow::new(2).unwrap();
        w.push(1000);
        w.push(1000);
        w.reset();
        assert_eq!(w.push(1000), 500);
        assert_eq!(w.size(), 2);
    }
}
