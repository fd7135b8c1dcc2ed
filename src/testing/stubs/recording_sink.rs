use crate::core::{Millis, RateEstimate};
use crate::sinks::{RateSink, SinkError};
use std::cell::RefCell;
use std::rc::Rc;

/// Keeps every publication; clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingSink {
    log: Rc<RefCell<Vec<(Millis, RateEstimate)>>>,
}

impl RecordingSink {
    pub fn published(&self) -> Vec<(Millis, RateEstimate)> {
        self.log.borrow().clone()
    }

    pub fn rates(&self) -> Vec<Option<u32>> {
        self.log.borrow().iter().map(|(_, r)| r.per_minute()).collect()
    }
}

impl RateSink for RecordingSink {
    fn publish(&mut self, timestamp_ms: Millis, rate: RateEstimate) -> Result<(), SinkError> {
        self.log.borrow_mut().push((timestamp_ms, rate));
        Ok(())
    }
}

/// Rejects every publication.
#[derive(Default)]
pub struct FailingSink {
    pub attempts: Rc<RefCell<u64>>,
}

impl RateSink for FailingSink {
    fn publish(&mut self, _timestamp_ms: Millis, _rate: RateEstimate) -> Result<(), SinkError> {
        *self.attempts.borrow_mut() += 1;
        Err(SinkError::Rejected("link down".into()))
    }
}
