use crate::domain::model::FailureRecord;

/// User-facing output, one line at a time.
pub trait Console {
    fn line(&mut self, text: &str);
}

/// Log side channel for contained failures.
pub trait FailureSink {
    fn record_failure(&mut self, record: FailureRecord);
}

impl<C: Console + ?Sized> Console for &mut C {
    fn line(&mut self, text: &str) {
        (**self).line(text)
    }
}

impl<S: FailureSink + ?Sized> FailureSink for &mut S {
    fn record_failure(&mut self, record: FailureRecord) {
        (**self).record_failure(record)
    }
}
