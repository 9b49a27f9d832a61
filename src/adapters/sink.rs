use crate::domain::model::FailureRecord;
use crate::domain::ports::FailureSink;
use crate::utils::error::FaultKind;

/// Emits one ERROR event per failure through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl FailureSink for TracingSink {
    fn record_failure(&mut self, record: FailureRecord) {
        tracing::error!(
            kind = %record.kind,
            declared = record.declared,
            "{}: {}",
            record.label,
            record.description
        );
    }
}

#[derive(Debug, Default, Clone)]
pub struct CapturingSink {
    pub records: Vec<FailureRecord>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kinds(&self) -> Vec<FaultKind> {
        self.records.iter().map(|record| record.kind).collect()
    }
}

impl FailureSink for CapturingSink {
    fn record_failure(&mut self, record: FailureRecord) {
        tracing::debug!(label = %record.label, "captured failure record");
        self.records.push(record);
    }
}
