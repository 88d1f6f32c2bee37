use thiserror::Error;

use crate::report::report::Report;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot write report: {0}")]
    IOError(#[from] std::io::Error),

    #[error("cannot serialize report: {0}")]
    JsonError(#[from] serde_json::Error)
}

/// Destination for finished reports.
pub trait ReportSink {
    fn write_report(&mut self, report: &Report) -> Result<(), ReportError>;
}
