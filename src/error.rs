use thiserror::Error;

/// Failure to decode an input report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The buffer ends before the highest-offset field of the layout.
    #[error("insufficient buffer: need at least {required} bytes, got {actual}")]
    InsufficientBuffer { required: usize, actual: usize },
}

/// Failure to route a report to a transport decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("unknown input report id {0:#04x}")]
    UnknownReportId(u8),
    #[error("failed to decode report")]
    Decode(#[from] DecodeError),
}
