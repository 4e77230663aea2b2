use crate::error::MonitorError;
use crate::types::*;

/// Application error reporting.
pub trait MonitorErrors: Send + Sync {
    /// Report an application error, optionally with a stack trace.
    fn add_error(
        &self,
        message: &str,
        source: ErrorSource,
        stack: Option<&str>,
        attributes: AttributeMap,
    ) -> Result<(), MonitorError>;
}
