use crate::error::MonitorError;
use crate::types::*;

/// View lifecycle and timing marks.
///
/// Implementations are called synchronously from the channel thread; a call
/// must not block on network or disk.
pub trait MonitorViews: Send + Sync {
    /// Start tracking a view. `key` identifies the view for a later
    /// [`stop_view`](Self::stop_view); `name` is what shows up in dashboards.
    fn start_view(
        &self,
        key: &str,
        name: &str,
        attributes: AttributeMap,
    ) -> Result<(), MonitorError>;

    /// Stop tracking the view previously started with `key`.
    fn stop_view(&self, key: &str, attributes: AttributeMap) -> Result<(), MonitorError>;

    /// Record a named timing mark relative to the current view's start.
    fn add_timing(&self, name: &str) -> Result<(), MonitorError>;
}
