use crate::error::MonitorError;
use crate::types::*;

/// Resource-load span tracking.
pub trait MonitorResources: Send + Sync {
    /// Open a resource-load span. `key` correlates the eventual stop call.
    fn start_resource_loading(
        &self,
        key: &str,
        method: HttpMethod,
        url: &str,
        attributes: AttributeMap,
    ) -> Result<(), MonitorError>;

    /// Close a resource-load span successfully. `status_code` and `size` are
    /// forwarded as-is when the caller supplied them.
    fn stop_resource_loading(
        &self,
        key: &str,
        status_code: Option<i64>,
        kind: ResourceType,
        size: Option<i64>,
        attributes: AttributeMap,
    ) -> Result<(), MonitorError>;

    /// Close a resource-load span that failed.
    fn stop_resource_loading_with_error(
        &self,
        key: &str,
        message: &str,
        attributes: AttributeMap,
    ) -> Result<(), MonitorError>;
}
