use crate::error::MonitorError;
use crate::traits::*;
use crate::types::*;

/// A monitor that returns `NotImplemented` for every operation.
///
/// This is the starting point for incremental development — wire it into the
/// channel adapter, then replace stubs one operation at a time.
pub struct StubMonitor;

impl MonitorViews for StubMonitor {
    fn start_view(
        &self,
        _key: &str,
        _name: &str,
        _attributes: AttributeMap,
    ) -> Result<(), MonitorError> {
        Err(MonitorError::not_implemented("start_view"))
    }

    fn stop_view(&self, _key: &str, _attributes: AttributeMap) -> Result<(), MonitorError> {
        Err(MonitorError::not_implemented("stop_view"))
    }

    fn add_timing(&self, _name: &str) -> Result<(), MonitorError> {
        Err(MonitorError::not_implemented("add_timing"))
    }
}

impl MonitorResources for StubMonitor {
    fn start_resource_loading(
        &self,
        _key: &str,
        _method: HttpMethod,
        _url: &str,
        _attributes: AttributeMap,
    ) -> Result<(), MonitorError> {
        Err(MonitorError::not_implemented("start_resource_loading"))
    }

    fn stop_resource_loading(
        &self,
        _key: &str,
        _status_code: Option<i64>,
        _kind: ResourceType,
        _size: Option<i64>,
        _attributes: AttributeMap,
    ) -> Result<(), MonitorError> {
        Err(MonitorError::not_implemented("stop_resource_loading"))
    }

    fn stop_resource_loading_with_error(
        &self,
        _key: &str,
        _message: &str,
        _attributes: AttributeMap,
    ) -> Result<(), MonitorError> {
        Err(MonitorError::not_implemented(
            "stop_resource_loading_with_error",
        ))
    }
}

impl MonitorErrors for StubMonitor {
    fn add_error(
        &self,
        _message: &str,
        _source: ErrorSource,
        _stack: Option<&str>,
        _attributes: AttributeMap,
    ) -> Result<(), MonitorError> {
        Err(MonitorError::not_implemented("add_error"))
    }
}

/// A monitor that accepts and discards every operation.
///
/// Mirrors the vendor SDK's default global monitor: telemetry sent before a
/// real monitor is installed is dropped rather than rejected.
pub struct NoOpMonitor;

impl MonitorViews for NoOpMonitor {
    fn start_view(
        &self,
        _key: &str,
        _name: &str,
        _attributes: AttributeMap,
    ) -> Result<(), MonitorError> {
        Ok(())
    }

    fn stop_view(&self, _key: &str, _attributes: AttributeMap) -> Result<(), MonitorError> {
        Ok(())
    }

    fn add_timing(&self, _name: &str) -> Result<(), MonitorError> {
        Ok(())
    }
}

impl MonitorResources for NoOpMonitor {
    fn start_resource_loading(
        &self,
        _key: &str,
        _method: HttpMethod,
        _url: &str,
        _attributes: AttributeMap,
    ) -> Result<(), MonitorError> {
        Ok(())
    }

    fn stop_resource_loading(
        &self,
        _key: &str,
        _status_code: Option<i64>,
        _kind: ResourceType,
        _size: Option<i64>,
        _attributes: AttributeMap,
    ) -> Result<(), MonitorError> {
        Ok(())
    }

    fn stop_resource_loading_with_error(
        &self,
        _key: &str,
        _message: &str,
        _attributes: AttributeMap,
    ) -> Result<(), MonitorError> {
        Ok(())
    }
}

impl MonitorErrors for NoOpMonitor {
    fn add_error(
        &self,
        _message: &str,
        _source: ErrorSource,
        _stack: Option<&str>,
        _attributes: AttributeMap,
    ) -> Result<(), MonitorError> {
        Ok(())
    }
}
