use std::sync::{Arc, OnceLock};

use serde::de::DeserializeOwned;

use rum_ipc::{MonitorError, RumMonitor};

use crate::channel::{ChannelError, MethodCall, MethodResult};
use crate::params::*;
use crate::registry;
use crate::translate;

/// Receiving end of the RUM method channel.
///
/// Holds a non-owning reference to the monitor. Construct with
/// [`RumPlugin::new`] to inject one (tests, composition root), or with
/// [`RumPlugin::default`] to resolve the process-wide monitor lazily on
/// first call; whichever monitor is resolved first is kept for the life of
/// the plugin instance.
pub struct RumPlugin {
    injected: Option<Arc<dyn RumMonitor>>,
    resolved: OnceLock<Arc<dyn RumMonitor>>,
}

impl RumPlugin {
    pub fn new(monitor: Arc<dyn RumMonitor>) -> Self {
        Self {
            injected: Some(monitor),
            resolved: OnceLock::new(),
        }
    }

    fn monitor(&self) -> &Arc<dyn RumMonitor> {
        self.resolved
            .get_or_init(|| self.injected.clone().unwrap_or_else(registry::global))
    }

    /// Handles one call, producing exactly one result.
    ///
    /// A well-formed call forwards to the monitor exactly once; any
    /// validation failure short-circuits before the monitor is touched.
    pub fn handle(&self, call: &MethodCall) -> MethodResult {
        if !call.arguments.is_object() {
            log::warn!("rum channel: {}: arguments are not a mapping", call.method);
            return MethodResult::Error(ChannelError::invalid_operation(&call.method));
        }

        let outcome = match call.method.as_str() {
            "startView" => self.on_start_view(call),
            "stopView" => self.on_stop_view(call),
            "addTiming" => self.on_add_timing(call),
            "startResourceLoading" => self.on_start_resource_loading(call),
            "stopResourceLoading" => self.on_stop_resource_loading(call),
            "stopResourceLoadingWithError" => self.on_stop_resource_loading_with_error(call),
            "addError" => self.on_add_error(call),
            _ => return MethodResult::NotImplemented,
        };

        match outcome {
            Ok(()) => {
                log::debug!("rum channel: forwarded {}", call.method);
                MethodResult::ok()
            }
            Err(Dispatch::Decode(error)) => {
                log::warn!("rum channel: rejecting {}: {}", call.method, error.message);
                MethodResult::Error(error)
            }
            Err(Dispatch::Monitor(error)) => {
                log::warn!("rum channel: monitor rejected {}: {error}", call.method);
                MethodResult::Error(ChannelError::internal(&call.method, error))
            }
        }
    }

    fn on_start_view(&self, call: &MethodCall) -> Result<(), Dispatch> {
        let params: StartViewParams = decode(call)?;
        self.monitor()
            .start_view(&params.key, &params.name, params.attributes)?;
        Ok(())
    }

    fn on_stop_view(&self, call: &MethodCall) -> Result<(), Dispatch> {
        let params: StopViewParams = decode(call)?;
        self.monitor().stop_view(&params.key, params.attributes)?;
        Ok(())
    }

    fn on_add_timing(&self, call: &MethodCall) -> Result<(), Dispatch> {
        let params: AddTimingParams = decode(call)?;
        self.monitor().add_timing(&params.name)?;
        Ok(())
    }

    fn on_start_resource_loading(&self, call: &MethodCall) -> Result<(), Dispatch> {
        let params: StartResourceParams = decode(call)?;
        let method = translate::http_method_from_wire(&params.http_method);
        self.monitor()
            .start_resource_loading(&params.key, method, &params.url, params.attributes)?;
        Ok(())
    }

    fn on_stop_resource_loading(&self, call: &MethodCall) -> Result<(), Dispatch> {
        let params: StopResourceParams = decode(call)?;
        let kind = translate::resource_type_from_wire(&params.kind);
        self.monitor().stop_resource_loading(
            &params.key,
            params.status_code,
            kind,
            params.size,
            params.attributes,
        )?;
        Ok(())
    }

    fn on_stop_resource_loading_with_error(&self, call: &MethodCall) -> Result<(), Dispatch> {
        let params: StopResourceWithErrorParams = decode(call)?;
        self.monitor().stop_resource_loading_with_error(
            &params.key,
            &params.message,
            params.attributes,
        )?;
        Ok(())
    }

    fn on_add_error(&self, call: &MethodCall) -> Result<(), Dispatch> {
        let params: AddErrorParams = decode(call)?;
        let source = translate::error_source_from_wire(&params.source);
        self.monitor().add_error(
            &params.message,
            source,
            params.stack_trace.as_deref(),
            params.attributes,
        )?;
        Ok(())
    }
}

impl Default for RumPlugin {
    /// A plugin that resolves the process-wide monitor on first call.
    fn default() -> Self {
        Self {
            injected: None,
            resolved: OnceLock::new(),
        }
    }
}

/// Why a dispatch short-circuited: before the monitor, or inside it.
enum Dispatch {
    Decode(ChannelError),
    Monitor(MonitorError),
}

impl From<MonitorError> for Dispatch {
    fn from(error: MonitorError) -> Self {
        Self::Monitor(error)
    }
}

fn decode<T: DeserializeOwned>(call: &MethodCall) -> Result<T, Dispatch> {
    serde_json::from_value::<T>(call.arguments.clone())
        .map_err(|err| Dispatch::Decode(ChannelError::contract_violation(&call.method, err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn handle_rejects_non_mapping_arguments() {
        let plugin = RumPlugin::new(Arc::new(rum_ipc::NoOpMonitor));
        for arguments in [json!(null), json!("text"), json!(17), json!(["a", "b"])] {
            let result = plugin.handle(&MethodCall::new("startView", arguments));
            let MethodResult::Error(error) = result else {
                panic!("expected invalid-operation error");
            };
            assert_eq!(error.code, crate::channel::CODE_INVALID_OPERATION);
            assert!(error.message.contains("startView"));
        }
    }

    #[test]
    fn handle_maps_monitor_errors_to_internal() {
        let plugin = RumPlugin::new(Arc::new(rum_ipc::StubMonitor));
        let result = plugin.handle(&MethodCall::new("addTiming", json!({ "name": "mark" })));
        let MethodResult::Error(error) = result else {
            panic!("expected internal error from stub monitor");
        };
        assert_eq!(error.code, crate::channel::CODE_INTERNAL_ERROR);
        assert!(error.message.contains("not implemented"));
    }

    #[test]
    fn unknown_method_is_not_implemented_even_with_mapping_args() {
        let plugin = RumPlugin::new(Arc::new(rum_ipc::StubMonitor));
        let result = plugin.handle(&MethodCall::new("flushAndDeinitialize", json!({})));
        assert_eq!(result, MethodResult::NotImplemented);
    }
}
