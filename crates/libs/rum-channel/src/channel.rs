use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Channel identifier the host registers this adapter under.
pub const CHANNEL_NAME: &str = "datadog_sdk_flutter.rum";

/// Error code for an argument payload that is not a key-value mapping.
pub const CODE_INVALID_OPERATION: &str = "DatadogSDK:InvalidOperation";

/// Error code for a missing or mistyped required field.
pub const CODE_CONTRACT_VIOLATION: &str = "DatadogSDK:ContractViolation";

/// Error code for a failure reported by the monitor itself.
pub const CODE_INTERNAL_ERROR: &str = "DatadogSDK:InternalError";

/// One inbound call: a method name plus a loosely-typed argument mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: JsonValue,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: JsonValue) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// The single result produced for a call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum MethodResult {
    /// The call was decoded and forwarded; RUM operations carry no payload,
    /// so the value is always `Null` today.
    Success(JsonValue),
    Error(ChannelError),
    /// The method name matched no handler. Distinct from [`Self::Error`] so
    /// the host can fall through to other handlers.
    NotImplemented,
}

impl MethodResult {
    /// Void acknowledgement, the normal outcome.
    pub fn ok() -> Self {
        Self::Success(JsonValue::Null)
    }
}

/// Structured failure sent back over the channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<JsonValue>,
}

impl ChannelError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// The argument payload was not a string-keyed mapping.
    pub fn invalid_operation(method: &str) -> Self {
        Self::new(
            CODE_INVALID_OPERATION,
            format!("No arguments in call to {method}."),
        )
    }

    /// A required field was absent or had the wrong type.
    pub fn contract_violation(method: &str, detail: impl std::fmt::Display) -> Self {
        Self::new(
            CODE_CONTRACT_VIOLATION,
            format!("Bad arguments in call to {method}: {detail}"),
        )
    }

    /// The monitor rejected the forwarded call.
    pub fn internal(method: &str, detail: impl std::fmt::Display) -> Self {
        Self::new(
            CODE_INTERNAL_ERROR,
            format!("Monitor error in call to {method}: {detail}"),
        )
    }
}
