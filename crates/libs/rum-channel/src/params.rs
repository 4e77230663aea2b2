//! Per-method argument shapes, decoded once at the channel boundary.
//!
//! Field names follow the wire contract (camelCase); extra keys from the
//! caller are ignored. A missing or mistyped required field surfaces as a
//! `DatadogSDK:ContractViolation` from the router.

use rum_ipc::AttributeMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct StartViewParams {
    pub key: String,
    pub name: String,
    pub attributes: AttributeMap,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StopViewParams {
    pub key: String,
    pub attributes: AttributeMap,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddTimingParams {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StartResourceParams {
    pub key: String,
    #[serde(rename = "httpMethod")]
    pub http_method: String,
    pub url: String,
    pub attributes: AttributeMap,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StopResourceParams {
    pub key: String,
    pub kind: String,
    #[serde(default, rename = "statusCode")]
    pub status_code: Option<i64>,
    #[serde(default)]
    pub size: Option<i64>,
    pub attributes: AttributeMap,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StopResourceWithErrorParams {
    pub key: String,
    pub message: String,
    pub attributes: AttributeMap,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddErrorParams {
    pub message: String,
    pub source: String,
    #[serde(default, rename = "stackTrace")]
    pub stack_trace: Option<String>,
    pub attributes: AttributeMap,
}
