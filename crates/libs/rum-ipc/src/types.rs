use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Attributes ────────────────────────────────────────────────────────────────

/// Opaque per-call attributes, forwarded to the monitor as-is.
///
/// Values may be any JSON value, including `Null` — the channel performs no
/// deep validation on attribute contents.
pub type AttributeMap = BTreeMap<String, serde_json::Value>;

// ── Resource-load spans ───────────────────────────────────────────────────────

/// What kind of asset a resource-load span covered.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Document,
    Image,
    Xhr,
    Beacon,
    Css,
    Fetch,
    Font,
    Js,
    Media,
    Native,
    #[default]
    Other,
}

/// HTTP method of a tracked resource request.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Head,
    Put,
    Delete,
    Patch,
}

// ── User actions ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserActionType {
    Tap,
    Scroll,
    Swipe,
    #[default]
    Custom,
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// Where a reported application error originated.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSource {
    Source,
    Network,
    Webview,
    Console,
    #[default]
    Custom,
}
