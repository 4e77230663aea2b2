//! Method-channel adapter for RUM telemetry.
//!
//! This crate is the receiving end of the `datadog_sdk_flutter.rum` method
//! channel: the host runtime hands it a method name plus a loosely-typed
//! argument mapping, and it validates the arguments, translates wire-format
//! enum tokens, and forwards exactly one call to a [`rum_ipc::RumMonitor`].
//! The transport itself (framing, threading) belongs to the host; this crate
//! only maps one [`MethodCall`] to one [`MethodResult`].
//!
//! Every call resolves to one of four outcomes:
//!
//! - [`MethodResult::Success`] — arguments decoded, monitor invoked once
//! - `DatadogSDK:InvalidOperation` — arguments were not a key-value mapping
//! - `DatadogSDK:ContractViolation` — a required field was absent or mistyped
//! - [`MethodResult::NotImplemented`] — unrecognized method name

pub mod channel;
pub mod plugin;
pub mod registry;
pub mod translate;

mod params;

pub use channel::{ChannelError, MethodCall, MethodResult, CHANNEL_NAME};
pub use plugin::RumPlugin;
