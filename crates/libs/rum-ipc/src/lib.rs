//! Monitor boundary for the RUM method-channel bridge.
//!
//! This crate defines the contract between the method-channel adapter and
//! whatever RUM monitor implementation the host process provides. The real
//! monitor (view tracking, event batching, upload) lives elsewhere; this
//! crate only provides:
//!
//! - **Boundary types** matching what crosses the channel (attribute maps,
//!   resource/method/action/error enum sets)
//! - **Capability trait definitions** covering the full monitor surface
//! - **`StubMonitor`** returning `NotImplemented` for every operation
//! - **`NoOpMonitor`** accepting every operation, the default when no monitor
//!   has been installed
//! - **`MonitorError`** with a `NotImplemented` variant for incremental
//!   development
//!
//! # Trait hierarchy
//!
//! Three focused traits combine into one composite:
//!
//! - [`MonitorViews`] — view lifecycle and timing marks
//! - [`MonitorResources`] — resource-load spans
//! - [`MonitorErrors`] — application error reporting
//! - [`RumMonitor`] — composite (auto-implemented for all three)

pub mod error;
pub mod traits;
pub mod types;

pub use error::MonitorError;
pub use traits::{MonitorErrors, MonitorResources, MonitorViews, RumMonitor};
pub use types::*;

mod stub;
pub use stub::{NoOpMonitor, StubMonitor};
