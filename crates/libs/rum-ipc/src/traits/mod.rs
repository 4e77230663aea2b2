mod errors;
mod resources;
mod views;

pub use errors::MonitorErrors;
pub use resources::MonitorResources;
pub use views::MonitorViews;

/// Composite trait encompassing the full RUM monitor capability set.
///
/// Automatically implemented for any type that implements all three
/// sub-traits. Use `Arc<dyn RumMonitor>` as the primary handle type.
pub trait RumMonitor: MonitorViews + MonitorResources + MonitorErrors {}

impl<T> RumMonitor for T where T: MonitorViews + MonitorResources + MonitorErrors {}
