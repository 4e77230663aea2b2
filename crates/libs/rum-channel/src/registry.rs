//! Process-wide default monitor.
//!
//! The composition root installs the real monitor once at startup; a
//! [`RumPlugin`](crate::plugin::RumPlugin) built without an injected monitor
//! resolves through here. Before anything is installed, [`global`] hands out
//! a [`NoOpMonitor`] so early telemetry is dropped instead of rejected.

use std::sync::{Arc, OnceLock};

use rum_ipc::{NoOpMonitor, RumMonitor};

static GLOBAL: OnceLock<Arc<dyn RumMonitor>> = OnceLock::new();

/// The global monitor was already set.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("global monitor already installed")]
pub struct AlreadyInstalled;

/// Installs the process-wide monitor. First writer wins; later calls fail
/// and leave the existing monitor in place.
pub fn install(monitor: Arc<dyn RumMonitor>) -> Result<(), AlreadyInstalled> {
    GLOBAL.set(monitor).map_err(|_| AlreadyInstalled)
}

/// Returns the installed monitor, or a fresh no-op monitor if none is
/// installed yet. Does not memoize the fallback, so a later [`install`]
/// still takes effect for plugins that have not resolved their delegate.
pub fn global() -> Arc<dyn RumMonitor> {
    GLOBAL
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(NoOpMonitor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rum_ipc::StubMonitor;

    // Single test: the OnceLock is shared process-wide, so ordering between
    // separate #[test] fns would be racy.
    #[test]
    fn fallback_then_first_writer_wins() {
        let fallback = global();
        assert!(fallback.add_timing("early_mark").is_ok(), "fallback is the no-op monitor");

        let first: Arc<dyn RumMonitor> = Arc::new(StubMonitor);
        install(first.clone()).expect("first install succeeds");
        assert_eq!(install(Arc::new(StubMonitor)).expect_err("second install"), AlreadyInstalled);

        assert!(Arc::ptr_eq(&global(), &first));
    }
}
