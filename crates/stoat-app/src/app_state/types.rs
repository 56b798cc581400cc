//! Shared constants and small value types for the app state.

use std::time::Duration;

use crate::cli::Args;

/// How often webview and store events are drained when idle.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Quiet period after the last move/resize before geometry is persisted.
pub(super) const WINDOW_STATE_DEBOUNCE: Duration = Duration::from_millis(500);

pub(super) const DEFAULT_WINDOW_SIZE: (f64, f64) = (1280.0, 720.0);
pub(super) const MIN_WINDOW_SIZE: (f64, f64) = (300.0, 300.0);

pub(super) const DIALOG_SIZE: (f64, f64) = (500.0, 450.0);
pub(super) const DIALOG_TITLE: &str = "Manage Instances";

pub(super) const WINDOW_TITLE: &str = "Stoat";

/// Launch flags that outlive argument parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub hidden: bool,
    pub force_server: Option<String>,
}

impl From<&Args> for LaunchOptions {
    fn from(args: &Args) -> Self {
        Self {
            hidden: args.hidden,
            force_server: args.force_server.clone(),
        }
    }
}
