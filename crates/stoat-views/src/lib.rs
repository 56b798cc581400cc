//! View composition for the desktop shell.
//!
//! [`LayoutEngine`] decides where every surface goes; [`ViewManager`] owns
//! the instance surfaces, the sidebar and the instance-manager dialog and
//! keeps them consistent with the persisted config. Both work against the
//! [`SurfaceHost`] capability so they can run without a window system.

pub mod host;
pub mod layout;
pub mod manager;

pub use host::{SurfaceHost, SurfaceSource, SurfaceSpec};
pub use layout::{ChromeMode, LayoutEngine, LayoutPlan, TITLEBAR_HEIGHT};
pub use manager::{DialogRequest, ViewError, ViewManager};
