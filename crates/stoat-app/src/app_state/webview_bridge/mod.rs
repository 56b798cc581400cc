//! Bridge between the view manager, wry webviews and the app loop.
//!
//! - `host`: `SurfaceHost` implementation over `SurfaceRegistry`
//! - `dialog`: instance-manager window lifecycle
//! - `ipc_dispatch`: per-role IPC allowlists and intent routing
//! - `surface_keys`: zoom/reload on a single surface
//! - `events`: draining webview callbacks each tick

mod dialog;
mod events;
mod host;
mod ipc_dispatch;
mod surface_keys;

pub use host::WryHost;
pub(super) use surface_keys::is_surface_action;
