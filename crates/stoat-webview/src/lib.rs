//! Isolated web surfaces for the desktop shell.
//!
//! Wraps the `wry` crate to provide:
//! - One child WebView per instance, plus the bundled sidebar and dialog
//! - A narrow JSON IPC bridge (Rust <-> JavaScript)
//! - The `stoat://` protocol for bundled pages
//! - A per-surface navigation guard and external-link deflection
//! - Zoom/reload key interception

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod zoom;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, KeyPayload};
pub use manager::{SurfaceConfig, SurfaceRegistry, WebViewHandle, WebViewManager};
pub use zoom::ZoomLevel;
