//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the view manager, webview events,
//! shortcuts and the presentation adapters.

mod badge;
mod core;
mod dispatch;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod system_tray;
mod tray;
mod types;
mod webview_bridge;
mod window_state;

pub use core::StoatApp;
pub use types::LaunchOptions;
