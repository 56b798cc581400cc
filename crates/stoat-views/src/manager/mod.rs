//! The ViewManager keeps instance surfaces, the sidebar and the dialog in
//! step with the persisted instance list.

mod broadcast;
mod focus;
mod layout_compute;
mod lifecycle;
mod operations;
mod types;

pub use types::*;
