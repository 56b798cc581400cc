pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod origin;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, HostError, PlatformError, StoatError};
pub use events::{ConfigKey, Event, EventBus};
pub use id::InstanceIdGenerator;
pub use origin::{
    bundled_url, OriginBindings, TrustedOrigin, BUNDLED_SCHEME, DIALOG_PAGE, SIDEBAR_PAGE,
};
pub use types::{AppState, Rect, Size, SurfaceId, SurfaceRole};

pub type Result<T> = std::result::Result<T, StoatError>;
