use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the application.
///
/// Shortcuts, the tray menu, and sidebar window controls all resolve to an
/// `Action`. The app state dispatcher matches on this enum to route to the
/// view registry or the host window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Instances --
    /// Select the instance at a 1-based position in tab order.
    SelectInstance(u32),
    NextInstance,
    PrevInstance,
    OpenInstanceManager,

    // -- Surface --
    ZoomIn,
    ZoomOut,
    ZoomReset,
    Reload,

    // -- Window --
    Minimise,
    ToggleMaximise,
    CloseWindow,
    ShowWindow,
    ToggleVisibility,
    Quit,

    // -- Noop --
    None,
}
