use super::Action;

impl Action {
    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            Action::SelectInstance(1) => "Select Instance 1",
            Action::SelectInstance(2) => "Select Instance 2",
            Action::SelectInstance(3) => "Select Instance 3",
            Action::SelectInstance(4) => "Select Instance 4",
            Action::SelectInstance(5) => "Select Instance 5",
            Action::SelectInstance(6) => "Select Instance 6",
            Action::SelectInstance(7) => "Select Instance 7",
            Action::SelectInstance(8) => "Select Instance 8",
            Action::SelectInstance(9) => "Select Instance 9",
            Action::SelectInstance(_) => "Select Instance",
            Action::NextInstance => "Next Instance",
            Action::PrevInstance => "Previous Instance",
            Action::OpenInstanceManager => "Manage Instances...",
            Action::ZoomIn => "Zoom In",
            Action::ZoomOut => "Zoom Out",
            Action::ZoomReset => "Actual Size",
            Action::Reload => "Reload",
            Action::Minimise => "Minimise",
            Action::ToggleMaximise => "Maximise",
            Action::CloseWindow => "Close",
            Action::ShowWindow => "Show App",
            Action::ToggleVisibility => "Hide App",
            Action::Quit => "Quit App",
            Action::None => "None",
        }
    }

    /// Whether this action only makes sense while the main window is focused.
    pub fn is_focus_scoped(&self) -> bool {
        matches!(
            self,
            Action::SelectInstance(_) | Action::NextInstance | Action::PrevInstance
        )
    }
}
