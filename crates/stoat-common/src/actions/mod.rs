mod action_enum;
mod dispatch;

pub use action_enum::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_instance_labels() {
        assert_eq!(Action::SelectInstance(1).label(), "Select Instance 1");
        assert_eq!(Action::SelectInstance(9).label(), "Select Instance 9");
        assert_eq!(Action::SelectInstance(42).label(), "Select Instance");
    }

    #[test]
    fn manager_label_matches_menu_text() {
        assert_eq!(Action::OpenInstanceManager.label(), "Manage Instances...");
        assert_eq!(Action::Quit.label(), "Quit App");
    }

    #[test]
    fn only_switching_actions_are_focus_scoped() {
        assert!(Action::SelectInstance(3).is_focus_scoped());
        assert!(Action::NextInstance.is_focus_scoped());
        assert!(Action::PrevInstance.is_focus_scoped());
        assert!(!Action::Reload.is_focus_scoped());
        assert!(!Action::Quit.is_focus_scoped());
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            Action::SelectInstance(3),
            Action::NextInstance,
            Action::ZoomIn,
            Action::ToggleVisibility,
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }
}
