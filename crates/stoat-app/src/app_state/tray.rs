//! Tray menu model.
//!
//! The menu is rebuilt from the instance snapshot whenever instances or the
//! selection change, and whenever the main window is shown or hidden.

use stoat_common::Action;
use stoat_config::InstancesSnapshot;

pub(super) const TRAY_TITLE: &str = "Stoat for Desktop";
const ACTIVE_MARKER: &str = "\u{25CF} ";
const INACTIVE_MARKER: &str = "  ";

/// What activating a tray entry asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayIntent {
    /// Switch to the instance, then show and focus the window.
    SwitchInstance(String),
    Run(Action),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayItem {
    /// Disabled text row.
    Label(String),
    /// Disabled submenu holding the version string.
    Version(String),
    Separator,
    Entry { label: String, intent: TrayIntent },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrayMenu {
    pub items: Vec<TrayItem>,
}

impl TrayMenu {
    pub fn build(snapshot: &InstancesSnapshot, window_visible: bool) -> Self {
        let mut items = vec![
            TrayItem::Label(TRAY_TITLE.to_string()),
            TrayItem::Version(env!("CARGO_PKG_VERSION").to_string()),
            TrayItem::Separator,
        ];

        items.extend(snapshot.instances.iter().map(|instance| {
            let marker = if instance.id == snapshot.active_instance_id {
                ACTIVE_MARKER
            } else {
                INACTIVE_MARKER
            };
            TrayItem::Entry {
                label: format!("{marker}{}", instance.label),
                intent: TrayIntent::SwitchInstance(instance.id.clone()),
            }
        }));

        items.push(action_entry(Action::OpenInstanceManager));
        items.push(TrayItem::Separator);
        items.push(TrayItem::Entry {
            label: if window_visible {
                Action::ToggleVisibility.label()
            } else {
                Action::ShowWindow.label()
            }
            .to_string(),
            intent: TrayIntent::Run(Action::ToggleVisibility),
        });
        items.push(action_entry(Action::Quit));

        Self { items }
    }

    /// Labels of the enabled entries, in order.
    pub fn entry_labels(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| match item {
                TrayItem::Entry { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn intent_at(&self, label: &str) -> Option<&TrayIntent> {
        self.items.iter().find_map(|item| match item {
            TrayItem::Entry { label: l, intent } if l == label => Some(intent),
            _ => None,
        })
    }
}

fn action_entry(action: Action) -> TrayItem {
    TrayItem::Entry {
        label: action.label().to_string(),
        intent: TrayIntent::Run(action),
    }
}
