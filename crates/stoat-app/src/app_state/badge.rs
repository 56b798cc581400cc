//! Unread badge presentation.
//!
//! Each instance reports its own count; the aggregate is shown in the main
//! window title in the platform's badge style.

use stoat_platform::BadgePresentation;

use super::core::StoatApp;
use super::types::WINDOW_TITLE;

/// Window title carrying `badge`, e.g. `(3) Stoat` or `• Stoat`.
pub(super) fn badged_title(base: &str, badge: &BadgePresentation) -> String {
    if badge.is_clear() {
        base.to_string()
    } else if badge.text.chars().all(|c| c.is_ascii_digit()) {
        format!("({}) {base}", badge.text)
    } else {
        format!("{} {base}", badge.text)
    }
}

impl StoatApp {
    /// Record a count reported by an instance and refresh the badge.
    pub(super) fn set_badge_count(&mut self, instance: &str, count: i64) {
        let before = self.badges.total();
        let total = self.badges.set(instance, count);
        if total != before {
            self.present_badge();
        }
    }

    /// Forget a removed instance's count.
    pub(super) fn clear_badge(&mut self, instance: &str) {
        let before = self.badges.total();
        if self.badges.remove(instance) != before {
            self.present_badge();
        }
    }

    fn present_badge(&self) {
        let total = self.badges.total();
        let presentation = self.badge_style.present(total);
        tracing::debug!(
            total,
            text = %presentation.text,
            description = ?presentation.description,
            "Badge updated"
        );
        if let Some(window) = &self.window {
            window.set_title(&badged_title(WINDOW_TITLE, &presentation));
        }
    }
}
