//! Unread badge aggregation and per-platform presentation.
//!
//! Each instance reports its own count. `-1` means "unread, no
//! count" and wins over any sum.

use std::collections::HashMap;

/// Per-instance badge counts.
#[derive(Debug, Default)]
pub struct BadgeCounts {
    counts: HashMap<String, i64>,
}

impl BadgeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` for `instance` and return the new total.
    pub fn set(&mut self, instance: &str, count: i64) -> i64 {
        // Anything below -1 is treated as the unread dot.
        self.counts.insert(instance.to_string(), count.max(-1));
        self.total()
    }

    /// Forget a removed instance. Returns the new total.
    pub fn remove(&mut self, instance: &str) -> i64 {
        self.counts.remove(instance);
        self.total()
    }

    /// Sum of all counts, or `-1` if any instance reports `-1`.
    pub fn total(&self) -> i64 {
        let mut total = 0;
        for &count in self.counts.values() {
            if count == -1 {
                return -1;
            }
            total += count;
        }
        total
    }
}

/// How the host platform shows a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Text on the dock icon (macOS).
    Dock,
    /// Overlay on the taskbar button with an accessible description
    /// (Windows, Linux).
    Overlay,
    None,
}

impl BadgeStyle {
    /// The style for the platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            BadgeStyle::Dock
        } else if cfg!(any(target_os = "windows", target_os = "linux")) {
            BadgeStyle::Overlay
        } else {
            BadgeStyle::None
        }
    }

    pub fn present(self, total: i64) -> BadgePresentation {
        match self {
            BadgeStyle::Dock => BadgePresentation {
                text: match total {
                    -1 => "\u{2022}".into(),
                    0 => String::new(),
                    n => n.to_string(),
                },
                description: None,
            },
            BadgeStyle::Overlay => BadgePresentation {
                text: match total {
                    0 => String::new(),
                    -1 => "\u{2022}".into(),
                    n => n.min(10).to_string(),
                },
                description: Some(match total {
                    0 => "No Notifications".into(),
                    -1 => "Unread Messages".into(),
                    n => format!("{n} Notifications"),
                }),
            },
            BadgeStyle::None => BadgePresentation::default(),
        }
    }
}

/// What to show for a total. Empty `text` clears the badge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgePresentation {
    pub text: String,
    pub description: Option<String>,
}

impl BadgePresentation {
    pub fn is_clear(&self) -> bool {
        self.text.is_empty()
    }
}
