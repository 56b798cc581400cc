pub mod badge;
pub mod crash_report;
pub mod external;
pub mod input;
pub mod key_names;
pub mod keymap;
pub mod paths;

pub use badge::{BadgeCounts, BadgePresentation, BadgeStyle};
pub use external::{is_external_url, open_external};
pub use input::{FocusShortcuts, KeyCombo, KeybindRegistry};
pub use key_names::normalize_key_name;
pub use keymap::{KeyBind, Modifier};
pub use paths::{config_dir, config_file, crash_report_dir, data_dir, ensure_dirs, log_dir};
