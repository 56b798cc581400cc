//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
///
/// Must parse to `DesktopConfig::default()`.
pub(crate) fn default_config_toml() -> String {
    r##"# Stoat Desktop Configuration
# Schema version 1
# Missing fields use defaults. The app rewrites this file when settings,
# instances or the window geometry change.

first_launch = true

# Draw the tab strip / titlebar instead of native window decorations.
custom_frame = true

# Closing the window hides it to the tray instead of quitting.
minimise_to_tray = true
start_minimised_to_tray = false

spellchecker = true

# Read at startup only.
hardware_acceleration = true

discord_rpc = true

# Instance shown on startup. Falls back to the first instance if unknown.
active_instance_id = "default"

[window_state]
# Zero means "not saved yet".
x = 0
y = 0
width = 0
height = 0
is_maximised = false

# One table per server, in tab order.
[[instances]]
id = "default"
label = "Revolt"
url = "https://beta.revolt.chat"
"##
    .to_string()
}
