use stoat_common::PlatformError;

use super::types::{KeyBind, Modifier};
use crate::key_names::normalize_key_name;

/// Parses an accelerator string like `"CommandOrControl+1"`,
/// `"CmdOrCtrl+Shift+Tab"` or `"F5"` into a [`KeyBind`].
///
/// - `CommandOrControl` / `CmdOrCtrl` / `Cmd` / `Command` -> `Super` on
///   macOS, `Ctrl` elsewhere
/// - `Control` / `Ctrl` -> `Ctrl`
/// - `Alt` / `Option` -> `Alt`
/// - `Super` / `Win` / `Meta` -> `Super`
///
/// The final token is the key. A trailing `++` means the `+` key.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(PlatformError::KeybindError("empty keybind string".into()));
    }

    let (mods_part, key_token) = match s.strip_suffix("++") {
        Some(rest) => (rest, "+"),
        None => match s.rsplit_once('+') {
            Some((rest, key)) => (rest, key.trim()),
            None => ("", s),
        },
    };

    if key_token.is_empty() {
        return Err(PlatformError::KeybindError(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in mods_part.split('+').map(str::trim).filter(|t| !t.is_empty()) {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::KeybindError(format!("unrecognized modifier '{token}' in '{s}'"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" | "cmdorctrl" | "commandorcontrol" => Some(primary_modifier()),
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

/// The modifier shortcuts use on this platform.
pub fn primary_modifier() -> Modifier {
    if cfg!(target_os = "macos") {
        Modifier::Super
    } else {
        Modifier::Ctrl
    }
}
