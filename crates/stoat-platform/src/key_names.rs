//! Key name normalization.
//!
//! Accelerator strings ("CmdOrCtrl+Plus"), winit logical keys and DOM
//! `KeyboardEvent.key` values all pass through [`normalize_key_name`] so a
//! [`KeyCombo`](crate::input::KeyCombo) built from any of them compares equal.

/// Canonical name for a key token.
///
/// Single characters are uppercased, `Plus` and friends become the
/// character they name, and runtime names like `ArrowUp` or `" "` map to
/// the accelerator spelling (`Up`, `Space`).
pub fn normalize_key_name(token: &str) -> String {
    let named = match token {
        " " => Some("Space"),
        "ArrowUp" => Some("Up"),
        "ArrowDown" => Some("Down"),
        "ArrowLeft" => Some("Left"),
        "ArrowRight" => Some("Right"),
        _ => None,
    };
    if let Some(name) = named {
        return name.to_string();
    }

    if token.chars().count() == 1 {
        return token.to_uppercase();
    }

    let lower = token.to_lowercase();
    let alias = match lower.as_str() {
        "plus" => "+",
        "minus" => "-",
        "equal" | "equals" => "=",
        "period" => ".",
        "comma" => ",",
        "space" => "Space",
        "enter" | "return" => "Enter",
        "escape" | "esc" => "Escape",
        "tab" => "Tab",
        "backspace" => "Backspace",
        "delete" | "del" => "Delete",
        "up" => "Up",
        "down" => "Down",
        "left" => "Left",
        "right" => "Right",
        "pageup" => "PageUp",
        "pagedown" => "PageDown",
        _ => "",
    };
    if !alias.is_empty() {
        return alias.to_string();
    }

    // F1..F24 and other named keys: capitalize the first letter.
    let mut chars = lower.chars();
    match chars.next() {
        Some(c) => format!("{}{}", c.to_uppercase(), chars.as_str()),
        None => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_names_map_to_accelerator_names() {
        assert_eq!(normalize_key_name("ArrowUp"), "Up");
        assert_eq!(normalize_key_name(" "), "Space");
        assert_eq!(normalize_key_name("Tab"), "Tab");
        assert_eq!(normalize_key_name("F5"), "F5");
    }

    #[test]
    fn single_chars_uppercased() {
        assert_eq!(normalize_key_name("r"), "R");
        assert_eq!(normalize_key_name("R"), "R");
        assert_eq!(normalize_key_name("1"), "1");
        assert_eq!(normalize_key_name("="), "=");
        assert_eq!(normalize_key_name("+"), "+");
    }

    #[test]
    fn accelerator_aliases() {
        assert_eq!(normalize_key_name("Plus"), "+");
        assert_eq!(normalize_key_name("minus"), "-");
        assert_eq!(normalize_key_name("Return"), "Enter");
        assert_eq!(normalize_key_name("esc"), "Escape");
        assert_eq!(normalize_key_name("f12"), "F12");
    }
}
