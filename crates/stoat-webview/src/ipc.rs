//! IPC protocol between Rust and JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: `window.stoat.ipc.send(kind, payload)` posts
//!   `{"kind": ..., "payload": ...}` through `window.ipc.postMessage`.
//! - **Rust -> JS**: `evaluate_script` calls `window.stoat.ipc._dispatch`
//!   with a channel name and a JSON payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stoat_platform::KeyCombo;

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// The payload as a string, for messages that carry a bare id.
    pub fn payload_str(&self) -> Option<&str> {
        self.payload.as_str()
    }

    /// Deserialize the payload into `T`.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.payload)
    }
}

/// Modifier state and key name of an intercepted `keydown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KeyPayload {
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}

impl KeyPayload {
    /// Ctrl and Cmd are both accepted as the accelerator and folded into
    /// the platform's primary modifier.
    pub fn combo(&self) -> KeyCombo {
        let accel = self.ctrl || self.meta;
        let (ctrl, super_key) = if cfg!(target_os = "macos") {
            (false, accel)
        } else {
            (accel, false)
        };
        KeyCombo::from_parts(ctrl, self.alt, self.shift, super_key, &self.key)
    }
}

/// JavaScript that sets up the IPC bridge. Injected into every surface.
const IPC_BRIDGE_SCRIPT: &str = r#"
(function() {
    window.stoat = window.stoat || {};
    window.stoat.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(channel, callback) {
            this._handlers[channel] = callback;
        },
        _dispatch: function(channel, payload) {
            var handler = this._handlers[channel];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Intercepts zoom/reload, instance-switching and quit keys before the page
/// sees them and forwards them to Rust.
pub const KEY_INTERCEPT_SCRIPT: &str = r#"
(function() {
    var ZOOM = { "=": true, "+": true, "-": true, "0": true };
    window.addEventListener("keydown", function(e) {
        var accel = e.ctrlKey || e.metaKey;
        var kind = null;
        if (e.key === "F5" || (accel && (ZOOM[e.key] || e.key.toLowerCase() === "r"))) {
            kind = "surface_key";
        } else if (accel && (e.key === "Tab" || /^[1-9]$/.test(e.key) || e.key.toLowerCase() === "q")) {
            kind = "shortcut";
        }
        if (!kind) {
            return;
        }
        e.preventDefault();
        e.stopPropagation();
        window.stoat.ipc.send(kind, {
            key: e.key,
            ctrl: e.ctrlKey,
            alt: e.altKey,
            shift: e.shiftKey,
            meta: e.metaKey
        });
    }, true);
})();
"#;

/// The bridge plus `window.stoat.platform` (`linux`, `macos`, `windows`).
pub fn init_script() -> String {
    format!(
        "{IPC_BRIDGE_SCRIPT}\nwindow.stoat.platform = {};\n",
        serde_json::to_string(std::env::consts::OS).unwrap_or_else(|_| "\"unknown\"".into())
    )
}

/// Generate a JS snippet that dispatches `payload` on `channel`.
pub fn js_dispatch_message(channel: &str, payload: &Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.stoat && window.stoat.ipc._dispatch({}, {});",
        serde_json::to_string(channel).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
