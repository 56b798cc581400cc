//! IPC message validation and dispatch from surfaces to the view manager.

use serde::Deserialize;
use winit::event_loop::ActiveEventLoop;

use stoat_common::{ConfigKey, SurfaceId, SurfaceRole};
use stoat_config::SettingsPatch;
use stoat_views::{SurfaceHost, ViewError, ViewManager};
use stoat_webview::{IpcMessage, KeyPayload};

use crate::app_state::core::StoatApp;

use super::surface_keys::is_surface_action;

// =============================================================================
// IPC ALLOWLISTS
// =============================================================================

const SIDEBAR_IPC_KINDS: &[&str] = &[
    "get_instances",
    "switch_instance",
    "open_instance_manager",
    "minimise",
    "maximise",
    "close",
    "drag_window",
    "shortcut",
];

const DIALOG_IPC_KINDS: &[&str] = &[
    "get_instances",
    "add_instance",
    "edit_instance",
    "remove_instance",
    "close_instance_manager",
    "shortcut",
];

const INSTANCE_IPC_KINDS: &[&str] = &["config", "set_badge_count", "surface_key", "shortcut"];

/// Check whether a surface of `role` may send `kind`.
pub fn is_ipc_kind_allowed(role: SurfaceRole, kind: &str) -> bool {
    let allowed = match role {
        SurfaceRole::Sidebar => SIDEBAR_IPC_KINDS,
        SurfaceRole::Dialog => DIALOG_IPC_KINDS,
        SurfaceRole::Instance => INSTANCE_IPC_KINDS,
    };
    allowed.contains(&kind)
}

// =============================================================================
// PAYLOADS
// =============================================================================

#[derive(Debug, Deserialize)]
struct AddInstance {
    label: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct EditInstance {
    id: String,
    label: String,
    url: String,
}

/// Badge counts arrive as JS numbers; fractions are truncated.
fn badge_count(msg: &IpcMessage) -> Option<i64> {
    msg.payload
        .as_i64()
        .or_else(|| msg.payload.as_f64().map(|n| n as i64))
}

// =============================================================================
// ROUTING
// =============================================================================

/// A validated request from a surface.
#[derive(Debug, Clone, PartialEq)]
pub(in crate::app_state) enum IpcIntent {
    GetInstances,
    SwitchInstance(String),
    OpenInstanceManager,
    CloseInstanceManager,
    Minimise,
    Maximise,
    Close,
    DragWindow,
    AddInstance { label: String, url: String },
    EditInstance { id: String, label: String, url: String },
    RemoveInstance(String),
    Config(SettingsPatch),
    SetBadgeCount(i64),
    SurfaceKey(KeyPayload),
    Shortcut(KeyPayload),
}

/// Why a message never reached a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::app_state) enum IpcRejection {
    Unparseable,
    NotAllowed { kind: String },
    Malformed { kind: String, reason: String },
}

impl IpcRejection {
    /// What the dialog shows when its own form was rejected.
    fn dialog_message(&self) -> Option<&'static str> {
        match self {
            IpcRejection::Malformed { kind, .. } if kind == "add_instance" => {
                Some("label and url are required")
            }
            IpcRejection::Malformed { kind, .. } if kind == "edit_instance" => {
                Some("id, label and url are required")
            }
            _ => None,
        }
    }
}

fn malformed(kind: &str, reason: impl ToString) -> IpcRejection {
    IpcRejection::Malformed {
        kind: kind.to_string(),
        reason: reason.to_string(),
    }
}

fn required_id(msg: &IpcMessage) -> Result<String, IpcRejection> {
    msg.payload_str()
        .map(str::to_string)
        .ok_or_else(|| malformed(&msg.kind, "expected an instance id"))
}

/// Parse `body`, check it against `role`'s allowlist and decode the payload.
pub(in crate::app_state) fn route_ipc(
    role: SurfaceRole,
    body: &str,
) -> Result<IpcIntent, IpcRejection> {
    let msg = IpcMessage::from_json(body).ok_or(IpcRejection::Unparseable)?;
    if !is_ipc_kind_allowed(role, &msg.kind) {
        return Err(IpcRejection::NotAllowed { kind: msg.kind });
    }

    let kind = msg.kind.as_str();
    let intent = match kind {
        "get_instances" => IpcIntent::GetInstances,
        "switch_instance" => IpcIntent::SwitchInstance(required_id(&msg)?),
        "open_instance_manager" => IpcIntent::OpenInstanceManager,
        "close_instance_manager" => IpcIntent::CloseInstanceManager,
        "minimise" => IpcIntent::Minimise,
        "maximise" => IpcIntent::Maximise,
        "close" => IpcIntent::Close,
        "drag_window" => IpcIntent::DragWindow,
        "add_instance" => {
            let add: AddInstance = msg.payload_as().map_err(|e| malformed(kind, e))?;
            IpcIntent::AddInstance {
                label: add.label,
                url: add.url,
            }
        }
        "edit_instance" => {
            let edit: EditInstance = msg.payload_as().map_err(|e| malformed(kind, e))?;
            IpcIntent::EditInstance {
                id: edit.id,
                label: edit.label,
                url: edit.url,
            }
        }
        "remove_instance" => IpcIntent::RemoveInstance(required_id(&msg)?),
        "config" => IpcIntent::Config(msg.payload_as().map_err(|e| malformed(kind, e))?),
        "set_badge_count" => IpcIntent::SetBadgeCount(
            badge_count(&msg).ok_or_else(|| malformed(kind, "expected a numeric count"))?,
        ),
        "surface_key" => IpcIntent::SurfaceKey(msg.payload_as().map_err(|e| malformed(kind, e))?),
        "shortcut" => IpcIntent::Shortcut(msg.payload_as().map_err(|e| malformed(kind, e))?),
        other => {
            return Err(IpcRejection::NotAllowed {
                kind: other.to_string(),
            })
        }
    };
    Ok(intent)
}

/// Run an add/edit/remove request against the registry. Failures go to the
/// dialog only.
pub(in crate::app_state) fn apply_instance_request<H: SurfaceHost>(
    views: &mut ViewManager<H>,
    intent: &IpcIntent,
) {
    let (op, result) = match intent {
        IpcIntent::AddInstance { label, url } => (
            "add",
            views
                .add(label, url)
                .map(|id| tracing::info!(id = %id, "Instance added")),
        ),
        IpcIntent::EditInstance { id, label, url } => (
            "edit",
            views.edit(id, label, url).map(|edited| {
                if edited {
                    tracing::info!(id = %id, "Instance edited");
                } else {
                    tracing::debug!(id = %id, "Edit of unknown instance ignored");
                }
            }),
        ),
        IpcIntent::RemoveInstance(id) => (
            "remove",
            views.remove(id).map(|removed| {
                if removed {
                    tracing::info!(id = %id, "Instance removed");
                } else {
                    tracing::debug!(id = %id, "Remove of unknown instance ignored");
                }
            }),
        ),
        _ => return,
    };

    if let Err(err) = result {
        match err {
            ViewError::Validation(_) | ViewError::LastInstance => {
                tracing::debug!(op, error = %err, "Instance request rejected")
            }
            ViewError::Persist(_) | ViewError::Host(_) => {
                tracing::warn!(op, error = %err, "Instance request failed")
            }
        }
        views.report_dialog_error(&err.to_string());
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

impl StoatApp {
    /// Handle a single IPC message from a surface.
    pub(in crate::app_state) fn handle_ipc_message(
        &mut self,
        event_loop: &ActiveEventLoop,
        surface: SurfaceId,
        body: &str,
    ) {
        let Some(role) = self.views.as_ref().and_then(|v| v.role_of(surface)) else {
            tracing::debug!(%surface, "IPC message from unknown surface dropped");
            return;
        };

        let intent = match route_ipc(role, body) {
            Ok(intent) => intent,
            Err(rejection) => {
                tracing::warn!(%surface, ?role, ?rejection, "IPC message rejected");
                if let (Some(message), Some(views)) =
                    (rejection.dialog_message(), self.views.as_mut())
                {
                    views.report_dialog_error(message);
                }
                return;
            }
        };
        tracing::debug!(%surface, ?intent, "IPC message dispatched");

        match intent {
            IpcIntent::GetInstances => {
                if let Some(views) = self.views.as_mut() {
                    views.send_snapshot(surface);
                }
            }
            IpcIntent::SwitchInstance(id) => {
                if let Some(views) = self.views.as_mut() {
                    if !views.switch_to(&id) {
                        tracing::debug!(id = %id, "Switch to unknown instance ignored");
                    }
                }
            }
            IpcIntent::OpenInstanceManager => self.open_instance_manager(event_loop),
            IpcIntent::CloseInstanceManager => self.close_instance_manager(),
            IpcIntent::Minimise => self.minimise_window(),
            IpcIntent::Maximise => self.toggle_maximise(),
            IpcIntent::Close => self.request_close(event_loop),
            IpcIntent::DragWindow => {
                if let Some(window) = &self.window {
                    if let Err(e) = window.drag_window() {
                        tracing::debug!("Window drag unavailable: {e}");
                    }
                }
            }
            IpcIntent::AddInstance { .. }
            | IpcIntent::EditInstance { .. }
            | IpcIntent::RemoveInstance(_) => {
                if let Some(views) = self.views.as_mut() {
                    apply_instance_request(views, &intent);
                }
            }
            IpcIntent::Config(patch) => self.handle_config_patch(surface, &patch),
            IpcIntent::SetBadgeCount(count) => {
                let instance = self
                    .views
                    .as_ref()
                    .and_then(|v| v.instance_for_surface(surface))
                    .map(str::to_string);
                match instance {
                    Some(instance) => self.set_badge_count(&instance, count),
                    None => tracing::debug!(%surface, "Badge count from a non-instance surface"),
                }
            }
            IpcIntent::SurfaceKey(key) => {
                let action = self.surface_keys.lookup(&key.combo()).cloned();
                match action {
                    Some(action) if is_surface_action(&action) => {
                        self.apply_surface_action(surface, &action)
                    }
                    _ => tracing::debug!(%surface, key = %key.key, "Unbound surface key"),
                }
            }
            IpcIntent::Shortcut(key) => match self.resolve_shortcut(&key.combo()) {
                Some(action) => self.dispatch(action, event_loop),
                None => tracing::debug!(%surface, key = %key.key, "Shortcut not active"),
            },
        }
    }

    fn handle_config_patch(&mut self, surface: SurfaceId, patch: &SettingsPatch) {
        let Some(views) = self.views.as_mut() else {
            return;
        };
        match views.update_settings(patch) {
            Ok(changed) => {
                tracing::debug!(%surface, ?changed, "Settings updated");
                if changed.contains(&ConfigKey::CustomFrame) {
                    let custom_frame = views.config().custom_frame;
                    if let Some(window) = &self.window {
                        window.set_decorations(!custom_frame);
                    }
                }
            }
            Err(e) => tracing::warn!(%surface, error = %e, "Settings update failed"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
