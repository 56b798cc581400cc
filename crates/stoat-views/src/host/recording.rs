//! In-memory [`SurfaceHost`] that records every call.

use std::collections::BTreeMap;

use serde_json::Value;
use stoat_common::{HostError, Rect, Size, SurfaceId, SurfaceRole};

use super::{SurfaceHost, SurfaceSource, SurfaceSpec};

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    Create(SurfaceId, SurfaceRole),
    Destroy(SurfaceId),
    SetBounds(SurfaceId, Rect),
    LoadUrl(SurfaceId, String),
    Raise(SurfaceId),
    Focus(SurfaceId),
    Send(SurfaceId, String, Value),
}

#[derive(Debug)]
pub struct LiveSurface {
    pub role: SurfaceRole,
    pub source: SurfaceSource,
    pub bounds: Rect,
    pub url: Option<String>,
}

#[derive(Debug)]
pub struct RecordingHost {
    pub size: Size,
    pub live: BTreeMap<SurfaceId, LiveSurface>,
    /// Paint order, bottom first.
    pub z_order: Vec<SurfaceId>,
    pub calls: Vec<HostCall>,
    /// Number of upcoming creates that succeed before creates start failing.
    pub fail_create_after: Option<usize>,
    next_id: u32,
}

impl RecordingHost {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            live: BTreeMap::new(),
            z_order: Vec::new(),
            calls: Vec::new(),
            fail_create_after: None,
            next_id: 1,
        }
    }

    pub fn bounds(&self, id: SurfaceId) -> Option<Rect> {
        self.live.get(&id).map(|s| s.bounds)
    }

    pub fn url(&self, id: SurfaceId) -> Option<&str> {
        self.live.get(&id).and_then(|s| s.url.as_deref())
    }

    pub fn live_with_role(&self, role: SurfaceRole) -> usize {
        self.live.values().filter(|s| s.role == role).count()
    }

    pub fn top(&self) -> Option<SurfaceId> {
        self.z_order.last().copied()
    }

    /// Messages sent on `channel`, in order.
    pub fn sends_on(&self, channel: &str) -> Vec<(SurfaceId, Value)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Send(id, ch, v) if ch == channel => Some((*id, v.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn loads(&self) -> Vec<(SurfaceId, String)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::LoadUrl(id, url) => Some((*id, url.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn alive(&self, id: SurfaceId) -> Result<(), HostError> {
        if self.live.contains_key(&id) {
            Ok(())
        } else {
            Err(HostError::Gone(id.0))
        }
    }
}

impl SurfaceHost for RecordingHost {
    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<SurfaceId, HostError> {
        if let Some(remaining) = self.fail_create_after.as_mut() {
            if *remaining == 0 {
                return Err(HostError::Failed("injected create failure".into()));
            }
            *remaining -= 1;
        }
        let id = SurfaceId(self.next_id);
        self.next_id += 1;
        let url = match &spec.source {
            SurfaceSource::Remote(url) => Some(url.clone()),
            SurfaceSource::Bundled(_) => None,
        };
        self.live.insert(
            id,
            LiveSurface {
                role: spec.role,
                source: spec.source.clone(),
                bounds: spec.bounds,
                url,
            },
        );
        self.z_order.push(id);
        self.calls.push(HostCall::Create(id, spec.role));
        Ok(id)
    }

    fn destroy_surface(&mut self, id: SurfaceId) -> Result<(), HostError> {
        self.calls.push(HostCall::Destroy(id));
        self.live.remove(&id).ok_or(HostError::Gone(id.0))?;
        self.z_order.retain(|s| *s != id);
        Ok(())
    }

    fn set_bounds(&mut self, id: SurfaceId, bounds: Rect) -> Result<(), HostError> {
        self.calls.push(HostCall::SetBounds(id, bounds));
        let surface = self.live.get_mut(&id).ok_or(HostError::Gone(id.0))?;
        surface.bounds = bounds;
        Ok(())
    }

    fn load_url(&mut self, id: SurfaceId, url: &str) -> Result<(), HostError> {
        self.calls.push(HostCall::LoadUrl(id, url.to_string()));
        let surface = self.live.get_mut(&id).ok_or(HostError::Gone(id.0))?;
        surface.url = Some(url.to_string());
        Ok(())
    }

    fn raise(&mut self, id: SurfaceId) -> Result<(), HostError> {
        self.calls.push(HostCall::Raise(id));
        self.alive(id)?;
        self.z_order.retain(|s| *s != id);
        self.z_order.push(id);
        Ok(())
    }

    fn focus(&mut self, id: SurfaceId) -> Result<(), HostError> {
        self.calls.push(HostCall::Focus(id));
        self.alive(id)
    }

    fn send(&mut self, id: SurfaceId, channel: &str, payload: &Value) -> Result<(), HostError> {
        self.calls
            .push(HostCall::Send(id, channel.to_string(), payload.clone()));
        self.alive(id)
    }

    fn content_size(&self) -> Size {
        self.size
    }
}
