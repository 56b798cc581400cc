//! Per-tick work: deferred relayout, queued events, debounced saves.

use std::time::Instant;

use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use stoat_common::{ConfigKey, Event};

use super::core::StoatApp;
use super::types::POLL_INTERVAL;

/// Take everything queued on `rx` without blocking. Lagged receivers skip
/// ahead; a closed bus yields what was left.
fn drain(rx: &mut Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Event receiver lagged");
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
    events
}

impl StoatApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        self.apply_pending_relayout();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_tray_events(event_loop);
            self.poll_webview_events(event_loop);
            self.poll_view_events();
            self.poll_config_events();
            self.flush_window_state_if_settled(now);
        }

        if self.should_exit {
            return;
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Run the relayout a resize deferred to this tick. Returns whether one
    /// was pending.
    pub(super) fn apply_pending_relayout(&mut self) -> bool {
        if !self.relayout_pending {
            return false;
        }
        self.relayout_pending = false;
        if let Some(views) = self.views.as_mut() {
            views.relayout();
        }
        true
    }

    fn poll_tray_events(&mut self, event_loop: &ActiveEventLoop) {
        let intents = match &self.system_tray {
            Some(tray) => tray.poll(),
            None => return,
        };
        for intent in intents {
            self.handle_tray_intent(intent, event_loop);
            if self.should_exit {
                return;
            }
        }
    }

    /// Instance lifecycle events from the view manager.
    fn poll_view_events(&mut self) {
        let events = match self.view_events.as_mut() {
            Some(rx) => drain(rx),
            None => return,
        };

        let mut tray_stale = false;
        for event in events {
            match event {
                Event::InstanceAdded(id) | Event::InstanceSwitched(id) => {
                    tracing::debug!(id = %id, "Instance event");
                    tray_stale = true;
                }
                Event::InstanceRemoved(id) => {
                    self.clear_badge(&id);
                    tray_stale = true;
                }
                Event::Shutdown => self.view_events = None,
                Event::ConfigChanged(_) | Event::Unknown => {}
            }
        }
        if tray_stale {
            self.refresh_tray();
        }
    }

    /// Field changes committed by the config store.
    fn poll_config_events(&mut self) {
        let events = match self.config_events.as_mut() {
            Some(rx) => drain(rx),
            None => return,
        };

        for event in events {
            if let Event::ConfigChanged(key) = event {
                tracing::debug!(?key, "Config changed");
                if key == ConfigKey::Instances {
                    self.refresh_tray();
                }
            }
        }
    }
}
