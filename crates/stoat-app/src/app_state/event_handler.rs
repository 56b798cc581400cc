//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use stoat_common::Action;
use stoat_platform::KeyCombo;

use super::core::StoatApp;
use super::webview_bridge::is_surface_action;

impl ApplicationHandler for StoatApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.should_exit {
            return;
        }

        if !self.initialize_window(event_loop) {
            self.shutdown();
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.dialog_window.as_ref().is_some_and(|w| w.id() == window_id) {
            self.dialog_window_event(event);
            return;
        }
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.request_close(event_loop);
            }

            WindowEvent::Resized(size) => self.on_resized(size),

            WindowEvent::Moved(_) => self.mark_window_state_dirty(),

            WindowEvent::Focused(focused) => self.on_focus_changed(focused),

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event, event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl StoatApp {
    /// Relayout waits for the next tick so a burst of resizes lays out once.
    pub(super) fn on_resized(&mut self, size: PhysicalSize<u32>) {
        if size.width > 0 && size.height > 0 {
            self.relayout_pending = true;
            self.mark_window_state_dirty();
        }
    }

    /// Instance shortcuts live exactly as long as main-window focus.
    pub(super) fn on_focus_changed(&mut self, focused: bool) {
        if focused {
            self.shortcuts.register();
            if let Some(views) = self.views.as_mut() {
                views.focus_active();
            }
        } else {
            self.shortcuts.unregister();
        }
    }

    /// Focus-bound shortcuts first, then app-wide keys.
    pub(super) fn resolve_shortcut(&self, combo: &KeyCombo) -> Option<Action> {
        self.shortcuts
            .lookup(combo)
            .or_else(|| self.app_keys.lookup(combo).cloned())
    }

    fn dialog_window_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                self.close_instance_manager();
            }
            _ => {}
        }
    }

    /// Keys that reach the main window itself rather than a surface.
    fn handle_keyboard_input(&mut self, event: KeyEvent, event_loop: &ActiveEventLoop) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let combo = KeyCombo::from_parts(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            &key_name,
        );

        if let Some(action) = self.resolve_shortcut(&combo) {
            self.dispatch(action, event_loop);
            return;
        }
        if let Some(action) = self.surface_keys.lookup(&combo).cloned() {
            if is_surface_action(&action) {
                self.apply_to_active_surface(&action);
            }
        }
    }
}
