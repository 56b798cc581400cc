//! Native tray icon presenting the [`TrayMenu`] model.
//!
//! Available on macOS and Windows. Elsewhere [`SystemTray::create`] returns
//! `None`; the app then has nothing to restore a hidden window from, so
//! closing quits and hiding minimises.

#[cfg(any(target_os = "macos", target_os = "windows"))]
pub(super) use native::SystemTray;
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub(super) use unsupported::SystemTray;

/// Side of the generated square icon, in pixels.
#[cfg_attr(not(any(target_os = "macos", target_os = "windows")), allow(dead_code))]
const ICON_SIZE: u32 = 32;

/// A filled circle in the brand colour on a transparent background.
#[cfg_attr(not(any(target_os = "macos", target_os = "windows")), allow(dead_code))]
fn icon_rgba() -> Vec<u8> {
    const COLOUR: [u8; 4] = [0xFF, 0x45, 0x5D, 0xFF];
    let centre = (ICON_SIZE as f32 - 1.0) / 2.0;
    let radius = ICON_SIZE as f32 / 2.0 - 1.0;

    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let dx = x as f32 - centre;
            let dy = y as f32 - centre;
            if dx * dx + dy * dy <= radius * radius {
                rgba.extend_from_slice(&COLOUR);
            } else {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    rgba
}

#[cfg(any(target_os = "macos", target_os = "windows"))]
mod native {
    use std::collections::HashMap;

    use tray_icon::menu::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem, Submenu};
    use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

    use super::super::tray::{TrayIntent, TrayItem, TrayMenu, TRAY_TITLE};
    use super::{icon_rgba, ICON_SIZE};

    pub struct SystemTray {
        icon: TrayIcon,
        intents: HashMap<MenuId, TrayIntent>,
    }

    impl SystemTray {
        /// Must be called once the event loop is running.
        pub fn create(menu: &TrayMenu) -> Option<Self> {
            let (native, intents) = match build_menu(menu) {
                Ok(built) => built,
                Err(e) => {
                    tracing::warn!(error = %e, "Tray menu could not be built");
                    return None;
                }
            };
            let image = match Icon::from_rgba(icon_rgba(), ICON_SIZE, ICON_SIZE) {
                Ok(image) => image,
                Err(e) => {
                    tracing::warn!(error = %e, "Tray icon image rejected");
                    return None;
                }
            };

            match TrayIconBuilder::new()
                .with_tooltip(TRAY_TITLE)
                .with_icon(image)
                .with_menu(Box::new(native))
                .build()
            {
                Ok(icon) => {
                    tracing::info!("System tray created");
                    Some(Self { icon, intents })
                }
                Err(e) => {
                    tracing::warn!(error = %e, "System tray unavailable");
                    None
                }
            }
        }

        /// Replace the native menu with a freshly built one.
        pub fn update(&mut self, menu: &TrayMenu) {
            match build_menu(menu) {
                Ok((native, intents)) => {
                    self.icon.set_menu(Some(Box::new(native)));
                    self.intents = intents;
                }
                Err(e) => tracing::warn!(error = %e, "Tray menu rebuild failed"),
            }
        }

        /// Intents activated since the last call.
        pub fn poll(&self) -> Vec<TrayIntent> {
            let mut activated = Vec::new();
            while let Ok(event) = MenuEvent::receiver().try_recv() {
                match self.intents.get(&event.id) {
                    Some(intent) => activated.push(intent.clone()),
                    None => tracing::debug!(id = ?event.id, "Stale tray menu event"),
                }
            }
            activated
        }
    }

    fn build_menu(
        menu: &TrayMenu,
    ) -> Result<(Menu, HashMap<MenuId, TrayIntent>), tray_icon::menu::Error> {
        let native = Menu::new();
        let mut intents = HashMap::new();

        for item in &menu.items {
            match item {
                TrayItem::Label(text) => native.append(&MenuItem::new(text, false, None))?,
                TrayItem::Version(version) => {
                    let submenu = Submenu::new("Version", true);
                    submenu.append(&MenuItem::new(version, false, None))?;
                    native.append(&submenu)?;
                }
                TrayItem::Separator => native.append(&PredefinedMenuItem::separator())?,
                TrayItem::Entry { label, intent } => {
                    let entry = MenuItem::new(label, true, None);
                    intents.insert(entry.id().clone(), intent.clone());
                    native.append(&entry)?;
                }
            }
        }
        Ok((native, intents))
    }
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
mod unsupported {
    use super::super::tray::{TrayIntent, TrayMenu};

    pub struct SystemTray {
        _private: (),
    }

    impl SystemTray {
        pub fn create(_menu: &TrayMenu) -> Option<Self> {
            tracing::info!("No system tray on this platform; closing the window quits");
            None
        }

        pub fn update(&mut self, _menu: &TrayMenu) {}

        pub fn poll(&self) -> Vec<TrayIntent> {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_is_square_rgba() {
        let rgba = icon_rgba();
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
    }

    #[test]
    fn icon_centre_is_opaque_and_corner_transparent() {
        let rgba = icon_rgba();
        let pixel = |x: u32, y: u32| {
            let i = ((y * ICON_SIZE + x) * 4) as usize;
            &rgba[i..i + 4]
        };
        assert_eq!(pixel(ICON_SIZE / 2, ICON_SIZE / 2)[3], 0xFF);
        assert_eq!(pixel(0, 0)[3], 0);
    }
}
