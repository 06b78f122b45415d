//! Status-bar menu: one item mirroring the hotkey action, one to quit.

#[cfg(target_os = "macos")]
use anyhow::Context;
#[cfg(target_os = "macos")]
use tray_icon::{
    TrayIcon, TrayIconBuilder,
    menu::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem},
};

pub enum TrayAction {
    Recognize,
    Quit,
}

#[cfg(target_os = "macos")]
pub struct Tray {
    _tray: TrayIcon,
    recognize_id: MenuId,
    quit_id: MenuId,
}

#[cfg(target_os = "macos")]
#[derive(Clone)]
pub struct TrayMenuIds {
    recognize: MenuId,
    quit: MenuId,
}

#[cfg(target_os = "macos")]
impl Tray {
    /// Build the status item. Must run on the main thread.
    pub fn build(combo: &str) -> anyhow::Result<Self> {
        let menu = Menu::new();
        let recognize = MenuItem::new(format!("Recognize Clipboard ({combo})"), true, None);
        let quit = MenuItem::new("Quit ClipLens", true, None);
        menu.append_items(&[&recognize, &PredefinedMenuItem::separator(), &quit])
            .context("Failed to build tray menu")?;

        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_title("OCR")
            .with_tooltip("ClipLens")
            .build()
            .context("Failed to create tray icon")?;

        Ok(Self {
            _tray: tray,
            recognize_id: recognize.id().clone(),
            quit_id: quit.id().clone(),
        })
    }

    pub fn ids(&self) -> TrayMenuIds {
        TrayMenuIds {
            recognize: self.recognize_id.clone(),
            quit: self.quit_id.clone(),
        }
    }
}

/// Drain pending menu events; non-blocking.
#[cfg(target_os = "macos")]
pub fn poll(ids: &TrayMenuIds) -> Option<TrayAction> {
    while let Ok(event) = MenuEvent::receiver().try_recv() {
        if event.id == ids.recognize {
            return Some(TrayAction::Recognize);
        }
        if event.id == ids.quit {
            return Some(TrayAction::Quit);
        }
    }
    None
}

#[cfg(not(target_os = "macos"))]
pub struct Tray;

#[cfg(not(target_os = "macos"))]
#[derive(Clone)]
pub struct TrayMenuIds;

#[cfg(not(target_os = "macos"))]
impl Tray {
    pub fn build(_combo: &str) -> anyhow::Result<Self> {
        tracing::info!("status-bar menu unavailable on this platform");
        Ok(Self)
    }

    pub fn ids(&self) -> TrayMenuIds {
        TrayMenuIds
    }
}

#[cfg(not(target_os = "macos"))]
pub fn poll(_ids: &TrayMenuIds) -> Option<TrayAction> {
    None
}
