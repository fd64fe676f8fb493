use fltk::{app, frame::Frame, menu::MenuBar, prelude::*, window::Window};

use super::main_window::STATUS_READY;
use super::menu::{set_item_active, SAVE_PATH};
use crate::app::domain::ports::ShellObserver;

/// Mirrors controller notifications onto the window title, the File/Save
/// item and the status bar.
pub struct WindowObserver {
    wind: Window,
    menu: MenuBar,
    status_bar: Frame,
}

impl WindowObserver {
    pub fn new(wind: &Window, menu: &MenuBar, status_bar: &Frame) -> Self {
        Self {
            wind: wind.clone(),
            menu: menu.clone(),
            status_bar: status_bar.clone(),
        }
    }
}

impl ShellObserver for WindowObserver {
    fn title_changed(&mut self, title: &str) {
        self.wind.set_label(title);
        self.status_bar.set_label(STATUS_READY);
    }

    fn save_enabled_changed(&mut self, enabled: bool) {
        set_item_active(&self.menu, SAVE_PATH, enabled);
    }

    fn load_failed(&mut self, path: &str) {
        self.status_bar.set_label(&format!("Could not find {}", path));
    }

    fn exit_requested(&mut self) {
        self.wind.hide();
        app::quit();
    }
}
