//! Contracts the core depends on but does not implement.
//!
//! The presentation layer (or a test) supplies one implementation of each
//! trait when the controller is built. None of them are optional, so a
//! missing content accessor is a construction error rather than a runtime
//! lookup failure.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use super::dialog::FileDialogRequest;
use crate::app::infrastructure::error::Result;

/// Asks the user whether unsaved changes may be discarded.
pub trait ConfirmationPort {
    /// `core_message` is the action description, e.g. "start a new data file".
    /// Returns true when the user accepts.
    fn confirm(&mut self, core_message: &str) -> bool;
}

/// The active editing surface.
pub trait ContentPort {
    fn get_contents(&self) -> String;
    fn set_contents(&mut self, text: &str);
    fn clear_contents(&mut self);
}

/// Blocking file access used for load and save.
pub trait FileSystem {
    fn read(&self, path: &str) -> io::Result<String>;
    fn write(&self, path: &str, text: &str) -> io::Result<()>;
}

/// Lets the user pick a path for open or save-as.
pub trait FileDialogPort {
    /// Returns `None` when the dialog was cancelled.
    fn pick(
        &mut self,
        request: &FileDialogRequest,
        start_dir: &str,
        suggested: Option<&str>,
    ) -> Option<String>;
}

/// String-keyed, string-sequence-valued persistent storage.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<Vec<String>>;
    fn set(&mut self, key: &str, value: Vec<String>) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// One-way notifications for the presentation layer. Every method has an
/// empty default so observers only implement what they draw.
pub trait ShellObserver {
    fn title_changed(&mut self, _title: &str) {}
    fn save_enabled_changed(&mut self, _enabled: bool) {}
    fn load_failed(&mut self, _path: &str) {}
    fn exit_requested(&mut self) {}
}

// Shared handles let the caller keep inspecting a port after handing it over.

impl<S: SettingsStore + ?Sized> SettingsStore for Rc<RefCell<S>> {
    fn get(&self, key: &str) -> Option<Vec<String>> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: Vec<String>) -> Result<()> {
        self.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.borrow_mut().remove(key)
    }
}

impl<C: ContentPort + ?Sized> ContentPort for Rc<RefCell<C>> {
    fn get_contents(&self) -> String {
        self.borrow().get_contents()
    }

    fn set_contents(&mut self, text: &str) {
        self.borrow_mut().set_contents(text);
    }

    fn clear_contents(&mut self) {
        self.borrow_mut().clear_contents();
    }
}

impl<O: ShellObserver + ?Sized> ShellObserver for Rc<RefCell<O>> {
    fn title_changed(&mut self, title: &str) {
        self.borrow_mut().title_changed(title);
    }

    fn save_enabled_changed(&mut self, enabled: bool) {
        self.borrow_mut().save_enabled_changed(enabled);
    }

    fn load_failed(&mut self, path: &str) {
        self.borrow_mut().load_failed(path);
    }

    fn exit_requested(&mut self) {
        self.borrow_mut().exit_requested();
    }
}
