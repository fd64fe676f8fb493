//! Document lifecycle: New, Open, Save, Save As and Exit.
//!
//! The controller owns the filename and dirty flag of the single open
//! document. Any action that would throw away unsaved edits asks the
//! confirmation port first; a declined prompt leaves every piece of state
//! (filename, dirty flag, editor contents) untouched.

use crate::app::domain::dialog::FileDialogRequest;
use crate::app::domain::document::{Document, UNTITLED};
use crate::app::domain::ports::{
    ConfirmationPort, ContentPort, FileDialogPort, FileSystem, ShellObserver,
};
use crate::app::domain::settings::ShellSettings;
use crate::app::infrastructure::error::{Result, ShellError};
use crate::app::services::file_filters::with_default_suffix;
use crate::app::services::recent_files::RecentFiles;
use crate::app::services::text_ops::extract_filename;

/// The external collaborators, bound once at construction.
pub struct ShellPorts {
    pub content: Box<dyn ContentPort>,
    pub confirmation: Box<dyn ConfirmationPort>,
    pub file_system: Box<dyn FileSystem>,
    pub file_dialog: Box<dyn FileDialogPort>,
    pub observer: Box<dyn ShellObserver>,
}

/// Result of an action that the user may abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Cancelled,
}

pub struct DocumentController {
    app_name: String,
    document: Document,
    recent_files: RecentFiles,
    extension: Option<String>,
    start_directory: String,
    ports: ShellPorts,
}

impl DocumentController {
    pub fn new(app_name: &str, recent_files: RecentFiles, ports: ShellPorts) -> Self {
        let mut controller = Self {
            app_name: app_name.to_string(),
            document: Document::new(),
            recent_files,
            extension: None,
            start_directory: ".".to_string(),
            ports,
        };
        controller.emit_title();
        controller.ports.observer.save_enabled_changed(false);
        controller
    }

    pub fn from_settings(settings: &ShellSettings, recent_files: RecentFiles, ports: ShellPorts) -> Self {
        let mut controller = Self::new(&settings.app_name, recent_files, ports);
        controller.extension = settings.file_extension.clone();
        controller.start_directory = settings.start_directory();
        controller
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn recent_files(&self) -> &RecentFiles {
        &self.recent_files
    }

    pub fn title(&self) -> String {
        self.document.title(&self.app_name)
    }

    /// Extension used by the open and save dialogs, e.g. "txt".
    pub fn set_file_type(&mut self, extension: &str) {
        self.extension = Some(extension.to_string());
    }

    /// Save cannot run until the document has a real filename.
    pub fn needs_save_as(&self) -> bool {
        self.document.is_untitled()
    }

    /// Start over with an empty, untitled document.
    pub fn new_file(&mut self) -> Outcome {
        if !self.confirm_discard("start a new data file") {
            return Outcome::Cancelled;
        }
        self.ports.content.clear_contents();
        self.set_filename(UNTITLED);
        self.set_dirty(false);
        self.ports.observer.save_enabled_changed(false);
        log::info!("Started new document");
        Outcome::Done
    }

    /// Open `path`, or ask the user for one when `path` is `None`.
    pub fn open(&mut self, path: Option<&str>) -> Result<Outcome> {
        let target = match path {
            Some(p) => extract_filename(p),
            None => "another data file".to_string(),
        };
        if !self.confirm_discard(&format!("open <b>{}</b>", target)) {
            return Ok(Outcome::Cancelled);
        }

        let path = match path {
            Some(p) => p.to_string(),
            None => {
                let request = FileDialogRequest::open(self.extension.as_deref());
                match self.ports.file_dialog.pick(&request, &self.start_directory, None) {
                    Some(p) => p,
                    None => return Ok(Outcome::Cancelled),
                }
            }
        };

        self.load(&path)?;
        Ok(Outcome::Done)
    }

    /// Read `path` into the editor without asking. A missing file is dropped
    /// from the recent files list and reported as `FileNotFound`.
    pub fn load(&mut self, path: &str) -> Result<()> {
        let text = match self.ports.file_system.read(path) {
            Ok(text) => text,
            Err(e) => {
                let err = ShellError::from_read(path, e);
                if let ShellError::FileNotFound(_) = err {
                    log::warn!("File not found, removing from recent files: {}", path);
                    self.recent_files.remove(path);
                    self.ports.observer.load_failed(path);
                }
                return Err(err);
            }
        };

        self.ports.content.set_contents(&text);
        self.set_filename(path);
        self.set_dirty(false);
        self.recent_files.add(path);
        log::info!("Opened {}", path);
        Ok(())
    }

    /// Write the editor contents back to the current file.
    pub fn save(&mut self) -> Result<()> {
        if self.document.is_untitled() {
            return Err(ShellError::InvalidOperation(
                "cannot save a document that has no filename yet".to_string(),
            ));
        }
        let filename = self.document.filename().to_string();
        self.save_as(&filename)
    }

    /// Write the editor contents to `path` and make it the current file.
    pub fn save_as(&mut self, path: &str) -> Result<()> {
        let text = self.ports.content.get_contents();
        self.ports.file_system.write(path, &text)?;
        self.set_filename(path);
        self.set_dirty(false);
        self.recent_files.add(path);
        log::info!("Saved {}", path);
        Ok(())
    }

    /// Ask the user for a target path, then save there.
    pub fn save_as_dialog(&mut self) -> Result<Outcome> {
        let request = FileDialogRequest::save_as(self.extension.as_deref());
        let suggested = if self.document.is_untitled() {
            with_default_suffix(UNTITLED, self.extension.as_deref())
        } else {
            self.document.filename().to_string()
        };
        let picked = self
            .ports
            .file_dialog
            .pick(&request, &self.start_directory, Some(suggested.as_str()));
        match picked {
            Some(path) => {
                self.save_as(&path)?;
                Ok(Outcome::Done)
            }
            None => Ok(Outcome::Cancelled),
        }
    }

    pub fn set_dirty(&mut self, is_dirty: bool) {
        if !self.document.set_dirty(is_dirty) {
            return;
        }
        self.emit_title();
        if !self.document.is_untitled() {
            self.ports.observer.save_enabled_changed(is_dirty);
        }
    }

    /// Returns true when the host should terminate.
    pub fn request_exit(&mut self) -> bool {
        let message = format!("exit {}", self.app_name);
        if !self.confirm_discard(&message) {
            return false;
        }
        log::info!("Exit requested");
        self.ports.observer.exit_requested();
        true
    }

    /// Startup hook: load the file named on the command line, if any.
    pub fn run(&mut self, data_file: Option<&str>) -> Result<()> {
        match data_file {
            Some(path) => self.load(path),
            None => Ok(()),
        }
    }

    pub fn clear_recent_files(&mut self) {
        self.recent_files.clear();
    }

    fn set_filename(&mut self, filename: &str) {
        self.document.set_filename(filename);
        self.emit_title();
    }

    fn emit_title(&mut self) {
        let title = self.document.title(&self.app_name);
        self.ports.observer.title_changed(&title);
    }

    /// True when there is nothing to lose or the user accepted losing it.
    fn confirm_discard(&mut self, message: &str) -> bool {
        if !self.document.is_dirty() {
            return true;
        }
        let accepted = self.ports.confirmation.confirm(message);
        if !accepted {
            log::debug!("User declined to {}", message);
        }
        accepted
    }
}
