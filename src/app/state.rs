use fltk::{app::Sender, prelude::*, text::TextEditor};

use super::controllers::document::{DocumentController, Outcome, ShellPorts};
use super::domain::messages::Message;
use super::domain::settings::ShellSettings;
use super::infrastructure::error::ShellError;
use super::infrastructure::fs::StdFileSystem;
use super::infrastructure::platform::store_path;
use super::infrastructure::store::JsonFileStore;
use super::services::recent_files::{recent_entries, RecentFiles};
use super::services::text_ops::extract_filename;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::{show_warning, DiscardPrompt};
use crate::ui::editor::EditorContent;
use crate::ui::file_dialogs::NativeFileDialog;
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::rebuild_recent_files;
use crate::ui::observer::WindowObserver;

pub struct AppState {
    pub controller: DocumentController,
    pub editor: TextEditor,
    title_length: usize,
}

impl AppState {
    pub fn new(settings: &ShellSettings, widgets: &MainWidgets, sender: Sender<Message>) -> Self {
        let store = JsonFileStore::open(store_path(&settings.organization, &settings.app_name));
        log::debug!("Recent files stored in {}", store.path().display());
        let mut recent_files = RecentFiles::new(Box::new(store), settings.recent_files);

        let mut menu = widgets.menu.clone();
        rebuild_recent_files(&mut menu, &sender, &recent_files.entries());
        let config = settings.recent_files;
        recent_files.subscribe(move |files| {
            rebuild_recent_files(&mut menu, &sender, &recent_entries(files, &config));
        });

        let ports = ShellPorts {
            content: Box::new(EditorContent::new(&widgets.text_editor)),
            confirmation: Box::new(DiscardPrompt::new(settings.confirm_title_length)),
            file_system: Box::new(StdFileSystem),
            file_dialog: Box::new(NativeFileDialog),
            observer: Box::new(WindowObserver::new(&widgets.wind, &widgets.menu, &widgets.status_bar)),
        };
        let controller = DocumentController::from_settings(settings, recent_files, ports);

        Self {
            controller,
            editor: widgets.text_editor.clone(),
            title_length: settings.confirm_title_length,
        }
    }

    /// Handle one dispatched message. Returns true when the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::FileNew => {
                self.controller.new_file();
            }
            Message::FileOpen => self.file_open(None),
            Message::FileOpenRecent(path) => self.file_open(Some(&path)),
            Message::FileSave => self.file_save(),
            Message::FileSaveAs => self.file_save_as(),
            Message::ClearRecentFiles => self.controller.clear_recent_files(),
            Message::FileQuit | Message::WindowClose => return self.controller.request_exit(),
            Message::ContentChanged => self.controller.set_dirty(true),
            Message::EditUndo => {
                if edit_applied("undo", self.editor.undo()) {
                    self.controller.set_dirty(true);
                }
            }
            Message::EditRedo => {
                if edit_applied("redo", self.editor.redo()) {
                    self.controller.set_dirty(true);
                }
            }
            Message::EditCut => {
                self.editor.cut();
                self.controller.set_dirty(true);
            }
            Message::EditCopy => self.editor.copy(),
            Message::EditPaste => {
                self.editor.paste();
                self.controller.set_dirty(true);
            }
            Message::ShowAbout => show_about_dialog(self.controller.app_name()),
        }
        false
    }

    /// Load the file passed on the command line before the event loop runs.
    pub fn run(&mut self, data_file: Option<&str>) {
        if let Err(e) = self.controller.run(data_file) {
            let name = data_file.map(extract_filename).unwrap_or_default();
            self.report(&format!("opening <b>{}</b>", name), &e);
        }
    }

    pub fn file_open(&mut self, path: Option<&str>) {
        if let Err(e) = self.controller.open(path) {
            let name = path.map(extract_filename).unwrap_or_else(|| "a file".to_string());
            self.report(&format!("opening <b>{}</b>", name), &e);
        }
    }

    pub fn file_save(&mut self) {
        if self.controller.needs_save_as() {
            self.file_save_as();
            return;
        }
        if let Err(e) = self.controller.save() {
            let name = extract_filename(self.controller.document().filename());
            self.report(&format!("saving <b>{}</b>", name), &e);
        }
    }

    pub fn file_save_as(&mut self) {
        match self.controller.save_as_dialog() {
            Ok(Outcome::Done) | Ok(Outcome::Cancelled) => {}
            Err(e) => self.report("saving the file", &e),
        }
    }

    fn report(&self, action: &str, err: &ShellError) {
        log::error!("Failed {}: {}", action, err);
        show_warning(action, &err.to_string(), self.title_length);
    }
}

/// Whether an undo/redo actually changed the buffer.
fn edit_applied<E: std::fmt::Debug>(action: &str, result: std::result::Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Nothing to {}: {:?}", action, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_undo_does_not_count_as_edit() {
        assert!(!edit_applied("undo", Err("empty history")));
    }

    #[test]
    fn test_successful_redo_counts_as_edit() {
        assert!(edit_applied::<&str>("redo", Ok(())));
    }
}
