pub mod about;

use fltk::{app, dialog, prelude::*, window::Window};

use crate::app::domain::ports::ConfirmationPort;
use crate::app::services::text_ops::{
    confirmation_body, dialog_title, strip_markup, warning_body, MAX_TITLE_LENGTH,
};

/// Run a dialog's event loop, automatically closing the dialog if the app
/// is quitting (e.g. user clicks X on the main window while a dialog is open).
pub fn run_dialog(dialog: &Window) {
    while dialog.shown() {
        app::wait();
        if app::should_program_quit() {
            let mut d = dialog.clone();
            d.hide();
        }
    }
}

/// Ok/Cancel question box guarding unsaved data.
#[derive(Debug, Clone, Copy)]
pub struct DiscardPrompt {
    title_length: usize,
}

impl DiscardPrompt {
    pub fn new(title_length: usize) -> Self {
        Self { title_length }
    }

    /// Window title and body text for `core_message`.
    fn texts(&self, core_message: &str) -> (String, String) {
        // FLTK labels are plain text
        let body = confirmation_body(&strip_markup(core_message));
        (dialog_title(core_message, self.title_length), body)
    }
}

impl Default for DiscardPrompt {
    fn default() -> Self {
        Self::new(MAX_TITLE_LENGTH)
    }
}

impl ConfirmationPort for DiscardPrompt {
    fn confirm(&mut self, core_message: &str) -> bool {
        let (title, body) = self.texts(core_message);
        dialog::message_title(&title);
        matches!(dialog::choice2_default(&body, "Cancel", "Ok", ""), Some(1))
    }
}

/// Tell the user an action failed, e.g. `show_warning("opening <b>a.txt</b>", ...)`.
pub fn show_warning(core_message: &str, detail: &str, title_length: usize) {
    dialog::message_title(&dialog_title(core_message, title_length));
    let body = warning_body(&strip_markup(core_message));
    dialog::alert_default(&format!("{}\n\n{}", body, detail));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_uses_configured_title_length() {
        let prompt = DiscardPrompt::new(12);
        let (title, body) = prompt.texts("open <b>a_rather_long_name.txt</b>");
        assert_eq!(title, "Open a_rathe");
        assert_eq!(
            body,
            "Are you sure you want to open a_rather_long_name.txt? Unsaved data will be lost!"
        );
    }

    #[test]
    fn test_default_prompt_title_length() {
        let (title, _) = DiscardPrompt::default().texts("exit Classic Text Editor");
        assert_eq!(title, "Exit Classic Text Editor ...");
    }
}
