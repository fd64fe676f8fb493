use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::domain::dialog::{DialogMode, FileDialogRequest};
use crate::app::domain::ports::FileDialogPort;
use crate::app::services::file_filters::{platform_pattern, with_default_suffix};

/// Native chooser driven by a `FileDialogRequest`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFileDialog;

impl FileDialogPort for NativeFileDialog {
    fn pick(
        &mut self,
        request: &FileDialogRequest,
        start_dir: &str,
        suggested: Option<&str>,
    ) -> Option<String> {
        let dialog_type = match request.mode {
            DialogMode::Open => FileDialogType::BrowseFile,
            DialogMode::Save => FileDialogType::BrowseSaveFile,
        };
        let mut nfc = NativeFileChooser::new(dialog_type);
        nfc.set_title(&request.title);

        let pattern = platform_pattern(request.extension.as_deref());
        match request.filter() {
            Some(description) => nfc.set_filter(&format!("{}\t{}", description, pattern)),
            None => nfc.set_filter(&pattern),
        }

        if let Err(e) = nfc.set_directory(&start_dir) {
            log::debug!("Could not start file dialog in {}: {:?}", start_dir, e);
        }
        if request.mode == DialogMode::Save {
            nfc.set_option(FileDialogOptions::SaveAsConfirm);
            if let Some(file) = suggested {
                nfc.set_preset_file(file);
            }
        }

        nfc.show(); // blocks until close
        let filename = nfc.filename();
        let s = filename.to_string_lossy();
        if s.is_empty() {
            return None;
        }
        match request.mode {
            DialogMode::Open => Some(s.to_string()),
            DialogMode::Save => Some(with_default_suffix(&s, request.extension.as_deref())),
        }
    }
}
