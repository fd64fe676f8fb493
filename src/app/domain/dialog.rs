use crate::app::services::file_filters::extension_filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Open,
    Save,
}

/// Everything a file dialog needs to know, passed to a single
/// dialog-invocation function instead of per-mode dialog types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDialogRequest {
    pub mode: DialogMode,
    pub title: String,
    /// Extension without the dot, e.g. "txt". `None` accepts any file.
    pub extension: Option<String>,
}

impl FileDialogRequest {
    pub fn open(extension: Option<&str>) -> Self {
        Self {
            mode: DialogMode::Open,
            title: "Open...".to_string(),
            extension: extension.map(str::to_string),
        }
    }

    pub fn save_as(extension: Option<&str>) -> Self {
        Self {
            mode: DialogMode::Save,
            title: "Save as...".to_string(),
            extension: extension.map(str::to_string),
        }
    }

    /// Human readable filter, e.g. "TXT file (*.txt)".
    pub fn filter(&self) -> Option<String> {
        self.extension.as_deref().map(extension_filter)
    }
}
