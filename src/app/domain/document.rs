/// Filename shown until the document is first saved or opened.
pub const UNTITLED: &str = "untitled";

/// The single open document: which file backs it and whether the editor
/// holds changes that have not been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    filename: String,
    is_dirty: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            filename: UNTITLED.to_string(),
            is_dirty: false,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn is_untitled(&self) -> bool {
        self.filename == UNTITLED
    }

    pub fn set_filename(&mut self, filename: &str) {
        self.filename = filename.to_string();
    }

    /// Returns true when the flag actually changed.
    pub fn set_dirty(&mut self, is_dirty: bool) -> bool {
        if self.is_dirty == is_dirty {
            return false;
        }
        self.is_dirty = is_dirty;
        true
    }

    /// Window title, e.g. "*notes.txt - Classic Text Editor".
    pub fn title(&self, app_name: &str) -> String {
        let prefix = if self.is_dirty { "*" } else { "" };
        format!("{}{} - {}", prefix, self.filename, app_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_clean_and_untitled() {
        let doc = Document::new();
        assert_eq!(doc.filename(), "untitled");
        assert!(doc.is_untitled());
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_set_dirty_reports_changes_only() {
        let mut doc = Document::new();
        assert!(!doc.set_dirty(false));
        assert!(doc.set_dirty(true));
        assert!(!doc.set_dirty(true));
        assert!(doc.set_dirty(false));
    }

    #[test]
    fn test_title_format() {
        let mut doc = Document::new();
        assert_eq!(doc.title("Editor"), "untitled - Editor");
        doc.set_filename("/tmp/a.txt");
        doc.set_dirty(true);
        assert_eq!(doc.title("Editor"), "*/tmp/a.txt - Editor");
        assert!(!doc.is_untitled());
    }
}
