use std::path::Path;

/// Descriptive filter for a single extension, e.g. "TXT file (*.txt)".
pub fn extension_filter(extension: &str) -> String {
    format!("{} file (*.{})", extension.to_uppercase(), extension)
}

/// Wildcard pattern handed to the native chooser.
///
/// FLTK accepts "*.txt" style patterns and adds "All Files (*)" itself.
pub fn platform_pattern(extension: Option<&str>) -> String {
    match extension {
        Some(ext) if !ext.is_empty() => format!("*.{}", ext),
        _ => "*".to_string(),
    }
}

/// Append `.extension` when a chosen save path has no extension of its own.
pub fn with_default_suffix(path: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) if !ext.is_empty() && Path::new(path).extension().is_none() => {
            format!("{}.{}", path, ext)
        }
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_filter() {
        assert_eq!(extension_filter("txt"), "TXT file (*.txt)");
        assert_eq!(extension_filter("csv"), "CSV file (*.csv)");
    }

    #[test]
    fn test_platform_pattern() {
        assert_eq!(platform_pattern(Some("txt")), "*.txt");
        assert_eq!(platform_pattern(Some("")), "*");
        assert_eq!(platform_pattern(None), "*");
    }

    #[test]
    fn test_default_suffix_added_when_missing() {
        assert_eq!(with_default_suffix("/tmp/notes", Some("txt")), "/tmp/notes.txt");
    }

    #[test]
    fn test_default_suffix_keeps_existing_extension() {
        assert_eq!(with_default_suffix("/tmp/notes.md", Some("txt")), "/tmp/notes.md");
        assert_eq!(with_default_suffix("/tmp/notes", None), "/tmp/notes");
    }
}
