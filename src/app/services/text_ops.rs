use std::path::Path;
use std::sync::LazyLock;

use regex_lite::Regex;

/// Dialog titles never exceed this many characters.
pub const MAX_TITLE_LENGTH: usize = 40;

static MARKUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("valid markup tag regex"));

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Shorten `name` to `head + " ... " + tail` when it is longer than `max_length`.
///
/// Lengths count characters, so multi-byte paths are never split inside a
/// code point.
pub fn shorten_name(name: &str, max_length: usize, head_length: usize, tail_length: usize) -> String {
    let len = name.chars().count();
    if len <= max_length {
        return name.to_string();
    }
    let head: String = name.chars().take(head_length).collect();
    let tail: String = name.chars().skip(len.saturating_sub(tail_length)).collect();
    format!("{} ... {}", head, tail)
}

/// Remove `<tag>` style markup, e.g. "open <b>a.txt</b>" -> "open a.txt".
pub fn strip_markup(message: &str) -> String {
    MARKUP_RE.replace_all(message, "").into_owned()
}

/// Title for a confirmation or warning dialog: markup stripped, first letter
/// capitalized, " ..." appended, cut to `max_length` characters.
pub fn dialog_title(message: &str, max_length: usize) -> String {
    let stripped = strip_markup(message);
    let mut chars = stripped.chars();
    let title = match chars.next() {
        Some(first) => format!("{}{} ...", first.to_uppercase(), chars.as_str()),
        None => " ...".to_string(),
    };
    if title.chars().count() > max_length {
        title.chars().take(max_length).collect()
    } else {
        title
    }
}

pub fn confirmation_body(message: &str) -> String {
    format!("Are you sure you want to {}? Unsaved data will be lost!", message)
}

pub fn warning_body(message: &str) -> String {
    format!("There was a problem while {}!", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename("/home/user/test.txt"), "test.txt");
        assert_eq!(extract_filename("test.txt"), "test.txt");
        assert_eq!(extract_filename("/path/with/many/levels/file.rs"), "file.rs");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename("/home/user/"), "user");
        assert_eq!(extract_filename(""), "Unknown");
        assert_eq!(extract_filename("."), "Unknown");
        assert_eq!(extract_filename("/"), "Unknown");
    }

    #[test]
    fn test_shorten_name_short_path_unchanged() {
        assert_eq!(shorten_name("/tmp/a.txt", 40, 10, 25), "/tmp/a.txt");
        let exactly_40 = "a".repeat(40);
        assert_eq!(shorten_name(&exactly_40, 40, 10, 25), exactly_40);
    }

    #[test]
    fn test_shorten_name_long_path() {
        let path = "/home/user/projects/very/long/path/to/document.txt";
        assert_eq!(path.len(), 50);
        assert_eq!(
            shorten_name(path, 40, 10, 25),
            "/home/user ... long/path/to/document.txt"
        );
        let expected = format!("{} ... {}", &path[..10], &path[path.len() - 25..]);
        assert_eq!(shorten_name(path, 40, 10, 25), expected);
    }

    #[test]
    fn test_shorten_name_counts_chars() {
        let path = format!("/{}", "ü".repeat(45));
        let short = shorten_name(&path, 40, 10, 25);
        assert_eq!(short.chars().count(), 10 + 5 + 25);
        assert!(short.starts_with("/üüüüüüüüü ... "));
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("open <b>notes.txt</b>"), "open notes.txt");
        assert_eq!(strip_markup("no tags here"), "no tags here");
        assert_eq!(strip_markup("<i>a</i> and <br/>b"), "a and b");
    }

    #[test]
    fn test_dialog_title_capitalizes_and_appends() {
        assert_eq!(dialog_title("start a new data file", 40), "Start a new data file ...");
        assert_eq!(dialog_title("open <b>a.txt</b>", 40), "Open a.txt ...");
    }

    #[test]
    fn test_dialog_title_truncated() {
        let title = dialog_title("open <b>a_really_long_file_name_for_testing.txt</b>", 40);
        assert_eq!(title.chars().count(), 40);
        assert!(title.starts_with("Open a_really_long"));
    }

    #[test]
    fn test_dialog_title_empty_message() {
        assert_eq!(dialog_title("", 40), " ...");
    }

    #[test]
    fn test_confirmation_body_is_untruncated() {
        let message = "open <b>a_really_long_file_name_for_testing.txt</b>";
        assert_eq!(
            confirmation_body(message),
            format!("Are you sure you want to {}? Unsaved data will be lost!", message)
        );
        assert_eq!(
            confirmation_body("exit Classic Text Editor"),
            "Are you sure you want to exit Classic Text Editor? Unsaved data will be lost!"
        );
    }

    #[test]
    fn test_warning_body() {
        assert_eq!(warning_body("opening a.txt"), "There was a problem while opening a.txt!");
    }
}
