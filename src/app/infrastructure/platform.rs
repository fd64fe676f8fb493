use std::path::PathBuf;

/// Directory the open/save dialogs start in when none is configured:
/// the user's Documents folder, then the home directory, then ".".
pub fn default_start_directory() -> PathBuf {
    if let Some(docs) = dirs::document_dir() {
        return docs;
    }
    match dirs::home_dir() {
        Some(home) => home.join("Documents"),
        None => PathBuf::from("."),
    }
}

/// Per-application store file: `<config_dir>/<organization>/<app_name>.json`.
pub fn store_path(organization: &str, app_name: &str) -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(sanitize_component(organization));
    path.push(format!("{}.json", sanitize_component(app_name)));
    path
}

/// Keep a name usable as a single path component on every platform.
fn sanitize_component(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        "default".to_string()
    } else {
        trimmed.to_string()
    }
}
