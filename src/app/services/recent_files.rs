//! Most recently used files.
//!
//! Keeps a bounded, duplicate-free list of paths, most recent first, and
//! writes it back to the settings store after every change. Subscribers are
//! handed the full list each time it changes so the File menu can redraw.

use crate::app::domain::ports::SettingsStore;
use crate::app::domain::settings::RecentFilesConfig;
use crate::app::services::text_ops::shorten_name;

/// Store key holding the list.
pub const RECENT_FILES_KEY: &str = "recent_files_list";

type Listener = Box<dyn FnMut(&[String])>;

/// What the presentation layer needs to draw one recent file entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentEntry {
    /// Possibly shortened label.
    pub text: String,
    pub status_tip: String,
    pub path: String,
}

pub struct RecentFiles {
    files: Vec<String>,
    config: RecentFilesConfig,
    store: Box<dyn SettingsStore>,
    listeners: Vec<Listener>,
}

impl RecentFiles {
    pub fn new(store: Box<dyn SettingsStore>, config: RecentFilesConfig) -> Self {
        let mut recent = Self {
            files: Vec::new(),
            config,
            store,
            listeners: Vec::new(),
        };
        recent.load_from_store();
        recent
    }

    /// Register a listener called with the ordered list after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&[String]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn list(&self) -> &[String] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.config.max_entries
    }

    /// Move `path` to the front, dropping any older occurrence and whatever
    /// falls off the end.
    pub fn add(&mut self, path: &str) {
        self.files.retain(|f| f != path);
        self.files.insert(0, path.to_string());
        self.files.truncate(self.config.max_entries);
        log::debug!("Recent file added: {}", path);
        self.persist();
        self.notify();
    }

    /// Drop `path` from the list. Removing a path that is not listed is a no-op.
    pub fn remove(&mut self, path: &str) {
        match self.files.iter().position(|f| f == path) {
            Some(idx) => {
                self.files.remove(idx);
                log::debug!("Recent file removed: {}", path);
                self.persist();
                self.notify();
            }
            None => log::debug!("Recent file not listed, nothing to remove: {}", path),
        }
    }

    /// Forget every recent file, including the stored entry.
    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove(RECENT_FILES_KEY) {
            log::warn!("Failed to clear recent files: {}", e);
        }
        self.load_from_store();
        log::info!("Recent files cleared");
        self.notify();
    }

    pub fn entries(&self) -> Vec<RecentEntry> {
        recent_entries(&self.files, &self.config)
    }

    fn load_from_store(&mut self) {
        let stored = self.store.get(RECENT_FILES_KEY).unwrap_or_default();
        let mut files: Vec<String> = Vec::with_capacity(stored.len());
        for path in &stored {
            if !files.contains(path) {
                files.push(path.clone());
            }
        }
        files.truncate(self.config.max_entries);
        let changed = files != stored;
        self.files = files;
        if changed {
            log::debug!("Normalized stored recent files list");
            self.persist();
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.set(RECENT_FILES_KEY, self.files.clone()) {
            log::warn!("Failed to save recent files: {}", e);
        }
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.files);
        }
    }
}

/// Menu entries for `files`, labels shortened with `config`'s limits.
pub fn recent_entries(files: &[String], config: &RecentFilesConfig) -> Vec<RecentEntry> {
    files
        .iter()
        .map(|path| RecentEntry {
            text: shorten_name(path, config.max_length, config.head_length, config.tail_length),
            status_tip: format!("Open {}", path),
            path: path.clone(),
        })
        .collect()
}

/// Shorten `path` with the default limits (40 characters, 10 head, 25 tail).
pub fn display_name(path: &str) -> String {
    let config = RecentFilesConfig::default();
    shorten_name(path, config.max_length, config.head_length, config.tail_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::{Result, ShellError};
    use crate::app::infrastructure::store::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn registry() -> (RecentFiles, Rc<RefCell<MemoryStore>>) {
        let store = Rc::new(RefCell::new(MemoryStore::new()));
        let recent = RecentFiles::new(Box::new(store.clone()), RecentFilesConfig::default());
        (recent, store)
    }

    fn stored(store: &Rc<RefCell<MemoryStore>>) -> Option<Vec<String>> {
        store.borrow().get(RECENT_FILES_KEY)
    }

    #[test]
    fn test_add_moves_duplicate_to_front() {
        let (mut recent, _) = registry();
        recent.add("/a");
        recent.add("/b");
        recent.add("/a");
        assert_eq!(recent.list(), ["/a", "/b"]);
    }

    #[test]
    fn test_capacity_keeps_most_recent() {
        let (mut recent, _) = registry();
        recent.add("/a");
        recent.add("/b");
        recent.add("/a");
        for i in 0..11 {
            recent.add(&format!("/file{}", i));
        }
        assert_eq!(recent.list().len(), 10);
        let expected: Vec<String> = (1..11).rev().map(|i| format!("/file{}", i)).collect();
        assert_eq!(recent.list(), expected.as_slice());
    }

    #[test]
    fn test_readd_when_full_keeps_length() {
        let (mut recent, _) = registry();
        for i in 0..10 {
            recent.add(&format!("/f{}", i));
        }
        recent.add("/f0");
        assert_eq!(recent.list().len(), 10);
        assert_eq!(recent.list()[0], "/f0");
        assert!(recent.list().contains(&"/f1".to_string()));
    }

    #[test]
    fn test_never_contains_duplicates() {
        let (mut recent, _) = registry();
        let paths = ["/a", "/b", "/c", "/a", "/c", "/c", "/d", "/b"];
        for p in paths {
            recent.add(p);
            let mut seen = std::collections::HashSet::new();
            assert!(recent.list().iter().all(|f| seen.insert(f.clone())));
        }
        assert_eq!(recent.list(), ["/b", "/d", "/c", "/a"]);
    }

    #[test]
    fn test_every_change_is_persisted() {
        let (mut recent, store) = registry();
        recent.add("/a");
        recent.add("/b");
        assert_eq!(stored(&store), Some(vec!["/b".to_string(), "/a".to_string()]));
        recent.remove("/b");
        assert_eq!(stored(&store), Some(vec!["/a".to_string()]));
    }

    #[test]
    fn test_remove_absent_path_is_noop() {
        let (mut recent, _) = registry();
        recent.add("/a");
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        recent.subscribe(move |_| *counter.borrow_mut() += 1);
        recent.remove("/never-added");
        assert_eq!(recent.list(), ["/a"]);
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_clear_removes_store_entry() {
        let (mut recent, store) = registry();
        recent.add("/a");
        recent.clear();
        assert!(recent.is_empty());
        assert!(!store.borrow().contains(RECENT_FILES_KEY));
    }

    #[test]
    fn test_loads_existing_list_and_caps_it() {
        let store = Rc::new(RefCell::new(MemoryStore::new()));
        let many: Vec<String> = (0..15).map(|i| format!("/p{}", i)).collect();
        store.borrow_mut().set(RECENT_FILES_KEY, many).unwrap();
        let recent = RecentFiles::new(Box::new(store), RecentFilesConfig::default());
        assert_eq!(recent.list().len(), 10);
        assert_eq!(recent.list()[0], "/p0");
        assert_eq!(recent.list()[9], "/p9");
    }

    #[test]
    fn test_loads_existing_list_without_duplicates() {
        let store = Rc::new(RefCell::new(MemoryStore::new()));
        let stored_list = vec!["/a".to_string(), "/b".to_string(), "/a".to_string()];
        store.borrow_mut().set(RECENT_FILES_KEY, stored_list).unwrap();

        let mut recent = RecentFiles::new(Box::new(store.clone()), RecentFilesConfig::default());
        assert_eq!(recent.list(), ["/a", "/b"]);
        assert_eq!(stored(&store), Some(vec!["/a".to_string(), "/b".to_string()]));

        recent.remove("/a");
        assert_eq!(recent.list(), ["/b"]);
        assert!(!recent.entries().iter().any(|e| e.path == "/a"));
    }

    #[test]
    fn test_clean_stored_list_is_not_rewritten() {
        let store = Rc::new(RefCell::new(MemoryStore::new()));
        let recent = RecentFiles::new(Box::new(store.clone()), RecentFilesConfig::default());
        assert!(recent.is_empty());
        assert!(!store.borrow().contains(RECENT_FILES_KEY));
    }

    #[test]
    fn test_listeners_receive_full_list() {
        let (mut recent, _) = registry();
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        recent.subscribe(move |files| sink.borrow_mut().push(files.to_vec()));
        recent.add("/a");
        recent.add("/b");
        recent.clear();
        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[1], vec!["/b".to_string(), "/a".to_string()]);
        assert!(seen[2].is_empty());
    }

    #[test]
    fn test_entries_shorten_labels_only() {
        let (mut recent, _) = registry();
        let long = "/home/user/projects/very/long/path/to/document.txt";
        recent.add(long);
        recent.add("/tmp/a.txt");
        let entries = recent.entries();
        assert_eq!(entries[0].text, "/tmp/a.txt");
        assert_eq!(entries[0].status_tip, "Open /tmp/a.txt");
        assert_eq!(entries[1].text, "/home/user ... long/path/to/document.txt");
        assert_eq!(entries[1].path, long);
        assert_eq!(recent.list()[1], long);
    }

    #[test]
    fn test_display_name_default_limits() {
        assert_eq!(display_name("/short.txt"), "/short.txt");
        let path = "/home/user/projects/very/long/path/to/document.txt";
        assert_eq!(display_name(path), format!("{} ... {}", &path[..10], &path[25..]));
    }

    #[test]
    fn test_custom_capacity() {
        let config = RecentFilesConfig {
            max_entries: 3,
            ..Default::default()
        };
        let mut recent = RecentFiles::new(Box::new(MemoryStore::new()), config);
        for p in ["/1", "/2", "/3", "/4"] {
            recent.add(p);
        }
        assert_eq!(recent.list(), ["/4", "/3", "/2"]);
        assert_eq!(recent.max_entries(), 3);
    }

    struct FailingStore;

    impl SettingsStore for FailingStore {
        fn get(&self, _key: &str) -> Option<Vec<String>> {
            None
        }

        fn set(&mut self, _key: &str, _value: Vec<String>) -> Result<()> {
            Err(ShellError::Settings("read-only".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(ShellError::Settings("read-only".to_string()))
        }
    }

    #[test]
    fn test_store_failures_do_not_lose_in_memory_list() {
        let mut recent = RecentFiles::new(Box::new(FailingStore), RecentFilesConfig::default());
        recent.add("/a");
        assert_eq!(recent.list(), ["/a"]);
        recent.clear();
        assert!(recent.is_empty());
    }
}
