use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::services::recent_files::RecentEntry;

pub const SAVE_PATH: &str = "File/Save";
pub const RECENT_SUBMENU: &str = "File/Open Recent";

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, app_name: &str) {
    let s = sender;

    // File
    menu.add("File/New...", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add(SAVE_PATH, Shortcut::Ctrl | 's', MenuFlag::Inactive, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Save as...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add(RECENT_SUBMENU, Shortcut::None, MenuFlag::Submenu | MenuFlag::MenuDivider, |_| {});
    menu.add("File/Exit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("Edit/Undo", Shortcut::Ctrl | 'z', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("Edit/Redo", Shortcut::Ctrl | 'y', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditRedo) });
    menu.add("Edit/Copy", Shortcut::Ctrl | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy) });
    menu.add("Edit/Paste", Shortcut::Ctrl | 'v', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditPaste) });
    menu.add("Edit/Cut", Shortcut::Ctrl | 'x', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut) });

    // Help
    let about = format!("Help/About {}", escape_menu_label(app_name));
    menu.add(&about, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

/// Redraw the Open Recent submenu from the registry's entries. An empty list
/// shows a disabled placeholder and no "Clear recent files" item.
pub fn rebuild_recent_files(menu: &mut MenuBar, sender: &Sender<Message>, entries: &[RecentEntry]) {
    let idx = menu.find_index(RECENT_SUBMENU);
    if idx < 0 {
        log::warn!("Recent files submenu missing from menu bar");
        return;
    }
    if let Err(e) = menu.clear_submenu(idx) {
        log::warn!("Failed to clear recent files submenu: {:?}", e);
        return;
    }

    if entries.is_empty() {
        menu.add(&format!("{}/No recent files", RECENT_SUBMENU), Shortcut::None, MenuFlag::Inactive, |_| {});
        return;
    }

    let last = entries.len() - 1;
    for (i, entry) in entries.iter().enumerate() {
        let label = format!("{}/{}", RECENT_SUBMENU, escape_menu_label(&entry.text));
        let flag = if i == last { MenuFlag::MenuDivider } else { MenuFlag::Normal };
        let path = entry.path.clone();
        let s = *sender;
        menu.add(&label, Shortcut::None, flag, move |_| s.send(Message::FileOpenRecent(path.clone())));
    }
    menu.add(
        &format!("{}/Clear recent files", RECENT_SUBMENU),
        Shortcut::None,
        MenuFlag::Normal,
        { let s = *sender; move |_| s.send(Message::ClearRecentFiles) },
    );
}

pub fn set_item_active(menu: &MenuBar, path: &str, active: bool) {
    let idx = menu.find_index(path);
    if idx >= 0 {
        if let Some(mut item) = menu.at(idx) {
            if active {
                item.activate();
            } else {
                item.deactivate();
            }
        }
    }
}

/// Escape characters FLTK treats specially in menu paths: '/' opens a
/// submenu, '\\' escapes, '&' marks a shortcut and a leading '_' draws a
/// divider.
pub fn escape_menu_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '/' => out.push_str("\\/"),
            '&' => out.push_str("&&"),
            '_' => out.push_str("\\_"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_label() {
        assert_eq!(escape_menu_label("notes.txt"), "notes.txt");
    }

    #[test]
    fn test_escape_path_separators() {
        assert_eq!(escape_menu_label("/home/user/a.txt"), "\\/home\\/user\\/a.txt");
        assert_eq!(escape_menu_label("C:\\docs"), "C:\\\\docs");
    }

    #[test]
    fn test_escape_shortcut_and_divider_markers() {
        assert_eq!(escape_menu_label("R&D_notes"), "R&&D\\_notes");
    }
}
