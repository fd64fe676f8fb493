/// All messages that can be sent through the FLTK channel.
/// Each menu callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileOpenRecent(String),
    FileSave,
    FileSaveAs,
    ClearRecentFiles,
    FileQuit,
    WindowClose,

    // Editor content changed by the user
    ContentChanged,

    // Edit
    EditUndo,
    EditRedo,
    EditCut,
    EditCopy,
    EditPaste,

    // Help
    ShowAbout,
}
