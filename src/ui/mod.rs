pub mod dialogs;
pub mod editor;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod observer;
