//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Document state and title formatting
//! - Ports the core talks to
//! - File dialog requests
//! - Shell settings
//! - Message types for the event system

pub mod dialog;
pub mod document;
pub mod messages;
pub mod ports;
pub mod settings;

pub use dialog::{DialogMode, FileDialogRequest};
pub use document::{Document, UNTITLED};
pub use messages::Message;
pub use ports::{
    ConfirmationPort, ContentPort, FileDialogPort, FileSystem, SettingsStore,
    ShellObserver,
};
pub use settings::{RecentFilesConfig, ShellSettings};
