//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Settings, Messages, ports)
//! - `controllers/` - Document lifecycle orchestration
//! - `services/` - Recent files registry, text and filter helpers
//! - `infrastructure/` - File system, key-value store, platform dirs, errors
//! - `state.rs` - FLTK coordinator driven by the message loop

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::document::{DocumentController, Outcome, ShellPorts};
pub use domain::{Document, FileDialogRequest, Message, RecentFilesConfig, ShellSettings};
pub use infrastructure::error::{Result, ShellError};
pub use services::recent_files::{display_name, RecentEntry, RecentFiles};
