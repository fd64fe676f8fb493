//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Recent files registry
//! - Dialog filter helpers
//! - Text formatting for titles, labels and prompts

pub mod file_filters;
pub mod recent_files;
pub mod text_ops;
