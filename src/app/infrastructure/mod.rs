//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - File system and key-value store implementations of the ports
//! - Platform-specific directories
//! - Error types

pub mod error;
pub mod fs;
pub mod platform;
pub mod store;
