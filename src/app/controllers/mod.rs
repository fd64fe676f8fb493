//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the ports:
//! - Document lifecycle (New/Open/Save/Save As/Exit)

pub mod document;
