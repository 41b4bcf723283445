//! # lab-core
//!
//! Core types and pure rules for coding lab authoring.
//!
//! This crate provides the foundational types shared across all lab crates:
//! - Entity structs as they travel over the wire (labs, versions, embeds)
//! - Test case and comparator value objects with their normalization rules
//! - Status enums with lifecycle transitions
//! - Version ordering and "current version" selection
//! - Request payloads sent to the persistence service
//! - Text helpers (slugs, tags, hints) and JSON text parse/format
//! - Cross-cutting error types

pub mod de;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod json_text;
pub mod lifecycle;
pub mod requests;
pub mod text;

pub use entities::{
    Comparator, JsonObject, Lab, LabEmbed, LabVersion, ReferenceSolution, RunnerConfig, TestCase,
};
pub use errors::CoreError;
