//! apisurface core - code model and canonical snapshot extraction
//!
//! This crate provides:
//! - An arena-backed code model (namespaces, types, members) with
//!   handle-based parent links
//! - Canonical entry extraction for the public API surface
//! - Case-insensitive ordering and snapshot text rendering
//! - Error and logging facilities shared by the other crates
//!
//! Extraction is pure and synchronous; writing the snapshot to disk lives in
//! `apisurface-store`.

pub mod errors;
pub mod export;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ApiSurfaceError, ExError, ExErrorKind, Result};
pub use export::{extract_entries, render_snapshot, LineEnding};
pub use model::{AccessModifier, CodeModel, CollectionKind, ElementId, ElementKind, TypeRef};
