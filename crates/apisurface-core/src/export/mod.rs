//! Canonical snapshot extraction.
//!
//! Turns a [`CodeModel`](crate::model::CodeModel) into the sorted list of
//! entry lines that make up a public API surface snapshot.
//!
//! ## Entry format
//!
//! - Property: `{ParentPath}::{PropertyName}:{FormattedType}`
//! - Type definition (only inside a formatted type): `{Namespace}.{Type}`
//! - Collections: `[{Inner}]` when the type is an array or a complex
//!   collection
//!
//! Any change to these formats breaks snapshot comparison downstream.
//!
//! ## Non-Responsibilities
//!
//! - Writing the snapshot file (handled by `apisurface-store`)
//! - Comparing two snapshots

pub mod digest;
pub mod entry;
pub mod ordering;
pub mod path;
pub mod type_format;

pub use digest::compute_snapshot_digest;
pub use entry::{entry_for, extract_entries, EntryMode};
pub use ordering::{
    compare_ignore_case, extract_sorted_entries, join_entries, render_snapshot, sort_entries,
    LineEnding,
};
pub use path::entry_path;
pub use type_format::format_type;
