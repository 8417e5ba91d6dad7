//! apisurface store - snapshot file persistence
//!
//! Provides:
//! - Snapshot writer: renders a code model and writes `kiota-dom-export.txt`
//! - Cooperative cancellation of the file write
//! - Store-level error helpers on top of the core error facility

pub mod errors;
pub mod snapshot;

// Re-export key types
pub use errors::Result;
pub use snapshot::{CancellationSignal, SnapshotReport, SnapshotWriter, DOM_EXPORT_FILE_NAME};
