//! Snapshot file persistence.
//!
//! ## Responsibilities
//!
//! - Validate the output directory at construction
//! - Render the snapshot text through `apisurface-core`
//! - Create-or-truncate `kiota-dom-export.txt` and write it in one pass
//! - Observe a cancellation signal around the write
//!
//! ## Non-Responsibilities
//!
//! - Entry extraction and ordering (handled by `apisurface-core`)
//! - Creating the output directory
//! - Retrying failed writes

pub mod cancel;
pub mod writer;

// Re-export primary types
pub use cancel::CancellationSignal;
pub use writer::{SnapshotReport, SnapshotWriter, DOM_EXPORT_FILE_NAME};
