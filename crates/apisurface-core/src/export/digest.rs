//! Digest of rendered snapshot content.
//!
//! The digest is reported alongside a written snapshot so two runs can be
//! compared without reading the files. It is never written into the
//! snapshot itself.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA256 of the snapshot text (64 characters)
///
/// ## Example
///
/// ```
/// use apisurface_core::export::compute_snapshot_digest;
///
/// let digest = compute_snapshot_digest("Models.User::name:string");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn compute_snapshot_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
