//! Snapshot writer.
//!
//! Writes the rendered snapshot of a code model to
//! `{output_dir}/kiota-dom-export.txt`, replacing any previous file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use apisurface_core::export::{compute_snapshot_digest, extract_sorted_entries, join_entries};
use apisurface_core::{log_op_end, log_op_error, log_op_start};
use apisurface_core::{CodeModel, ElementId, LineEnding};
use apisurface_core_types::RequestId;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::cancel::CancellationSignal;
use crate::errors::{cancelled, invalid_configuration, io_error, Result};

/// File name of the exported snapshot inside the output directory
pub const DOM_EXPORT_FILE_NAME: &str = "kiota-dom-export.txt";

/// Outcome of a successful snapshot write
#[derive(Debug, Clone)]
pub struct SnapshotReport {
    /// Full path of the written file
    pub path: PathBuf,
    /// Number of entry lines
    pub entry_count: usize,
    /// Size of the file in bytes
    pub bytes_written: usize,
    /// SHA256 of the file content (hex)
    pub digest: String,
    /// Correlation id of this run
    pub request_id: RequestId,
}

/// Writes API surface snapshots to a fixed file in an output directory
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    output_dir: PathBuf,
    line_ending: LineEnding,
}

impl SnapshotWriter {
    /// Create a writer targeting `output_dir`
    ///
    /// The directory is not created or checked for existence here.
    ///
    /// # Errors
    ///
    /// Returns `ERR_INVALID_CONFIGURATION` if `output_dir` is empty.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref();
        if output_dir.as_os_str().is_empty() {
            return Err(invalid_configuration("output directory cannot be empty"));
        }

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            line_ending: LineEnding::Native,
        })
    }

    /// Override the line separator (defaults to the platform's)
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Configured output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the snapshot file
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(DOM_EXPORT_FILE_NAME)
    }

    /// Render the tree under `root` and write it to [`Self::output_path`]
    ///
    /// The file is created or truncated, then written in a single pass. The
    /// signal is checked before the file is created and raced against the
    /// write itself; traversal is not interruptible.
    ///
    /// # Errors
    ///
    /// - `ERR_CANCELLED` if the signal is raised before the write completes.
    ///   No file is created when the signal is already raised on entry; a
    ///   cancel during the write may leave an empty or partial file.
    /// - `ERR_IO` for any file-system failure, unchanged and not retried.
    pub async fn serialize_snapshot(
        &self,
        model: &CodeModel,
        root: ElementId,
        cancel: &CancellationSignal,
    ) -> Result<SnapshotReport> {
        let request_id = RequestId::new();
        let path = self.output_path();
        log_op_start!(
            "serialize_snapshot",
            request_id = %request_id,
            output_path = %path.display()
        );
        let start = Instant::now();

        let result = self
            .serialize_impl(model, root, cancel, &path, &request_id)
            .await
            .map_err(|e| e.with_path(path.display().to_string()).with_request_id(request_id.clone()));

        match result {
            Ok(report) => {
                log_op_end!(
                    "serialize_snapshot",
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = %request_id,
                    entry_count = report.entry_count as u64,
                    bytes_written = report.bytes_written as u64,
                    digest = %report.digest
                );
                Ok(report)
            }
            Err(e) => {
                log_op_error!(
                    "serialize_snapshot",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = %request_id
                );
                Err(e)
            }
        }
    }

    async fn serialize_impl(
        &self,
        model: &CodeModel,
        root: ElementId,
        cancel: &CancellationSignal,
        path: &Path,
        request_id: &RequestId,
    ) -> Result<SnapshotReport> {
        let entries = extract_sorted_entries(model, root);
        let content = join_entries(&entries, self.line_ending);
        let bytes = content.as_bytes();

        if cancel.is_cancelled() {
            return Err(cancelled("serialize_snapshot"));
        }

        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|e| io_error("create_snapshot_file", e))?;

        if let Err(e) = write_cancellable(&mut file, bytes, cancel).await {
            if e.is_cancelled() {
                tracing::debug!(output_path = %path.display(), "Snapshot write cancelled");
            }
            return Err(e);
        }

        tracing::debug!(
            output_path = %path.display(),
            size_bytes = bytes.len(),
            "Wrote snapshot file"
        );

        Ok(SnapshotReport {
            path: path.to_path_buf(),
            entry_count: entries.len(),
            bytes_written: bytes.len(),
            digest: compute_snapshot_digest(&content),
            request_id: request_id.clone(),
        })
    }
}

/// Write and flush `bytes`, racing the write against `cancel`
///
/// Whatever reached `writer` before the signal was observed stays there.
async fn write_cancellable<W>(writer: &mut W, bytes: &[u8], cancel: &CancellationSignal) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(cancelled("write_snapshot")),
        written = async {
            writer.write_all(bytes).await?;
            writer.flush().await
        } => written.map_err(|e| io_error("write_snapshot", e)),
    }
}
