//! Snapshot export command

use std::path::PathBuf;

use apisurface_store::{CancellationSignal, SnapshotWriter};
use clap::Args;

use super::LineEndingArg;
use crate::model_file::load_model_file;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Model description file (.yaml, .yml or .json)
    #[arg(long)]
    pub model: PathBuf,

    /// Directory receiving kiota-dom-export.txt (must exist)
    #[arg(long)]
    pub output_dir: String,

    #[arg(long, value_enum, default_value_t = LineEndingArg::Native)]
    pub line_ending: LineEndingArg,
}

pub fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    // Validate configuration before touching the model file
    let writer = SnapshotWriter::new(&args.output_dir)?.with_line_ending(args.line_ending.into());
    let model = load_model_file(&args.model)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(async {
        let signal = CancellationSignal::new();
        let on_interrupt = signal.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupt received, cancelling snapshot write");
                on_interrupt.cancel();
            }
        });

        writer
            .serialize_snapshot(&model, model.root(), &signal)
            .await
    })?;

    println!("Snapshot written:");
    println!("  path: {}", report.path.display());
    println!("  entries: {}", report.entry_count);
    println!("  bytes: {}", report.bytes_written);
    println!("  digest: {}", report.digest);

    Ok(())
}
