//! Snapshot print command

use std::path::PathBuf;

use apisurface_core::export::render_snapshot;
use clap::Args;

use super::LineEndingArg;
use crate::model_file::load_model_file;

#[derive(Debug, Args)]
pub struct PrintArgs {
    /// Model description file (.yaml, .yml or .json)
    #[arg(long)]
    pub model: PathBuf,

    #[arg(long, value_enum, default_value_t = LineEndingArg::Lf)]
    pub line_ending: LineEndingArg,
}

pub fn execute(args: PrintArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = load_model_file(&args.model)?;
    let content = render_snapshot(&model, model.root(), args.line_ending.into());

    if !content.is_empty() {
        println!("{}", content);
    }

    Ok(())
}
