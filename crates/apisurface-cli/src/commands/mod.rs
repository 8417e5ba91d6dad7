pub mod export;
pub mod print;

use clap::ValueEnum;

use apisurface_core::LineEnding;

/// Line separator choice on the command line
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LineEndingArg {
    #[default]
    Native,
    Lf,
    Crlf,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Native => LineEnding::Native,
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
        }
    }
}
