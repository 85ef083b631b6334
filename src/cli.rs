use crate::mode::ConversionMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "binconv", version, about = "Convert numbers between decimal and binary")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Open the converter directly in this direction
    #[arg(long, value_enum, global = true)]
    pub mode: Option<ModeArg>,

    /// Write logs to this file (filter with BINCONV_LOG)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a single value and print the result
    Convert {
        /// Number to convert, in the source radix of the chosen mode
        value: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    /// decimal -> binary
    DecToBin,
    /// binary -> decimal
    BinToDec,
}

impl From<ModeArg> for ConversionMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::DecToBin => Self::DecToBin,
            ModeArg::BinToDec => Self::BinToDec,
        }
    }
}

/// Body of the `convert` subcommand. Validation errors become the eyre
/// report `main` returns, which exits non-zero.
pub fn run_convert(mode: Option<ModeArg>, value: &str) -> color_eyre::Result<String> {
    let mode = mode.map(ConversionMode::from).unwrap_or_default();
    let result = mode.convert(value)?;
    tracing::info!(?mode, value, %result, "converted from command line");
    Ok(result)
}
