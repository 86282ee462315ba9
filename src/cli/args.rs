use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about,
    help_template(
        "{before-help}{name} {version}\n{author-with-newline}{about-with-newline}\n{usage-heading} {usage}\n\n{all-args}{after-help}"
    )
)]
pub struct Args {
    /// `<numBlocksMin> <numBlocksMax> <filepath>`. The block range is
    /// inclusive and must lie within 0..=4096; the file must end in .txt or
    /// .nfs.
    #[arg(value_name = "INPUTS", num_args = 0.., allow_negative_numbers = true)]
    pub inputs: Vec<String>,

    /// Path to a TOML block configuration file. Uses the built-in block
    /// configuration if omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit status convention.
    #[arg(long, value_enum, default_value_t = ExitCodes::Legacy)]
    pub exit_codes: ExitCodes,

    /// Suppress the banner and step progress.
    #[arg(short, long)]
    pub quiet: bool,
}

/// How success and failure map onto process exit statuses.
#[derive(ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ExitCodes {
    /// `1` on success and `0` on failure, as downstream scripts expect.
    #[default]
    Legacy,
    /// `0` on success and `1` on failure.
    Posix,
}

impl ExitCodes {
    pub fn status(self, success: bool) -> u8 {
        match (self, success) {
            (ExitCodes::Legacy, true) | (ExitCodes::Posix, false) => 1,
            (ExitCodes::Legacy, false) | (ExitCodes::Posix, true) => 0,
        }
    }
}
