use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "unrgssad")]
#[command(version)]
#[command(about = "Extract files from RGSSAD (v1/v3) game archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  unrgssad Game.rgssad               extract into the current directory\n  \
  unrgssad -d assets Game.rgss3a     extract into ./assets\n  \
  unrgssad -l Game.rgss2a            list entries only\n\n\
  Set RUST_LOG=debug for diagnostic output on stderr.")]
pub struct Cli {
    /// RGSSAD archive path
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Extract files into exdir
    #[arg(short = 'd', value_name = "DIR")]
    pub extract_dir: Option<PathBuf>,

    /// List entries without extracting
    #[arg(short = 'l')]
    pub list: bool,

    /// Do not print the entry listing
    #[arg(short = 'q')]
    pub quiet: bool,
}

impl Cli {
    pub fn output_dir(&self) -> PathBuf {
        self.extract_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
