use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::duration::{DurationFormat, FailurePolicy};
use crate::mp4::ScanStrategy;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanArg {
    /// Walk the box tree down to moov/mvhd
    Structured,
    /// Search raw bytes for the first mvhd tag
    Linear,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// 1h2m3s
    Compact,
    /// 1:02:03
    Clock,
}

#[derive(Parser, Debug)]
#[command(name = "mediaduration")]
#[command(author, version, about = "Sum the playback time of the MP4 and MKV files in a directory")]
pub struct CliOptions {
    /// Directory to search for videos
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Recursively find video files
    #[arg(short, long)]
    pub recursive: bool,

    /// Report unreadable files and keep going instead of stopping at the first one
    #[arg(long)]
    pub skip_errors: bool,

    /// How to locate the movie header box
    #[arg(long, value_enum, default_value_t = ScanArg::Structured)]
    pub scan: ScanArg,

    /// Duration rendering
    #[arg(long, value_enum, default_value_t = FormatArg::Compact)]
    pub format: FormatArg,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliOptions {
    pub fn failure_policy(&self) -> FailurePolicy {
        if self.skip_errors {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        }
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

impl From<ScanArg> for ScanStrategy {
    fn from(arg: ScanArg) -> Self {
        match arg {
            ScanArg::Structured => ScanStrategy::Structured,
            ScanArg::Linear => ScanStrategy::Linear,
        }
    }
}

impl From<FormatArg> for DurationFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Compact => DurationFormat::Compact,
            FormatArg::Clock => DurationFormat::Clock,
        }
    }
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}
