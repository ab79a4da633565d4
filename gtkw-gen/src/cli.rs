//! Command-line arguments.
//!
//! Size and format can be given positionally:
//!
//! ```text
//! gtkw-gen simulate.sh 1900 900 [sav]
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

use crate::config::{LayoutFormat, Overrides};

#[derive(Parser, Debug)]
#[command(name = "gtkw-gen")]
#[command(about = "Build a GTKWave layout grouping a Verilog module's inputs, outputs and internals")]
#[command(version)]
pub struct Cli {
    /// Simulation script containing the elaboration command (e.g. simulate.sh)
    pub script: PathBuf,

    /// GTKWave window width in pixels [default: 1900]
    pub width: Option<u32>,

    /// GTKWave window height in pixels [default: 900]
    pub height: Option<u32>,

    /// Layout file format, selects the file extension [default: gtkw]
    #[arg(value_enum)]
    pub format: Option<LayoutFormat>,

    /// Settings file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory to write the layout and its dump copy into
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Command that elaborates the design in the simulation script [default: xelab]
    #[arg(long = "elaborate-cmd")]
    pub elaborate_command: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Verbose output, same as --log-level debug
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Settings given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            width: self.width,
            height: self.height,
            format: self.format,
            elaborate_command: self.elaborate_command.clone(),
        }
    }

    /// Effective log level. Unknown names fall back to `warn`.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            return LevelFilter::Debug;
        }
        LevelFilter::from_str(&self.log_level).unwrap_or_else(|_| {
            eprintln!(
                "Invalid log level: {}. Using 'warn' instead.",
                self.log_level
            );
            LevelFilter::Warn
        })
    }
}
