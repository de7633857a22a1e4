use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reeltag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read WAV bit depth and embedded ID3v2 cover art from audio files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print bit depth and artwork details for each file
    Inspect {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Emit a JSON array instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write embedded cover art to a directory
    Art {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        #[arg(short, long, default_value = "./artwork")]
        output: PathBuf,
    },
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "reeltag=debug"
        } else if self.verbose {
            "reeltag=info"
        } else {
            "reeltag=warn"
        }
    }
}
