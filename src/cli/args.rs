use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clientraw-bridge")]
#[command(about = "Polls weather APIs and emits a fixed-position clientraw record")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Configuration file path (TOML)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch all sources and overwrite the clientraw output file
    Run {
        #[arg(short, long, help = "Output file path [default: clientraw.txt]")]
        output: Option<PathBuf>,

        #[arg(long, help = "Schema version: 178 or 180")]
        schema_version: Option<u16>,
    },

    /// Fetch all sources and print the assembled line without writing
    Preview {
        #[arg(long, help = "Schema version: 178 or 180")]
        schema_version: Option<u16>,
    },

    /// Decode an existing clientraw file into labelled fields
    Inspect {
        #[arg(short, long, help = "Clientraw file to decode")]
        file: PathBuf,

        #[arg(long, default_value = "false", help = "Include reserved/sentinel fields")]
        all: bool,
    },
}
