use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkmask")]
#[command(about = "Mask unencrypted links in text messages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "LINKMASK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Mask every line of a file
    Run(RunArgs),

    /// Mask the given texts and print them
    Mask {
        /// Texts to mask, one output line each
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Show the effective configuration
    Config {
        /// Print the config file path instead
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args)]
pub struct RunArgs {
    /// Input file, one message per line
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of worker threads (default from config: 10)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Mask character (default from config: '*')
    #[arg(long)]
    pub mask_char: Option<char>,

    /// Scheme marker that starts a masked run (default from config: "http://")
    #[arg(long)]
    pub scheme: Option<String>,

    /// Write results in completion order instead of input order
    #[arg(long)]
    pub unordered: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,
}
