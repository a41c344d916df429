use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mcdash")]
#[command(about = "Dashboard client for hosted Minecraft servers")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server-management endpoint URL (overrides config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
