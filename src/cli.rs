use clap::Parser;
use std::path::PathBuf;

/// Simulate TheCircle's USSD short-code menus in the terminal.
#[derive(Parser, Debug)]
#[command(name = "circle-ussd", version, about)]
pub struct Cli {
    /// Config file path (default: ~/.config/circle-ussd/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run without a terminal UI: apply each key (or `back`/`home`) in order
    /// and print a JSON snapshot per step
    #[arg(long, value_name = "KEYS", conflicts_with = "check")]
    pub script: Option<String>,

    /// Validate the menu registry and config, then exit
    #[arg(long)]
    pub check: bool,
}
