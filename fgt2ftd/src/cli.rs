use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fgt2ftd")]
#[command(about = "Convert FortiGate YAML configuration to Cisco FTD FDM API JSON format")]
pub struct Cli {
    /// FortiGate YAML configuration file.
    pub input: PathBuf,
    /// Output JSON file path.
    #[arg(short, long, default_value = "ftd_config.json")]
    pub output: PathBuf,
    /// Indent JSON output for readability.
    #[arg(short, long)]
    pub pretty: bool,
    /// Optional TOML file that extends the policy action mapping table.
    #[arg(long)]
    pub action_map: Option<PathBuf>,
    /// Log every converted object to stderr.
    #[arg(short, long)]
    pub verbose: bool,
    /// Do not print the conversion summary.
    #[arg(short, long)]
    pub quiet: bool,
}
