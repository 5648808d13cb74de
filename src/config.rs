//! Command-line configuration.

use clap::Parser;

/// Backpack inventory manager.
#[derive(Debug, Clone, Parser)]
#[command(name = "backpack", version, about = "Fixed-capacity backpack inventory manager")]
pub struct Cli {
    /// Do not wait for ENTER after each action
    #[arg(long)]
    pub no_pause: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "backpack=trace")
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            pause: !self.no_pause,
        }
    }
}

/// Settings the interactive shell honours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    /// Wait for a line of input after each action.
    pub pause: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { pause: true }
    }
}
