use std::io;

use anyhow::Context;
use clap::Parser;

use backpack::config::Cli;
use backpack::observability;
use backpack::shell::Shell;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    observability::init(&cli.log_level, cli.log_json);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), cli.shell_config());
    shell.run().context("interactive session failed")?;

    tracing::debug!(items = shell.inventory().len(), "session ended");
    Ok(())
}
