use anyhow::Result;
use clap::Parser;

use crate::args::Args;
use crate::commands::BlmailCommand;
use crate::commands::Command;
use crate::exit::Exit;
use crate::logging;

/// Generate and validate BaseLinker order e-mail templates.
#[derive(Parser, Debug)]
#[command(name = "blmail")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: BlmailCommand,

    #[command(flatten)]
    pub args: Args,
}

/// Parse CLI arguments and execute the chosen command.
pub fn run(args: Vec<String>) -> Result<Exit> {
    let cli = Cli::try_parse_from(args).unwrap_or_else(|e| {
        e.exit();
    });

    let _guard = logging::init_logging(&cli.args.global)?;
    tracing::debug!(command = ?cli.command, "starting");

    cli.command.execute(&cli.args)
}
