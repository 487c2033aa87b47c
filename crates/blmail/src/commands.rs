mod check;
mod render;

use anyhow::Context;
use anyhow::Result;
use blmail_conf::Settings;
use camino::Utf8PathBuf;
use clap::Subcommand;

use crate::args::Args;
use crate::exit::Exit;

pub trait Command {
    fn execute(&self, args: &Args) -> Result<Exit>;
}

#[derive(Debug, Subcommand)]
pub enum BlmailCommand {
    /// Validate BaseLinker e-mail templates
    Check(self::check::Check),
    /// Generate a validated template for one market
    Render(self::render::Render),
}

impl Command for BlmailCommand {
    fn execute(&self, args: &Args) -> Result<Exit> {
        match self {
            BlmailCommand::Check(cmd) => cmd.execute(args),
            BlmailCommand::Render(cmd) => cmd.execute(args),
        }
    }
}

/// Settings for the project rooted at the current directory.
fn load_settings(args: &Args) -> Result<Settings> {
    let project_root = resolve_project_root()?;
    Settings::new(&project_root, args.global.config.as_deref()).context("Failed to load settings")
}

fn resolve_project_root() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|_| anyhow::anyhow!("Current directory is not valid UTF-8"))
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
