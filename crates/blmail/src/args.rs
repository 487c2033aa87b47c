use camino::Utf8PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct GlobalArgs {
    /// Only log errors.
    #[arg(global = true, long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Use verbose output (repeat for more).
    #[arg(global = true, action = clap::ArgAction::Count, long, short, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Also write logs to this file.
    #[arg(global = true, long, value_name = "PATH")]
    pub log_file: Option<Utf8PathBuf>,

    /// Extra settings file; project `blmail.toml` files still take precedence.
    #[arg(global = true, long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}
