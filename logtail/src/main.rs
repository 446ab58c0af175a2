mod check;

use clap::{Parser, Subcommand};
use logtail_core::conf::LogTailConfig;
use logtail_core::logging::{self, init_logging};
use logtail_core::server;
use std::path::PathBuf;

const DEFAULT_CONFIG: &str = "config/logtail.toml";

#[derive(Parser, Debug)]
#[command(
    name = "logtail",
    version,
    about = "LogTail: serve the tail of a log file over HTTP"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the LogTail server (default)
    Run {
        /// Path to the LogTail config file
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },

    /// Validate a config file and print a summary
    Check {
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Check { config }) => check::check(&config),
        Some(Command::Run { config }) => run(config),
        None => run(PathBuf::from(DEFAULT_CONFIG)),
    }
}

fn run(config: PathBuf) -> anyhow::Result<()> {
    init_logging(logging::default_log_mode());

    let cfg = LogTailConfig::from_file(&config).inspect_err(|err| {
        tracing::error!(error = %err, config = %config.display(), "failed to load config");
    })?;

    server::run(cfg)
}
