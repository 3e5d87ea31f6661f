//! cricket-stats - prints one analytical report as a text table.

use clap::Parser;
use cricket_stats::config::StatsConfig;
use cricket_stats::Report;
use std::io;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "cricket-stats")]
#[command(about = "Run cricket statistics queries")]
struct Cli {
    /// Report to run
    #[arg(value_enum)]
    report: Report,

    /// Path to the SQLite database (overrides the config file)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Config file path (defaults to cricket-stats.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = StatsConfig::resolve(cli.config.as_deref(), cli.db)?;
    tracing::debug!("Database: {:?}", config.database);

    let table = cli.report.run_at(&config.database)?;
    table.write_to(io::stdout().lock())?;
    Ok(())
}
