use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use christmas_countdown::DEFAULT_INDENT;

/// Days-until-Christmas countdown renderer.
#[derive(Parser)]
#[command(
    name = "christmas-countdown",
    version,
    about = "Renders the days remaining until Christmas as large ASCII-art digits"
)]
struct Cli {
    /// Calculation start date in YYYY-MM-DD format (defaults to today;
    /// invalid values fall back to today).
    #[arg(short, long)]
    start: Option<String>,

    /// Number of spaces to indent every output line.
    #[arg(short, long, default_value_t = DEFAULT_INDENT)]
    indent: usize,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    christmas_countdown::get_days(cli.start.as_deref(), cli.indent)?;
    Ok(())
}

/// Initialize tracing based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides the CLI flag if set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("christmas_countdown={level}")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
