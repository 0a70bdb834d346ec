//! Steam user data dashboard
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin steamdash                 # interactive terminal UI
//! cargo run --release --bin steamdash -- report       # JSON snapshot on stdout
//! cargo run --release --bin steamdash -- --data events.csv report --output charts.json
//! ```
//!
//! ## Environment Variables
//!
//! - STEAMDASH_DATA_PATH - Event log to load (default: steam-200k.csv)
//! - STEAMDASH_TICK_MS - UI poll interval in milliseconds (default: 250)
//! - RUST_LOG - Logging level (optional, default: info for report, warn for the UI)

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use steamdash::{
    dashboard::error_message,
    report::{save_snapshot, write_snapshot, ChartSnapshot},
    ui, Dashboard, DashboardConfig, DashboardError,
};

#[derive(Parser)]
#[command(name = "steamdash", version, about = "Steam user data dashboard")]
struct Cli {
    /// Event log CSV (overrides STEAMDASH_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive terminal dashboard (default)
    Tui {
        /// Keyboard poll interval in milliseconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        tick_ms: Option<u64>,
    },
    /// Compute every chart once and print a JSON snapshot
    Report {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui { tick_ms: None });

    // Keep the alternate screen clean unless RUST_LOG asks for more
    let default_level = match command {
        Commands::Tui { .. } => "warn",
        Commands::Report { .. } => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    match run(cli.data, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(data: Option<PathBuf>, command: Commands) -> Result<(), DashboardError> {
    let mut config = DashboardConfig::from_env()?;
    if let Some(path) = data {
        config.data_path = path;
    }

    log::info!("🚀 Starting steamdash");
    log::info!("   Data: {}", config.data_path.display());

    match command {
        Commands::Tui { tick_ms } => {
            if let Some(ms) = tick_ms {
                config.tick_ms = ms;
            }
            log::info!("   Tick: {}ms", config.tick_ms);

            let mut dashboard = Dashboard::new(config);
            ui::run_ui(&mut dashboard)?;
            log::info!("UI exited after {} refreshes", dashboard.refresh_count());
        }
        Commands::Report { output } => {
            let mut dashboard = Dashboard::new(config);
            let (table, charts) = dashboard.compute()?;
            let snapshot = ChartSnapshot::new(table.source(), table.len(), charts);

            match output {
                Some(path) => save_snapshot(&snapshot, &path)?,
                None => write_snapshot(&snapshot, std::io::stdout().lock())?,
            }
        }
    }

    Ok(())
}
