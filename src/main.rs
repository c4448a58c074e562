use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soreness_tracker::cli::CliAction;
use soreness_tracker::client::SorenessClient;
use soreness_tracker::config::{self, TrackerConfig};
use soreness_tracker::models::{BodyZone, SelectionSession, SorenessLevel};
use soreness_tracker::tracker::{SorenessTracker, SubmitError, SubmitOptions};
use soreness_tracker::views::{body_map, logged_muscles, region_selector};

#[derive(Parser)]
#[command(name = "soreness")]
#[command(about = "Log muscle soreness by full body, side, region or muscle")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a soreness entry from actions and submit it
    Log {
        /// Actions applied in order: all, all=N, front, back=N,
        /// region:core=N, chest, chest=N, rm:chest, clear
        #[arg(value_name = "ACTION", required = true)]
        actions: Vec<CliAction>,

        /// Day the soreness applies to (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Free-form notes attached to every row
        #[arg(long)]
        notes: Option<String>,

        /// Rate of perceived exertion of the last workout
        #[arg(long)]
        rpe: Option<f32>,

        /// Print the entry and the requests without sending them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show which muscles each body zone contains
    Zones,
    /// Show the soreness scale
    Levels,
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init,
}

/// Initialize tracing on stderr so stdout only carries rendered output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "soreness_tracker=info,soreness_core=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Log {
            actions,
            date,
            notes,
            rpe,
            dry_run,
        } => {
            let config = TrackerConfig::load();
            let client = SorenessClient::from_config(&config);
            tracing::debug!("Using soreness API at {}", client.base_url());

            let session = SelectionSession::with_full_body_default(config.full_body_default_level);
            let mut tracker = SorenessTracker::with_session(client, session).on_success(|logs| {
                tracing::info!("Soreness entry saved ({} rows)", logs.len());
            });

            for action in actions {
                for step in action.to_actions(tracker.session()) {
                    tracker
                        .apply(step)
                        .with_context(|| format!("Could not apply {:?}", step))?;
                }
            }

            println!("{}", body_map::render(tracker.session()));
            println!("{}", region_selector::render(tracker.session()));
            print!("{}", logged_muscles::render(tracker.session()));

            let options = SubmitOptions {
                log_date: date,
                notes,
                rpe,
            };

            if dry_run {
                let requests = tracker.build_requests(options)?;
                println!("\nDry run: {} requests", requests.len());
                println!("{}", serde_json::to_string_pretty(&requests)?);
                return Ok(());
            }

            match tracker.submit(options).await {
                Ok(logs) => println!("\nLogged {} muscles", logs.len()),
                Err(SubmitError::Failed {
                    failures,
                    succeeded,
                }) => {
                    for (muscle, e) in &failures {
                        eprintln!("  {}: {}", muscle, e);
                    }
                    anyhow::bail!(
                        "Failed to log {} muscles ({} created); run again to retry",
                        failures.len(),
                        succeeded
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Zones => {
            for zone in BodyZone::ALL {
                let muscles: Vec<&str> = zone.muscles().iter().map(|m| m.as_str()).collect();
                println!("{:<16} {}", zone.as_str(), muscles.join(", "));
            }
        }
        Commands::Levels => {
            for level in SorenessLevel::all() {
                println!("{} {}", level, level.label());
            }
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let mut config = TrackerConfig::load();
                if config.api_key.is_some() {
                    config.api_key = Some("********".to_string());
                }
                println!("{}", serde_json::to_string_pretty(&config)?);
                if let Ok(path) = config::get_config_path() {
                    println!("# {}", path.display());
                }
            }
            ConfigCommands::Init => {
                let path = TrackerConfig::default().save()?;
                println!("Wrote default config to {}", path.display());
            }
        },
    }

    Ok(())
}
