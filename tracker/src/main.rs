//! Fitness Tracker
//!
//! Builds the tracker state, then prints the dashboard summary (or the raw
//! state snapshot) for one day as JSON on stdout. Logs go to stderr.

use anyhow::Result;
use fitness_tracker::{
    clock::Environment, config, state::AppState, summary::DashboardSummary,
};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = config::AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Fitness Tracker"
    );

    validate_config(&config)?;

    let env = Environment::system();
    let state = if config.tracker.seed_data {
        AppState::seeded(env)
    } else {
        AppState::new(env)
    };

    let today = config.tracker.today.unwrap_or_else(|| state.env().today());

    let output = match config.tracker.output {
        config::OutputKind::Summary => {
            serde_json::to_string_pretty(&DashboardSummary::build(&state, today, &config.tracker))?
        }
        config::OutputKind::Snapshot => serde_json::to_string_pretty(&state.snapshot())?,
    };
    println!("{output}");

    info!(date = %today, output = ?config.tracker.output, "Done");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitness_tracker=info".into()
        } else {
            "fitness_tracker=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

/// Reject settings that would produce a meaningless summary
fn validate_config(config: &config::AppConfig) -> Result<()> {
    let mut errors = Vec::new();

    if config.tracker.recent_workouts == 0 {
        errors.push("tracker.recent_workouts must be at least 1");
    }

    if config.tracker.water_glasses_target == 0 {
        warn!("Water target is 0 - hydration percent will always be 0");
    }

    if config::AppConfig::is_production() && config.tracker.seed_data {
        warn!("Sample data is enabled in production - ensure this is intentional");
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid tracker configuration");
    }

    Ok(())
}
