mod api;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod format;
mod logging;
mod panels;
mod pretty;
mod session;
mod ui;
mod workers;

use crate::config::{Config, Overrides, Settings, get_config_path};
use crate::consts::dashboard_consts::refresh::{dashboard_interval, regime_interval};
use crate::environment::Environment;
use crate::panels::calendar::Impact;
use crate::pretty::{print_cmd_error, print_cmd_info};
use crate::session::{
    DashboardKind, run_headless_mode, run_once, run_tui_mode, setup_session,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for the macro API
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the full dashboard
    Start {
        /// Run without the terminal UI, printing panels and events to stdout
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Base URL of the macro API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Seconds between scheduled refreshes
        #[arg(long, value_name = "SECONDS")]
        interval_secs: Option<u64>,

        /// Calendar horizon in days
        #[arg(long, value_name = "DAYS")]
        days_ahead: Option<u32>,

        /// Only show calendar events of this impact (low, medium, high)
        #[arg(long, value_name = "IMPACT")]
        impact_filter: Option<Impact>,

        /// Neutral band of the sentiment grid
        #[arg(long, value_name = "EPSILON")]
        sentiment_epsilon: Option<f64>,

        /// Enable background colors
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Show the macro regime panel alone, refreshed every 30 minutes
    Regime {
        /// Run without the terminal UI, printing the panel to stdout
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Base URL of the macro API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Refresh every panel once and print the result
    Once {
        /// Base URL of the macro API
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },
    /// Delete the configuration file
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("MACRO_DASHBOARD_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            api_url,
            interval_secs,
            days_ahead,
            impact_filter,
            sentiment_epsilon,
            with_background,
        } => {
            let overrides = Overrides {
                api_url,
                refresh_interval_secs: interval_secs,
                calendar_days_ahead: days_ahead,
                calendar_impact_filter: impact_filter,
                sentiment_epsilon,
            };
            let settings =
                load_settings(&config_path, &overrides, environment, DashboardKind::Full)?;
            let session = setup_session(DashboardKind::Full, settings).await?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Regime { headless, api_url } => {
            let overrides = Overrides {
                api_url,
                ..Overrides::default()
            };
            let settings =
                load_settings(&config_path, &overrides, environment, DashboardKind::Regime)?;
            let session = setup_session(DashboardKind::Regime, settings).await?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, false).await
            }
        }
        Command::Once { api_url } => {
            let overrides = Overrides {
                api_url,
                ..Overrides::default()
            };
            let settings =
                load_settings(&config_path, &overrides, environment, DashboardKind::Full)?;
            run_once(settings).await
        }
        Command::ResetConfig => {
            print_cmd_info!(
                "Resetting configuration",
                "Deleting {}",
                config_path.display()
            );
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Resolves the settings of a session from the config file, CLI overrides and
/// the environment.
fn load_settings(
    config_path: &Path,
    overrides: &Overrides,
    environment: Environment,
    kind: DashboardKind,
) -> Result<Settings, Box<dyn Error>> {
    let mut config = Config::load_or_default(config_path).map_err(|e| {
        print_cmd_error!("Invalid configuration", "{}: {}", config_path.display(), e);
        e
    })?;

    let default_interval = match kind {
        DashboardKind::Full => dashboard_interval(),
        DashboardKind::Regime => {
            // The configured interval belongs to the full dashboard
            config.refresh_interval_secs = None;
            regime_interval()
        }
    };

    Settings::resolve(&config, overrides, environment, default_interval).map_err(Into::into)
}
