//! Login screen entry point.
//!
//! Loads the configuration, builds the [`CompositionRoot`], loads the login
//! screen once, and prints the resulting screen state as JSON on stdout.
//! Logs go to stderr so the JSON stays machine-readable.
//!
//! # Usage
//!
//! ```text
//! login-screen [OPTIONS]
//!
//! Options:
//!   --config <PATH>          TOML config file [default: platform config dir]
//!   --fetch-delay-ms <MS>    Override the simulated fetch latency
//! ```
//!
//! | Variable                      | Description                      |
//! |-------------------------------|----------------------------------|
//! | `LOGIN_SCREEN_CONFIG`         | Same as `--config`               |
//! | `LOGIN_SCREEN_FETCH_DELAY_MS` | Same as `--fetch-delay-ms`       |
//! | `RUST_LOG`                    | Overrides the configured log level |

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use login_screen::composition::CompositionRoot;
use login_screen::infrastructure::storage::config::{
    load_config, load_config_from, AppConfig, ConfigError,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Layered login screen demo.
#[derive(Debug, Parser)]
#[command(
    name = "login-screen",
    about = "Loads the login screen once and prints its state as JSON",
    version
)]
struct Cli {
    /// Path to the TOML configuration file.
    ///
    /// When omitted, the platform config directory is used; a missing file
    /// means defaults.
    #[arg(long, env = "LOGIN_SCREEN_CONFIG")]
    config: Option<PathBuf>,

    /// Simulated user-service latency in milliseconds.
    #[arg(long, env = "LOGIN_SCREEN_FETCH_DELAY_MS")]
    fetch_delay_ms: Option<u64>,
}

impl Cli {
    /// Resolves the effective [`AppConfig`]: file first, then CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn into_app_config(self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_from(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => match load_config() {
                Ok(cfg) => cfg,
                Err(ConfigError::NoPlatformConfigDir) => AppConfig::default(),
                Err(e) => return Err(e).context("failed to load platform config"),
            },
        };

        if let Some(ms) = self.fetch_delay_ms {
            config.service.fetch_delay_ms = ms;
        }
        Ok(config)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_app_config()?;

    // `RUST_LOG` wins; otherwise fall back to the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.app.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        fetch_delay_ms = config.service.fetch_delay_ms,
        "login screen starting"
    );

    let root = CompositionRoot::new(config);
    let mut controller = root.build_login_view_controller();
    controller.view_did_load().await;

    let snapshot = serde_json::to_string_pretty(&controller.snapshot())
        .context("failed to render screen snapshot")?;
    println!("{snapshot}");

    info!("login screen stopped");
    Ok(())
}
