use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::Path;
use tracing::debug;
pub mod models;
pub use models::*;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "HOTELIER";

/// Loads configuration from `./config/default`, `./config/{RUN_ENV}` and the environment.
///
/// Environment variables follow `HOTELIER__SECTION__KEY`, e.g. `HOTELIER__SERVER__PORT=9000`.
/// The prefix can be replaced through the `PREFIX` variable.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    load_config_from(Path::new("config"), &run_env)
}

/// Loads configuration from an explicit directory and run environment name.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, ConfigError> {
    let prefix = env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);
    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .separator("__")
                .try_parsing(true),
        );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

/// Rejects settings the calendar cannot run with.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let calendar = &config.calendar;
    for (name, value) in [
        ("weekend_booking_probability", calendar.weekend_booking_probability),
        ("weekday_booking_probability", calendar.weekday_booking_probability),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::Message(format!(
                "calendar.{name} must be between 0 and 1, got {value}"
            )));
        }
    }
    if calendar.simulation_window_days == 0 {
        return Err(ConfigError::Message(
            "calendar.simulation_window_days must be positive".to_string(),
        ));
    }
    if calendar.session_idle_secs == 0 {
        return Err(ConfigError::Message(
            "calendar.session_idle_secs must be positive".to_string(),
        ));
    }
    if !calendar.booking_route.starts_with('/') {
        return Err(ConfigError::Message(format!(
            "calendar.booking_route must be an absolute path, got {}",
            calendar.booking_route
        )));
    }
    Ok(())
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The path comes from `DOTENV_OVERRIDE`, then from a first command line argument
/// starting with `.env`, and defaults to `.env`. Loading happens at most once.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
