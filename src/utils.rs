use std::{env, str::FromStr};

use tracing::Level;
use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Configure tracing with tracing_subscriber.
///
/// Unknown levels fall back to `INFO`.
pub fn configure_tracing(log_level: &str) {
    let level: Level = parse_level(log_level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout.with_max_level(level)))
        .init();
}

fn parse_level(log_level: &str) -> Level {
    Level::from_str(log_level).unwrap_or(Level::INFO)
}

/// Reads `name` from the environment, or `default` when unset or not unicode.
pub fn get_env_var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}

/// Interprets `true`, `1`, `yes` and `on` (any case) as set.
pub fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
