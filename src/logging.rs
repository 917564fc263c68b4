// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! The filter comes from `--log`, then `AYUSH_HUB_LOG`, then
//! [`DEFAULT_FILTER`]. Directives use the `tracing-subscriber` `EnvFilter`
//! syntax, e.g. `ayush_hub=debug,wgpu=warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const ENV_LOG: &str = "AYUSH_HUB_LOG";

pub const DEFAULT_FILTER: &str = "ayush_hub=info";

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(cli_filter: Option<String>) {
    let directive = resolve_filter(cli_filter, std::env::var(ENV_LOG).ok());
    let (filter, invalid) = match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
    };

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        return;
    }

    if let Some(err) = invalid {
        tracing::warn!(%directive, %err, "invalid log filter, using default");
    }
}

/// Picks the first non-empty filter among the CLI and the environment.
fn resolve_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.into_iter()
        .chain(env)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_filter_wins() {
        let filter = resolve_filter(Some("debug".into()), Some("warn".into()));
        assert_eq!(filter, "debug");
    }

    #[test]
    fn env_filter_used_without_cli() {
        assert_eq!(resolve_filter(None, Some("warn".into())), "warn");
    }

    #[test]
    fn blank_values_fall_back_to_default() {
        assert_eq!(
            resolve_filter(Some(" ".into()), Some(String::new())),
            DEFAULT_FILTER
        );
    }

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
