//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works with no config file.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds. Time-based state is
    /// checked on each tick, so this bounds auto-increment latency.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Show the keybinding hint line at the bottom.
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_hints: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BehaviorConfig {
    /// Which view is active on startup.
    #[serde(default)]
    pub start_tab: StartTab,
}

/// Startup view, as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartTab {
    #[default]
    Counter,
    Todos,
    Hooks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Log filter directive, e.g. "info" or "hooklab=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parses_to_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.tick_rate_ms, 50);
        assert!(cfg.ui.show_hints);
        assert_eq!(cfg.behavior.start_tab, StartTab::Counter);
        assert!(cfg.logging.enabled);
    }

    #[test]
    fn test_partial_config_fills_missing_fields() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [behavior]
            start_tab = "todos"

            [ui]
            tick_rate_ms = 100
            "#,
        )
        .unwrap();
        assert_eq!(cfg.behavior.start_tab, StartTab::Todos);
        assert_eq!(cfg.ui.tick_rate_ms, 100);
        assert!(cfg.ui.show_hints);
    }

    #[test]
    fn test_config_round_trips() {
        let cfg = AppConfig::default();
        let s = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&s).unwrap();
        assert_eq!(back.ui.tick_rate_ms, cfg.ui.tick_rate_ms);
        assert_eq!(back.behavior.start_tab, cfg.behavior.start_tab);
    }
}
