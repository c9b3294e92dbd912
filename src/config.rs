//! Optional on-disk configuration. Everything has a default; a missing file
//! is not an error and a broken file degrades to defaults with a warning.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// View to open on startup, by menu title. Unknown names are rejected at
    /// startup with a warning and the default view is kept.
    pub start_view: Option<String>,
    /// Pause before revealing the canned assistant reply, in milliseconds.
    /// Zero disables the pause entirely.
    pub reply_delay_ms: u64,
    /// Pause per simulated progress percent.
    pub simulation_tick_ms: u64,
    pub search_delay_ms: u64,
    pub optimization_delay_ms: u64,
    pub report_delay_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            start_view: None,
            reply_delay_ms: 900,
            simulation_tick_ms: 20,
            search_delay_ms: 1000,
            optimization_delay_ms: 2000,
            report_delay_ms: 2000,
            window_width: 1280.0,
            window_height: 800.0,
        }
    }
}

impl AppConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn simulation_tick(&self) -> Duration {
        Duration::from_millis(self.simulation_tick_ms)
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn optimization_delay(&self) -> Duration {
        Duration::from_millis(self.optimization_delay_ms)
    }

    pub fn report_delay(&self) -> Duration {
        Duration::from_millis(self.report_delay_ms)
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".railpilot").join("config.toml"))
}

fn parse(raw: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(raw)
}

/// Loads the configuration, reporting problems as warnings rather than
/// failing startup.
pub fn load() -> (AppConfig, Vec<String>) {
    let mut warnings = Vec::new();

    let Some(path) = config_path() else {
        warnings.push("home directory not resolvable; using default configuration".to_string());
        return (AppConfig::default(), warnings);
    };

    if !path.exists() {
        return (AppConfig::default(), warnings);
    }

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            warnings.push(format!("failed to read {}: {err}", path.display()));
            return (AppConfig::default(), warnings);
        }
    };

    match parse(&raw) {
        Ok(config) => (config, warnings),
        Err(err) => {
            warnings.push(format!("failed to parse {}: {err}", path.display()));
            (AppConfig::default(), warnings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, AppConfig};

    #[test]
    fn empty_file_is_the_default_configuration() {
        let config = parse("").expect("empty config should parse");
        assert_eq!(config.reply_delay_ms, AppConfig::default().reply_delay_ms);
        assert_eq!(config.window_width, AppConfig::default().window_width);
    }

    #[test]
    fn partial_file_keeps_defaults_for_omitted_fields() {
        let config = parse("reply_delay_ms = 0\nwindow_width = 1600.0\n")
            .expect("partial config should parse");
        assert_eq!(config.reply_delay_ms, 0);
        assert_eq!(config.window_width, 1600.0);
        assert_eq!(
            config.simulation_tick_ms,
            AppConfig::default().simulation_tick_ms
        );
    }

    #[test]
    fn start_view_is_optional_and_passed_through() {
        let config = parse("start_view = \"Network Visualization\"")
            .expect("config with start_view should parse");
        assert_eq!(config.start_view.as_deref(), Some("Network Visualization"));
        assert!(AppConfig::default().start_view.is_none());
    }

    #[test]
    fn malformed_file_reports_a_parse_error() {
        assert!(parse("reply_delay_ms = \"soon\"").is_err());
    }

    #[test]
    fn zero_delay_maps_to_zero_duration() {
        let config = parse("reply_delay_ms = 0").expect("config should parse");
        assert!(config.reply_delay().is_zero());
    }
}
