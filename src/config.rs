use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::models::Polygon;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub global: GlobalConfig,
    #[serde(default)]
    pub viewports: Vec<ViewportConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GlobalConfig {
    pub geofence_file: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Named query bounds, vertices as `[lat, lng]` pairs
#[derive(Debug, Deserialize, Clone)]
pub struct ViewportConfig {
    pub name: String,
    pub bounds: Vec<[f64; 2]>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Parse the configured log level
    pub fn log_level(&self) -> Result<Level> {
        self.global
            .log_level
            .parse::<Level>()
            .with_context(|| format!("Invalid log_level '{}'", self.global.log_level))
    }

    /// Resolve a named viewport into a validated polygon
    pub fn viewport(&self, name: &str) -> Result<Polygon> {
        let viewport = self
            .viewports
            .iter()
            .find(|v| v.name == name)
            .with_context(|| format!("Unknown viewport '{}'", name))?;

        let pairs: Vec<(f64, f64)> = viewport.bounds.iter().map(|&[lat, lng]| (lat, lng)).collect();
        Polygon::from_pairs(&pairs)
            .with_context(|| format!("Invalid bounds for viewport '{}'", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[global]
geofence_file = "fences.json"

[[viewports]]
name = "gulf"
bounds = [[35.0, -105.0], [35.0, -85.0], [15.0, -85.0], [15.0, -105.0]]

[[viewports]]
name = "broken"
bounds = [[0.0, 0.0], [1.0, 1.0]]
"#;

    fn sample() -> Config {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        Config::load_from_file(file.path()).unwrap()
    }

    #[test]
    fn test_load_defaults() {
        let config = sample();
        assert_eq!(config.global.geofence_file, PathBuf::from("fences.json"));
        assert_eq!(config.global.log_level, "info");
        assert_eq!(config.viewports.len(), 2);
    }

    #[test]
    fn test_log_level() {
        let mut config = sample();
        assert_eq!(config.log_level().unwrap(), Level::INFO);

        config.global.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);

        config.global.log_level = "verbose-ish".to_string();
        let err = config.log_level().unwrap_err();
        assert!(err.to_string().contains("Invalid log_level 'verbose-ish'"));
    }

    #[test]
    fn test_viewport_resolves() {
        let polygon = sample().viewport("gulf").unwrap();
        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon.points()[0].lat, 35.0);
        assert_eq!(polygon.points()[0].lng, -105.0);
    }

    #[test]
    fn test_viewport_errors() {
        let config = sample();
        assert!(config.viewport("missing").is_err());
        assert!(config.viewport("broken").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::load_from_file("/nonexistent/geofence.toml").is_err());
    }
}
