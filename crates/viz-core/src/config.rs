// File: crates/viz-core/src/config.rs
// Summary: Render configuration loaded from TOML, with environment and CLI overrides.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Png,
    Both,
}

impl OutputFormat {
    pub fn svg(self) -> bool { matches!(self, OutputFormat::Svg | OutputFormat::Both) }
    pub fn png(self) -> bool { matches!(self, OutputFormat::Png | OutputFormat::Both) }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "both" => Ok(OutputFormat::Both),
            other => Err(format!("unknown output format '{other}' (expected svg, png or both)")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Country drawn when none is requested; falls back to the first location.
    pub default_country: String,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self { default_country: "AUS".to_string() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarsConfig {
    /// First labelled year on the x axis.
    pub tick_start: i32,
    /// Exclusive end of the labelled years.
    pub tick_end: i32,
    pub bar_width: f32,
    /// Overlay the least-squares fit of viewers over seasons.
    pub show_regression: bool,
}

impl Default for BarsConfig {
    fn default() -> Self {
        Self { tick_start: 1990, tick_end: 2015, bar_width: 20.0, show_regression: false }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub theme: String,
    pub out_dir: PathBuf,
    pub format: OutputFormat,
    pub raster_scale: f32,
    pub scatter: ScatterConfig,
    pub bars: BarsConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            out_dir: PathBuf::from("target/out"),
            format: OutputFormat::Svg,
            raster_scale: 1.0,
            scatter: ScatterConfig::default(),
            bars: BarsConfig::default(),
        }
    }
}

impl VizConfig {
    /// Load configuration from a TOML file; absent keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        let config: Self = toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.display().to_string(), source })?;
        config.validate()?;
        Ok(config)
    }

    /// Override from `VIZ_THEME`, `VIZ_OUT_DIR` and `VIZ_FORMAT` when set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(theme) = std::env::var("VIZ_THEME") {
            self.theme = theme;
        }
        if let Ok(dir) = std::env::var("VIZ_OUT_DIR") {
            self.out_dir = PathBuf::from(dir);
        }
        if let Ok(format) = std::env::var("VIZ_FORMAT") {
            self.format = format.parse().map_err(ConfigError::Invalid)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.raster_scale > 0.0) {
            return Err(ConfigError::Invalid(format!("raster_scale must be positive, got {}", self.raster_scale)));
        }
        if self.bars.tick_end <= self.bars.tick_start {
            return Err(ConfigError::Invalid(format!(
                "bars.tick_end ({}) must exceed bars.tick_start ({})",
                self.bars.tick_end, self.bars.tick_start
            )));
        }
        if !(self.bars.bar_width > 0.0) {
            return Err(ConfigError::Invalid(format!("bars.bar_width must be positive, got {}", self.bars.bar_width)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"dark\"\nformat = \"both\"\n[bars]\nshow_regression = true").unwrap();
        let cfg = VizConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.theme, "dark");
        assert_eq!(cfg.format, OutputFormat::Both);
        assert!(cfg.bars.show_regression);
        assert_eq!(cfg.bars.tick_start, 1990);
        assert_eq!(cfg.scatter.default_country, "AUS");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[bars]\ntick_start = 2000\ntick_end = 1990").unwrap();
        assert!(matches!(VizConfig::from_file(file.path()), Err(ConfigError::Invalid(_))));
        assert!("gif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn bundled_sample_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../viz.toml");
        let cfg = VizConfig::from_file(path).unwrap();
        assert_eq!(cfg.format, OutputFormat::Both);
        assert_eq!(cfg.raster_scale, 2.0);
    }
}
