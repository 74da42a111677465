//! Calculator configuration
//!
//! Values come from defaults, then an optional YAML file, then command-line
//! flags, each layer overriding the previous one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::display::DEFAULT_MAX_LEN;
use crate::core::{CalcError, CalcResult, ERROR_MARKER};

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Logging disabled
    Off,
    /// Errors only
    Error,
    /// Errors and warnings (aborted calculations)
    #[default]
    Warn,
    /// Informational messages
    Info,
    /// Debug output
    Debug,
    /// Every key press
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Raises the level by `steps` (one per `-v`)
    #[must_use]
    pub const fn raised(self, steps: u8) -> Self {
        let mut level = self;
        let mut i = 0;
        while i < steps {
            level = match level {
                Self::Off => Self::Error,
                Self::Error => Self::Warn,
                Self::Warn => Self::Info,
                Self::Info => Self::Debug,
                Self::Debug | Self::Trace => Self::Trace,
            };
            i += 1;
        }
        level
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Display capacity in characters
    pub max_len: usize,
    /// Log verbosity
    pub log_level: LogLevel,
    /// Write logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            log_level: LogLevel::Warn,
            log_file: None,
        }
    }
}

impl CalcConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a YAML document; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> CalcResult<Self> {
        let config: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| CalcError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a YAML configuration file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml).map_err(|e| match e {
            CalcError::Config(msg) => CalcError::config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Set display capacity
    #[must_use]
    pub const fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set log level
    #[must_use]
    pub const fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Set log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Checks that the display can at least show the error marker
    pub fn validate(&self) -> CalcResult<()> {
        let min = ERROR_MARKER.chars().count();
        if self.max_len < min {
            return Err(CalcError::config(format!(
                "max_len must be at least {min}, got {}",
                self.max_len
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    mod log_level_tests {
        use super::*;

        #[test]
        fn test_default_level() {
            assert_eq!(LogLevel::default(), LogLevel::Warn);
        }

        #[test]
        fn test_as_filter() {
            assert_eq!(LogLevel::Off.as_filter(), "off");
            assert_eq!(LogLevel::Trace.as_filter(), "trace");
        }

        #[test]
        fn test_raised() {
            assert_eq!(LogLevel::Warn.raised(0), LogLevel::Warn);
            assert_eq!(LogLevel::Warn.raised(1), LogLevel::Info);
            assert_eq!(LogLevel::Warn.raised(2), LogLevel::Debug);
            assert_eq!(LogLevel::Warn.raised(10), LogLevel::Trace);
            assert_eq!(LogLevel::Off.raised(1), LogLevel::Error);
        }

        #[test]
        fn test_serialize() {
            let json = serde_json::to_string(&LogLevel::Debug).unwrap();
            assert_eq!(json, "\"debug\"");
        }

        #[test]
        fn test_deserialize() {
            let level: LogLevel = serde_json::from_str("\"trace\"").unwrap();
            assert_eq!(level, LogLevel::Trace);
        }
    }

    mod config_tests {
        use super::*;

        #[test]
        fn test_default_config() {
            let config = CalcConfig::new();
            assert_eq!(config.max_len, 15);
            assert_eq!(config.log_level, LogLevel::Warn);
            assert!(config.log_file.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_builders() {
            let config = CalcConfig::new()
                .with_max_len(20)
                .with_log_level(LogLevel::Trace)
                .with_log_file("/tmp/deskcalc.log");
            assert_eq!(config.max_len, 20);
            assert_eq!(config.log_level, LogLevel::Trace);
            assert_eq!(config.log_file, Some(PathBuf::from("/tmp/deskcalc.log")));
        }

        #[test]
        fn test_validate_rejects_tiny_display() {
            let err = CalcConfig::new().with_max_len(3).validate().unwrap_err();
            assert!(err.to_string().contains("at least 4"));
        }

        #[test]
        fn test_from_yaml_partial() {
            let config = CalcConfig::from_yaml("max_len: 12\n").unwrap();
            assert_eq!(config.max_len, 12);
            assert_eq!(config.log_level, LogLevel::Warn);
        }

        #[test]
        fn test_from_yaml_full() {
            let yaml = "max_len: 30\nlog_level: debug\nlog_file: calc.log\n";
            let config = CalcConfig::from_yaml(yaml).unwrap();
            assert_eq!(config.max_len, 30);
            assert_eq!(config.log_level, LogLevel::Debug);
            assert_eq!(config.log_file, Some(PathBuf::from("calc.log")));
        }

        #[test]
        fn test_from_yaml_invalid() {
            assert!(matches!(
                CalcConfig::from_yaml("max_len: lots\n"),
                Err(CalcError::Config(_))
            ));
            assert!(matches!(
                CalcConfig::from_yaml("max_len: 2\n"),
                Err(CalcError::Config(_))
            ));
        }

        #[test]
        fn test_load_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "max_len: 9").unwrap();
            let config = CalcConfig::load(file.path()).unwrap();
            assert_eq!(config.max_len, 9);
        }

        #[test]
        fn test_load_missing_file() {
            let dir = tempfile::tempdir().unwrap();
            let result = CalcConfig::load(&dir.path().join("missing.yaml"));
            assert!(matches!(result, Err(CalcError::Io(_))));
        }

        #[test]
        fn test_load_error_names_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "max_len: 1").unwrap();
            let err = CalcConfig::load(file.path()).unwrap_err();
            assert!(err
                .to_string()
                .contains(&file.path().display().to_string()));
        }

        #[test]
        fn test_serde_round_trip_json() {
            let config = CalcConfig::new().with_max_len(11);
            let json = serde_json::to_string(&config).unwrap();
            let back: CalcConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(config, back);
        }
    }
}
