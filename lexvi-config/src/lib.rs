//! LexVi Config - Pure configuration data structures
//!
//! This crate contains only data structures and JSON loading, no global state.
//! It serves as the shared configuration vocabulary across all LexVi crates.
//!
//! A configuration file looks like:
//!
//! ```json
//! {
//!   "logging": { "level": "info", "lexer": "trace" },
//!   "export": { "format": "csv", "delimiter": ";", "header": true }
//! }
//! ```
//!
//! Every field is optional; missing fields take their `Default`.

use serde::Deserialize;
use std::path::Path;

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexviConfig {
    pub logging: LoggingConfig,
    pub export: ExportConfig,
}

/// Log level names accepted in configuration files
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Global default level
    pub level: LogLevel,
    /// Lexer level (None means use `level`)
    pub lexer: Option<LogLevel>,
    /// Export level (None means use `level`)
    pub export: Option<LogLevel>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            lexer: None,
            export: None,
        }
    }
}

impl LoggingConfig {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Lexer => self.lexer,
            Phase::Export => self.export,
            Phase::Cli => None,
        };
        specific.unwrap_or(self.level)
    }
}

/// Output format of the token listing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Aligned columns for terminals
    #[default]
    Table,
    /// Delimited text: kind, text, line, column
    Csv,
    /// JSON array of token objects
    Json,
    /// Token-by-token analysis report
    Report,
    /// Classifier state diagram in Graphviz DOT
    Dot,
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub format: ExportFormat,
    /// Field separator for CSV output
    pub delimiter: char,
    /// Whether CSV output starts with a header row
    pub header: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Table,
            delimiter: ',',
            header: true,
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(ConfigError::Invalid(format!(
                "{:?} cannot be used as a CSV delimiter",
                self.delimiter
            )));
        }
        Ok(())
    }
}

impl LexviConfig {
    /// Parse configuration from a JSON string
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: LexviConfig = serde_json::from_str(text)?;
        config.export.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// Processing phase, used for phase-specific log levels and targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Export,
    Cli,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Export => "export",
            Phase::Cli => "cli",
        }
    }

    /// Log target name for this phase
    pub fn target(&self) -> String {
        format!("lexvi::{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = LexviConfig::default();
        assert_eq!(cfg.logging.level, LogLevel::Warn);
        assert_eq!(cfg.export.format, ExportFormat::Table);
        assert_eq!(cfg.export.delimiter, ',');
        assert!(cfg.export.header);
    }

    #[test]
    fn test_empty_object_is_default() {
        let cfg = LexviConfig::from_json("{}").unwrap();
        assert_eq!(cfg, LexviConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let cfg = LexviConfig::from_json(
            r#"{ "logging": { "lexer": "trace" }, "export": { "format": "json" } }"#,
        )
        .unwrap();

        assert_eq!(cfg.logging.level_for(Phase::Lexer), LogLevel::Trace);
        assert_eq!(cfg.logging.level_for(Phase::Export), LogLevel::Warn);
        assert_eq!(cfg.export.format, ExportFormat::Json);
        assert!(cfg.export.header);
    }

    #[test]
    fn test_dot_format() {
        let cfg = LexviConfig::from_json(r#"{ "export": { "format": "dot" } }"#).unwrap();
        assert_eq!(cfg.export.format, ExportFormat::Dot);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = LexviConfig::from_json(r#"{ "theme": "dark" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_delimiter() {
        let err = LexviConfig::from_json(r#"{ "export": { "delimiter": "\"" } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = LexviConfig::load(Path::new("/nonexistent/lexvi.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lexvi.json"));
    }

    #[test]
    fn test_phase_target() {
        assert_eq!(Phase::Lexer.as_str(), "lexer");
        assert_eq!(Phase::Export.target(), "lexvi::export");
    }
}
