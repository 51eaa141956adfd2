//! CLI 配置
//!
//! 把配置文件中的日志设置与命令行参数合并为 tracing 过滤级别。

use lexvi_config::{LogLevel, LoggingConfig, Phase};
use tracing::Level;

/// CLI 日志配置（各阶段已解析出的级别）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Level,
    pub export: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_logging(&LoggingConfig::default())
    }
}

impl LogConfig {
    pub fn from_logging(logging: &LoggingConfig) -> Self {
        Self {
            global: to_tracing_level(logging.level_for(Phase::Cli)),
            lexer: to_tracing_level(logging.level_for(Phase::Lexer)),
            export: to_tracing_level(logging.level_for(Phase::Export)),
        }
    }

    /// `--log-level` 覆盖所有阶段
    pub fn with_override(self, level: Option<LogLevel>) -> Self {
        match level {
            Some(level) => {
                let level = to_tracing_level(level);
                Self {
                    global: level,
                    lexer: level,
                    export: level,
                }
            }
            None => self,
        }
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        match phase {
            Phase::Lexer => self.lexer,
            Phase::Export => self.export,
            Phase::Cli => self.global,
        }
    }

    /// 所有阶段中最详细的级别，作为 lexvi-log 的前置过滤
    pub fn most_verbose(&self) -> lexvi_log::Level {
        to_log_level(self.global.max(self.lexer).max(self.export))
    }
}

/// Parse log level string (`silent` means errors only)
pub fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    let level: lexvi_log::Level = s.parse().map_err(|e: lexvi_log::Error| e.to_string())?;
    Ok(match level {
        lexvi_log::Level::Trace => LogLevel::Trace,
        lexvi_log::Level::Debug => LogLevel::Debug,
        lexvi_log::Level::Info => LogLevel::Info,
        lexvi_log::Level::Warn => LogLevel::Warn,
        lexvi_log::Level::Error => LogLevel::Error,
    })
}

fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

fn to_log_level(level: Level) -> lexvi_log::Level {
    if level == Level::TRACE {
        lexvi_log::Level::Trace
    } else if level == Level::DEBUG {
        lexvi_log::Level::Debug
    } else if level == Level::INFO {
        lexvi_log::Level::Info
    } else if level == Level::WARN {
        lexvi_log::Level::Warn
    } else {
        lexvi_log::Level::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_warn() {
        let config = LogConfig::default();
        assert_eq!(config.global, Level::WARN);
        assert_eq!(config.level_for(Phase::Lexer), Level::WARN);
    }

    #[test]
    fn test_phase_levels() {
        let logging = LoggingConfig {
            level: LogLevel::Error,
            lexer: Some(LogLevel::Trace),
            export: None,
        };
        let config = LogConfig::from_logging(&logging);
        assert_eq!(config.level_for(Phase::Lexer), Level::TRACE);
        assert_eq!(config.level_for(Phase::Export), Level::ERROR);
        assert_eq!(config.most_verbose(), lexvi_log::Level::Trace);
    }

    #[test]
    fn test_override_replaces_phase_levels() {
        let logging = LoggingConfig {
            level: LogLevel::Warn,
            lexer: Some(LogLevel::Trace),
            export: Some(LogLevel::Debug),
        };
        let config = LogConfig::from_logging(&logging).with_override(Some(LogLevel::Info));
        assert_eq!(config.level_for(Phase::Lexer), Level::INFO);
        assert_eq!(config.level_for(Phase::Export), Level::INFO);
        assert_eq!(config.most_verbose(), lexvi_log::Level::Info);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("trace"), Ok(LogLevel::Trace));
        assert_eq!(parse_log_level("WARNING"), Ok(LogLevel::Warn));
        assert_eq!(parse_log_level("silent"), Ok(LogLevel::Error));
        assert!(parse_log_level("loud").unwrap_err().contains("loud"));
    }
}
