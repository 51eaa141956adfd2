//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制；lexvi-log 的记录经由
//! [`TracingSink`] 转发为 tracing 事件，统一由这里的过滤器与格式化器处理。

use crate::config::LogConfig;
use lexvi_config::Phase;
use lexvi_log::{Level, LogSink, Record};
use std::io;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
    Layer,
};

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 各阶段的过滤规则
pub fn targets(log_config: &LogConfig) -> Targets {
    [Phase::Lexer, Phase::Export, Phase::Cli]
        .into_iter()
        .fold(Targets::new().with_default(log_config.global), |targets, phase| {
            targets.with_target(phase.target(), log_config.level_for(phase))
        })
}

/// 使用指定格式初始化全局 subscriber，日志写到 stderr
pub fn init(log_config: &LogConfig, format: LogFormat) -> Result<(), TryInitError> {
    let layer = create_format_layer(format, io::stderr).with_filter(targets(log_config));
    tracing_subscriber::registry().with(layer).try_init()
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

/// 记录来源模块对应的阶段
pub fn phase_of(module: &str) -> Phase {
    if module.contains("::lexer") {
        Phase::Lexer
    } else if module.contains("::export") {
        Phase::Export
    } else {
        Phase::Cli
    }
}

/// tracing 的 target 与 level 必须是常量，按阶段和级别展开
macro_rules! emit {
    ($target:literal, $record:expr) => {
        match $record.level {
            Level::Trace => tracing::trace!(target: $target, module = $record.target, "{}", $record.message),
            Level::Debug => tracing::debug!(target: $target, module = $record.target, "{}", $record.message),
            Level::Info => tracing::info!(target: $target, module = $record.target, "{}", $record.message),
            Level::Warn => tracing::warn!(target: $target, module = $record.target, "{}", $record.message),
            Level::Error => tracing::error!(target: $target, module = $record.target, "{}", $record.message),
        }
    };
}

/// 把 lexvi-log 记录转发为 tracing 事件
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, record: &Record) {
        match phase_of(record.target) {
            Phase::Lexer => emit!("lexvi::lexer", record),
            Phase::Export => emit!("lexvi::export", record),
            Phase::Cli => emit!("lexvi::cli", record),
        }
    }
}
