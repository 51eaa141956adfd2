//! lexvi-log - 结构化日志系统
//!
//! 为 LexVi 词法分析器设计的日志系统，特点：
//! - **显式传递**：无全局 logger，组件通过 `Arc<Logger>` 接收日志器
//! - **惰性格式化**：级别未启用时不格式化消息
//! - **可回放**：环形缓冲区保留最后 N 条记录，测试中可直接断言日志内容
//!
//! # 快速开始
//!
//! ```
//! use lexvi_log::{debug, Level, LogRingBuffer, Logger};
//!
//! let ring = LogRingBuffer::new(100);
//! let logger = Logger::new(Level::Debug).with_sink(ring.clone());
//! debug!(logger, "scanned {} tokens", 3);
//!
//! assert_eq!(ring.len(), 1);
//! ```
//!
//! 输出到文件时使用 [`FileSink`]（追加写入，每条记录一行）：
//!
//! ```no_run
//! use lexvi_log::{warn, FileSink, Level, Logger};
//!
//! let logger = Logger::new(Level::Warn).with_sink(FileSink::new("lexvi.log")?);
//! warn!(logger, "Unrecognized token: {}", '@');
//! # Ok::<(), lexvi_log::Error>(())
//! ```

mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use logger::{FileSink, LogSink, Logger};
pub use record::{Level, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};

/// 日志结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// 日志系统错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 无法识别的日志级别名称
    #[error("Unknown log level '{0}'")]
    UnknownLevel(String),

    /// 文件输出打开失败
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
