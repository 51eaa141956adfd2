//! 扫描错误类型
//!
//! 只有一种错误：无法识别的字符。错误不会中断扫描，而是逐个累积。

use super::position::SourcePosition;
use serde::Serialize;

/// 错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// 没有任何规则在该字符处匹配
    UnrecognizedCharacter(char),
}

/// 扫描错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("[{line}:{column}] {message}")]
pub struct ScanError {
    #[serde(skip)]
    pub kind: ScanErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    #[serde(skip)]
    pub offset: usize,
}

impl ScanError {
    /// 在指定位置创建“无法识别的字符”错误
    pub fn unrecognized(c: char, position: SourcePosition) -> Self {
        Self {
            kind: ScanErrorKind::UnrecognizedCharacter(c),
            message: format!("Unrecognized token: {c}"),
            line: position.line,
            column: position.column,
            offset: position.offset,
        }
    }

    /// 出错的字符
    pub fn character(&self) -> char {
        match self.kind {
            ScanErrorKind::UnrecognizedCharacter(c) => c,
        }
    }

    pub fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column, self.offset)
    }
}
