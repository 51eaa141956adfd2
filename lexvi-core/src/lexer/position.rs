//! 源代码位置追踪
//!
//! - line/column: 人类可读的显示位置（1-based，列按 Unicode 码点计数）
//! - offset: 字节偏移（0-based），用于切片和编辑器高亮

use serde::Serialize;

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
    #[serde(skip)]
    pub offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self::new(1, 1, 0)
    }

    /// 越过一段已匹配的文本
    ///
    /// 文本含换行时：行号增加换行数，列号重置为最后一个换行之后的字符数 + 1；
    /// 否则列号增加文本的字符数。
    pub fn advance_over(&mut self, text: &str) {
        self.offset += text.len();
        match text.rfind('\n') {
            Some(last_newline) => {
                self.line += text.matches('\n').count();
                self.column = text[last_newline + 1..].chars().count() + 1;
            }
            None => self.column += text.chars().count(),
        }
    }

    /// 越过一个无法识别的字符
    ///
    /// 只增加列号，即使该字符是换行符。
    pub fn skip_unmatched(&mut self, c: char) {
        self.offset += c.len_utf8();
        self.column += 1;
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
