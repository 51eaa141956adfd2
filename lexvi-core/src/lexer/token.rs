//! Token 定义

use super::position::SourcePosition;
use serde::Serialize;
use std::fmt;

/// Token 类别
///
/// `Comment` 与 `Whitespace` 会被识别但不会出现在输出序列中；
/// `Error` 只用于报告，扫描过程不会构造该类别的 token。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Float,
    String,
    Operator,
    Delimiter,
    Comment,
    Whitespace,
    Error,
}

impl TokenKind {
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Operator,
        TokenKind::Delimiter,
        TokenKind::Comment,
        TokenKind::Whitespace,
        TokenKind::Error,
    ];

    /// 稳定的大写名称，用于表格与导出
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Error => "ERROR",
        }
    }

    /// 匹配后是否被丢弃（不产生 token）
    pub const fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Whitespace)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 词法单元
///
/// `text` 是源码的原样切片；`line`/`column` 指向首字符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub line: usize,
    pub column: usize,
    /// 首字符的字节偏移
    #[serde(skip)]
    pub offset: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, start: SourcePosition) -> Self {
        Self {
            kind,
            text,
            line: start.line,
            column: start.column,
            offset: start.offset,
        }
    }

    pub fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column, self.offset)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {:?}, line={}, column={})",
            self.kind, self.text, self.line, self.column
        )
    }
}
