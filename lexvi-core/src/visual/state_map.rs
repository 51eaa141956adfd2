//! Token 类别到分类器状态的映射
//!
//! 映射属于展示层，由调用方显式传入，扫描器不依赖它。

use crate::lexer::TokenKind;
use std::collections::HashMap;
use std::fmt;

/// 分类器（DFA）状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DfaState {
    Start,
    Identifier,
    Number,
    String,
    Operator,
    Delimiter,
    Comment,
    Error,
}

impl DfaState {
    pub const ALL: [DfaState; 8] = [
        DfaState::Start,
        DfaState::Identifier,
        DfaState::Number,
        DfaState::String,
        DfaState::Operator,
        DfaState::Delimiter,
        DfaState::Comment,
        DfaState::Error,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            DfaState::Start => "START",
            DfaState::Identifier => "IDENTIFIER",
            DfaState::Number => "NUMBER",
            DfaState::String => "STRING",
            DfaState::Operator => "OPERATOR",
            DfaState::Delimiter => "DELIMITER",
            DfaState::Comment => "COMMENT",
            DfaState::Error => "ERROR",
        }
    }

    /// START 与 ERROR 不是接受状态
    pub const fn is_accepting(&self) -> bool {
        !matches!(self, DfaState::Start | DfaState::Error)
    }
}

impl fmt::Display for DfaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 类别到状态的查找表，未登记的类别落到 `fallback`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMap {
    entries: HashMap<TokenKind, DfaState>,
    fallback: DfaState,
}

impl StateMap {
    /// 空表：所有类别都映射到 `fallback`
    pub fn empty(fallback: DfaState) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    /// 标准映射
    ///
    /// 关键字沿标识符路径走到 IDENTIFIER；整数与浮点数共用 NUMBER。
    pub fn standard() -> Self {
        Self::empty(DfaState::Error)
            .with(TokenKind::Keyword, DfaState::Identifier)
            .with(TokenKind::Identifier, DfaState::Identifier)
            .with(TokenKind::Integer, DfaState::Number)
            .with(TokenKind::Float, DfaState::Number)
            .with(TokenKind::String, DfaState::String)
            .with(TokenKind::Operator, DfaState::Operator)
            .with(TokenKind::Delimiter, DfaState::Delimiter)
            .with(TokenKind::Comment, DfaState::Comment)
    }

    pub fn with(mut self, kind: TokenKind, state: DfaState) -> Self {
        self.entries.insert(kind, state);
        self
    }

    pub fn state_for(&self, kind: TokenKind) -> DfaState {
        self.entries.get(&kind).copied().unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> DfaState {
        self.fallback
    }
}

impl Default for StateMap {
    fn default() -> Self {
        Self::standard()
    }
}
