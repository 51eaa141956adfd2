//! LexVi Core - 词法分析核心
//!
//! - [`lexer`]：规则表驱动的扫描器、token 与位置模型
//! - [`visual`]：分类器状态图、单步驱动
//! - [`export`]：CSV / JSON / 表格 / 报告输出
//!
//! ```
//! use lexvi_core::TokenKind;
//!
//! let output = lexvi_core::tokenize("x = @invalid");
//! assert_eq!(output.tokens()[0].kind, TokenKind::Identifier);
//! assert_eq!(output.errors()[0].to_string(), "[1:5] Unrecognized token: @");
//! ```

pub mod export;
pub mod lexer;
pub mod visual;

pub use export::{
    render_errors, render_report, render_table, to_csv, to_json, ExportError, ExportResult,
};
pub use lexer::{
    Lexeme, Lexemes, Rule, ScanError, ScanErrorKind, ScanOutput, Scanner, SourcePosition, Token,
    TokenKind, KEYWORDS, RULES,
};
pub use lexvi_config::ExportConfig;
pub use visual::{Automaton, DfaState, StateMap, Step, Stepper, Transition};

/// 使用默认扫描器（无日志）扫描 `source`
pub fn tokenize(source: &str) -> ScanOutput<'_> {
    Scanner::new().tokenize(source)
}
