//! LexVi 词法分析器
//!
//! 有序规则表 + 先匹配语义：
//! - 规则表在编译期确定，每个扫描位置按固定顺序尝试
//! - 精准位置追踪：1-based 行列号（列按码点计数）与字节偏移
//! - 错误恢复：无法识别的字符逐个报告，扫描总是进行到输入末尾

pub mod error;
pub mod position;
pub mod rules;
pub mod scanner;
pub mod token;

pub use error::{ScanError, ScanErrorKind};
pub use position::SourcePosition;
pub use rules::{Rule, KEYWORDS, RULES};
pub use scanner::{Lexeme, Lexemes, ScanOutput, Scanner};
pub use token::{Token, TokenKind};
