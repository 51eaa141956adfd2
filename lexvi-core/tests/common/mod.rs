//! 测试辅助工具

#![allow(dead_code)]

use lexvi_core::{ScanOutput, Scanner, SourcePosition, TokenKind};

/// 扫描并展开为 (类别, 文本, 行, 列)，便于整体断言
pub fn scan(source: &str) -> Vec<(TokenKind, String, usize, usize)> {
    let output = Scanner::new().tokenize(source);
    flatten(&output)
}

pub fn flatten(output: &ScanOutput<'_>) -> Vec<(TokenKind, String, usize, usize)> {
    output
        .tokens()
        .iter()
        .map(|t| (t.kind, t.text.to_string(), t.line, t.column))
        .collect()
}

pub fn kinds(source: &str) -> Vec<TokenKind> {
    Scanner::new()
        .tokenize(source)
        .tokens()
        .iter()
        .map(|t| t.kind)
        .collect()
}

/// 扫描得到的错误：(字符, 行, 列)
pub fn errors(source: &str) -> Vec<(char, usize, usize)> {
    Scanner::new()
        .tokenize(source)
        .errors()
        .iter()
        .map(|e| (e.character(), e.line, e.column))
        .collect()
}

/// 由字节偏移直接数出的行列号
pub fn position_of(source: &str, offset: usize) -> SourcePosition {
    let prefix = &source[..offset];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
    let column = prefix[line_start..].chars().count() + 1;
    SourcePosition::new(line, column, offset)
}

/// 覆盖各类 token、多行字符串、注释与非法字符的样例
pub const SAMPLES: &[&str] = &[
    "",
    "if",
    "def hello(): return 42",
    "x = \"hello world\"",
    "x = @invalid",
    "x  =  42\n  y=  'test'",
    "x = 42 # This is a comment",
    "for i in range(10):\n    total += i * 2.5\n",
    "s = 'multi\nline' + \"other\"\nnext",
    "a @ b $ c ` d ? e",
    "café = 3.14.15",
    "while(x<=10){x+=1;}",
    "\t\r\n  # only a comment\n",
    "import os as o\nfrom x import y, z",
    "42abc 1.5x if_ _if",
    "\u{3000}全角 = '字符串'",
    "n = ٣.٥\u{1f}+ ४२ ² \u{1c}m",
];
