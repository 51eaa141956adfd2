//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use lexvi_core::ScanError;
use std::fmt::Write;

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &ScanError, source: &str) {
    eprintln!("error: {}", e);
    eprint!("{}", render_source_context(source, e.line, e.column));
}

/// 源代码上下文（错误行前后几行），错误列下方画 `^`
///
/// 行号越界时返回空字符串。
pub fn render_source_context(source: &str, error_line: usize, error_col: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return String::new();
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 行号的最大宽度用于对齐
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    let mut out = String::new();
    let _ = writeln!(out, "{separator}|--");

    for line_idx in start_line..=end_line {
        let _ = writeln!(out, "{:>width$} | {}", line_idx, lines[line_idx - 1]);

        if line_idx == error_line {
            let marker = " ".repeat(error_col.saturating_sub(1));
            let _ = writeln!(out, "{:width$} | {}^", "", marker);
        }
    }

    let _ = writeln!(out, "{separator}|--");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_under_column() {
        let context = render_source_context("x = @invalid", 1, 5);
        assert_eq!(context, "--|--\n1 | x = @invalid\n  |     ^\n--|--\n");
    }

    #[test]
    fn test_context_window() {
        let source = "a\nb\nc\nd\ne\nf\ng";
        let context = render_source_context(source, 4, 1);
        let shown: Vec<_> = context.lines().collect();

        assert_eq!(shown.first(), Some(&"--|--"));
        assert_eq!(shown[1], "2 | b");
        assert_eq!(shown[3], "4 | d");
        assert_eq!(shown[4], "  | ^");
        assert_eq!(shown[6], "6 | f");
        assert_eq!(shown.len(), 8);
    }

    #[test]
    fn test_line_numbers_align() {
        let source = (1..=12).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
        let context = render_source_context(&source, 10, 2);
        assert!(context.contains(" 8 | l8\n"));
        assert!(context.contains("10 | l10\n   |  ^\n"));
        assert!(context.starts_with("---|--\n"));
    }

    #[test]
    fn test_out_of_range_line() {
        assert!(render_source_context("one line", 3, 1).is_empty());
        assert!(render_source_context("", 1, 1).is_empty());
    }
}
