//! Token 序列的文本输出
//!
//! - [`to_csv`]：分隔文本，字段含分隔符、引号或换行时加引号
//! - [`to_json`]：`{kind, text, line, column}` 对象数组
//! - [`render_table`]：终端对齐表格
//! - [`render_report`]：逐 token 的分析报告及错误列表

use crate::lexer::{ScanError, ScanOutput, Token};
use lexvi_config::ExportConfig;
use std::fmt::Write;

/// 导出错误
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;

const CSV_HEADER: [&str; 4] = ["Type", "Value", "Line", "Column"];

const REPORT_RULE_WIDTH: usize = 40;

fn csv_field(field: &str, delimiter: char) -> String {
    let needs_quotes = field
        .chars()
        .any(|c| c == delimiter || c == '"' || c == '\n' || c == '\r');
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_row(out: &mut String, fields: &[&str], delimiter: char) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(&csv_field(field, delimiter));
    }
    out.push('\n');
}

/// 按 `config` 的分隔符与表头设置输出 CSV
pub fn to_csv(tokens: &[Token<'_>], config: &ExportConfig) -> String {
    let mut out = String::new();
    if config.header {
        csv_row(&mut out, &CSV_HEADER, config.delimiter);
    }
    for token in tokens {
        let line = token.line.to_string();
        let column = token.column.to_string();
        csv_row(
            &mut out,
            &[token.kind.name(), token.text, &line, &column],
            config.delimiter,
        );
    }
    out
}

/// 输出格式化的 JSON 数组
pub fn to_json(tokens: &[Token<'_>]) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

/// 控制字符按转义序列显示，使每个 token 保持单行
fn table_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

/// 对齐的表格：类别与值左对齐，行列号右对齐
pub fn render_table(tokens: &[Token<'_>]) -> String {
    let header = CSV_HEADER.map(String::from);
    let rows: Vec<[String; 4]> = tokens
        .iter()
        .map(|t| {
            [
                t.kind.name().to_string(),
                table_text(t.text),
                t.line.to_string(),
                t.column.to_string(),
            ]
        })
        .collect();

    let mut widths = header.each_ref().map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let write_row = |out: &mut String, row: &[String; 4]| {
        let _ = writeln!(
            out,
            "{:<w0$}  {:<w1$}  {:>w2$}  {:>w3$}",
            row[0],
            row[1],
            row[2],
            row[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        );
    };

    let mut out = String::new();
    write_row(&mut out, &header);
    let total = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let _ = writeln!(out, "{}", "-".repeat(total));
    for row in &rows {
        write_row(&mut out, row);
    }
    out
}

/// 错误列表，每行 `Line l, Column c: message`
pub fn render_errors(errors: &[ScanError]) -> String {
    let mut out = String::new();
    for error in errors {
        let _ = writeln!(
            out,
            "Line {}, Column {}: {}",
            error.line, error.column, error.message
        );
    }
    out
}

/// 分析报告：每个 token 一段，有错误时在末尾追加 `Errors Found:` 部分
pub fn render_report(output: &ScanOutput<'_>) -> String {
    let mut out = String::from("Token Analysis Output:\n\n");
    for token in output.tokens() {
        let _ = writeln!(out, "Token: {}", token.kind);
        let _ = writeln!(out, "Value: {}", token.text);
        let _ = writeln!(
            out,
            "Position: Line {}, Column {}",
            token.line, token.column
        );
        let _ = writeln!(out, "{}", "-".repeat(REPORT_RULE_WIDTH));
    }

    if output.has_errors() {
        out.push_str("\nErrors Found:\n");
        out.push_str(&render_errors(output.errors()));
    }
    out
}
