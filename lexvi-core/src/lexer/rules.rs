//! 有序规则表
//!
//! 每条规则是 (类别, 锚定匹配函数)。匹配函数接收从当前扫描位置开始的剩余文本，
//! 返回匹配的字节长度；只允许在开头匹配，不做搜索。
//!
//! 规则按固定顺序尝试，第一条匹配成功的规则胜出（先匹配，而非全局最长匹配）。
//! 顺序本身有语义：关键字先于标识符，整数先于浮点数。
//!
//! 数字为 Unicode 十进制数字（Nd 类别），不限于 ASCII；空白为 Unicode 空白字符，
//! 外加 `\x1c`..`\x1f` 四个信息分隔符。
//!
//! 单词边界：单词字符为 Unicode 字母、数字或 `_`。当前扫描位置的左侧总是视为边界，
//! 右侧边界要求下一个字符不是单词字符（或已到输入末尾）。

use super::token::TokenKind;
use unicode_general_category::{get_general_category, GeneralCategory};

/// 固定的关键字表
pub const KEYWORDS: [&str; 20] = [
    "if", "else", "while", "for", "return", "break", "continue", "def", "class", "import", "from",
    "as", "try", "except", "finally", "raise", "with", "yield", "async", "await",
];

/// 运算符字符集（连续出现时贪婪合并）
pub const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~'];

/// 分隔符字符集（每次只取一个）
pub const DELIMITER_CHARS: &[char] = &['(', ')', '{', '}', '[', ']', ',', ';', ':', '.'];

type Matcher = fn(&str) -> Option<usize>;

/// 一条扫描规则
#[derive(Clone, Copy)]
pub struct Rule {
    kind: TokenKind,
    matcher: Matcher,
}

impl Rule {
    const fn new(kind: TokenKind, matcher: Matcher) -> Self {
        Self { kind, matcher }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// 在 `rest` 开头尝试匹配，返回非空匹配的字节长度
    pub fn match_at(&self, rest: &str) -> Option<usize> {
        (self.matcher)(rest).filter(|&len| len > 0)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Rule").field(&self.kind).finish()
    }
}

/// 规则表（顺序不可调整）
pub static RULES: [Rule; 9] = [
    Rule::new(TokenKind::Keyword, match_keyword),
    Rule::new(TokenKind::Identifier, match_identifier),
    Rule::new(TokenKind::Integer, match_integer),
    Rule::new(TokenKind::Float, match_float),
    Rule::new(TokenKind::String, match_string),
    Rule::new(TokenKind::Operator, match_operator),
    Rule::new(TokenKind::Delimiter, match_delimiter),
    Rule::new(TokenKind::Comment, match_comment),
    Rule::new(TokenKind::Whitespace, match_whitespace),
];

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Unicode 十进制数字（如 `7`、`٣`、`७`），不含上标、分数等其他数字字符
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// Unicode 空白，以及 `\x1c`..`\x1f`（文件/组/记录/单元分隔符）
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `rest` 开头满足 `pred` 的最长前缀的字节长度
fn leading_len(rest: &str, pred: impl Fn(char) -> bool) -> usize {
    rest.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(rest.len(), |(i, _)| i)
}

/// `end` 处是否为右侧单词边界
fn is_boundary_at(rest: &str, end: usize) -> bool {
    rest[end..].chars().next().map_or(true, |c| !is_word_char(c))
}

/// `end` 之后是否紧跟 `.digits` 且其后为边界，即 `rest[..end]` 只是浮点数的整数部分
fn continues_as_fraction(rest: &str, end: usize) -> bool {
    let Some(after_dot) = rest[end..].strip_prefix('.') else {
        return false;
    };
    let fraction = leading_len(after_dot, is_decimal_digit);
    fraction > 0 && is_boundary_at(after_dot, fraction)
}

fn match_keyword(rest: &str) -> Option<usize> {
    // 开头的完整单词恰好是关键字时才匹配，因此 `ifx`、`async_` 不是关键字
    let word = &rest[..leading_len(rest, is_word_char)];
    KEYWORDS.contains(&word).then_some(word.len())
}

fn match_identifier(rest: &str) -> Option<usize> {
    let first = rest.chars().next().filter(|&c| is_identifier_start(c))?;
    let tail = &rest[first.len_utf8()..];
    Some(first.len_utf8() + leading_len(tail, is_identifier_continue))
}

fn match_integer(rest: &str) -> Option<usize> {
    let digits = leading_len(rest, is_decimal_digit);
    let bounded = is_boundary_at(rest, digits) && !continues_as_fraction(rest, digits);
    (digits > 0 && bounded).then_some(digits)
}

fn match_float(rest: &str) -> Option<usize> {
    let whole = leading_len(rest, is_decimal_digit);
    if whole == 0 || !continues_as_fraction(rest, whole) {
        return None;
    }
    let fraction = leading_len(&rest[whole + 1..], is_decimal_digit);
    Some(whole + 1 + fraction)
}

fn match_string(rest: &str) -> Option<usize> {
    let quote = rest.chars().next().filter(|&c| c == '"' || c == '\'')?;
    // 引号是单字节字符；未闭合时不匹配
    let body = rest[1..].find(quote)?;
    Some(body + 2)
}

fn match_operator(rest: &str) -> Option<usize> {
    Some(leading_len(rest, |c| OPERATOR_CHARS.contains(&c)))
}

fn match_delimiter(rest: &str) -> Option<usize> {
    rest.chars()
        .next()
        .filter(|c| DELIMITER_CHARS.contains(c))
        .map(char::len_utf8)
}

fn match_comment(rest: &str) -> Option<usize> {
    rest.strip_prefix('#')?;
    Some(rest.find('\n').unwrap_or(rest.len()))
}

fn match_whitespace(rest: &str) -> Option<usize> {
    Some(leading_len(rest, is_whitespace))
}
