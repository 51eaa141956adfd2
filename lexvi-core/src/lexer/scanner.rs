//! 扫描器
//!
//! 在每个扫描位置按顺序尝试规则表，第一条锚定匹配成功的规则胜出：
//! - 空白与注释被消费但不产生 token
//! - 其余类别产生 token
//! - 没有规则匹配时，为当前单个字符记录一个错误并前进一个字符
//!
//! 扫描器本身不保存任何结果，每次 [`Scanner::tokenize`] 返回新的 [`ScanOutput`]。
//!
//! ```
//! use lexvi_core::{Scanner, TokenKind};
//!
//! let scanner = Scanner::new();
//! let output = scanner.tokenize("x = 42 # answer");
//!
//! assert_eq!(output.tokens().len(), 3);
//! assert_eq!(output.tokens()[2].kind, TokenKind::Integer);
//! assert!(output.errors().is_empty());
//! ```

use super::error::ScanError;
use super::position::SourcePosition;
use super::rules::{Rule, RULES};
use super::token::{Token, TokenKind};

use lexvi_log::{debug, trace, warn, Logger};
use std::sync::Arc;

/// 扫描过程中消费的一段输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme<'src> {
    /// 输出序列中的 token
    Token(Token<'src>),
    /// 被丢弃的空白或注释
    Trivia {
        kind: TokenKind,
        text: &'src str,
        position: SourcePosition,
    },
    /// 无法识别的单个字符
    Unrecognized { error: ScanError, text: &'src str },
}

impl<'src> Lexeme<'src> {
    /// 该段对应的源码原文
    pub fn text(&self) -> &'src str {
        match self {
            Lexeme::Token(token) => token.text,
            Lexeme::Trivia { text, .. } | Lexeme::Unrecognized { text, .. } => text,
        }
    }

    /// 无法识别的字符归为 `TokenKind::Error`
    pub fn kind(&self) -> TokenKind {
        match self {
            Lexeme::Token(token) => token.kind,
            Lexeme::Trivia { kind, .. } => *kind,
            Lexeme::Unrecognized { .. } => TokenKind::Error,
        }
    }

    pub fn position(&self) -> SourcePosition {
        match self {
            Lexeme::Token(token) => token.position(),
            Lexeme::Trivia { position, .. } => *position,
            Lexeme::Unrecognized { error, .. } => error.position(),
        }
    }
}

/// 一次扫描的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutput<'src> {
    tokens: Vec<Token<'src>>,
    errors: Vec<ScanError>,
}

impl<'src> ScanOutput<'src> {
    /// 按源码顺序排列的 token
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// 本次扫描收集到的错误，按出现顺序排列
    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Token<'src>>, Vec<ScanError>) {
        (self.tokens, self.errors)
    }
}

/// 规则表驱动的扫描器
///
/// 可重复使用；`tokenize` 只读取 `&self`，多次调用之间互不影响。
pub struct Scanner {
    logger: Arc<Logger>,
}

impl Scanner {
    /// 创建扫描器（使用 noop logger）
    ///
    /// 如需日志，请使用 [`Self::with_logger`]
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        trace!(logger, "Creating new Scanner with {} rules", RULES.len());
        Self { logger }
    }

    /// 按尝试顺序排列的规则表
    pub fn rules(&self) -> &'static [Rule] {
        &RULES
    }

    /// 逐段遍历输入，包括被丢弃的空白、注释和无法识别的字符
    ///
    /// 所有段的 `text()` 依次拼接即为原始输入。
    pub fn lexemes<'s, 'src>(&'s self, source: &'src str) -> Lexemes<'s, 'src> {
        Lexemes {
            scanner: self,
            source,
            position: SourcePosition::start(),
        }
    }

    /// 扫描完整输入，返回 token 序列和错误序列
    pub fn tokenize<'src>(&self, source: &'src str) -> ScanOutput<'src> {
        debug!(self.logger, "Tokenizing {} bytes", source.len());

        let mut output = ScanOutput::default();
        for lexeme in self.lexemes(source) {
            match lexeme {
                Lexeme::Token(token) => output.tokens.push(token),
                Lexeme::Trivia { .. } => {}
                Lexeme::Unrecognized { error, .. } => output.errors.push(error),
            }
        }

        debug!(
            self.logger,
            "Scan complete: {} tokens, {} errors",
            output.tokens.len(),
            output.errors.len()
        );
        output
    }

    /// 在剩余输入开头找到第一条匹配的规则
    fn first_match(&self, rest: &str) -> Option<(TokenKind, usize)> {
        RULES
            .iter()
            .find_map(|rule| rule.match_at(rest).map(|len| (rule.kind(), len)))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("logger", &self.logger)
            .finish()
    }
}

/// [`Scanner::lexemes`] 返回的迭代器
pub struct Lexemes<'s, 'src> {
    scanner: &'s Scanner,
    source: &'src str,
    position: SourcePosition,
}

impl<'src> Lexemes<'_, 'src> {
    /// 下一段的起始位置
    pub fn position(&self) -> SourcePosition {
        self.position
    }
}

impl<'src> Iterator for Lexemes<'_, 'src> {
    type Item = Lexeme<'src>;

    fn next(&mut self) -> Option<Lexeme<'src>> {
        let rest = &self.source[self.position.offset..];
        let start = self.position;
        let logger = &self.scanner.logger;

        match self.scanner.first_match(rest) {
            Some((kind, len)) => {
                let text = &rest[..len];
                self.position.advance_over(text);

                if kind.is_trivia() {
                    trace!(logger, "Skipped {} at {}", kind, start);
                    return Some(Lexeme::Trivia {
                        kind,
                        text,
                        position: start,
                    });
                }

                trace!(logger, "Produced token: kind={}, text={:?}, at {}", kind, text, start);
                Some(Lexeme::Token(Token::new(kind, text, start)))
            }
            None => {
                let c = rest.chars().next()?;
                let text = &rest[..c.len_utf8()];
                let error = ScanError::unrecognized(c, start);
                warn!(logger, "{}", error);

                self.position.skip_unmatched(c);
                Some(Lexeme::Unrecognized { error, text })
            }
        }
    }
}

impl std::iter::FusedIterator for Lexemes<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use lexvi_log::{Level, LogRingBuffer};

    fn kinds(output: &ScanOutput<'_>) -> Vec<TokenKind> {
        output.tokens().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input() {
        let output = Scanner::new().tokenize("");
        assert!(output.tokens().is_empty());
        assert!(!output.has_errors());
    }

    #[test]
    fn test_only_trivia() {
        let output = Scanner::new().tokenize("  # nothing here\n\t");
        assert!(output.tokens().is_empty());
        assert!(!output.has_errors());
    }

    #[test]
    fn test_keyword_before_identifier() {
        let output = Scanner::new().tokenize("while whilst");
        assert_eq!(kinds(&output), [TokenKind::Keyword, TokenKind::Identifier]);
    }

    #[test]
    fn test_digits_glued_to_letters() {
        // 整数右侧没有边界：数字逐个报错，随后的单词从新的位置开始匹配
        let output = Scanner::new().tokenize("42if");
        let chars: Vec<char> = output.errors().iter().map(ScanError::character).collect();
        assert_eq!(chars, ['4', '2']);
        assert_eq!(output.tokens()[0].kind, TokenKind::Keyword);
        assert_eq!(output.tokens()[0].column, 3);
    }

    #[test]
    fn test_unterminated_string_recovers_per_char() {
        let output = Scanner::new().tokenize("\"abc");
        assert_eq!(output.errors().len(), 1);
        assert_eq!(output.errors()[0].character(), '"');
        assert_eq!(output.tokens()[0].text, "abc");
        assert_eq!(output.tokens()[0].column, 2);
    }

    #[test]
    fn test_multiline_string_moves_line() {
        let output = Scanner::new().tokenize("'a\nbc' x");
        let x = output.tokens()[1];
        assert_eq!((x.line, x.column), (2, 5));
    }

    #[test]
    fn test_lexemes_cover_input() {
        let source = "if a >= 1.5: # check\n  b = 'x' @";
        let scanner = Scanner::new();
        let rebuilt: String = scanner.lexemes(source).map(|l| l.text()).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_lexeme_kinds() {
        let scanner = Scanner::new();
        let kinds: Vec<_> = scanner.lexemes("a #c\n$").map(|l| l.kind()).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Comment,
                TokenKind::Whitespace,
                TokenKind::Error,
            ]
        );
    }

    #[test]
    fn test_lexemes_position_tracks_progress() {
        let scanner = Scanner::new();
        let mut lexemes = scanner.lexemes("ab\ncd");
        lexemes.next();
        lexemes.next();
        assert_eq!(lexemes.position(), SourcePosition::new(2, 1, 3));
        assert!(lexemes.next().is_some());
        assert!(lexemes.next().is_none());
        assert!(lexemes.next().is_none());
    }

    #[test]
    fn test_into_parts() {
        let (tokens, errors) = Scanner::new().tokenize("a ? b").into_parts();
        assert_eq!(tokens.len(), 2);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_scanner_logs_tokens_and_errors() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Trace).with_sink(ring.clone());
        let scanner = Scanner::with_logger(logger);

        assert!(ring.contains("Creating new Scanner with 9 rules"));

        ring.clear();
        scanner.tokenize("x @");

        assert!(ring.contains("Tokenizing 3 bytes"));
        assert!(ring.contains("Produced token: kind=IDENTIFIER, text=\"x\", at 1:1"));
        assert!(ring.contains("Skipped WHITESPACE at 1:2"));
        assert!(ring.contains("[1:3] Unrecognized token: @"));
        assert!(ring.contains("Scan complete: 1 tokens, 1 errors"));
    }

    #[test]
    fn test_log_level_filtering() {
        let ring = LogRingBuffer::new(100);
        let logger = Logger::new(Level::Warn).with_sink(ring.clone());
        let scanner = Scanner::with_logger(logger);

        scanner.tokenize("a ` b");

        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Warn);
    }

    #[test]
    fn test_rules_in_match_order() {
        let scanner = Scanner::new();
        assert_eq!(scanner.rules().len(), 9);
        assert_eq!(scanner.rules()[0].kind(), TokenKind::Keyword);
        assert_eq!(scanner.rules()[8].kind(), TokenKind::Whitespace);
    }

    #[test]
    fn test_scanner_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scanner>();
    }
}
