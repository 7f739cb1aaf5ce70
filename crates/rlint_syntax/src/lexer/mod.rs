//! Tokenizer for R source code.
//!
//! Handles tokenization including:
//! - Keywords (`if`, `function`, `NULL`, `NA_integer_`, ...) and identifiers, including backtick-quoted names
//! - Numeric literals (decimal, hexadecimal, `L` and `i` suffixes)
//! - Quoted and raw string literals
//! - Operators by longest match (`<<-` before `<-` before `<`) plus `%...%` specials
//! - Punctuation, with `[[`/`]]` kept distinct from `[`/`]`
//! - Comments and newlines, which are kept as tokens for the parser
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, LexErrorKind)
//! - `strings` - String, raw string and backtick scanning plus escape decoding
//! - `numbers` - Numeric literal scanning
//!
//! ## Notes
//! - Tokenizing never fails. Text that cannot be classified becomes an `Invalid` token and scanning goes on.
//! - Token spans plus the skipped whitespace cover the input exactly, with no gaps or overlaps.

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{LexErrorKind, Token, TokenKind, keyword_id};

use crate::ast::{Position, Range, Span};
use rlint_core::lang::operators::{self, OperatorId};
use rlint_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Bracket tracking (why a stack):
//
//   x[[i]]     '[[' push → ']' with '[[' on top and ']' next → emit ']]', pop
//   x[y[1]]    '[' push, '[' push → ']' pops '[' → ']' pops '['
//   x[[y[1]]]  '[[' push, '[' push → ']' pops '[' → ']]' pops '[['
// ============================================================================

/// Tokenizer for R source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Position of the next unread character.
    position: Position,
    /// Start of the token being scanned.
    token_start: (usize, Position),
    /// Open brackets, innermost last.
    brackets: Vec<PunctuationId>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            position: Position::START,
            token_start: (0, Position::START),
            brackets: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with a zero-length `End` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }
        self.token_start = (self.current_pos, self.position);
        self.add_token(TokenKind::End);
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// The unread remainder of the source.
    fn rest(&self) -> &'a str {
        &self.source[self.current_pos..]
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.position.row += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    /// Advance over `count` characters.
    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        while self.peek().is_some_and(is_insignificant_whitespace) {
            self.advance();
        }

        self.token_start = (self.current_pos, self.position);

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '\n' => self.add_token(TokenKind::Newline),
            '#' => {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                self.add_token(TokenKind::Comment);
            }

            // Strings and quoted names
            '"' | '\'' => self.scan_string(c),
            '`' => self.scan_backtick(),
            'r' | 'R' if matches!(self.peek(), Some('"' | '\'')) => self.scan_raw_string(),

            // Numbers
            '0'..='9' => self.scan_number(c),
            '.' if self.peek().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(c),

            // Punctuation
            '(' => self.open_bracket(PunctuationId::LParen),
            ')' => self.close_bracket(PunctuationId::RParen, PunctuationId::LParen),
            '{' => self.open_bracket(PunctuationId::LBrace),
            '}' => self.close_bracket(PunctuationId::RBrace, PunctuationId::LBrace),
            '[' => {
                if self.match_char('[') {
                    self.open_bracket(PunctuationId::LDoubleBracket);
                } else {
                    self.open_bracket(PunctuationId::LBracket);
                }
            }
            ']' => self.scan_right_bracket(),
            ',' => self.add_punct(PunctuationId::Comma),
            ';' => self.add_punct(PunctuationId::Semicolon),

            // Operators
            '%' => self.scan_percent(),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(),

            _ => self.scan_operator(),
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind) {
        let (start, start_position) = self.token_start;
        self.tokens.push(Token::new(
            kind,
            &self.source[start..self.current_pos],
            Span::new(start, self.current_pos),
            Range::new(start_position, self.position),
        ));
    }

    fn add_op(&mut self, id: OperatorId) {
        self.add_token(TokenKind::Operator(id));
    }

    fn add_punct(&mut self, id: PunctuationId) {
        self.add_token(TokenKind::Punctuation(id));
    }

    fn add_invalid(&mut self, reason: LexErrorKind) {
        self.add_token(TokenKind::Invalid(reason));
    }

    // ========================================================================
    // Operators and brackets
    // ========================================================================

    /// Longest match against the operator table. The first character is already consumed.
    fn scan_operator(&mut self) {
        let start = self.token_start.0;
        match operators::longest_match(&self.source[start..]) {
            Some((id, len)) => {
                // Operator spellings are ASCII, so bytes and characters agree.
                self.advance_by(len - 1);
                self.add_op(id);
            }
            None => self.add_invalid(LexErrorKind::UnexpectedCharacter),
        }
    }

    /// `%%` or a user-defined `%op%`; the closing `%` must be on the same line.
    fn scan_percent(&mut self) {
        let Some(end) = self.rest().find(['%', '\n']) else {
            self.add_invalid(LexErrorKind::UnexpectedCharacter);
            return;
        };
        if !self.rest()[end..].starts_with('%') {
            self.add_invalid(LexErrorKind::UnexpectedCharacter);
            return;
        }
        let count = self.rest()[..=end].chars().count();
        self.advance_by(count);
        let id = if end == 0 { OperatorId::Modulo } else { OperatorId::Special };
        self.add_op(id);
    }

    fn open_bracket(&mut self, id: PunctuationId) {
        self.brackets.push(id);
        self.add_punct(id);
    }

    fn close_bracket(&mut self, id: PunctuationId, open: PunctuationId) {
        if self.brackets.last() == Some(&open) {
            self.brackets.pop();
        }
        self.add_punct(id);
    }

    /// `]` closes a `[`; `]]` closes a `[[` only when that is the innermost open bracket.
    fn scan_right_bracket(&mut self) {
        if self.brackets.last() == Some(&PunctuationId::LDoubleBracket) && self.peek() == Some(']') {
            self.advance();
            self.brackets.pop();
            self.add_punct(PunctuationId::RDoubleBracket);
        } else {
            self.close_bracket(PunctuationId::RBracket, PunctuationId::LBracket);
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }

        let spelling = &self.source[self.token_start.0..self.current_pos];

        // Look up identifier spelling in the reserved-word registry.
        match keyword_id(spelling) {
            Some(id) => self.add_token(TokenKind::Keyword(id)),
            None => self.add_token(TokenKind::Identifier),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Whitespace the tokenizer skips without emitting a token.
///
/// Newlines are significant and excluded; `\r` is included so CRLF input tokenizes like LF input.
pub fn is_insignificant_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\n') || c == '\u{feff}'
}

/// Check if a character can start an identifier.
///
/// A leading `.` followed by a digit starts a number instead; the caller checks that first.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '.'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '.' || c == '_'
}

/// Tokenize a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let tokens = Lexer::new(source).tokenize();
    tracing::debug!(tokens = tokens.len(), "tokenized source");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlint_core::lang::keywords::KeywordId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    fn contents(source: &str) -> Vec<String> {
        lex(source).into_iter().map(|t| t.contents).collect()
    }

    #[test]
    fn test_null_comparison_tokens() {
        assert_eq!(
            kinds("x == NULL"),
            vec![
                TokenKind::Identifier,
                TokenKind::Operator(OperatorId::EqEq),
                TokenKind::Keyword(KeywordId::Null),
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_positions_are_one_based_and_count_characters() {
        let tokens = lex("é <- 1\n  y");
        assert_eq!((tokens[0].row(), tokens[0].column(), tokens[0].length()), (1, 1, 1));
        assert_eq!((tokens[1].row(), tokens[1].column()), (1, 3));
        assert_eq!(tokens[3].kind, TokenKind::Newline);
        assert_eq!((tokens[4].row(), tokens[4].column()), (2, 3));
        assert_eq!(tokens[5].kind, TokenKind::End);
        assert_eq!((tokens[5].row(), tokens[5].column(), tokens[5].length()), (2, 4, 0));
    }

    #[test]
    fn test_empty_source_is_just_end() {
        let tokens = lex("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::End);
        assert_eq!(tokens[0].span, Span::new(0, 0));
    }

    #[test]
    fn test_longest_match_operators() {
        assert_eq!(contents("a<<-b"), ["a", "<<-", "b", ""]);
        assert_eq!(contents("a<-b"), ["a", "<-", "b", ""]);
        assert_eq!(contents("a < -b"), ["a", "<", "-", "b", ""]);
        assert_eq!(contents("b->>a"), ["b", "->>", "a", ""]);
        assert_eq!(contents("pkg:::f"), ["pkg", ":::", "f", ""]);
        assert_eq!(contents("x|>f()"), ["x", "|>", "f", "(", ")", ""]);
        assert_eq!(kinds("2**3")[1], TokenKind::Operator(OperatorId::Caret));
    }

    #[test]
    fn test_percent_operators() {
        assert_eq!(kinds("a %% b")[1], TokenKind::Operator(OperatorId::Modulo));
        assert_eq!(kinds("a %in% b")[1], TokenKind::Operator(OperatorId::Special));
        assert_eq!(contents("a%>%b"), ["a", "%>%", "b", ""]);
        assert_eq!(kinds("a % b")[1], TokenKind::Invalid(LexErrorKind::UnexpectedCharacter));
        assert_eq!(kinds("a %in\n% b")[1], TokenKind::Invalid(LexErrorKind::UnexpectedCharacter));
    }

    #[test]
    fn test_double_brackets() {
        use PunctuationId::*;
        let punct = |source: &str| -> Vec<PunctuationId> {
            lex(source).iter().filter_map(|t| t.punctuation_id()).collect()
        };
        assert_eq!(punct("x[[1]]"), [LDoubleBracket, RDoubleBracket]);
        assert_eq!(punct("x[y[1]]"), [LBracket, LBracket, RBracket, RBracket]);
        assert_eq!(punct("x[[y[1]]]"), [LDoubleBracket, LBracket, RBracket, RDoubleBracket]);
        assert_eq!(punct("x[[f(1)]]"), [LDoubleBracket, LParen, RParen, RDoubleBracket]);
    }

    #[test]
    fn test_identifiers_and_keywords() {
        assert_eq!(
            kinds(".x ... ..1 x_1.y TRUE True"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Keyword(KeywordId::True),
                TokenKind::Identifier,
                TokenKind::End,
            ]
        );
        assert_eq!(kinds("NA_character_")[0], TokenKind::Keyword(KeywordId::NaCharacter));
        assert_eq!(kinds("_x")[0], TokenKind::Invalid(LexErrorKind::UnexpectedCharacter));
    }

    #[test]
    fn test_backtick_names() {
        let tokens = lex("`my var` <- 1");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].contents, "`my var`");
        assert_eq!(tokens[0].identifier_name().as_deref(), Some("my var"));
        assert_eq!(kinds("`open")[0], TokenKind::Invalid(LexErrorKind::UnterminatedBacktick));
    }

    #[test]
    fn test_comments_and_newlines_are_tokens() {
        let tokens = lex("x # note\ny");
        assert_eq!(tokens[1].kind, TokenKind::Comment);
        assert_eq!(tokens[1].contents, "# note");
        assert_eq!(tokens[2].kind, TokenKind::Newline);
        assert_eq!(tokens[3].row(), 2);
    }

    #[test]
    fn test_crlf_matches_lf() {
        let shape = |source: &str| -> Vec<(TokenKind, String, u32)> {
            lex(source).into_iter().map(|t| (t.kind, t.contents.clone(), t.row())).collect()
        };
        let lf = shape("a\nb");
        let crlf = shape("a\r\nb");
        assert_eq!(lf, crlf);
    }

    #[test]
    fn test_unexpected_character_does_not_stop_scanning() {
        let tokens = lex("a ^ b \\ c");
        assert_eq!(tokens[3].kind, TokenKind::Invalid(LexErrorKind::UnexpectedCharacter));
        assert_eq!(tokens[4].contents, "c");
    }

    #[test]
    fn test_spans_partition_the_input() {
        let source = "f <- function(x, ...) {\n  x[[1]] %in% c('a', \"b\") # hi\n}\r\n";
        let tokens = lex(source);
        let mut cursor = 0;
        for token in &tokens {
            assert!(source[cursor..token.span.start].chars().all(is_insignificant_whitespace));
            assert_eq!(&source[token.span.start..token.span.end], token.contents);
            cursor = token.span.end;
        }
        assert_eq!(cursor, source.len());
    }
}
