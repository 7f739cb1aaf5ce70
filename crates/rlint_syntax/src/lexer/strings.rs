//! String, raw string and backtick-name scanning, plus escape decoding.
//!
//! ## Notes
//! - Quoted strings may span lines. A backslash always escapes the next character, so the scanner only needs
//!   to find the matching unescaped quote; decoding happens later in [`unescape`].
//! - Raw strings look like `r"(...)"`, `R'[...]'` or `r"--{...}--"`. The closing sequence mirrors the opening
//!   one: matching bracket, same number of dashes, same quote.

use super::{LexErrorKind, Lexer, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan a quoted string whose opening quote is already consumed.
    pub(super) fn scan_string(&mut self, quote: char) {
        if self.scan_quoted(quote) {
            self.add_token(TokenKind::String);
        } else {
            self.add_invalid(LexErrorKind::UnterminatedString);
        }
    }

    /// Scan a backtick-quoted name whose opening backtick is already consumed.
    pub(super) fn scan_backtick(&mut self) {
        if self.scan_quoted('`') {
            self.add_token(TokenKind::Identifier);
        } else {
            self.add_invalid(LexErrorKind::UnterminatedBacktick);
        }
    }

    /// Scan a raw string; only the `r`/`R` prefix is consumed so far.
    pub(super) fn scan_raw_string(&mut self) {
        let Some(quote) = self.advance() else {
            return;
        };
        let dashes = self.rest().chars().take_while(|&c| c == '-').count();
        let closer = match self.rest()[dashes..].chars().next() {
            Some('(') => ')',
            Some('[') => ']',
            Some('{') => '}',
            _ => {
                // Not a valid raw string; keep the whole quoted run together so scanning resyncs after it.
                if self.scan_quoted(quote) {
                    self.add_invalid(LexErrorKind::MalformedRawString);
                } else {
                    self.add_invalid(LexErrorKind::UnterminatedString);
                }
                return;
            }
        };
        self.advance_by(dashes + 1);

        let tail: String = std::iter::repeat_n('-', dashes).chain([quote]).collect();
        loop {
            match self.advance() {
                None => {
                    self.add_invalid(LexErrorKind::UnterminatedRawString);
                    return;
                }
                Some(c) if c == closer && self.rest().starts_with(&tail) => {
                    self.advance_by(dashes + 1);
                    self.add_token(TokenKind::String);
                    return;
                }
                Some(_) => {}
            }
        }
    }

    /// Consume up to and including the closing `quote`.
    ///
    /// ## Returns
    /// - `false` if input ended first.
    fn scan_quoted(&mut self, quote: char) -> bool {
        loop {
            match self.advance() {
                None => return false,
                Some('\\') => {
                    self.advance();
                }
                Some(c) if c == quote => return true,
                Some(_) => {}
            }
        }
    }
}

// ============================================================================
// Decoding
// ============================================================================

/// Strip the surrounding quotes of a quoted string literal.
pub(super) fn strip_quotes(contents: &str) -> Option<&str> {
    let quote = contents.chars().next().filter(|q| matches!(q, '"' | '\''))?;
    contents.strip_prefix(quote)?.strip_suffix(quote)
}

/// The body of a raw string literal, or `None` if `contents` is not one.
pub(super) fn raw_string_body(contents: &str) -> Option<&str> {
    let rest = contents.strip_prefix(['r', 'R'])?;
    let quote = rest.chars().next().filter(|q| matches!(q, '"' | '\''))?;
    let rest = &rest[1..];
    let dashes = rest.chars().take_while(|&c| c == '-').count();
    let rest = &rest[dashes..];
    let closer = match rest.chars().next()? {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => return None,
    };
    let tail: String = std::iter::once(closer)
        .chain(std::iter::repeat_n('-', dashes))
        .chain([quote])
        .collect();
    rest[1..].strip_suffix(tail.as_str())
}

/// Decode backslash escapes.
///
/// ## Returns
/// - `None` for malformed escapes (bad hex/unicode digits, a trailing backslash, invalid code points).
pub(super) fn unescape(body: &str) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = match chars.next()? {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'a' => '\u{7}',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'v' => '\u{b}',
            'x' => code_point(take_hex(&mut chars, 2, false)?)?,
            'u' => code_point(take_hex(&mut chars, 4, true)?)?,
            'U' => code_point(take_hex(&mut chars, 8, true)?)?,
            d @ '0'..='7' => {
                let mut value = d.to_digit(8)?;
                for _ in 0..2 {
                    match chars.peek().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                code_point(value)?
            }
            other => other,
        };
        out.push(escaped);
    }
    Some(out)
}

/// Read up to `max` hex digits, optionally wrapped in `{...}`.
fn take_hex(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, max: usize, braces: bool) -> Option<u32> {
    let braced = braces && chars.peek() == Some(&'{');
    if braced {
        chars.next();
    }
    let mut value: u32 = 0;
    let mut count = 0;
    while count < max {
        let Some(digit) = chars.peek().and_then(|c| c.to_digit(16)) else {
            break;
        };
        value = value * 16 + digit;
        chars.next();
        count += 1;
    }
    if braced && chars.next() != Some('}') {
        return None;
    }
    (count > 0).then_some(value)
}

fn code_point(value: u32) -> Option<char> {
    char::from_u32(value)
}
