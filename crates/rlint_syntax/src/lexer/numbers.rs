//! Numeric literal scanning.
//!
//! Accepted shapes: `1`, `1.`, `1.5`, `.5`, `1e10`, `1.5E-3`, `0xFF`, `0x1.8p3`, each optionally followed by an
//! integer suffix `L` and then a complex suffix `i`. An exponent marker is only part of the number when digits
//! follow it, so `1e` is the number `1` followed by the identifier `e`.

use super::{LexErrorKind, Lexer, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan a number whose first character (a digit, or `.` before a digit) is already consumed.
    pub(super) fn scan_number(&mut self, first: char) {
        if first == '0' && matches!(self.peek(), Some('x' | 'X')) {
            self.advance();
            self.scan_hex_number();
            return;
        }

        if first != '.' {
            self.eat_while(|c| c.is_ascii_digit());
            if self.peek() == Some('.') {
                self.advance();
            }
        }
        self.eat_while(|c| c.is_ascii_digit());
        self.scan_exponent(['e', 'E']);
        self.scan_suffixes();
        self.add_token(TokenKind::Number);
    }

    fn scan_hex_number(&mut self) {
        let mut digits = self.eat_while(|c| c.is_ascii_hexdigit());
        if self.peek() == Some('.') {
            self.advance();
            digits += self.eat_while(|c| c.is_ascii_hexdigit());
        }
        if digits == 0 {
            self.add_invalid(LexErrorKind::MalformedNumber);
            return;
        }
        self.scan_exponent(['p', 'P']);
        self.scan_suffixes();
        self.add_token(TokenKind::Number);
    }

    /// Consume `<marker>[+-]?digits` if it is next.
    fn scan_exponent(&mut self, markers: [char; 2]) {
        let mut rest = self.rest().chars();
        if !rest.next().is_some_and(|c| markers.contains(&c)) {
            return;
        }
        let mut len = 1;
        let mut next = rest.next();
        if matches!(next, Some('+' | '-')) {
            len += 1;
            next = rest.next();
        }
        if next.is_some_and(|c| c.is_ascii_digit()) {
            self.advance_by(len);
            self.eat_while(|c| c.is_ascii_digit());
        }
    }

    fn scan_suffixes(&mut self) {
        self.match_char('L');
        self.match_char('i');
    }

    /// Consume characters matching `pred`, returning how many were consumed.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(&pred) {
            self.advance();
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{LexErrorKind, TokenKind, lex};

    fn single(source: &str) -> (TokenKind, String) {
        let tokens = lex(source);
        (tokens[0].kind, tokens[0].contents.clone())
    }

    #[test]
    fn test_decimal_forms() {
        for source in ["1", "42", "1.", "1.5", ".5", "1e10", "1.5E-3", "2e+8", "10L", "3i", "1e3L", "2Li"] {
            assert_eq!(single(source), (TokenKind::Number, source.to_string()), "{source}");
        }
    }

    #[test]
    fn test_hex_forms() {
        for source in ["0x10", "0XfF", "0x1.8p3", "0x.8", "0xFFL", "0x1p-2i"] {
            assert_eq!(single(source), (TokenKind::Number, source.to_string()), "{source}");
        }
    }

    #[test]
    fn test_exponent_needs_digits() {
        let tokens = lex("1e");
        assert_eq!(tokens[0].contents, "1");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].contents, "e");
    }

    #[test]
    fn test_hex_without_digits_is_invalid() {
        assert_eq!(
            single("0x"),
            (TokenKind::Invalid(LexErrorKind::MalformedNumber), "0x".to_string())
        );
    }

    #[test]
    fn test_number_before_operator() {
        let tokens = lex("1:10");
        assert_eq!(tokens[0].contents, "1");
        assert_eq!(tokens[2].contents, "10");
    }
}
