//! Hand-written lexer with a single token of lookahead.

use crate::error::{ParseError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    End,
    Name(char),
    Number(f64),
    Plus,
    Minus,
    Mul,
    Power,
    Assign,
    Lp,
    Rp,
}

/// Cursor over the input string. The current token is overwritten on each
/// `next_token`; the parser is its only consumer.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    token: Token,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            token: Token::End,
        }
    }

    pub fn token(&self) -> Token {
        self.token
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Skips whitespace and classifies the next lexeme, or `End` at end of
    /// input. Each letter is a variable on its own; multi-letter names do
    /// not exist in this grammar.
    pub fn next_token(&mut self) -> Result<Token> {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
        let token = match self.peek() {
            None => Token::End,
            Some(c) if c.is_alphabetic() => {
                self.bump(c);
                Token::Name(c)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => Token::Number(self.read_float()?),
            Some(c @ ('+' | '-' | '*' | '^' | '=' | '(' | ')')) => {
                self.bump(c);
                match c {
                    '+' => Token::Plus,
                    '-' => Token::Minus,
                    '*' => Token::Mul,
                    '^' => Token::Power,
                    '=' => Token::Assign,
                    '(' => Token::Lp,
                    _ => Token::Rp,
                }
            }
            Some(_) => return Err(ParseError::BadToken),
        };
        self.token = token;
        Ok(token)
    }

    /// Longest prefix matching `[+-]?(\d+\.?\d*|\d*\.?\d+)([eE][+-]?\d+)?`.
    /// The guard in `next_token` means a match always exists here, but a
    /// lone `.` still has to be rejected.
    fn read_float(&mut self) -> Result<f64> {
        let rest = &self.input[self.pos..];
        let len = float_prefix(rest);
        if len == 0 {
            return Err(ParseError::BadFloat);
        }
        self.pos += len;
        rest[..len].parse().map_err(|_| ParseError::BadFloat)
    }

    /// Matches `[+-]?\d+` at the cursor, with no whitespace skipping: this
    /// reads the exponent straight after `^`, so `x^ 2` is rejected while
    /// `x^-2` is fine. Exponents must be integers even though bases can be
    /// floats.
    pub fn read_integer(&mut self) -> Result<i64> {
        let rest = &self.input[self.pos..];
        let bytes = rest.as_bytes();
        let mut i = 0;
        if matches!(bytes.first(), Some(b'+' | b'-')) {
            i += 1;
        }
        let digits = digit_run(&bytes[i..]);
        if digits == 0 {
            return Err(ParseError::BadInt);
        }
        i += digits;
        self.pos += i;
        rest[..i].parse().map_err(|_| ParseError::BadInt)
    }
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn float_prefix(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_digits = digit_run(&bytes[i..]);
    i += int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        let after = digit_run(&bytes[i + 1..]);
        // the mantissa needs a digit on at least one side of the dot
        if int_digits > 0 || after > 0 {
            i += 1 + after;
            frac_digits = after;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = digit_run(&bytes[j..]);
        // a bare `e` stays unconsumed; the mantissa alone is the match
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Result<Vec<Token>> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token()?;
            if token == Token::End {
                return Ok(out);
            }
            out.push(token);
        }
    }

    #[test]
    fn classifies_operators_and_atoms() {
        assert_eq!(
            tokens("x + 2*(y - 3) ^ ="),
            Ok(vec![
                Token::Name('x'),
                Token::Plus,
                Token::Number(2.0),
                Token::Mul,
                Token::Lp,
                Token::Name('y'),
                Token::Minus,
                Token::Number(3.0),
                Token::Rp,
                Token::Power,
                Token::Assign,
            ])
        );
    }

    #[test]
    fn each_letter_is_its_own_name() {
        assert_eq!(
            tokens("xy"),
            Ok(vec![Token::Name('x'), Token::Name('y')])
        );
    }

    #[test]
    fn float_forms() {
        assert_eq!(tokens("3.5"), Ok(vec![Token::Number(3.5)]));
        assert_eq!(tokens(".5"), Ok(vec![Token::Number(0.5)]));
        assert_eq!(tokens("5."), Ok(vec![Token::Number(5.0)]));
        assert_eq!(tokens("2e3"), Ok(vec![Token::Number(2000.0)]));
        assert_eq!(tokens("2.5E-1"), Ok(vec![Token::Number(0.25)]));
    }

    #[test]
    fn bare_exponent_marker_is_left_behind() {
        // `e` is not part of the number without digits after it
        assert_eq!(
            tokens("2e"),
            Ok(vec![Token::Number(2.0), Token::Name('e')])
        );
    }

    #[test]
    fn lone_dot_is_a_bad_float() {
        assert_eq!(tokens("."), Err(ParseError::BadFloat));
    }

    #[test]
    fn unknown_character_is_a_bad_token() {
        assert_eq!(tokens("x$"), Err(ParseError::BadToken));
    }

    #[test]
    fn read_integer_accepts_signs() {
        let mut lexer = Lexer::new("-12x");
        assert_eq!(lexer.read_integer(), Ok(-12));
        assert_eq!(lexer.next_token(), Ok(Token::Name('x')));
    }

    #[test]
    fn read_integer_rejects_leading_whitespace() {
        let mut lexer = Lexer::new(" 2");
        assert_eq!(lexer.read_integer(), Err(ParseError::BadInt));
    }

    #[test]
    fn read_integer_requires_digits() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.read_integer(), Err(ParseError::BadInt));
    }
}
