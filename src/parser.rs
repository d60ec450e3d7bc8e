//! Recursive-descent parser.
//!
//! Grammar, one token of lookahead held in the lexer, no backtracking:
//!
//! ```text
//! full → expr '=' expr
//! expr → term (('+' | '-') term)*
//! term → prim (('*' | implicit) prim)*
//! prim → NUMBER | NAME | '-' prim | '(' expr ')'
//! ```
//!
//! Adjacent factors multiply without an operator: `3x`, `xy`, `2(x+1)`,
//! `(x+y)(x-y)`. The `consume_first` flag on each level says whether the
//! first token still has to be read or was already read by the caller.

use crate::error::{ParseError, Result};
use crate::lexer::{Lexer, Token};
use crate::polynomial::Polynomial;
use crate::term::Term;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(input),
        }
    }

    /// Parses the whole equation and returns `left - right`.
    pub fn full(&mut self) -> Result<Polynomial> {
        self.lexer.next_token()?;
        let left = self.expr(false)?;
        if self.lexer.token() != Token::Assign {
            return Err(ParseError::AssignExpected);
        }
        let right = self.expr(true)?;
        Ok(left - right)
    }

    fn expr(&mut self, consume_first: bool) -> Result<Polynomial> {
        let mut left = self.term(consume_first)?;
        loop {
            match self.lexer.token() {
                Token::Plus => left = left + self.term(true)?,
                Token::Minus => left = left - self.term(true)?,
                _ => return Ok(left),
            }
        }
    }

    fn term(&mut self, consume_first: bool) -> Result<Polynomial> {
        let mut left = self.prim(consume_first)?;
        loop {
            match self.lexer.token() {
                Token::Mul => left = left * self.prim(true)?,
                Token::Name(_) | Token::Number(_) | Token::Lp => {
                    left = left * self.prim(false)?;
                }
                _ => return Ok(left),
            }
        }
    }

    fn prim(&mut self, consume_first: bool) -> Result<Polynomial> {
        if consume_first {
            self.lexer.next_token()?;
        }
        match self.lexer.token() {
            Token::Number(value) => {
                self.lexer.next_token()?;
                let coeff = if self.lexer.token() == Token::Power {
                    let exponent = self.lexer.read_integer()?;
                    self.lexer.next_token()?;
                    value.powf(exponent as f64)
                } else {
                    value
                };
                Ok(Polynomial::from_term(Term::constant(coeff)))
            }
            Token::Name(name) => {
                self.lexer.next_token()?;
                let exponent = if self.lexer.token() == Token::Power {
                    let exponent = self.lexer.read_integer()?;
                    self.lexer.next_token()?;
                    exponent
                } else {
                    1
                };
                Ok(Polynomial::from_term(Term::variable(name, exponent)))
            }
            Token::Minus => Ok(-self.prim(true)?),
            Token::Lp => {
                let inner = self.expr(true)?;
                if self.lexer.token() != Token::Rp {
                    return Err(ParseError::CloseExpected);
                }
                self.lexer.next_token()?;
                // A `^` after `)` is deliberately not handled: the term loop
                // above stops on `Power`, and the dangling token fails the
                // parse further up. Exponentiating a parenthesized group is
                // unsupported.
                Ok(inner)
            }
            _ => Err(ParseError::PrimaryExpected),
        }
    }
}
