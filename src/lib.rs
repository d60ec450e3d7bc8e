//! Canonicalization of polynomial equations over single-letter variables:
//! parsing `lhs = rhs`, collapsing both sides into one polynomial, combining
//! like terms, and rendering the result as `<polynomial>=0`.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod polynomial;
pub mod simplify;
pub mod term;

pub use error::{ParseError, Result};
pub use lexer::{Lexer, Token};
pub use parser::Parser;
pub use polynomial::Polynomial;
pub use simplify::simplify;
pub use term::{Signature, Term};
