use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Lexing or parsing failure; every variant aborts the whole `simplify` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty expression")]
    EmptyExpression,
    #[error("= expected")]
    AssignExpected,
    #[error(") expected")]
    CloseExpected,
    #[error("Primary expected")]
    PrimaryExpected,
    #[error("Bad token")]
    BadToken,
    #[error("Bad float")]
    BadFloat,
    #[error("Bad int")]
    BadInt,
}
