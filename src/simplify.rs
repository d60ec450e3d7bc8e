use crate::error::{ParseError, Result};
use crate::parser::Parser;

/// Reduces an equation `lhs = rhs` to its canonical form `<polynomial>=0`:
/// the right side is subtracted from the left, like terms are combined, and
/// terms are emitted in signature order.
///
/// ```
/// use eqcanon::simplify;
///
/// let out = simplify("x^2 + 3.5xy + y = y^2 - xy + y").unwrap();
/// assert_eq!(out, "4.5xy+x^2-y^2=0");
/// ```
pub fn simplify(expression: &str) -> Result<String> {
    if expression.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    let mut parser = Parser::new(expression);
    let polynomial = parser.full()?;
    Ok(format!("{polynomial}=0"))
}
