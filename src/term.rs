//! A single monomial: coefficient times a product of variable powers.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Mul, Neg};

use num_traits::Zero;

/// Sorted `(name, exponent)` pairs identifying a term's shape for grouping.
/// Constants have the empty signature, which orders before every variable
/// signature.
pub type Signature = Vec<(char, i64)>;

#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    pub coeff: f64,
    powers: BTreeMap<char, i64>,
}

impl Term {
    pub fn constant(coeff: f64) -> Self {
        Term {
            coeff,
            powers: BTreeMap::new(),
        }
    }

    pub fn variable(name: char, exponent: i64) -> Self {
        let mut powers = BTreeMap::new();
        powers.insert(name, exponent);
        let mut term = Term { coeff: 1.0, powers };
        term.canonicalize();
        term
    }

    pub fn signature(&self) -> Signature {
        self.powers.iter().map(|(&name, &exp)| (name, exp)).collect()
    }

    pub fn is_constant(&self) -> bool {
        self.powers.is_empty()
    }

    fn canonicalize(&mut self) {
        self.powers.retain(|_, exp| *exp != 0);
    }
}

impl Mul for Term {
    type Output = Term;

    fn mul(self, rhs: Term) -> Term {
        let mut powers = self.powers;
        for (name, exp) in rhs.powers {
            *powers.entry(name).or_insert(0) += exp;
        }
        let mut term = Term {
            coeff: self.coeff * rhs.coeff,
            powers,
        };
        term.canonicalize();
        term
    }
}

impl Neg for Term {
    type Output = Term;

    fn neg(mut self) -> Term {
        self.coeff = -self.coeff;
        self
    }
}

impl fmt::Display for Term {
    /// Zero-coefficient terms render as the empty string. A coefficient of
    /// magnitude one is suppressed in front of variable factors but always
    /// shown for constants; exact IEEE comparisons keep the formatting
    /// deterministic.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeff.is_zero() {
            return Ok(());
        }
        let mut out = String::new();
        for (&name, &exp) in &self.powers {
            if exp == 1 {
                out.push(name);
            } else {
                out.push_str(&format!("{name}^{exp}"));
            }
        }
        if out.is_empty() {
            out = format_coeff(self.coeff);
        } else if self.coeff.abs() != 1.0 {
            out = format!("{}{}", format_coeff(self.coeff), out);
        }
        if self.coeff < 0.0 && !out.starts_with('-') {
            out.insert(0, '-');
        }
        f.write_str(&out)
    }
}

/// `{:?}` on `f64` always keeps a fractional part on integral values
/// (`2.0`, not `2`), which is the representation the canonical form uses.
fn format_coeff(coeff: f64) -> String {
    format!("{coeff:?}")
}
