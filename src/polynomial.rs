//! A sum of terms, deduplicated by variable-power signature.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;

use crate::term::{Signature, Term};

/// Map order is signature order, which fixes the rendering order: constants
/// first, then variable terms lexicographically by `(name, exponent)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polynomial {
    terms: BTreeMap<Signature, Term>,
}

impl Polynomial {
    pub fn new() -> Self {
        Polynomial {
            terms: BTreeMap::new(),
        }
    }

    pub fn from_term(term: Term) -> Self {
        let mut polynomial = Polynomial::new();
        polynomial.add_term(term);
        polynomial
    }

    /// Merges into an existing same-signature term's coefficient, or inserts.
    /// Zero-coefficient entries are swept by the ops, not here.
    pub fn add_term(&mut self, term: Term) {
        match self.terms.entry(term.signature()) {
            Entry::Vacant(entry) => {
                entry.insert(term);
            }
            Entry::Occupied(mut entry) => {
                entry.get_mut().coeff += term.coeff;
            }
        }
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    fn canonicalize(&mut self) {
        self.terms.retain(|_, term| !term.coeff.is_zero());
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        let mut result = self;
        for (signature, term) in rhs.terms {
            match result.terms.entry(signature) {
                Entry::Vacant(entry) => {
                    entry.insert(term);
                }
                Entry::Occupied(mut entry) => {
                    entry.get_mut().coeff += term.coeff;
                }
            }
        }
        result.canonicalize();
        result
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        let mut result = self;
        for (signature, term) in rhs.terms {
            match result.terms.entry(signature) {
                Entry::Vacant(entry) => {
                    entry.insert(-term);
                }
                Entry::Occupied(mut entry) => {
                    entry.get_mut().coeff -= term.coeff;
                }
            }
        }
        result.canonicalize();
        result
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    /// Full distribution: every term of the left against every term of the
    /// right, accumulated through `add_term`.
    fn mul(self, rhs: Polynomial) -> Polynomial {
        let mut result = Polynomial::new();
        for a in self.terms.values() {
            for b in rhs.terms.values() {
                result.add_term(a.clone() * b.clone());
            }
        }
        result.canonicalize();
        result
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        let mut result = Polynomial::new();
        for (_, term) in self.terms {
            let term = -term;
            result.terms.insert(term.signature(), term);
        }
        result
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::new()
    }

    fn is_zero(&self) -> bool {
        self.terms.values().all(|term| term.coeff.is_zero())
    }
}

impl fmt::Display for Polynomial {
    /// Non-zero terms in signature order, `+`-joined except where a term's
    /// own leading `-` acts as the separator. An empty sum renders as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for term in self.terms.values() {
            let rendered = term.to_string();
            if rendered.is_empty() {
                continue;
            }
            if !out.is_empty() && !rendered.starts_with('-') {
                out.push('+');
            }
            out.push_str(&rendered);
        }
        if out.is_empty() {
            out.push('0');
        }
        f.write_str(&out)
    }
}
