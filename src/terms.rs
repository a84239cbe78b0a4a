//! The term grammar of the LP notation: `[sign][coefficient]x<index>`,
//! concatenated without separators. Both the validator and the extractor go
//! through this one scanner, so what passes validation is exactly what gets
//! extracted.

use crate::number::Number;
use num::Zero;
use std::collections::HashSet;

/// The resolved sign of a term. An absent sign and an explicit `+` mean the
/// same thing everywhere, so they collapse at scan time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

/// One scanned term, still carrying the distinction between "no coefficient
/// written" and "coefficient written" until `coefficient` resolves it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Term {
    pub(crate) sign: Sign,
    pub(crate) literal: Option<Number>,
    pub(crate) index: usize,
}

impl Term {
    /// Resolve sign and literal to the signed coefficient:
    /// `x3` is +1, `-x3` is -1, `3x3` is +3, `-3x3` is -3. The sign negates
    /// the parsed magnitude; it is never glued back onto the text.
    pub(crate) fn coefficient(&self) -> Number {
        match (self.sign, self.literal) {
            (Sign::Positive, None) => Number::Int(1),
            (Sign::Negative, None) => Number::Int(-1),
            (Sign::Positive, Some(value)) => value,
            (Sign::Negative, Some(value)) => -value,
        }
    }
}

struct Cursor<'a> {
    expr: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.expr.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn done(&self) -> bool {
        self.pos == self.expr.len()
    }

    /// Consume a run of ASCII digits and return it, or `None` if there is
    /// not even one. Only ASCII is ever consumed, so the slice is valid.
    fn digits(&mut self) -> Option<&'a str> {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.bump();
        }
        (self.pos > start).then(|| &self.expr[start..self.pos])
    }
}

/// Scan a whole expression into terms, left to right, non-overlapping.
/// `None` means the expression does not match the term grammar: an empty
/// expression, a dangling sign or literal, a double operator, an index of
/// zero, or trailing characters that start no term.
pub(crate) fn scan(expr: &str) -> Option<Vec<Term>> {
    let mut cursor = Cursor { expr, pos: 0 };
    let mut terms = vec![term(&mut cursor, true)?];
    while !cursor.done() {
        terms.push(term(&mut cursor, false)?);
    }
    Some(terms)
}

fn term(cursor: &mut Cursor, first: bool) -> Option<Term> {
    let sign = match cursor.peek() {
        Some(b'+') => {
            cursor.bump();
            Sign::Positive
        }
        Some(b'-') => {
            cursor.bump();
            Sign::Negative
        }
        // Only the leading term may leave its sign implicit; later terms
        // need the connective.
        _ if first => Sign::Positive,
        _ => return None,
    };

    let literal = match cursor.peek() {
        Some(b'0'..=b'9') => {
            let start = cursor.pos;
            cursor.digits();
            if cursor.peek() == Some(b'.') {
                cursor.bump();
                cursor.digits()?;
            }
            Some(cursor.expr[start..cursor.pos].parse::<Number>().ok()?)
        }
        _ => None,
    };

    if cursor.peek() != Some(b'x') {
        return None;
    }
    cursor.bump();

    let index = cursor.digits()?.parse::<usize>().ok()?;
    if index == 0 {
        // Variables are numbered from one.
        return None;
    }

    Some(Term { sign, literal, index })
}

/// The first variable index that occurs twice, in scan order.
pub(crate) fn first_duplicate(terms: &[Term]) -> Option<usize> {
    let mut seen = HashSet::new();
    terms.iter().map(|t| t.index).find(|&index| !seen.insert(index))
}

/// Spread scanned terms over a dense row of length `n`. Positions no term
/// names stay at zero; duplicate indices were rejected up front, so each
/// position is written at most once.
pub(crate) fn dense_row(terms: &[Term], n: usize) -> Vec<Number> {
    let mut row = vec![Number::zero(); n];
    for term in terms {
        row[term.index - 1] = term.coefficient();
    }
    row
}
