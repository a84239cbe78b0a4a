use num::Zero;
use std::fmt;
use std::ops::{Add, Neg};
use std::str::FromStr;
use thiserror::Error;

/// One matrix entry. Integers and decimals keep their own representation, so
/// a vector can mix both the way the text notation writes them; nothing is
/// widened until arithmetic forces it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("not an integer or decimal literal")]
pub struct ParseNumberError;

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }
}

fn all_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Number {
    type Err = ParseNumberError;

    /// Accepts exactly the literals of the LP notation: an optional leading
    /// minus and digits, with at most one decimal point carrying digits on
    /// both sides. Everything else (`+5`, `4.`, `.5`, `1e3`, `inf`) is
    /// rejected, so every consumer of numeric text shares one grammar. A
    /// literal whose value does not fit even an f64 is rejected as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (unsigned, None),
        };
        if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
            return Err(ParseNumberError);
        }
        if frac_part.is_none() {
            // Integral literals too large for i64 still have a value; they
            // degrade to the float representation.
            if let Ok(v) = s.parse::<i64>() {
                return Ok(Number::Int(v));
            }
        }
        match s.parse::<f64>() {
            // f64 parsing saturates out-of-range literals to infinity
            // instead of failing, and an infinite value has no literal form.
            Ok(v) if v.is_finite() => Ok(Number::Float(v)),
            _ => Err(ParseNumberError),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            // A whole-valued float keeps its trailing .0 so the dump reads
            // back as a float, not an integer.
            Number::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{v:.1}"),
            Number::Float(v) => write!(f, "{v}"),
        }
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(v) => match v.checked_neg() {
                Some(n) => Number::Int(n),
                None => Number::Float(-(v as f64)),
            },
            Number::Float(v) => Number::Float(-v),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(v) => Number::Int(v),
                None => Number::Float(a as f64 + b as f64),
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Number::Int(0)
    }

    fn is_zero(&self) -> bool {
        match self {
            Number::Int(v) => *v == 0,
            Number::Float(v) => *v == 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_decimals() {
        assert_eq!("14".parse::<Number>(), Ok(Number::Int(14)));
        assert_eq!("-4".parse::<Number>(), Ok(Number::Int(-4)));
        assert_eq!("4.5".parse::<Number>(), Ok(Number::Float(4.5)));
        assert_eq!("-0.25".parse::<Number>(), Ok(Number::Float(-0.25)));
        assert_eq!("007".parse::<Number>(), Ok(Number::Int(7)));
    }

    #[test]
    fn rejects_everything_outside_the_literal_grammar() {
        for bad in ["", "-", "+5", "4.", ".5", "1.2.3", "1e3", "inf", "NaN", "x", "1 "] {
            assert_eq!(bad.parse::<Number>(), Err(ParseNumberError), "{bad:?}");
        }
    }

    #[test]
    fn oversized_integral_literal_degrades_to_float() {
        let parsed = "99999999999999999999".parse::<Number>().unwrap();
        assert!(matches!(parsed, Number::Float(v) if v == 1e20));
    }

    #[test]
    fn literals_beyond_f64_range_are_rejected() {
        let huge = format!("1{}", "0".repeat(309));
        assert_eq!(huge.parse::<Number>(), Err(ParseNumberError));
        assert_eq!(format!("-{huge}").parse::<Number>(), Err(ParseNumberError));
        assert_eq!(format!("{huge}.5").parse::<Number>(), Err(ParseNumberError));
    }

    #[test]
    fn whole_floats_keep_their_decimal_point() {
        assert_eq!(Number::Int(3).to_string(), "3");
        assert_eq!(Number::Int(-14).to_string(), "-14");
        assert_eq!(Number::Float(4.5).to_string(), "4.5");
        assert_eq!(Number::Float(3.0).to_string(), "3.0");
        assert_eq!(Number::Float(-2.0).to_string(), "-2.0");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for n in [Number::Int(0), Number::Int(-7), Number::Float(3.0), Number::Float(-4.5)] {
            assert_eq!(n.to_string().parse::<Number>(), Ok(n));
        }
    }

    #[test]
    fn zero_is_the_integer_zero() {
        assert_eq!(Number::zero(), Number::Int(0));
        assert!(Number::Int(0).is_zero());
        assert!(Number::Float(0.0).is_zero());
        assert!(!Number::Float(0.5).is_zero());
    }

    #[test]
    fn addition_widens_only_when_it_must() {
        assert_eq!(Number::Int(2) + Number::Int(3), Number::Int(5));
        assert_eq!(Number::Int(2) + Number::Float(0.5), Number::Float(2.5));
        assert_eq!(
            Number::Int(i64::MAX) + Number::Int(1),
            Number::Float(i64::MAX as f64 + 1.0)
        );
    }

    #[test]
    fn negation_preserves_the_kind() {
        assert_eq!(-Number::Int(3), Number::Int(-3));
        assert_eq!(-Number::Float(4.5), Number::Float(-4.5));
        assert_eq!(-Number::Int(i64::MIN), Number::Float(-(i64::MIN as f64)));
    }
}
