//! Convert linear programs written in a compact text notation into dense
//! canonical matrices and derive their duals.
//!
//! A problem arrives either as LP notation (`max 3x1+5x2` followed by `st`
//! constraints) or as a previously written matrix dump, becomes a
//! [`LinearProgram`], and leaves as the matrix dump of its dual.
//!
//! ```
//! use dualize::{Direction, LinearProgram};
//!
//! let text = "max 3x1+5x2\nst x1+2x2<=14\n3x1-x2>=0\nx1-x2<=2\n";
//! let primal = LinearProgram::from_lp_text(text)?;
//! let dual = primal.dual();
//! assert_eq!(dual.direction, Direction::Minimize);
//! assert_eq!(dual.num_variables(), 3);
//! # Ok::<(), dualize::LpError>(())
//! ```

mod dual;
mod grammar;
mod lp_errors;
mod lp_reader;
mod lp_writer;
mod number;
mod terms;

pub use crate::lp_errors::LpError;
pub use crate::number::{Number, ParseNumberError};

use std::fmt;
use std::ops::Not;

/// Optimization direction of a problem.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Not for Direction {
    type Output = Direction;

    fn not(self) -> Direction {
        match self {
            Direction::Maximize => Direction::Minimize,
            Direction::Minimize => Direction::Maximize,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Maximize => write!(f, "max"),
            Direction::Minimize => write!(f, "min"),
        }
    }
}

/// How a constraint row relates to its right-hand side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Relation {
    LessOrEqual,
    GreaterOrEqual,
    Equal,
}

impl Relation {
    /// The Eqin code of this relation in the matrix dump.
    pub fn code(self) -> i64 {
        match self {
            Relation::LessOrEqual => -1,
            Relation::GreaterOrEqual => 1,
            Relation::Equal => 0,
        }
    }

    /// The relation named by an Eqin code. Only the exact integers -1, 1
    /// and 0 name one; fractional codes do not.
    pub fn from_code(code: Number) -> Option<Relation> {
        match code {
            Number::Int(-1) => Some(Relation::LessOrEqual),
            Number::Int(1) => Some(Relation::GreaterOrEqual),
            Number::Int(0) => Some(Relation::Equal),
            _ => None,
        }
    }
}

/// A linear program in canonical dense form: an objective row and a
/// constraint matrix, with one relation and right-hand side per matrix row.
/// Variables are implicit columns, numbered from one in the notation.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram {
    pub direction: Direction,
    pub objective: Vec<Number>,
    pub constraints: Vec<Vec<Number>>,
    pub relations: Vec<Relation>,
    pub rhs: Vec<Number>,
}

impl LinearProgram {
    /// Number of variables (columns of the constraint matrix).
    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraints (rows of the constraint matrix).
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}
