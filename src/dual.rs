use crate::number::Number;
use crate::{Direction, LinearProgram, Relation};

impl LinearProgram {
    /// The dual problem: the constraint matrix is transposed, the objective
    /// and right-hand side trade places under the flipped direction.
    ///
    /// Every dual constraint gets the same relation, `>=` when the dual
    /// minimizes and `<=` when it maximizes. That is the symmetric-form
    /// rule for problems whose variables are all non-negative; the
    /// relations of the primal rows would only affect the signs of the
    /// dual variables, which this form does not track.
    pub fn dual(&self) -> LinearProgram {
        let direction = !self.direction;
        let relation = match direction {
            Direction::Minimize => Relation::GreaterOrEqual,
            Direction::Maximize => Relation::LessOrEqual,
        };
        LinearProgram {
            direction,
            objective: self.rhs.clone(),
            constraints: transpose(&self.constraints),
            relations: vec![relation; self.num_variables()],
            rhs: self.objective.clone(),
        }
    }
}

fn transpose(rows: &[Vec<Number>]) -> Vec<Vec<Number>> {
    let cols = rows.first().map_or(0, Vec::len);
    (0..cols)
        .map(|col| rows.iter().map(|row| row[col]).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primal() -> LinearProgram {
        LinearProgram::from_lp_text("max 3x1+5x2\nst x1+2x2<=14\n3x1-x2>=0\nx1-x2<=2\n").unwrap()
    }

    #[test]
    fn dual_of_the_max_problem() {
        let dual = primal().dual();
        assert_eq!(dual.direction, Direction::Minimize);
        assert_eq!(
            dual.objective,
            vec![Number::Int(14), Number::Int(0), Number::Int(2)]
        );
        assert_eq!(
            dual.constraints,
            vec![
                vec![Number::Int(1), Number::Int(3), Number::Int(1)],
                vec![Number::Int(2), Number::Int(-1), Number::Int(-1)],
            ]
        );
        assert_eq!(
            dual.relations,
            vec![Relation::GreaterOrEqual, Relation::GreaterOrEqual]
        );
        assert_eq!(dual.rhs, vec![Number::Int(3), Number::Int(5)]);
    }

    #[test]
    fn minimization_dualizes_to_upper_bounds() {
        let program = LinearProgram::from_lp_text("min x1+x2\nst x1+x2>=1\n").unwrap();
        let dual = program.dual();
        assert_eq!(dual.direction, Direction::Maximize);
        assert_eq!(
            dual.relations,
            vec![Relation::LessOrEqual, Relation::LessOrEqual]
        );
    }

    #[test]
    fn dualizing_twice_restores_the_matrices() {
        let primal = primal();
        let twice = primal.dual().dual();
        assert_eq!(twice.direction, primal.direction);
        assert_eq!(twice.objective, primal.objective);
        assert_eq!(twice.constraints, primal.constraints);
        assert_eq!(twice.rhs, primal.rhs);
        // The relations do not survive: both dualizations level them.
        assert_eq!(twice.relations, vec![Relation::LessOrEqual; 3]);
    }
}
