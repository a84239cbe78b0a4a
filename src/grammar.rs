//! Line-level grammar of the LP notation. Lines arrive already normalized
//! (whitespace stripped, lowercased): line 0 is the direction plus the
//! objective, line 1 opens with the subject-to keyword, and every line from
//! 1 on is a constraint around exactly one relational operator.

use crate::lp_errors::LpError;
use crate::number::Number;
use crate::terms;
use crate::{Direction, Relation};

/// Accepted spellings of the subject-to keyword, longest first so that a
/// prefix never shadows a longer spelling.
const SUBJECT_TO: [&str; 3] = ["subjectto", "s.t.", "st"];

pub(crate) fn strip_direction(line: &str) -> Option<(Direction, &str)> {
    if let Some(rest) = line.strip_prefix("max") {
        Some((Direction::Maximize, rest))
    } else if let Some(rest) = line.strip_prefix("min") {
        Some((Direction::Minimize, rest))
    } else {
        None
    }
}

pub(crate) fn strip_subject_to(line: &str) -> Option<&str> {
    SUBJECT_TO.iter().find_map(|keyword| line.strip_prefix(keyword))
}

pub(crate) struct ConstraintParts<'a> {
    pub(crate) lhs: &'a str,
    pub(crate) relation: Relation,
    pub(crate) rhs: &'a str,
}

/// Split a constraint around its relational operator. `None` when the line
/// holds no operator or more than one.
pub(crate) fn split_constraint(line: &str) -> Option<ConstraintParts<'_>> {
    let bytes = line.as_bytes();
    let mut found: Option<(usize, usize, Relation)> = None;
    let mut i = 0;
    while i < bytes.len() {
        let (width, relation) = if bytes[i..].starts_with(b"<=") {
            (2, Relation::LessOrEqual)
        } else if bytes[i..].starts_with(b">=") {
            (2, Relation::GreaterOrEqual)
        } else if bytes[i] == b'=' {
            (1, Relation::Equal)
        } else {
            i += 1;
            continue;
        };
        if found.is_some() {
            return None;
        }
        found = Some((i, width, relation));
        i += width;
    }
    let (at, width, relation) = found?;
    Some(ConstraintParts {
        lhs: &line[..at],
        relation,
        rhs: &line[at + width..],
    })
}

/// Validate the whole program before anything is extracted. Structural
/// rules run first over every line; the duplicate-variable rule only runs
/// once the program is known to be well formed.
pub(crate) fn check(lines: &[String]) -> Result<(), LpError> {
    let header = lines.first().ok_or(LpError::Direction)?;
    let (_, objective_expr) = strip_direction(header).ok_or(LpError::Direction)?;
    let objective = terms::scan(objective_expr)
        .filter(|terms| terms.len() >= 2)
        .ok_or_else(|| LpError::ObjectiveSyntax(header.clone()))?;

    let st_line = lines.get(1).ok_or_else(|| LpError::Keyword(String::new()))?;
    let stripped = strip_subject_to(st_line).ok_or_else(|| LpError::Keyword(st_line.clone()))?;

    let mut line_terms = vec![(header, objective)];
    for (pos, line) in lines.iter().enumerate().skip(1) {
        let body = if pos == 1 { stripped } else { line.as_str() };
        let parts =
            split_constraint(body).ok_or_else(|| LpError::ConstraintSyntax(line.clone()))?;
        let terms =
            terms::scan(parts.lhs).ok_or_else(|| LpError::ConstraintSyntax(line.clone()))?;
        if parts.rhs.parse::<Number>().is_err() {
            return Err(LpError::ConstraintSyntax(line.clone()));
        }
        line_terms.push((line, terms));
    }

    for (line, terms) in &line_terms {
        if let Some(index) = terms::first_duplicate(terms) {
            return Err(LpError::DuplicateVariable {
                index,
                line: (*line).clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn well_formed_program_passes() {
        let program = lines(&["max3x1+5x2", "stx1+2x2<=14", "3x1-x2>=0", "x1-x2<=2"]);
        assert!(check(&program).is_ok());
    }

    #[test]
    fn missing_or_unknown_direction() {
        assert!(matches!(check(&lines(&[])), Err(LpError::Direction)));
        assert!(matches!(
            check(&lines(&["3x1+5x2", "stx1<=1"])),
            Err(LpError::Direction)
        ));
    }

    #[test]
    fn single_term_objective_is_rejected() {
        let err = check(&lines(&["maxx1", "stx1<=1"])).unwrap_err();
        assert!(matches!(err, LpError::ObjectiveSyntax(line) if line == "maxx1"));
    }

    #[test]
    fn subject_to_keyword_is_required() {
        assert!(matches!(
            check(&lines(&["max3x1+5x2"])),
            Err(LpError::Keyword(_))
        ));
        let err = check(&lines(&["max3x1+5x2", "x1+2x2<=14"])).unwrap_err();
        assert!(matches!(err, LpError::Keyword(line) if line == "x1+2x2<=14"));
    }

    #[test]
    fn every_keyword_spelling_is_accepted() {
        for keyword in ["st", "s.t.", "subjectto"] {
            let program = lines(&["max3x1+5x2", &format!("{keyword}x1+2x2<=14")]);
            assert!(check(&program).is_ok(), "{keyword}");
        }
    }

    #[test]
    fn constraint_without_operator_is_rejected() {
        let err = check(&lines(&["max3x1+5x2", "stx1+2x2"])).unwrap_err();
        assert!(matches!(err, LpError::ConstraintSyntax(line) if line == "stx1+2x2"));
    }

    #[test]
    fn constraint_with_two_operators_is_rejected() {
        let program = lines(&["max3x1+5x2", "stx1<=2<=3"]);
        assert!(matches!(check(&program), Err(LpError::ConstraintSyntax(_))));
    }

    #[test]
    fn signed_right_hand_sides() {
        assert!(check(&lines(&["max3x1+5x2", "stx1+x2<=-14"])).is_ok());
        assert!(check(&lines(&["max3x1+5x2", "stx1+x2<=14.5"])).is_ok());
        assert!(matches!(
            check(&lines(&["max3x1+5x2", "stx1+x2<=+14"])),
            Err(LpError::ConstraintSyntax(_))
        ));
    }

    #[test]
    fn equality_constraints_are_valid() {
        assert!(check(&lines(&["max3x1+5x2", "stx1+x2=4"])).is_ok());
    }

    #[test]
    fn oversized_literal_is_a_syntax_error_of_its_line() {
        let huge = "9".repeat(310);
        let err = check(&lines(&[&format!("max{huge}x1+5x2"), "stx1+x2<=4"])).unwrap_err();
        assert!(matches!(err, LpError::ObjectiveSyntax(_)));
        let err = check(&lines(&["max3x1+5x2", &format!("stx1+x2<={huge}")])).unwrap_err();
        assert!(matches!(err, LpError::ConstraintSyntax(_)));
    }

    #[test]
    fn keyword_on_a_later_line_is_not_stripped() {
        let err = check(&lines(&["max3x1+5x2", "stx1<=5", "stx2<=3"])).unwrap_err();
        assert!(matches!(err, LpError::ConstraintSyntax(line) if line == "stx2<=3"));
    }

    #[test]
    fn duplicate_variable_is_reported_with_its_line() {
        let err = check(&lines(&["max3x1+5x2", "stx1+x2-x2<=5"])).unwrap_err();
        assert!(matches!(
            err,
            LpError::DuplicateVariable { index: 2, line } if line == "stx1+x2-x2<=5"
        ));
        let err = check(&lines(&["maxx1+x1", "stx1<=1"])).unwrap_err();
        assert!(matches!(err, LpError::DuplicateVariable { index: 1, .. }));
    }

    #[test]
    fn structural_errors_outrank_duplicates() {
        // The duplicate sits on line 1 but the malformed line 2 wins.
        let program = lines(&["max3x1+5x2", "stx1+x1<=5", "x2"]);
        assert!(matches!(check(&program), Err(LpError::ConstraintSyntax(_))));
    }
}
