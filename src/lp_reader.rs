use crate::grammar;
use crate::lp_errors::LpError;
use crate::number::Number;
use crate::terms;
use crate::{LinearProgram, Relation};
use std::fs;
use std::path::Path;

/// Normalize raw text into logical lines: strip every whitespace character
/// and fold to lowercase; lines left empty are dropped. Line positions in
/// the grammar refer to these lines, not to the raw ones.
pub(crate) fn logical_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// The numbers inside one `[a, b, c]` vector, `None` when the brackets are
/// missing or any element fails to parse. Elements were comma separated
/// before normalization removed the spaces.
fn bracket_vector(s: &str) -> Option<Vec<Number>> {
    let inner = s.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() {
        return Some(Vec::new());
    }
    inner
        .split(',')
        .map(|item| item.parse::<Number>().ok())
        .collect()
}

impl LinearProgram {
    /// Read a problem written in LP notation from a file.
    pub fn from_lp_path(path: &Path) -> Result<LinearProgram, LpError> {
        let text = fs::read_to_string(path).map_err(LpError::FileRead)?;
        LinearProgram::from_lp_text(&text)
    }

    /// Parse a problem written in LP notation. The whole program is
    /// validated before any matrix is built, so nothing is extracted from a
    /// program whose last line is broken.
    pub fn from_lp_text(text: &str) -> Result<LinearProgram, LpError> {
        let lines = logical_lines(text);
        grammar::check(&lines)?;

        let header = lines.first().ok_or(LpError::Direction)?;
        let (direction, objective_expr) =
            grammar::strip_direction(header).ok_or(LpError::Direction)?;
        let objective_terms =
            terms::scan(objective_expr).ok_or_else(|| LpError::ObjectiveSyntax(header.clone()))?;

        let mut constraint_terms = Vec::new();
        let mut relations = Vec::new();
        let mut rhs = Vec::new();
        for (pos, line) in lines.iter().enumerate().skip(1) {
            let body = if pos == 1 {
                grammar::strip_subject_to(line).ok_or_else(|| LpError::Keyword(line.clone()))?
            } else {
                line.as_str()
            };
            let parts = grammar::split_constraint(body)
                .ok_or_else(|| LpError::ConstraintSyntax(line.clone()))?;
            let terms = terms::scan(parts.lhs)
                .ok_or_else(|| LpError::ConstraintSyntax(line.clone()))?;
            let bound = parts
                .rhs
                .parse::<Number>()
                .map_err(|_| LpError::ConstraintSyntax(line.clone()))?;
            constraint_terms.push(terms);
            relations.push(parts.relation);
            rhs.push(bound);
        }

        // The column count is the highest variable index seen anywhere in
        // the program, objective and constraints alike.
        let n = objective_terms
            .iter()
            .chain(constraint_terms.iter().flatten())
            .map(|term| term.index)
            .max()
            .unwrap_or(0);

        Ok(LinearProgram {
            direction,
            objective: terms::dense_row(&objective_terms, n),
            constraints: constraint_terms
                .iter()
                .map(|terms| terms::dense_row(terms, n))
                .collect(),
            relations,
            rhs,
        })
    }

    /// Read a problem already in canonical matrix form from a file.
    pub fn from_matrix_path(path: &Path) -> Result<LinearProgram, LpError> {
        let text = fs::read_to_string(path).map_err(LpError::FileRead)?;
        LinearProgram::from_matrix_text(&text)
    }

    /// Parse the matrix dump this crate writes: a `max c = [...]` header,
    /// `A = [...]` plus one bare `[...]` line per further row, then
    /// `Eqin = [...]` and `b = [...]`. Vector lengths must agree with each
    /// other, so a truncated or ragged dump never yields a program.
    pub fn from_matrix_text(text: &str) -> Result<LinearProgram, LpError> {
        let lines = logical_lines(text);

        let header = lines.first().ok_or(LpError::Direction)?;
        let (direction, rest) = grammar::strip_direction(header).ok_or(LpError::Direction)?;
        let objective = rest
            .strip_prefix("c=")
            .and_then(bracket_vector)
            .filter(|objective| !objective.is_empty())
            .ok_or_else(|| LpError::MatrixSyntax(header.clone()))?;
        let n = objective.len();

        let a_line = lines
            .get(1)
            .ok_or(LpError::MatrixTruncated("an A = [...] line"))?;
        let first_row = a_line
            .strip_prefix("a=")
            .and_then(bracket_vector)
            .ok_or_else(|| LpError::MatrixSyntax(a_line.clone()))?;
        if first_row.len() != n {
            return Err(LpError::MatrixSyntax(a_line.clone()));
        }

        let mut constraints = vec![first_row];
        let mut pos = 2;
        while let Some(line) = lines.get(pos).filter(|line| line.starts_with('[')) {
            let row = bracket_vector(line).ok_or_else(|| LpError::MatrixSyntax(line.clone()))?;
            if row.len() != n {
                return Err(LpError::MatrixSyntax(line.clone()));
            }
            constraints.push(row);
            pos += 1;
        }

        let eqin_line = lines
            .get(pos)
            .ok_or(LpError::MatrixTruncated("an Eqin = [...] line"))?;
        let relations: Vec<Relation> = eqin_line
            .strip_prefix("eqin=")
            .and_then(bracket_vector)
            .and_then(|codes| codes.into_iter().map(Relation::from_code).collect())
            .ok_or_else(|| LpError::MatrixSyntax(eqin_line.clone()))?;
        if relations.len() != constraints.len() {
            return Err(LpError::MatrixSyntax(eqin_line.clone()));
        }
        pos += 1;

        let b_line = lines
            .get(pos)
            .ok_or(LpError::MatrixTruncated("a b = [...] line"))?;
        let rhs = b_line
            .strip_prefix("b=")
            .and_then(bracket_vector)
            .ok_or_else(|| LpError::MatrixSyntax(b_line.clone()))?;
        if rhs.len() != constraints.len() {
            return Err(LpError::MatrixSyntax(b_line.clone()));
        }
        pos += 1;

        if let Some(extra) = lines.get(pos) {
            return Err(LpError::MatrixSyntax(extra.clone()));
        }

        Ok(LinearProgram {
            direction,
            objective,
            constraints,
            relations,
            rhs,
        })
    }
}
