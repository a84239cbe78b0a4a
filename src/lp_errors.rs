use thiserror::Error;

/// Everything that can go wrong between reading an input file and writing
/// the dual. Syntax variants carry the offending line as it looked after
/// normalization, since that is the text the parser actually saw.
#[derive(Debug, Error)]
pub enum LpError {
    #[error("the linear problem type is not valid\nTry adding min/max in front of the objective function, e.g.: max 3x1+5x2")]
    Direction,

    #[error("the objective function \"{0}\" is not valid\nTry this form: max 3x1+5x2")]
    ObjectiveSyntax(String),

    #[error("the subject-to keyword is missing or not valid in \"{0}\"\nTry this form: st 3x1+3x2>=2 (s.t. and subjectto are also accepted)")]
    Keyword(String),

    #[error("the constraint \"{0}\" is not valid\nTry this form: 3x1+3x2>=2")]
    ConstraintSyntax(String),

    #[error("variable x{index} appears more than once in \"{line}\"")]
    DuplicateVariable { index: usize, line: String },

    #[error("the matrix line \"{0}\" is not valid\nExpected the canonical dump, e.g.: c = [3, 5]")]
    MatrixSyntax(String),

    #[error("the matrix dump ended early; expected {0}")]
    MatrixTruncated(&'static str),

    #[error("failed to read the LP file")]
    FileRead(#[source] std::io::Error),

    #[error("failed to write the matrix file")]
    FileWrite(#[source] std::io::Error),
}
