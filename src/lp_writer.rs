use crate::lp_errors::LpError;
use crate::LinearProgram;
use std::fmt;
use std::fs;
use std::path::Path;

fn write_vector<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (pos, item) in items.iter().enumerate() {
        if pos > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

/// The canonical matrix dump. The first constraint row shares the `A =`
/// line; every further row sits on its own tab-indented line. No trailing
/// newline, so the dump nests cleanly into other output.
impl fmt::Display for LinearProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} c = ", self.direction)?;
        write_vector(f, &self.objective)?;
        match self.constraints.split_first() {
            Some((first, rest)) => {
                write!(f, "\nA = ")?;
                write_vector(f, first)?;
                for row in rest {
                    write!(f, "\n\t")?;
                    write_vector(f, row)?;
                }
            }
            None => write!(f, "\nA = []")?,
        }
        let codes: Vec<i64> = self
            .relations
            .iter()
            .map(|relation| relation.code())
            .collect();
        write!(f, "\nEqin = ")?;
        write_vector(f, &codes)?;
        write!(f, "\nb = ")?;
        write_vector(f, &self.rhs)
    }
}

impl LinearProgram {
    /// Write the matrix dump to a file, newline terminated.
    pub fn write_matrix_file(&self, path: &Path) -> Result<(), LpError> {
        fs::write(path, format!("{self}\n")).map_err(LpError::FileWrite)
    }
}
