use anyhow::Result;
use argh::FromArgs;
use dualize::LinearProgram;
use std::path::PathBuf;

#[derive(FromArgs)]
/// Convert a linear program to canonical matrix form and derive its dual.
struct Args {
    /// input file holding the primal problem
    #[argh(option, short = 'i', default = "PathBuf::from(\"lp_files/lp.txt\")")]
    input: PathBuf,

    /// output file for the dual's matrix dump
    #[argh(
        option,
        short = 'o',
        default = "PathBuf::from(\"lp_files/output_dual.txt\")"
    )]
    output: PathBuf,

    /// set when the input file already holds canonical matrices
    #[argh(switch, short = 'p')]
    parsed: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    println!("Reading {}...", args.input.display());
    let primal = if args.parsed {
        LinearProgram::from_matrix_path(&args.input)?
    } else {
        LinearProgram::from_lp_path(&args.input)?
    };

    println!("Creating the dual linear problem...");
    let dual = primal.dual();

    println!("Saving to {}...", args.output.display());
    dual.write_matrix_file(&args.output)?;
    println!("Done!");

    Ok(())
}
