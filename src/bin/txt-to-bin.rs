use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use txt_to_bin::{convert, ConvertArgs, ConvertError, GridDim};

/// Convert a whitespace-delimited text file of f32 samples (a flattened nx x ny x nt array)
/// into a headerless native-endian binary file
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
struct Args {
    /// text file of samples to read
    input: PathBuf,
    /// raw binary file to write
    output: PathBuf,
    nx: i64,
    ny: i64,
    nt: i64,
}

fn main() -> ExitCode {

    let args = Args::parse();

    // verbosity comes from RUST_LOG only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ ConvertError::DimensionMismatch { .. }) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }

}

fn run(args:Args) -> Result<(),ConvertError> {
    let dims = GridDim::new(args.nx,args.ny,args.nt);
    let report = convert(&ConvertArgs {
        input: args.input,
        output: args.output,
        dims,
    })?;
    tracing::debug!(samples = report.samples, bytes = report.bytes_written, %dims, "conversion complete");
    Ok(())
}
