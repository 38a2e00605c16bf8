use std::path::PathBuf;
use crate::io_raw::write_raw;
use crate::io_txt::read_txt_samples;
use crate::{ConvertError, GridDim};

/// inputs for a single text-to-binary conversion
#[derive(Clone,Debug)]
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dims: GridDim,
}

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct ConvertReport {
    pub samples: usize,
    pub bytes_written: usize,
}


/// load the text samples, check the count against nx * ny * nt and write them as raw f32.
/// The output file is only created once the count has been validated.
pub fn convert(args:&ConvertArgs) -> Result<ConvertReport,ConvertError> {
    let samples = read_txt_samples(&args.input)?;

    if !args.dims.matches(samples.len()) {
        return Err(ConvertError::DimensionMismatch {
            dims: args.dims,
            expected: args.dims.numel(),
            actual: samples.len(),
        });
    }

    write_raw(&args.output,&samples)?;
    Ok(ConvertReport {
        samples: samples.len(),
        bytes_written: size_of_val(samples.as_slice()),
    })
}
