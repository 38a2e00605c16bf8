use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use crate::ConvertError;

const BYTES_PER_SAMPLE:usize = size_of::<f32>();


/// write samples as headerless native-endian f32 values
pub fn write_raw(file:impl AsRef<Path>, data:&[f32]) -> Result<(),ConvertError> {
    let file = file.as_ref();
    let f = File::create(file).map_err(|e| ConvertError::io(file,e))?;
    let mut w = BufWriter::new(f);
    let bytes:&[u8] = bytemuck::cast_slice(data);
    w.write_all(bytes).map_err(|e| ConvertError::io(file,e))?;
    w.flush().map_err(|e| ConvertError::io(file,e))?;
    tracing::debug!(path = %file.display(), bytes = bytes.len(), "wrote raw samples");
    Ok(())
}

/// read a headerless native-endian f32 file back into a buffer
pub fn read_raw(file:impl AsRef<Path>) -> Result<Vec<f32>,ConvertError> {
    let file = file.as_ref();
    let mut bytes = vec![];
    File::open(file).and_then(|mut f| f.read_to_end(&mut bytes)).map_err(|e| ConvertError::io(file,e))?;
    if bytes.len() % BYTES_PER_SAMPLE != 0 {
        let e = std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("file size {} is not a multiple of {BYTES_PER_SAMPLE} bytes",bytes.len()),
        );
        return Err(ConvertError::io(file,e));
    }
    // byte buffer may not be 4-byte aligned
    Ok(bytemuck::pod_collect_to_vec(&bytes))
}
