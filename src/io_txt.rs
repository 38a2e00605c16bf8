use std::path::Path;
use crate::ConvertError;

/// start of a comment running to the end of the line
const COMMENT: char = '#';


/// parse every whitespace-delimited token as an f32, in text order.
/// Stops at the first malformed token.
pub fn parse_samples(text:&str) -> Result<Vec<f32>,ConvertError> {
    let mut samples = vec![];
    for (i,line) in text.lines().enumerate() {
        let data = match line.find(COMMENT) {
            Some(c) => &line[..c],
            None => line,
        };
        for token in data.split_whitespace() {
            let x = token.parse::<f32>().map_err(|_| ConvertError::Parse {
                line: i + 1,
                token: token.to_string(),
            })?;
            samples.push(x);
        }
    }
    Ok(samples)
}

/// read a whitespace-delimited text file of samples into a flat buffer
pub fn read_txt_samples(file:impl AsRef<Path>) -> Result<Vec<f32>,ConvertError> {
    let file = file.as_ref();
    let text = std::fs::read_to_string(file).map_err(|e| ConvertError::io(file,e))?;
    let samples = parse_samples(&text)?;
    tracing::debug!(path = %file.display(), samples = samples.len(), "parsed text samples");
    Ok(samples)
}
