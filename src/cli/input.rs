use crate::error::Result;
use std::io::Read;
use std::path::Path;

/// Where command text comes from, in priority order:
/// inline argument, `--input` file, then stdin
pub fn read_input(inline: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
