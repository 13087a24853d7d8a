use crate::codebook::Codebook;
use crate::error::Result;
use crate::lyric::{encode_text, EncodeOptions};
use std::path::Path;

/// Encrypt plaintext with the theme at `theme` (bundled theme if `None`)
pub fn encrypt_with_theme(
    plaintext: &str,
    theme: Option<&Path>,
    options: &EncodeOptions,
) -> Result<String> {
    let codebook = Codebook::load_or_default(theme)?;
    Ok(encode_text(plaintext, &codebook, options))
}
