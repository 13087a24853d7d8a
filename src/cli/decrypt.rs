use crate::codebook::Codebook;
use crate::error::Result;
use crate::lyric::{decode_text, DecodeOptions};
use std::path::Path;

/// Decrypt lyric text with the theme at `theme` (bundled theme if `None`)
pub fn decrypt_with_theme(
    text: &str,
    theme: Option<&Path>,
    options: &DecodeOptions,
) -> Result<String> {
    let codebook = Codebook::load_or_default(theme)?;
    decode_text(text, &codebook, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LirikError;

    #[test]
    fn test_decrypt_unknown_word() {
        let err = decrypt_with_theme("cahaya bukan", None, &DecodeOptions::default()).unwrap_err();
        assert!(matches!(err, LirikError::UnknownToken(ref t) if t == "bukan"));
    }

    #[test]
    fn test_decrypt_default_theme() {
        // "SGk=" is base64 for "Hi"; the empty key leaves it unchanged
        let dec = decrypt_with_theme("senja gelora kenari padam", None, &DecodeOptions::default())
            .unwrap();
        assert_eq!(dec, "Hi");
    }
}
