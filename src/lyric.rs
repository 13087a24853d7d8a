use crate::codebook::Codebook;
use crate::error::{LirikError, Result};
use crate::pipeline::{decode_to_bytes, encode_bytes, format_pantun, layout_abab, Cipher};
use tracing::debug;

/// Options for turning plaintext into lyric text
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub cipher: Cipher,
    pub key: String,
    /// Lay the words out as a 4-line ABAB stanza
    pub pantun: bool,
}

/// Options for recovering plaintext from lyric text
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    pub cipher: Cipher,
    pub key: String,
    /// Collapse whitespace runs and trim the result
    pub normalize: bool,
}

/// Encode plaintext into codebook words.
/// Pipeline: Cipher → UTF-8 → Base64 → Codebook → (Pantun layout)
pub fn encode_text(plaintext: &str, codebook: &Codebook, options: &EncodeOptions) -> String {
    // Step 1: classical cipher
    let enciphered = options.cipher.encrypt(plaintext, &options.key);

    // Step 2: bytes to words
    let words = encode_bytes(codebook, enciphered.as_bytes());

    // Step 3: optional stanza layout
    if options.pantun {
        let suffixes = codebook.rhyme_suffixes();
        let lines = layout_abab(&words, &suffixes.a, &suffixes.b);
        debug!(cipher = %options.cipher, words = words.len(), "encoded as pantun");
        format_pantun(&lines)
    } else {
        debug!(cipher = %options.cipher, words = words.len(), "encoded as lyric line");
        words.join(" ")
    }
}

/// Decode lyric or pantun text back to plaintext.
/// Layout punctuation and line breaks are ignored.
pub fn decode_text(text: &str, codebook: &Codebook, options: &DecodeOptions) -> Result<String> {
    // Step 1: words to bytes (strips layout punctuation)
    let data = decode_to_bytes(codebook, text)?;

    // Step 2: bytes to text
    let raw = String::from_utf8(data).map_err(|e| LirikError::InvalidUtf8(e.to_string()))?;

    // Step 3: reverse the classical cipher
    let plain = options.cipher.decrypt(&raw, &options.key);
    debug!(cipher = %options.cipher, chars = plain.chars().count(), "decoded lyric text");

    if options.normalize {
        Ok(normalize_spaces(&plain))
    } else {
        Ok(plain)
    }
}

/// Collapse whitespace runs to a single space and trim both ends
pub fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
