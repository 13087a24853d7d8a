use crate::codebook::{symbol_index, Codebook, FORMATTING_PUNCTUATION};
use crate::error::{LirikError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, trace};

/// Encode a byte payload as codebook words, one word per base64 symbol
/// (padding included). Never fails.
pub fn encode_bytes(codebook: &Codebook, data: &[u8]) -> Vec<String> {
    let encoded = BASE64.encode(data);
    let words: Vec<String> = encoded
        .bytes()
        .map(|symbol| {
            let index = symbol_index(symbol).expect("base64 engine emits alphabet symbols only");
            codebook.word_at(index).to_owned()
        })
        .collect();
    debug!(bytes = data.len(), words = words.len(), "encoded payload to words");
    words
}

/// Remove layout punctuation; everything else (including whitespace) stays
pub fn strip_formatting(text: &str) -> String {
    text.chars()
        .filter(|c| !FORMATTING_PUNCTUATION.contains(c))
        .collect()
}

/// Split formatted text into codebook words.
/// Spaces, tabs and newlines are equivalent separators.
pub fn tokenize(text: &str) -> Vec<String> {
    strip_formatting(text)
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Resolve words back to base64 symbols and decode the payload
pub fn decode_to_bytes(codebook: &Codebook, text: &str) -> Result<Vec<u8>> {
    let tokens = tokenize(text);
    let mut symbols = String::with_capacity(tokens.len());
    for token in &tokens {
        let symbol = codebook
            .symbol_for(token)
            .ok_or_else(|| LirikError::UnknownToken(token.clone()))?;
        symbols.push(symbol as char);
    }
    trace!(symbols = %symbols, "resolved codebook tokens");

    let data = BASE64
        .decode(symbols.as_bytes())
        .map_err(|e| LirikError::MalformedPayload(format!("base64: {}", e)))?;
    debug!(words = tokens.len(), bytes = data.len(), "decoded words to payload");
    Ok(data)
}
