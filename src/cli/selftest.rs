use crate::codebook::Codebook;
use crate::error::{LirikError, Result};
use crate::lyric::{decode_text, encode_text, DecodeOptions, EncodeOptions};
use crate::pipeline::Cipher;
use std::path::Path;
use tracing::info;

/// Key used by the self test when none is given
pub const DEFAULT_TEST_KEY: &str = "GARUDA";

/// Samples covering multi-line text, emoji, digits and runs of whitespace
pub const SELF_TEST_SAMPLES: &[&str] = &[
    "PADAMU NEGERI JIWA RAGA KAMI",
    "Halo, dunia! Ini contoh multiline\nDengan emoji 😊 dan akronim APT/SOC.",
    "1234567890 -- tetap utuh, non-alfabet.",
    "Spasi    berlebih\takan   dipertahankan.",
    "Pantun mode cek rhyme ABAB agar enak dibaca.",
];

/// Round-trip every sample through both ciphers, with and without pantun layout.
/// Returns the number of cases checked.
pub fn run_self_test(theme: Option<&Path>, key: &str) -> Result<usize> {
    let codebook = Codebook::load_or_default(theme)?;
    let mut checked = 0;

    for cipher in [Cipher::Vigenere, Cipher::Caesar] {
        for pantun in [false, true] {
            for sample in SELF_TEST_SAMPLES {
                let encode = EncodeOptions {
                    cipher,
                    key: key.to_string(),
                    pantun,
                };
                let decode = DecodeOptions {
                    cipher,
                    key: key.to_string(),
                    normalize: false,
                };
                let enc = encode_text(sample, &codebook, &encode);
                let dec = decode_text(&enc, &codebook, &decode)?;
                if dec != *sample {
                    return Err(LirikError::SelfTestFailed(format!(
                        "cipher={}, pantun={}\norig={}\nback={}",
                        cipher, pantun, sample, dec
                    )));
                }
                checked += 1;
            }
        }
    }

    info!(cases = checked, theme = codebook.name(), "self test passed");
    Ok(checked)
}
