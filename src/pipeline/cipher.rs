use crate::error::{LirikError, Result};
use serde::{Deserialize, Serialize};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Classical substitution stage applied before the codebook.
/// Not a secure cipher; it only scrambles letters ahead of the lyric mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cipher {
    #[default]
    Vigenere,
    Caesar,
}

impl std::str::FromStr for Cipher {
    type Err = LirikError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vigenere" | "vigenère" => Ok(Self::Vigenere),
            "caesar" => Ok(Self::Caesar),
            _ => Err(LirikError::UnsupportedAlgorithm(format!("cipher: {}", s))),
        }
    }
}

impl std::fmt::Display for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vigenere => write!(f, "vigenere"),
            Self::Caesar => write!(f, "caesar"),
        }
    }
}

impl Cipher {
    pub fn encrypt(self, plaintext: &str, key: &str) -> String {
        match self {
            Self::Caesar => caesar_apply(plaintext, caesar_shift(key) as i32),
            Self::Vigenere => vigenere_apply(plaintext, &key_stream(key), 1),
        }
    }

    pub fn decrypt(self, ciphertext: &str, key: &str) -> String {
        match self {
            Self::Caesar => caesar_apply(ciphertext, -(caesar_shift(key) as i32)),
            Self::Vigenere => vigenere_apply(ciphertext, &key_stream(key), -1),
        }
    }
}

/// Shift an ASCII letter within its case range; anything else is untouched
fn shift_char(ch: char, shift: i32) -> char {
    let base = match ch {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return ch,
    };
    let offset = (ch as u8 - base) as i32;
    (base + (offset + shift).rem_euclid(26) as u8) as char
}

/// Letter categories (Lu, Ll, Lt, Lm, Lo). Combining marks and letter-like
/// numerals (Nl) are not letters and never consume a key position.
pub fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Caesar shift: sum of the key's code points mod 26 (0 for an empty key)
pub fn caesar_shift(key: &str) -> u32 {
    let sum: u64 = key.chars().map(|c| c as u64).sum();
    (sum % 26) as u32
}

fn caesar_apply(text: &str, shift: i32) -> String {
    text.chars().map(|ch| shift_char(ch, shift)).collect()
}

/// Vigenère key stream: every letter of the key, uppercased, as
/// `A=0 .. Z=25`. Keys without letters yield the zero stream `[0]`.
pub fn key_stream(key: &str) -> Vec<u32> {
    let stream: Vec<u32> = key
        .chars()
        .filter(|&c| is_letter(c))
        .map(|c| {
            let upper = c.to_uppercase().next().unwrap_or(c);
            (upper as u32 as i64 - 'A' as i64).rem_euclid(26) as u32
        })
        .collect();
    if stream.is_empty() {
        vec![0]
    } else {
        stream
    }
}

/// Walk the text; only letters consume a key stream position
fn vigenere_apply(text: &str, stream: &[u32], direction: i32) -> String {
    let mut position = 0usize;
    text.chars()
        .map(|ch| {
            if is_letter(ch) {
                let shift = stream[position % stream.len()] as i32 * direction;
                position += 1;
                shift_char(ch, shift)
            } else {
                ch
            }
        })
        .collect()
}
