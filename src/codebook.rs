use crate::error::{LirikError, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::debug;

/// Standard base64 alphabet including the `=` pad symbol, in table order
pub const BASE64_ALPHABET: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// Number of symbols a codebook must cover
pub const SYMBOL_COUNT: usize = BASE64_ALPHABET.len();

/// Only alphabet tag accepted in theme files
pub const ALPHABET_BASE64: &str = "base64";

/// Characters the decoder strips before tokenizing. They can only appear as
/// layout punctuation, so no codebook word may contain one.
pub const FORMATTING_PUNCTUATION: &[char] = &[
    ',', '.', '!', '?', ':', ';', '-', '—', '(', ')', '[', ']', '{', '}',
];

const DEFAULT_THEME_JSON: &str = include_str!("../themes/default_codebook.json");

/// Position of a symbol in [`BASE64_ALPHABET`]
pub fn symbol_index(symbol: u8) -> Option<usize> {
    match symbol {
        b'A'..=b'Z' => Some((symbol - b'A') as usize),
        b'a'..=b'z' => Some((symbol - b'a') as usize + 26),
        b'0'..=b'9' => Some((symbol - b'0') as usize + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        b'=' => Some(64),
        _ => None,
    }
}

fn default_suffix_a() -> Vec<String> {
    vec!["a".into(), "u".into()]
}

fn default_suffix_b() -> Vec<String> {
    vec!["i".into(), "e".into()]
}

fn default_name() -> String {
    "codebook".into()
}

/// Rhyme suffix sets used by the pantun layout.
/// Lines 1 and 3 end on set `a`, lines 2 and 4 on set `b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhymeSuffixes {
    #[serde(default = "default_suffix_a")]
    pub a: Vec<String>,
    #[serde(default = "default_suffix_b")]
    pub b: Vec<String>,
}

impl Default for RhymeSuffixes {
    fn default() -> Self {
        Self {
            a: default_suffix_a(),
            b: default_suffix_b(),
        }
    }
}

/// Theme file contents before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodebookConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub alphabet: String,
    pub tokens: BTreeMap<String, String>,
    #[serde(default)]
    pub rhyme_suffixes: RhymeSuffixes,
}

/// Validated bijection between the 65 base64 symbols and theme words.
///
/// Words are stored by alphabet position, so once constructed every symbol
/// has exactly one word and every word resolves to exactly one symbol.
#[derive(Debug, Clone)]
pub struct Codebook {
    name: String,
    description: Option<String>,
    words: Vec<String>,
    inverse: HashMap<String, u8>,
    rhyme_suffixes: RhymeSuffixes,
}

impl Codebook {
    /// Validate a theme configuration and build the codebook
    pub fn load(config: CodebookConfig) -> Result<Self> {
        if config.alphabet != ALPHABET_BASE64 {
            return Err(LirikError::Validation(format!(
                "only base64 alphabet codebooks are supported, got '{}'",
                config.alphabet
            )));
        }

        let mut slots: Vec<Option<String>> = vec![None; SYMBOL_COUNT];
        for (symbol, word) in config.tokens {
            let index = match symbol.as_bytes() {
                [byte] => symbol_index(*byte),
                _ => None,
            };
            let index = index.ok_or_else(|| {
                LirikError::Validation(format!("'{}' is not a base64 alphabet symbol", symbol))
            })?;
            validate_word(&symbol, &word)?;
            slots[index] = Some(word);
        }

        // Report every missing symbol, not just the first one
        let missing: Vec<String> = slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| format!("'{}'", BASE64_ALPHABET[i] as char))
            .collect();
        if !missing.is_empty() {
            return Err(LirikError::Validation(format!(
                "missing mapping for {} in codebook",
                missing.join(", ")
            )));
        }

        let words: Vec<String> = slots.into_iter().flatten().collect();
        let mut inverse = HashMap::with_capacity(SYMBOL_COUNT);
        for (i, word) in words.iter().enumerate() {
            if let Some(previous) = inverse.insert(word.clone(), BASE64_ALPHABET[i]) {
                return Err(LirikError::Validation(format!(
                    "codebook words must be unique: '{}' is used by '{}' and '{}'",
                    word, previous as char, BASE64_ALPHABET[i] as char
                )));
            }
        }

        debug!(name = %config.name, symbols = words.len(), "codebook loaded");

        Ok(Self {
            name: config.name,
            description: config.description,
            words,
            inverse,
            rhyme_suffixes: config.rhyme_suffixes,
        })
    }

    /// Parse and validate a theme from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CodebookConfig = serde_json::from_str(json)?;
        Self::load(config)
    }

    /// Parse and validate a theme from JSON bytes (e.g. an uploaded file)
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        let config: CodebookConfig = serde_json::from_slice(data)?;
        Self::load(config)
    }

    /// Read and validate a theme file
    pub fn load_json(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = data.len(), "reading theme file");
        Self::from_json_slice(&data)
    }

    /// The theme bundled with the crate
    pub fn default_theme() -> Result<Self> {
        Self::from_json_str(DEFAULT_THEME_JSON)
    }

    /// Load `path` if given, otherwise the bundled theme
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_json(path),
            None => Self::default_theme(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn rhyme_suffixes(&self) -> &RhymeSuffixes {
        &self.rhyme_suffixes
    }

    /// Word for a base64 symbol, `None` if the byte is outside the alphabet
    pub fn word_for(&self, symbol: u8) -> Option<&str> {
        symbol_index(symbol).map(|i| self.words[i].as_str())
    }

    /// Word at an alphabet position. Every position below [`SYMBOL_COUNT`]
    /// has a word once the codebook is loaded.
    pub fn word_at(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Base64 symbol for a word, `None` if the word is not in the codebook
    pub fn symbol_for(&self, word: &str) -> Option<u8> {
        self.inverse.get(word).copied()
    }

    /// `(symbol, word)` pairs in alphabet order
    pub fn entries(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        BASE64_ALPHABET
            .iter()
            .zip(self.words.iter())
            .map(|(&symbol, word)| (symbol as char, word.as_str()))
    }

    /// SHA-256 over the symbol table, hex encoded.
    /// Name, description and rhyme hints do not affect the encoding and are excluded.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(b"lirik_codebook_v1");
        for (symbol, word) in self.entries() {
            hasher.update([symbol as u8]);
            hasher.update((word.len() as u64).to_le_bytes());
            hasher.update(word.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

/// A word must survive decode tokenization unchanged
fn validate_word(symbol: &str, word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(LirikError::Validation(format!(
            "word for '{}' is empty",
            symbol
        )));
    }
    if word.chars().any(char::is_whitespace) {
        return Err(LirikError::Validation(format!(
            "word '{}' for '{}' contains whitespace",
            word, symbol
        )));
    }
    if let Some(c) = word.chars().find(|c| FORMATTING_PUNCTUATION.contains(c)) {
        return Err(LirikError::Validation(format!(
            "word '{}' for '{}' contains formatting punctuation '{}'",
            word, symbol, c
        )));
    }
    Ok(())
}
