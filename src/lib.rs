//! Lirik - Reversible Lyric/Pantun Cipher
//!
//! Turns arbitrary text into a themed, lyric-like stream of words and back,
//! byte for byte. A codebook ("theme") maps each of the 65 base64 symbols to
//! a unique word; an optional layout step breaks the words into a 4-line
//! ABAB pantun without ever reordering them.
//!
//! ## Transform Pipeline
//!
//! ```text
//! Encode: Text → Cipher → UTF-8 → Base64 → Codebook → [Pantun] → Lyric
//! Decode: Lyric → Strip punctuation → Codebook⁻¹ → Base64⁻¹ → UTF-8 → Cipher⁻¹ → Text
//! ```
//!
//! - **Cipher**: Caesar or Vigenère over ASCII letters (not secure)
//! - **Codebook**: validated symbol ↔ word bijection
//! - **Pantun**: rhyme-aware line breaks, boundaries only
//!
//! ## Example
//!
//! ```
//! use lirik::{decode_text, encode_text, Cipher, Codebook, DecodeOptions, EncodeOptions};
//!
//! let codebook = Codebook::default_theme().unwrap();
//!
//! let lyric = encode_text(
//!     "Halo",
//!     &codebook,
//!     &EncodeOptions {
//!         cipher: Cipher::Vigenere,
//!         key: "GARUDA".into(),
//!         pantun: true,
//!     },
//! );
//!
//! let plain = decode_text(
//!     &lyric,
//!     &codebook,
//!     &DecodeOptions {
//!         cipher: Cipher::Vigenere,
//!         key: "GARUDA".into(),
//!         normalize: false,
//!     },
//! )
//! .unwrap();
//! assert_eq!(plain, "Halo");
//! ```

pub mod cli;
pub mod codebook;
pub mod error;
pub mod lyric;
pub mod pipeline;

pub use codebook::{Codebook, CodebookConfig, RhymeSuffixes};
pub use error::{LirikError, Result};
pub use lyric::{decode_text, encode_text, normalize_spaces, DecodeOptions, EncodeOptions};
pub use pipeline::Cipher;
