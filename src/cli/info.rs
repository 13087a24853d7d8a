use crate::codebook::{Codebook, SYMBOL_COUNT};
use crate::error::Result;
use std::path::Path;

/// Describe a theme: identity, rhyme hints and table fingerprint
pub fn show_theme_info(theme: Option<&Path>) -> Result<String> {
    let codebook = Codebook::load_or_default(theme)?;

    let mut output = String::new();

    output.push_str("Lirik Codebook Information\n");
    output.push_str("==========================\n\n");

    match theme {
        Some(path) => output.push_str(&format!("File: {}\n", path.display())),
        None => output.push_str("File: (bundled default)\n"),
    }
    output.push_str(&format!("Name: {}\n", codebook.name()));
    if let Some(description) = codebook.description() {
        output.push_str(&format!("Description: {}\n", description));
    }
    output.push_str(&format!("Symbols: {}\n", SYMBOL_COUNT));
    output.push_str(&format!("Fingerprint: {}\n", codebook.fingerprint()));
    output.push('\n');

    let suffixes = codebook.rhyme_suffixes();
    output.push_str("Rhyme Suffixes:\n");
    output.push_str(&format!("  A (lines 1, 3): {}\n", suffixes.a.join(", ")));
    output.push_str(&format!("  B (lines 2, 4): {}\n", suffixes.b.join(", ")));
    output.push('\n');

    output.push_str("Table:\n");
    for (symbol, word) in codebook.entries() {
        output.push_str(&format!("  {} -> {}\n", symbol, word));
    }

    Ok(output)
}
