//! ABAB pantun layout.
//!
//! Chooses where to break a word sequence into four lines so that line
//! endings rhyme A-B-A-B. Only boundaries move; word order and count are
//! never changed, so the layout is always invertible by re-splitting.

use tracing::trace;

/// Number of lines in a pantun stanza
pub const PANTUN_LINES: usize = 4;

/// How many words past its target size a line may grow to reach a rhyme
pub const MAX_RHYME_EXTENSION: usize = 3;

fn ends_with_any(word: &str, suffixes: &[String]) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix.as_str()))
}

/// Target sizes: an even split with the remainder going to the first lines
fn line_targets(n: usize) -> [usize; PANTUN_LINES] {
    let base = n / PANTUN_LINES;
    let rem = n % PANTUN_LINES;
    std::array::from_fn(|i| base + usize::from(i < rem))
}

/// Lay out `words` as four lines with A, B, A, B rhyme targets
pub fn layout_abab(words: &[String], suffix_a: &[String], suffix_b: &[String]) -> [String; PANTUN_LINES] {
    let n = words.len();
    if n == 0 {
        return Default::default();
    }

    let targets = line_targets(n);
    let rhyme_targets = [suffix_a, suffix_b, suffix_a, suffix_b];
    let mut lines: [String; PANTUN_LINES] = Default::default();
    let mut idx = 0;

    for (i, line) in lines.iter_mut().enumerate() {
        let end = n.min(idx + targets[i]);
        let mut best_end = end;
        for extra in 0..=MAX_RHYME_EXTENSION {
            let candidate = n.min(end + extra);
            if candidate == 0 {
                break;
            }
            if ends_with_any(&words[candidate - 1], rhyme_targets[i]) {
                best_end = candidate;
                break;
            }
        }

        // A line must take at least one word while any remain
        if best_end == idx && idx < n {
            best_end = idx + 1;
        }

        *line = words[idx..best_end].join(" ");
        trace!(line = i, start = idx, end = best_end, "pantun line");
        idx = best_end;
    }

    // Leftovers from the extension search go to the last line, in order
    if idx < n {
        let tail = words[idx..].join(" ");
        let last = &mut lines[PANTUN_LINES - 1];
        if last.is_empty() {
            *last = tail;
        } else {
            last.push(' ');
            last.push_str(&tail);
        }
    }

    lines
}

/// Punctuate a stanza: lines 1-3 end with a comma, line 4 with a period
pub fn format_pantun(lines: &[String; PANTUN_LINES]) -> String {
    format!("{}.\n{}.", lines[..PANTUN_LINES - 1].join(",\n"), lines[PANTUN_LINES - 1])
}
