//! DNA sequence analysis utilities.

use anyhow::{bail, Result};

// --------------------------------------------------
/// GC content of a sequence as a percentage (0-100).
///
/// Case-insensitive. Bases outside A/T/G/C count toward the length
/// but never toward the GC tally.
pub fn gc_content(sequence: &str) -> Result<f64> {
    if sequence.is_empty() {
        bail!("Sequence cannot be empty");
    }

    let gc = sequence
        .chars()
        .filter(|base| matches!(base, 'G' | 'C' | 'g' | 'c'))
        .count();

    Ok(gc as f64 / sequence.chars().count() as f64 * 100.)
}

// --------------------------------------------------
/// Reverse complement of a sequence.
///
/// Each complement keeps the case of the base it came from; anything
/// outside the A/T/G/C alphabet passes through unchanged in its
/// reversed position. Applying this twice returns the original.
pub fn reverse_complement(sequence: &str) -> String {
    sequence.chars().rev().map(complement).collect()
}

// --------------------------------------------------
fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        'a' => 't',
        't' => 'a',
        'g' => 'c',
        'c' => 'g',
        other => other,
    }
}
