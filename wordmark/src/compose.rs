//! Joins letter glyphs into a word block.

use crate::glyph::{glyph, Letter};
use crate::text_block::{join_horizontal, trim_blank_rows};

/// Renders `letters` side by side with `spacing` blank columns between
/// adjacent glyphs.
///
/// Only the letter at `stretch_index` uses its stretched form; an index past
/// the end stretches nothing. Fully blank leading and trailing rows are
/// dropped, columns are left alone.
#[must_use]
pub fn render_word(spacing: usize, stretch_index: Option<usize>, letters: &[Letter]) -> String {
    let spacer = " ".repeat(spacing);
    let mut blocks = Vec::with_capacity(letters.len() * 2);

    for (i, &letter) in letters.iter().enumerate() {
        if i > 0 && spacing > 0 {
            blocks.push(spacer.clone());
        }
        blocks.push(glyph(letter, stretch_index == Some(i)).to_block());
    }

    let refs: Vec<&str> = blocks.iter().map(String::as_str).collect();
    let word = join_horizontal(&refs);
    tracing::trace!(letters = letters.len(), ?stretch_index, "composed word");
    trim_blank_rows(&word)
}
