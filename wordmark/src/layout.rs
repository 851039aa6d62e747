//! Width-based layout decisions.
//!
//! [`decide_layout`] is the only place that branches on the available width.
//! Renderers call it once per render and follow the returned
//! [`LayoutDecision`] instead of re-checking widths themselves.
//!
//! # Stretch Selection
//!
//! The emphasized letter is picked by a fixed hash of the visible
//! dimensions, never by randomness:
//!
//! - unconstrained: `(word_width * 31 + letter_count * 17) % letter_count`
//! - ample room: `(available + word_width * 7 + letter_count * 13) % letter_count`
//!
//! So the same width always emphasizes the same letter, while resizing the
//! terminal moves the emphasis around.

/// Width of the left decorative field.
pub const BASE_LEFT_FIELD_WIDTH: usize = 6;

/// Width of the right decorative field when the width is unconstrained.
pub const DEFAULT_RIGHT_FIELD_WIDTH: usize = 15;

/// Columns taken by the gaps on either side of the word.
const FIELD_GAPS: i64 = 2;

/// Extra room over the minimum before gradients are enabled.
const GRADIENT_SLACK: i64 = 6;

/// Extra room over the minimum before a letter may be stretched.
const STRETCH_SLACK: i64 = 12;

/// Below this width fields use the plain `/` diagonal.
const SIMPLE_DIAG_BELOW: i64 = 50;

/// Layout choices for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutDecision {
    /// The wide framed layout does not fit; use a compact variant.
    pub compact: bool,
    /// Letter to draw in its stretched form, if any.
    pub stretch_index: Option<usize>,
    /// Color the word with a gradient rather than a solid color.
    pub apply_gradient: bool,
    /// Draw fields with `/` instead of `╱`.
    pub use_simple_diag: bool,
    /// Width of the left field. Always the base width.
    pub left_field_width: usize,
    /// Width of the right field.
    pub right_field_width: usize,
}

/// Decides the layout for a word of `word_width` columns made of
/// `letter_count` letters.
///
/// An `available_width` of zero or less means the output is unconstrained.
/// All arithmetic saturates, so any input yields a decision.
#[must_use]
pub fn decide_layout(
    available_width: i32,
    word_width: usize,
    base_left: usize,
    default_right: usize,
    letter_count: usize,
) -> LayoutDecision {
    let available = i64::from(available_width);
    let word = to_i64(word_width);
    let left = to_i64(base_left);
    let count = to_i64(letter_count);

    let mut decision = LayoutDecision {
        compact: false,
        stretch_index: None,
        apply_gradient: true,
        use_simple_diag: false,
        left_field_width: base_left,
        right_field_width: default_right,
    };

    if available <= 0 {
        if count > 0 {
            let hash = word.saturating_mul(31).saturating_add(count.saturating_mul(17));
            decision.stretch_index = Some(to_index(hash.rem_euclid(count)));
        }
        return decision;
    }

    let right = available
        .saturating_sub(word)
        .saturating_sub(left)
        .saturating_sub(FIELD_GAPS)
        .max(1);
    decision.right_field_width = to_index(right);

    let min_total = word.saturating_add(left).saturating_add(FIELD_GAPS + 1);
    if available < min_total {
        decision.compact = true;
        decision.right_field_width = 0;
    }
    if available < word.saturating_add(left).saturating_add(GRADIENT_SLACK) {
        decision.apply_gradient = false;
    }
    if available < SIMPLE_DIAG_BELOW {
        decision.use_simple_diag = true;
    }
    if !decision.compact && available >= min_total.saturating_add(STRETCH_SLACK) && count > 0 {
        let hash = available
            .saturating_add(word.saturating_mul(7))
            .saturating_add(count.saturating_mul(13));
        decision.stretch_index = Some(to_index(hash.rem_euclid(count)));
    }

    decision
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Converts a non-negative `i64` back to `usize`, flooring negatives at 0.
fn to_index(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}
