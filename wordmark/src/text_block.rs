//! Width-safe finishing of multi-row styled blocks.
//!
//! A block is a string whose rows are separated by `\n`. Every function here
//! measures rows with [`display_width`], so embedded escape sequences never
//! count towards a row's width.

use crate::style::{display_width, truncate};

/// Right-pads every row with spaces until its display width equals `width`.
///
/// Rows that are already at least `width` wide are left unchanged. A width of
/// zero returns the block as is.
#[must_use]
pub fn pad_lines(block: &str, width: usize) -> String {
    if width == 0 {
        return block.to_string();
    }
    block
        .split('\n')
        .map(|row| {
            let w = display_width(row);
            if w < width {
                format!("{row}{}", " ".repeat(width - w))
            } else {
                row.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncates every row to at most `width` display columns without an
/// overflow marker. A width of zero means unconstrained.
#[must_use]
pub fn clamp_lines(block: &str, width: usize) -> String {
    if width == 0 {
        return block.to_string();
    }
    block
        .split('\n')
        .map(|row| truncate(row, width, ""))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Widest row of a block.
#[must_use]
pub fn block_width(block: &str) -> usize {
    block.split('\n').map(display_width).max().unwrap_or(0)
}

/// Number of rows in a block.
#[must_use]
pub fn block_height(block: &str) -> usize {
    block.split('\n').count()
}

/// Joins blocks side by side, top-aligned.
///
/// Each block is padded to its own width; blocks with fewer rows than the
/// tallest are filled with blank rows of that width.
#[must_use]
pub fn join_horizontal(blocks: &[&str]) -> String {
    let columns: Vec<(Vec<&str>, usize)> = blocks
        .iter()
        .map(|block| (block.split('\n').collect(), block_width(block)))
        .collect();
    let height = columns.iter().map(|(rows, _)| rows.len()).max().unwrap_or(0);

    (0..height)
        .map(|y| {
            let mut row = String::new();
            for (rows, width) in &columns {
                let cell = rows.get(y).copied().unwrap_or("");
                row.push_str(cell);
                row.push_str(&" ".repeat(width.saturating_sub(display_width(cell))));
            }
            row
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drops fully blank rows from the top and bottom of a block.
///
/// Interior rows and leading columns are never touched, so indentation on
/// the first visible row survives.
#[must_use]
pub fn trim_blank_rows(block: &str) -> String {
    let rows: Vec<&str> = block.split('\n').collect();
    let is_blank = |row: &&str| strip_ansi_escapes::strip_str(row).trim().is_empty();

    let Some(first) = rows.iter().position(|row| !is_blank(row)) else {
        return String::new();
    };
    let last = rows.iter().rposition(|row| !is_blank(row)).unwrap_or(first);

    rows[first..=last].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{fg, gradient, segments, Segment};
    use crossterm::style::Color;

    const PINK: Color = Color::Rgb {
        r: 200,
        g: 100,
        b: 200,
    };
    const TEAL: Color = Color::Rgb {
        r: 100,
        g: 200,
        b: 200,
    };

    fn widths(block: &str) -> Vec<usize> {
        block.split('\n').map(display_width).collect()
    }

    // =========================================================================
    // pad_lines
    // =========================================================================

    #[test]
    fn pad_lines_pads_short_rows() {
        let padded = pad_lines("ab\nabcd\n", 3);
        assert_eq!(padded, "ab \nabcd\n   ");
    }

    #[test]
    fn pad_lines_output_width_is_max_of_target_and_original() {
        let block = format!("{}\nlonger row here\n", fg(PINK, "x"));
        let padded = pad_lines(&block, 8);
        assert_eq!(widths(&padded), vec![8, 15, 8]);
    }

    #[test]
    fn pad_lines_is_idempotent() {
        let block = format!("{}\n  \nabc", gradient("▄▀▀▀▄", PINK, TEAL));
        for width in [0, 1, 5, 12] {
            let once = pad_lines(&block, width);
            assert_eq!(pad_lines(&once, width), once, "width {width}");
        }
    }

    #[test]
    fn pad_lines_zero_width_is_identity() {
        assert_eq!(pad_lines("a\nbb", 0), "a\nbb");
    }

    // =========================================================================
    // clamp_lines
    // =========================================================================

    #[test]
    fn clamp_lines_bounds_every_row() {
        let block = format!(
            "{}\n{}\nplain text row",
            gradient("█▀▀▀█ █▀▀▀ █▌ █", PINK, TEAL),
            fg(TEAL, "╱╱╱╱╱╱╱╱╱╱")
        );
        for width in 1..20 {
            let clamped = clamp_lines(&block, width);
            for (i, w) in widths(&clamped).into_iter().enumerate() {
                assert!(w <= width, "row {i} is {w} wide at clamp {width}");
            }
        }
    }

    #[test]
    fn clamp_lines_never_leaves_broken_sequences() {
        let block = gradient("OPENPILOT", PINK, TEAL);
        for width in 1..10 {
            let clamped = clamp_lines(&block, width);
            assert!(segments(&clamped).all(|s| !matches!(s, Segment::Broken(_))));
            assert!(clamped.ends_with("\x1b[0m"));
        }
    }

    #[test]
    fn clamp_lines_bounds_emoji_and_wide_rows() {
        let block = format!(
            "{}\n{}\n版本一二三四",
            "\u{2764}\u{FE0F}".repeat(5),
            fg(PINK, &"\u{2764}\u{FE0F}".repeat(5))
        );
        for width in 1..14 {
            let clamped = clamp_lines(&block, width);
            for (i, w) in widths(&clamped).into_iter().enumerate() {
                assert!(w <= width, "row {i} is {w} wide at clamp {width}");
            }
        }
    }

    #[test]
    fn clamp_lines_adds_no_marker() {
        assert_eq!(clamp_lines("abcdef\nxy", 3), "abc\nxy");
    }

    #[test]
    fn clamp_lines_zero_width_is_unconstrained() {
        assert_eq!(clamp_lines("abcdef", 0), "abcdef");
    }

    // =========================================================================
    // join_horizontal
    // =========================================================================

    #[test]
    fn join_horizontal_pads_each_column() {
        let joined = join_horizontal(&["a\nbbb", " ", "x\ny\nz"]);
        assert_eq!(joined, "a   x\nbbb y\n    z");
    }

    #[test]
    fn join_horizontal_of_nothing_is_empty() {
        assert_eq!(join_horizontal(&[]), "");
    }

    #[test]
    fn join_horizontal_measures_styled_cells() {
        let left = fg(PINK, "ab");
        let joined = join_horizontal(&[&format!("{left}\nc"), "|"]);
        assert_eq!(widths(&joined), vec![3, 3]);
    }

    // =========================================================================
    // trim_blank_rows
    // =========================================================================

    #[test]
    fn trim_blank_rows_keeps_leading_columns() {
        assert_eq!(trim_blank_rows("\n   \n  ▀█\n █ \n\n"), "  ▀█\n █ ");
    }

    #[test]
    fn trim_blank_rows_keeps_interior_blank_rows() {
        assert_eq!(trim_blank_rows("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn trim_blank_rows_of_blank_block_is_empty() {
        assert_eq!(trim_blank_rows(" \n \n"), "");
    }

    #[test]
    fn block_dimensions() {
        assert_eq!(block_width("ab\nabcd\n"), 4);
        assert_eq!(block_height("ab\nabcd\n"), 3);
        assert_eq!(block_width(""), 0);
    }
}
