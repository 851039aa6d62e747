//! ANSI-aware styling primitives used by the wordmark engine.
//!
//! Everything the layout code knows about escape sequences lives here:
//!
//! - [`display_width`]: terminal columns of a styled line, escapes excluded
//! - [`truncate`]: style-preserving truncation with an optional tail marker
//! - [`fg`], [`gradient`], [`bold_gradient`]: foreground coloring
//!
//! Styles are emitted through [`crossterm::style`] commands, so a color of
//! [`Color::Reset`] produces no escape sequence at all. This is how the
//! monochrome scheme stays free of SGR codes.

use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthStr;

const ESC: char = '\x1b';
const BEL: char = '\x07';

// =============================================================================
// Segmentation
// =============================================================================

/// A piece of a styled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A complete escape sequence (CSI, OSC or a two-byte escape).
    Escape(&'a str),
    /// A single visible (or zero-width) character.
    Char(char),
    /// An escape sequence that was cut off before its terminator. Always the
    /// last segment of its input.
    Broken(&'a str),
}

/// Iterator splitting a string into escape sequences and characters.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

/// Splits `s` into [`Segment`]s.
#[must_use]
pub fn segments(s: &str) -> Segments<'_> {
    Segments { rest: s }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chars = self.rest.chars();
        let first = chars.next()?;

        if first != ESC {
            self.rest = chars.as_str();
            return Some(Segment::Char(first));
        }

        match escape_len(self.rest) {
            Some(len) => {
                let (seq, rest) = self.rest.split_at(len);
                self.rest = rest;
                Some(Segment::Escape(seq))
            }
            None => {
                let broken = self.rest;
                self.rest = "";
                Some(Segment::Broken(broken))
            }
        }
    }
}

/// Byte length of the complete escape sequence starting at `s[0]`, or `None`
/// if the input ends before the sequence is terminated.
fn escape_len(s: &str) -> Option<usize> {
    let mut iter = s.char_indices().skip(1);
    let (_, kind) = iter.next()?;

    match kind {
        // CSI: parameter and intermediate bytes, then a final byte in 0x40..=0x7E.
        '[' => iter
            .find(|&(_, c)| ('\x40'..='\x7e').contains(&c))
            .map(|(i, c)| i + c.len_utf8()),
        // OSC: terminated by BEL or ST (ESC \).
        ']' => {
            let mut prev_esc = false;
            for (i, c) in iter {
                if c == BEL {
                    return Some(i + 1);
                }
                if prev_esc && c == '\\' {
                    return Some(i + 1);
                }
                prev_esc = c == ESC;
            }
            None
        }
        other => Some(1 + other.len_utf8()),
    }
}

// =============================================================================
// Measurement and truncation
// =============================================================================

/// Display width of a single styled line, ignoring escape sequences.
#[must_use]
pub fn display_width(line: &str) -> usize {
    let plain = strip_ansi_escapes::strip_str(line);
    UnicodeWidthStr::width(plain.as_str())
}

/// Truncates a single styled line to at most `width` display columns.
///
/// When the line is wider than `width`, the visible text is cut so that the
/// result including `tail` fits, and `tail` is placed at the cut. The cut is
/// measured on the whole visible prefix, the same way [`display_width`]
/// measures, so multi-character sequences such as emoji with a variation
/// selector are never undercounted. Escape sequences are never split. After
/// the cut only sequences that close styles are kept, so trailing resets
/// still apply without carrying color codes for dropped text. A broken
/// trailing escape sequence is dropped.
#[must_use]
pub fn truncate(line: &str, width: usize, tail: &str) -> String {
    let fits = display_width(line) <= width;
    if fits && !line.contains(ESC) {
        return line.to_string();
    }

    let tail_width = display_width(tail);
    let (budget, tail) = if fits || tail_width > width {
        (width, "")
    } else {
        (width - tail_width, tail)
    };

    let mut out = String::with_capacity(line.len());
    let mut visible = String::new();
    let mut cut = false;

    for segment in segments(line) {
        match segment {
            Segment::Escape(seq) if !cut => out.push_str(seq),
            Segment::Escape(seq) => {
                if closes_style(seq) && !out.ends_with(seq) {
                    out.push_str(seq);
                }
            }
            Segment::Char(c) if !cut => {
                visible.push(c);
                if UnicodeWidthStr::width(visible.as_str()) > budget {
                    visible.pop();
                    cut = true;
                    out.push_str(tail);
                } else {
                    out.push(c);
                }
            }
            Segment::Char(_) | Segment::Broken(_) => {}
        }
    }

    out
}

/// Whether `seq` is an SGR sequence that only turns attributes off, or a
/// non-SGR sequence (OSC hyperlink closers and the like).
fn closes_style(seq: &str) -> bool {
    let Some(params) = seq
        .strip_prefix("\x1b[")
        .and_then(|rest| rest.strip_suffix('m'))
    else {
        return !seq.starts_with("\x1b[");
    };
    params
        .split(';')
        .all(|p| matches!(p, "" | "0" | "22" | "23" | "24" | "27" | "39" | "49"))
}

// =============================================================================
// Coloring
// =============================================================================

/// Wraps `text` in a foreground color.
///
/// Returns `text` untouched when it is empty or `color` is [`Color::Reset`].
#[must_use]
pub fn fg(color: Color, text: &str) -> String {
    if text.is_empty() || color == Color::Reset {
        return text.to_string();
    }
    format!("{}{}{}", SetForegroundColor(color), text, ResetColor)
}

/// Colors `text` with a horizontal two-point gradient, one color per
/// character.
///
/// Gradients need RGB endpoints; if either endpoint is not [`Color::Rgb`] the
/// whole line is colored with `start` instead.
#[must_use]
pub fn gradient(text: &str, start: Color, end: Color) -> String {
    let (Color::Rgb { r: r0, g: g0, b: b0 }, Color::Rgb { r: r1, g: g1, b: b1 }) = (start, end)
    else {
        return fg(start, text);
    };

    let visible = segments(text)
        .filter(|s| matches!(s, Segment::Char(_)))
        .count();
    if visible == 0 {
        return text.to_string();
    }

    let steps = visible.saturating_sub(1).max(1) as f32;
    let mut out = String::with_capacity(text.len() * 20);
    let mut index = 0usize;

    for segment in segments(text) {
        match segment {
            Segment::Char(c) => {
                let t = index as f32 / steps;
                let color = Color::Rgb {
                    r: lerp(r0, r1, t),
                    g: lerp(g0, g1, t),
                    b: lerp(b0, b1, t),
                };
                out.push_str(&SetForegroundColor(color).to_string());
                out.push(c);
                index += 1;
            }
            Segment::Escape(seq) => out.push_str(seq),
            Segment::Broken(_) => {}
        }
    }

    out.push_str(&ResetColor.to_string());
    out
}

/// Like [`gradient`], with bold weight.
///
/// With both endpoints at [`Color::Reset`] the text is returned plain, so a
/// monochrome scheme emits no escape sequences.
#[must_use]
pub fn bold_gradient(text: &str, start: Color, end: Color) -> String {
    if text.is_empty() || (start == Color::Reset && end == Color::Reset) {
        return text.to_string();
    }
    let colored = gradient(text, start, end);
    if colored.contains(ESC) {
        format!("{}{}", SetAttribute(Attribute::Bold), colored)
    } else {
        format!("{}{}{}", SetAttribute(Attribute::Bold), colored, ResetColor)
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
    value.round().clamp(0.0, 255.0) as u8
}
