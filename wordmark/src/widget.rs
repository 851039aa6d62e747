//! Ratatui widget for a rendered wordmark.
//!
//! The engine produces ANSI-styled text. [`WordmarkWidget`] paints such a
//! block into a ratatui [`Buffer`], translating the SGR sequences the engine
//! emits (truecolor and 256-color foregrounds, bold, resets) into cell
//! styles. Anything else is skipped.
//!
//! # Example
//!
//! ```ignore
//! use openpilot_wordmark::{render, RenderOptions, WordmarkWidget};
//!
//! let options = RenderOptions::default().with_width(i32::from(area.width));
//! let logo = render("v1.0.0", false, &options);
//! frame.render_widget(WordmarkWidget::new(&logo).centered(true), area);
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::style::{segments, Segment};
use crate::text_block::{block_height, block_width};

/// Widget painting a styled wordmark block.
#[derive(Debug, Clone, Copy)]
pub struct WordmarkWidget<'a> {
    block: &'a str,
    centered: bool,
}

impl<'a> WordmarkWidget<'a> {
    /// Creates a widget for a block returned by the renderer.
    #[must_use]
    pub fn new(block: &'a str) -> Self {
        Self {
            block,
            centered: false,
        }
    }

    /// Centers the block horizontally and vertically in its area.
    #[must_use]
    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    /// Rows needed to show the whole block.
    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(block_height(self.block)).unwrap_or(u16::MAX)
    }

    /// Columns needed to show the whole block.
    #[must_use]
    pub fn width(&self) -> u16 {
        u16::try_from(block_width(self.block)).unwrap_or(u16::MAX)
    }
}

impl Widget for WordmarkWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.block.is_empty() {
            return;
        }

        let (x0, y0) = if self.centered {
            (
                area.x + area.width.saturating_sub(self.width()) / 2,
                area.y + area.height.saturating_sub(self.height()) / 2,
            )
        } else {
            (area.x, area.y)
        };
        let right = area.x + area.width;
        let bottom = area.y + area.height;

        for (y, row) in (y0..bottom).zip(self.block.split('\n')) {
            paint_row(buf, x0, y, right, row);
        }
    }
}

/// Paints one styled row starting at `x`, stopping at column `right`.
fn paint_row(buf: &mut Buffer, mut x: u16, y: u16, right: u16, row: &str) {
    let mut style = Style::default();
    let mut run = String::new();

    for segment in segments(row) {
        match segment {
            Segment::Char(c) => run.push(c),
            Segment::Escape(seq) => {
                x = flush(buf, x, y, right, &mut run, style);
                style = apply_sgr(style, seq);
            }
            Segment::Broken(_) => break,
        }
    }
    flush(buf, x, y, right, &mut run, style);
}

fn flush(buf: &mut Buffer, x: u16, y: u16, right: u16, run: &mut String, style: Style) -> u16 {
    if run.is_empty() || x >= right {
        run.clear();
        return x;
    }
    let (next_x, _) = buf.set_stringn(x, y, run.as_str(), usize::from(right - x), style);
    run.clear();
    next_x
}

/// Folds one escape sequence into `style`. Non-SGR sequences are ignored.
fn apply_sgr(style: Style, seq: &str) -> Style {
    let Some(params) = seq
        .strip_prefix("\x1b[")
        .and_then(|rest| rest.strip_suffix('m'))
    else {
        return style;
    };

    let codes: Vec<u16> = params
        .split(';')
        .map(|p| p.parse().unwrap_or(0))
        .collect();
    let mut style = style;
    let mut i = 0;

    while i < codes.len() {
        match codes[i] {
            0 => style = Style::default(),
            1 => style = style.add_modifier(Modifier::BOLD),
            2 => style = style.add_modifier(Modifier::DIM),
            22 => style = style.remove_modifier(Modifier::BOLD | Modifier::DIM),
            n @ 30..=37 => style = style.fg(Color::Indexed((n - 30) as u8)),
            n @ 90..=97 => style = style.fg(Color::Indexed((n - 90 + 8) as u8)),
            39 => style.fg = None,
            38 => match codes.get(i + 1).copied() {
                Some(5) => {
                    if let Some(&n) = codes.get(i + 2) {
                        style = style.fg(Color::Indexed(channel(n)));
                    }
                    i += 2;
                }
                Some(2) => {
                    if let (Some(&r), Some(&g), Some(&b)) =
                        (codes.get(i + 2), codes.get(i + 3), codes.get(i + 4))
                    {
                        style = style.fg(Color::Rgb(channel(r), channel(g), channel(b)));
                    }
                    i += 4;
                }
                _ => {}
            },
            _ => {}
        }
        i += 1;
    }

    style
}

fn channel(n: u16) -> u8 {
    u8::try_from(n).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render, RenderOptions};
    use crate::theme::ColorScheme;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    // =========================================================================
    // apply_sgr
    // =========================================================================

    #[test]
    fn sgr_truecolor_foreground() {
        let style = apply_sgr(Style::default(), "\x1b[38;2;200;100;50m");
        assert_eq!(style.fg, Some(Color::Rgb(200, 100, 50)));
    }

    #[test]
    fn sgr_indexed_foreground() {
        let style = apply_sgr(Style::default(), "\x1b[38;5;9m");
        assert_eq!(style.fg, Some(Color::Indexed(9)));
        let style = apply_sgr(Style::default(), "\x1b[31m");
        assert_eq!(style.fg, Some(Color::Indexed(1)));
        let style = apply_sgr(Style::default(), "\x1b[94m");
        assert_eq!(style.fg, Some(Color::Indexed(12)));
    }

    #[test]
    fn sgr_bold_and_reset() {
        let bold = apply_sgr(Style::default(), "\x1b[1m");
        assert!(bold.add_modifier.contains(Modifier::BOLD));
        let colored = apply_sgr(bold, "\x1b[38;5;3m");
        assert_eq!(apply_sgr(colored, "\x1b[0m"), Style::default());
        assert_eq!(apply_sgr(colored, "\x1b[39m").fg, None);
    }

    #[test]
    fn sgr_ignores_other_sequences() {
        let style = Style::default().fg(Color::Indexed(4));
        assert_eq!(apply_sgr(style, "\x1b[2J"), style);
        assert_eq!(apply_sgr(style, "\x1b]0;title\x07"), style);
    }

    #[test]
    fn sgr_tolerates_truncated_parameters() {
        let style = apply_sgr(Style::default(), "\x1b[38;2;1m");
        assert_eq!(style.fg, None);
    }

    // =========================================================================
    // WordmarkWidget
    // =========================================================================

    #[test]
    fn widget_paints_text_and_colors() {
        let block = crate::style::fg(crossterm::style::Color::Rgb { r: 1, g: 2, b: 3 }, "OP");
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        WordmarkWidget::new(&block).render(area, &mut buf);

        assert_eq!(buffer_text(&buf), "OP  ");
        assert_eq!(buf[(0, 0)].fg, Color::Rgb(1, 2, 3));
        assert_eq!(buf[(2, 0)].fg, Color::Reset);
    }

    #[test]
    fn widget_clips_to_area() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        WordmarkWidget::new("abcdef\nsecond").render(area, &mut buf);
        assert_eq!(buffer_text(&buf), "abc");
    }

    #[test]
    fn widget_centers_block() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        WordmarkWidget::new("ab").centered(true).render(area, &mut buf);
        assert_eq!(buf[(2, 1)].symbol(), "a");
        assert_eq!(buf[(3, 1)].symbol(), "b");
    }

    #[test]
    fn widget_reports_block_size() {
        let widget = WordmarkWidget::new("abc\nde");
        assert_eq!(widget.width(), 3);
        assert_eq!(widget.height(), 2);
    }

    #[test]
    fn widget_renders_wordmark_at_all_widths() {
        for width in [0u16, 4, 13, 30, 40, 60, 80, 120] {
            let options = RenderOptions::new(ColorScheme::default()).with_width(i32::from(width));
            let logo = render("v1.2.3", false, &options);
            let area = Rect::new(0, 0, width, 12);
            let mut buf = Buffer::empty(area);
            WordmarkWidget::new(&logo).render(area, &mut buf);
        }
    }

    #[test]
    fn widget_shows_brand_mark() {
        let options = RenderOptions::default().with_width(80);
        let logo = render("v1.2.3", false, &options);
        let area = Rect::new(0, 0, 80, 6);
        let mut buf = Buffer::empty(area);
        WordmarkWidget::new(&logo).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Surya™"));
        assert!(text.contains("v1.2.3"));
    }

    #[test]
    fn widget_handles_zero_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        WordmarkWidget::new("abc").render(Rect::new(0, 0, 0, 5), &mut buf);
        WordmarkWidget::new("abc").render(Rect::new(0, 0, 5, 0), &mut buf);
        assert!(buffer_text(&buf).trim().is_empty());
    }
}
