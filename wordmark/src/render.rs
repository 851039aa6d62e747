//! Wordmark compositor.
//!
//! Assembles glyphs, layout decisions and colors into the finished logo.
//!
//! # Variants
//!
//! [`render`] picks the richest variant that fits:
//!
//! - **Wide**: `OPENPILOT` on one line, meta row above, diagonal fields on
//!   both sides
//! - **Stacked**: `OPEN` over `PILOT`, framed by diagonal rules
//! - **Abbreviated**: the `OP` glyphs, or plain `OP` text when even those do
//!   not fit
//!
//! [`render_chat`] always tries the split `OPEN` / `PILOT` form with side
//! fields and falls back to the compact chain. [`small_render`] is a single
//! line for tight headers.
//!
//! Every row of the output is clamped to the requested width when one is
//! given, and every styled run is closed on the row it was opened.

use std::fmt;

use tracing::debug;

use crate::compose::render_word;
use crate::glyph::Letter;
use crate::layout::{
    decide_layout, LayoutDecision, BASE_LEFT_FIELD_WIDTH, DEFAULT_RIGHT_FIELD_WIDTH,
};
use crate::style::{bold_gradient, display_width, fg, gradient, truncate};
use crate::text_block::{block_height, block_width, clamp_lines, join_horizontal, pad_lines};
use crate::theme::ColorScheme;

// =============================================================================
// Constants
// =============================================================================

/// Brand mark shown at the left of the meta row.
pub const BRAND_MARK: &str = " Surya™";

/// The brand word, letter by letter.
pub const WORDMARK: [Letter; 9] = [
    Letter::O,
    Letter::P,
    Letter::E,
    Letter::N,
    Letter::P,
    Letter::I,
    Letter::L,
    Letter::O,
    Letter::T,
];

/// Letters in the first row of the split form (`OPEN`).
pub const SPLIT_AT: usize = 4;

const ACRONYM: [Letter; 2] = [Letter::O, Letter::P];
const ACRONYM_TEXT: &str = "OP";

const WORD_SPACING: usize = 1;
const META_ROW_GAP: usize = 1;
const VERSION_TAIL: &str = "…";
const H_GAP: &str = " ";

const DIAG: &str = "╱";
const SIMPLE_DIAG: &str = "/";

const SMALL_BRAND: &str = "Surya™";
const SMALL_TITLE: &str = "OpenPilot";

/// Columns kept free around the stacked and abbreviated forms.
const COMPACT_MARGIN: i64 = 2;

// =============================================================================
// Options
// =============================================================================

/// Colors and width for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Color roles.
    pub colors: ColorScheme,
    /// Target width in columns; zero or less means unconstrained.
    pub width: i32,
    /// Always draw fields with `/`, for terminals without box drawing.
    pub ascii_fields: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(ColorScheme::default())
    }
}

impl RenderOptions {
    /// Unconstrained options with the given colors.
    #[must_use]
    pub fn new(colors: ColorScheme) -> Self {
        Self {
            colors,
            width: 0,
            ascii_fields: false,
        }
    }

    /// Sets the target width.
    #[must_use]
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    /// Forces `/` fields.
    #[must_use]
    pub fn with_ascii_fields(mut self, ascii_fields: bool) -> Self {
        self.ascii_fields = ascii_fields;
        self
    }

    fn clamp_width(&self) -> usize {
        usize::try_from(self.width).unwrap_or(0)
    }

    /// Whether a block `width` columns wide fits inside the compact margin.
    fn fits_compact(&self, width: usize) -> bool {
        self.width <= 0
            || i64::try_from(width).unwrap_or(i64::MAX) <= i64::from(self.width) - COMPACT_MARGIN
    }
}

/// One complete render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Version text for the meta row.
    pub version: String,
    /// Prefer a compact variant even when the wide one fits.
    pub compact_hint: bool,
    /// Colors and width.
    pub options: RenderOptions,
}

impl RenderRequest {
    /// A wide-preferring request.
    #[must_use]
    pub fn new(version: impl Into<String>, options: RenderOptions) -> Self {
        Self {
            version: version.into(),
            compact_hint: false,
            options,
        }
    }

    /// Sets the compact hint.
    #[must_use]
    pub fn compact(mut self, compact_hint: bool) -> Self {
        self.compact_hint = compact_hint;
        self
    }

    /// See [`render`].
    #[must_use]
    pub fn render(&self) -> String {
        render(&self.version, self.compact_hint, &self.options)
    }

    /// See [`render_chat`].
    #[must_use]
    pub fn render_chat(&self) -> String {
        render_chat(&self.version, &self.options)
    }

    /// See [`select_variant`].
    #[must_use]
    pub fn variant(&self) -> Variant {
        select_variant(self.compact_hint, &self.options)
    }
}

/// The layout a render ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Single-line word with side fields.
    Wide,
    /// `OPEN` over `PILOT` with rules above and below.
    Stacked,
    /// `OP` glyphs.
    Abbreviated,
    /// Plain `OP` text, the guaranteed fit.
    AbbreviatedPlain,
    /// Split word with side fields, from [`render_chat`].
    Chat,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Wide => "wide",
            Variant::Stacked => "stacked",
            Variant::Abbreviated => "abbreviated",
            Variant::AbbreviatedPlain => "abbreviated-plain",
            Variant::Chat => "chat",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Renders the wordmark.
///
/// `compact` asks for a compact variant; the layout may also force one when
/// the wide form does not fit `options.width`.
#[must_use]
pub fn render(version: &str, compact: bool, options: &RenderOptions) -> String {
    render_with_variant(version, compact, options).1
}

/// Reports which variant [`render`] would use, without keeping its output.
#[must_use]
pub fn select_variant(compact: bool, options: &RenderOptions) -> Variant {
    render_with_variant("", compact, options).0
}

/// Renders the split `OPEN` / `PILOT` logo shown when a chat starts.
///
/// Falls back to the compact selection of [`render`] when the layout reports
/// that even the split word does not fit.
#[must_use]
pub fn render_chat(version: &str, options: &RenderOptions) -> String {
    render_chat_with_variant(version, options).1
}

/// Renders a one-line brand mark: `Surya™ OpenPilot ╱╱╱…`, filled with
/// diagonals up to `width`.
#[must_use]
pub fn small_render(width: i32, colors: &ColorScheme) -> String {
    let title = format!(
        "{} {}",
        fg(colors.brand, SMALL_BRAND),
        bold_gradient(SMALL_TITLE, colors.title_start, colors.title_end)
    );
    let remaining = i64::from(width) - to_i64(display_width(&title)) - 1;
    if remaining <= 0 {
        return title;
    }
    let lines = DIAG.repeat(usize::try_from(remaining).unwrap_or(0));
    format!("{title} {}", fg(colors.title_end, &lines))
}

// =============================================================================
// Variant selection
// =============================================================================

fn render_with_variant(version: &str, compact: bool, options: &RenderOptions) -> (Variant, String) {
    let base = render_word(WORD_SPACING, None, &WORDMARK);
    let decision = decide(options, block_width(&base), WORDMARK.len());
    let painter = Painter::new(&options.colors, &decision, options.ascii_fields);

    let (variant, block) = if compact || decision.compact {
        render_stacked(version, &painter, options)
            .map(|block| (Variant::Stacked, block))
            .unwrap_or_else(|| render_abbreviated(version, &painter, options))
    } else {
        (Variant::Wide, render_wide(version, &painter, options))
    };

    debug!(
        variant = %variant,
        compact_hint = compact,
        width = options.width,
        "rendered wordmark"
    );
    (variant, block)
}

fn render_chat_with_variant(version: &str, options: &RenderOptions) -> (Variant, String) {
    let (open_letters, pilot_letters) = WORDMARK.split_at(SPLIT_AT);
    let open_base = render_word(WORD_SPACING, None, open_letters);
    let pilot_base = render_word(WORD_SPACING, None, pilot_letters);
    let brand_width = block_width(&open_base).max(block_width(&pilot_base));

    let decision = decide(options, brand_width, WORDMARK.len());
    if decision.compact {
        return render_with_variant(version, true, options);
    }

    let painter = Painter::new(&options.colors, &decision, options.ascii_fields);
    let (open_stretch, pilot_stretch) = split_stretch(decision.stretch_index);
    let open = render_word(WORD_SPACING, open_stretch, open_letters);
    let pilot = render_word(WORD_SPACING, pilot_stretch, pilot_letters);
    let content_width = brand_width.max(block_width(&open)).max(block_width(&pilot));

    let content = [
        painter.meta_row(version, content_width),
        painter.title(&open),
        String::new(),
        painter.title(&pilot),
    ]
    .join("\n");
    let content = pad_lines(&content, content_width);

    let height = block_height(&open) + block_height(&pilot) + 2;
    let left = painter.field_column(decision.left_field_width, height);
    let right = painter.field_column(decision.right_field_width, height);
    let logo = join_horizontal(&[&left, H_GAP, &content, H_GAP, &right]);

    debug!(variant = %Variant::Chat, width = options.width, "rendered wordmark");
    (Variant::Chat, clamp_lines(&logo, options.clamp_width()))
}

fn decide(options: &RenderOptions, word_width: usize, letter_count: usize) -> LayoutDecision {
    let decision = decide_layout(
        options.width,
        word_width,
        BASE_LEFT_FIELD_WIDTH,
        DEFAULT_RIGHT_FIELD_WIDTH,
        letter_count,
    );
    debug!(
        available_width = options.width,
        word_width,
        compact = decision.compact,
        stretch_index = ?decision.stretch_index,
        apply_gradient = decision.apply_gradient,
        use_simple_diag = decision.use_simple_diag,
        right_field_width = decision.right_field_width,
        "layout decided"
    );
    decision
}

/// Maps a stretch index over the whole word onto the `OPEN` and `PILOT`
/// groups. An index outside both groups stretches nothing.
fn split_stretch(index: Option<usize>) -> (Option<usize>, Option<usize>) {
    match index {
        Some(i) if i < SPLIT_AT => (Some(i), None),
        Some(i) if i - SPLIT_AT < WORDMARK.len() - SPLIT_AT => (None, Some(i - SPLIT_AT)),
        _ => (None, None),
    }
}

// =============================================================================
// Variants
// =============================================================================

fn render_wide(version: &str, painter: &Painter<'_>, options: &RenderOptions) -> String {
    let decision = painter.decision;
    let word = render_word(WORD_SPACING, decision.stretch_index, &WORDMARK);
    let word_width = block_width(&word);

    let block = format!(
        "{}\n{}",
        painter.meta_row(version, word_width),
        painter.title(&word)
    );
    let height = block_height(&block);
    let left = painter.field_column(decision.left_field_width, height);
    let right = painter.field_column(decision.right_field_width, height);

    let logo = join_horizontal(&[&left, H_GAP, &block, H_GAP, &right]);
    clamp_lines(&logo, options.clamp_width())
}

fn render_stacked(version: &str, painter: &Painter<'_>, options: &RenderOptions) -> Option<String> {
    let (open_letters, pilot_letters) = WORDMARK.split_at(SPLIT_AT);
    let (open_stretch, pilot_stretch) = split_stretch(painter.decision.stretch_index);
    let open = render_word(WORD_SPACING, open_stretch, open_letters);
    let pilot = render_word(WORD_SPACING, pilot_stretch, pilot_letters);

    let stack_width = block_width(&open).max(block_width(&pilot));
    if !options.fits_compact(stack_width) {
        return None;
    }

    let content = [
        painter.meta_row(version, stack_width),
        painter.title(&open),
        painter.title(&pilot),
    ]
    .join("\n");
    let content = pad_lines(&content, stack_width);
    let frame = painter.field_row(stack_width);

    let block = [frame.as_str(), content.as_str(), frame.as_str()].join("\n");
    Some(clamp_lines(&block, options.clamp_width()))
}

fn render_abbreviated(
    version: &str,
    painter: &Painter<'_>,
    options: &RenderOptions,
) -> (Variant, String) {
    let glyphs = render_word(WORD_SPACING, None, &ACRONYM);
    let glyph_width = block_width(&glyphs);

    let (variant, abbr, abbr_width) = if options.fits_compact(glyph_width) {
        (Variant::Abbreviated, painter.title(&glyphs), glyph_width)
    } else {
        (
            Variant::AbbreviatedPlain,
            fg(painter.colors.title_start, ACRONYM_TEXT),
            display_width(ACRONYM_TEXT),
        )
    };

    let mini = format!("{}\n{}", painter.meta_row(version, abbr_width), abbr);
    let mini = pad_lines(&mini, abbr_width);
    let field = painter.field_row(abbr_width);

    let block = [field.as_str(), mini.as_str(), field.as_str()].join("\n");
    (variant, clamp_lines(&block, options.clamp_width()))
}

// =============================================================================
// Painter
// =============================================================================

/// Applies one decision's colors and field glyph.
struct Painter<'a> {
    colors: &'a ColorScheme,
    decision: LayoutDecision,
    diag: &'static str,
}

impl<'a> Painter<'a> {
    fn new(colors: &'a ColorScheme, decision: &LayoutDecision, ascii_fields: bool) -> Self {
        let diag = if decision.use_simple_diag || ascii_fields {
            SIMPLE_DIAG
        } else {
            DIAG
        };
        Self {
            colors,
            decision: *decision,
            diag,
        }
    }

    /// Colors each row of a word block, with a gradient when the decision
    /// allows it.
    fn title(&self, word: &str) -> String {
        word.split('\n')
            .map(|row| {
                if self.decision.apply_gradient {
                    gradient(row, self.colors.title_start, self.colors.title_end)
                } else {
                    fg(self.colors.title_start, row)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Brand mark with the version right-justified to `width`.
    fn meta_row(&self, version: &str, width: usize) -> String {
        let brand_width = display_width(BRAND_MARK);
        let max_version = width.saturating_sub(brand_width + META_ROW_GAP);
        let version = truncate(version, max_version, VERSION_TAIL);
        let gap = width.saturating_sub(brand_width + display_width(&version));
        format!(
            "{}{}{}",
            fg(self.colors.brand, BRAND_MARK),
            " ".repeat(gap),
            fg(self.colors.version, &version)
        )
    }

    fn field_row(&self, width: usize) -> String {
        fg(self.colors.field, &self.diag.repeat(width))
    }

    fn field_column(&self, width: usize, height: usize) -> String {
        vec![self.field_row(width); height].join("\n")
    }
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
