//! OpenPilot wordmark - width-aware terminal logo layout.
//!
//! This crate renders the `OPENPILOT` block-letter wordmark for terminal
//! output. Given a target width and a color scheme it chooses between the
//! wide framed logo, a stacked `OPEN` / `PILOT` form and the `OP` acronym,
//! and returns ANSI-styled text whose rows never exceed the width.
//!
//! # Determinism
//!
//! Every entry point is a pure function of its arguments. The emphasized
//! (stretched) letter is derived from the widths involved, so the same
//! inputs always produce the same bytes.
//!
//! # Modules
//!
//! - [`glyph`]: Letterforms and their stretched variants
//! - [`compose`]: Joining glyphs into words
//! - [`layout`]: Width-based layout decisions
//! - [`render`]: Variant selection and final composition
//! - [`style`]: ANSI-aware width, truncation and coloring
//! - [`text_block`]: Padding, clamping and joining of multi-row blocks
//! - [`theme`]: Color roles
//! - [`widget`]: Ratatui widget for rendered blocks
//! - [`config`]: Environment configuration for the preview binary
//! - [`error`]: Error types

pub mod compose;
pub mod config;
pub mod error;
pub mod glyph;
pub mod layout;
pub mod render;
pub mod style;
pub mod text_block;
pub mod theme;
pub mod widget;

pub use compose::render_word;
pub use config::{Config, ConfigError};
pub use error::{Result, WordmarkError};
pub use glyph::{glyph, parse_letters, Glyph, GlyphError, Letter, GLYPH_HEIGHT};
pub use layout::{decide_layout, LayoutDecision, BASE_LEFT_FIELD_WIDTH, DEFAULT_RIGHT_FIELD_WIDTH};
pub use render::{
    render, render_chat, select_variant, small_render, RenderOptions, RenderRequest, Variant,
    WORDMARK,
};
pub use text_block::{clamp_lines, pad_lines};
pub use theme::ColorScheme;
pub use widget::WordmarkWidget;
