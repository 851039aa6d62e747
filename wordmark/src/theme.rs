//! Color roles for the wordmark.
//!
//! The engine never looks colors up globally; every render receives a
//! [`ColorScheme`] value.
//!
//! # NO_COLOR Support
//!
//! [`ColorScheme::monochrome()`] sets every role to [`Color::Reset`], which
//! the styling layer renders without any escape sequence.
//! [`ColorScheme::from_env()`] picks it when `NO_COLOR` is set.

use crossterm::style::Color;

/// The five colors used by a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Decorative diagonal fields.
    pub field: Color,
    /// Left end of the title gradient; also the solid title color.
    pub title_start: Color,
    /// Right end of the title gradient.
    pub title_end: Color,
    /// The `Surya™` brand mark.
    pub brand: Color,
    /// The version text.
    pub version: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            field: Color::Rgb {
                r: 150,
                g: 150,
                b: 150,
            },
            title_start: Color::Rgb {
                r: 200,
                g: 100,
                b: 200,
            },
            title_end: Color::Rgb {
                r: 100,
                g: 200,
                b: 200,
            },
            brand: Color::Rgb {
                r: 255,
                g: 100,
                b: 200,
            },
            version: Color::Rgb {
                r: 200,
                g: 200,
                b: 200,
            },
        }
    }
}

impl ColorScheme {
    /// A scheme that emits no color codes at all.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            field: Color::Reset,
            title_start: Color::Reset,
            title_end: Color::Reset,
            brand: Color::Reset,
            version: Color::Reset,
        }
    }

    /// [`ColorScheme::monochrome()`] if `NO_COLOR` is set, the default
    /// scheme otherwise.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            Self::monochrome()
        } else {
            Self::default()
        }
    }

    /// Whether every role is [`Color::Reset`].
    #[must_use]
    pub fn is_monochrome(&self) -> bool {
        [
            self.field,
            self.title_start,
            self.title_end,
            self.brand,
            self.version,
        ]
        .iter()
        .all(|c| *c == Color::Reset)
    }
}
