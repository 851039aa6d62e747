//! Block-art letterforms for the OpenPilot wordmark.
//!
//! The catalog is closed: only the letters that spell the brand exist. Every
//! glyph is [`GLYPH_HEIGHT`] rows tall and every row of a glyph has the same
//! display width. The stretched form of a letter is strictly wider and keeps
//! the row count.

use std::fmt;

use thiserror::Error;

/// Rows in every glyph.
pub const GLYPH_HEIGHT: usize = 3;

/// Errors from converting text into brand letters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlyphError {
    /// The character has no glyph in the catalog.
    #[error("no glyph for letter {0:?} (available: O P E N I L T)")]
    UnknownLetter(char),
}

/// A letter of the brand word.
///
/// The catalog is the enum: a letter without a glyph cannot be represented,
/// so lookups never fail. Text from outside the crate goes through
/// [`Letter::try_from`] or [`parse_letters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    O,
    P,
    E,
    N,
    I,
    L,
    T,
}

impl Letter {
    /// All letters in the catalog.
    pub const ALL: [Letter; 7] = [
        Letter::O,
        Letter::P,
        Letter::E,
        Letter::N,
        Letter::I,
        Letter::L,
        Letter::T,
    ];

    /// The uppercase character this letter draws.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Letter::O => 'O',
            Letter::P => 'P',
            Letter::E => 'E',
            Letter::N => 'N',
            Letter::I => 'I',
            Letter::L => 'L',
            Letter::T => 'T',
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = GlyphError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'O' => Ok(Letter::O),
            'P' => Ok(Letter::P),
            'E' => Ok(Letter::E),
            'N' => Ok(Letter::N),
            'I' => Ok(Letter::I),
            'L' => Ok(Letter::L),
            'T' => Ok(Letter::T),
            _ => Err(GlyphError::UnknownLetter(c)),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Parses a string of brand letters, ignoring whitespace.
///
/// # Errors
///
/// Returns [`GlyphError::UnknownLetter`] for the first character outside
/// the catalog.
pub fn parse_letters(text: &str) -> Result<Vec<Letter>, GlyphError> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(Letter::try_from)
        .collect()
}

/// One rendered letterform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [&'static str; GLYPH_HEIGHT],
}

impl Glyph {
    /// The glyph's rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[&'static str; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Display width shared by every row.
    #[must_use]
    pub fn width(&self) -> usize {
        crate::style::display_width(self.rows[0])
    }

    /// The glyph as a newline-separated block.
    #[must_use]
    pub fn to_block(&self) -> String {
        self.rows.join("\n")
    }
}

struct Letterform {
    regular: [&'static str; GLYPH_HEIGHT],
    stretched: [&'static str; GLYPH_HEIGHT],
}

const FORM_O: Letterform = Letterform {
    regular: ["▄▀▀▀▄", "█   █", "▀▄▄▄▀"],
    stretched: ["▄▀▀▀▀▀▀▄", "█      █", "▀▄▄▄▄▄▄▀"],
};

const FORM_P: Letterform = Letterform {
    regular: ["█▀▀▀█", "█▄▄▄█", "█    "],
    stretched: ["█▀▀▀▀▀▀█", "█▄▄▄▄▄▄█", "█       "],
};

const FORM_E: Letterform = Letterform {
    regular: ["█▀▀▀", "█▀▀ ", "█▄▄▄"],
    stretched: ["█▀▀▀▀▀▀", "█▀▀▀▀  ", "█▄▄▄▄▄▄"],
};

const FORM_N: Letterform = Letterform {
    regular: ["█▌ █", "██▌█", "█ ▐█"],
    stretched: ["█▌    █", "█ ▀▄▄ █", "█    ▐█"],
};

const FORM_I: Letterform = Letterform {
    regular: ["▀█▀", " █ ", "▄█▄"],
    stretched: ["▀▀█▀▀", "  █  ", "▄▄█▄▄"],
};

const FORM_L: Letterform = Letterform {
    regular: ["█   ", "█   ", "█▄▄▄"],
    stretched: ["█      ", "█      ", "█▄▄▄▄▄▄"],
};

const FORM_T: Letterform = Letterform {
    regular: ["▀▀█▀▀", "  █  ", "  █  "],
    stretched: ["▀▀▀▀█▀▀▀▀", "    █    ", "    █    "],
};

fn letterform(letter: Letter) -> &'static Letterform {
    match letter {
        Letter::O => &FORM_O,
        Letter::P => &FORM_P,
        Letter::E => &FORM_E,
        Letter::N => &FORM_N,
        Letter::I => &FORM_I,
        Letter::L => &FORM_L,
        Letter::T => &FORM_T,
    }
}

/// Looks up the glyph for `letter`, optionally in its stretched form.
#[must_use]
pub fn glyph(letter: Letter, stretch: bool) -> Glyph {
    let form = letterform(letter);
    Glyph {
        rows: if stretch { form.stretched } else { form.regular },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::display_width;

    #[test]
    fn every_glyph_has_uniform_rows() {
        for letter in Letter::ALL {
            for stretch in [false, true] {
                let g = glyph(letter, stretch);
                assert_eq!(g.rows().len(), GLYPH_HEIGHT);
                for row in g.rows() {
                    assert_eq!(
                        display_width(row),
                        g.width(),
                        "{letter} (stretch {stretch}) row {row:?} is ragged"
                    );
                }
            }
        }
    }

    #[test]
    fn stretch_widens_every_letter() {
        for letter in Letter::ALL {
            assert!(
                glyph(letter, true).width() > glyph(letter, false).width(),
                "{letter} does not widen when stretched"
            );
        }
    }

    #[test]
    fn regular_widths_match_letterforms() {
        let widths: Vec<usize> = Letter::ALL
            .iter()
            .map(|&l| glyph(l, false).width())
            .collect();
        assert_eq!(widths, vec![5, 5, 4, 4, 3, 4, 5]);
    }

    #[test]
    fn no_glyph_row_is_blank() {
        for letter in Letter::ALL {
            for row in glyph(letter, false).rows() {
                assert!(!row.trim().is_empty());
            }
        }
    }

    #[test]
    fn letter_from_char_is_case_insensitive() {
        assert_eq!(Letter::try_from('o'), Ok(Letter::O));
        assert_eq!(Letter::try_from('T'), Ok(Letter::T));
    }

    #[test]
    fn letter_from_unknown_char_is_error() {
        assert_eq!(Letter::try_from('Z'), Err(GlyphError::UnknownLetter('Z')));
    }

    #[test]
    fn letter_round_trips_through_char() {
        for letter in Letter::ALL {
            assert_eq!(Letter::try_from(letter.as_char()), Ok(letter));
        }
    }

    #[test]
    fn parse_letters_skips_whitespace() {
        assert_eq!(
            parse_letters("open pilot").unwrap(),
            vec![
                Letter::O,
                Letter::P,
                Letter::E,
                Letter::N,
                Letter::P,
                Letter::I,
                Letter::L,
                Letter::O,
                Letter::T,
            ]
        );
    }

    #[test]
    fn parse_letters_reports_first_unknown() {
        assert_eq!(parse_letters("POX"), Err(GlyphError::UnknownLetter('X')));
    }

    #[test]
    fn glyph_error_display() {
        let err = GlyphError::UnknownLetter('x');
        assert_eq!(
            err.to_string(),
            "no glyph for letter 'x' (available: O P E N I L T)"
        );
    }
}
