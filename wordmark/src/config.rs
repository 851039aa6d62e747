//! Configuration for the `openpilot-logo` preview binary.
//!
//! The engine takes explicit values; only the binary reads the environment.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OPENPILOT_LOGO_WIDTH` | terminal width | Target width; `0` or less for unconstrained |
//! | `OPENPILOT_LOGO_VERSION` | `v<crate version>` | Version text in the meta row |
//! | `OPENPILOT_LOGO_FIELD_COLOR` | `#969696` | Diagonal field color |
//! | `OPENPILOT_LOGO_TITLE_START_COLOR` | `#c864c8` | Left gradient endpoint |
//! | `OPENPILOT_LOGO_TITLE_END_COLOR` | `#64c8c8` | Right gradient endpoint |
//! | `OPENPILOT_LOGO_BRAND_COLOR` | `#ff64c8` | Brand mark color |
//! | `OPENPILOT_LOGO_VERSION_COLOR` | `#c8c8c8` | Version text color |
//! | `NO_COLOR` | unset | Disable all colors (color overrides are ignored) |
//! | `TERM` | - | `linux` or `vt100` switches fields to `/` |

use std::env;

use crossterm::style::Color;
use thiserror::Error;

use crate::theme::ColorScheme;

const ENV_WIDTH: &str = "OPENPILOT_LOGO_WIDTH";
const ENV_VERSION: &str = "OPENPILOT_LOGO_VERSION";
const ENV_FIELD_COLOR: &str = "OPENPILOT_LOGO_FIELD_COLOR";
const ENV_TITLE_START_COLOR: &str = "OPENPILOT_LOGO_TITLE_START_COLOR";
const ENV_TITLE_END_COLOR: &str = "OPENPILOT_LOGO_TITLE_END_COLOR";
const ENV_BRAND_COLOR: &str = "OPENPILOT_LOGO_BRAND_COLOR";
const ENV_VERSION_COLOR: &str = "OPENPILOT_LOGO_VERSION_COLOR";

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Settings for the preview binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Target width, if set. `None` lets the binary ask the terminal.
    pub width: Option<i32>,
    /// Version text for the meta row.
    pub version: String,
    /// Colors for every role.
    pub colors: ColorScheme,
    /// Draw fields with `/` instead of `╱`.
    pub ascii_fields: bool,
}

impl Config {
    /// Creates a new `Config` by parsing environment variables.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if:
    /// - `OPENPILOT_LOGO_WIDTH` is set but is not an integer
    /// - a color variable is set but is not a `#rrggbb` hex color
    pub fn from_env() -> Result<Self, ConfigError> {
        let width = match env::var(ENV_WIDTH) {
            Ok(val) => Some(val.trim().parse::<i32>().map_err(|_| {
                ConfigError::InvalidValue {
                    key: ENV_WIDTH.to_string(),
                    message: format!("expected integer, got '{val}'"),
                }
            })?),
            Err(_) => None,
        };

        let version = env::var(ENV_VERSION)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_version);

        let mut colors = ColorScheme::from_env();
        if !colors.is_monochrome() {
            override_color(&mut colors.field, ENV_FIELD_COLOR)?;
            override_color(&mut colors.title_start, ENV_TITLE_START_COLOR)?;
            override_color(&mut colors.title_end, ENV_TITLE_END_COLOR)?;
            override_color(&mut colors.brand, ENV_BRAND_COLOR)?;
            override_color(&mut colors.version, ENV_VERSION_COLOR)?;
        }

        Ok(Self {
            width,
            version,
            colors,
            ascii_fields: limited_terminal(),
        })
    }
}

/// Version text used when none is configured.
#[must_use]
pub fn default_version() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

fn override_color(slot: &mut Color, key: &str) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(key) {
        *slot = parse_hex_color(&val).ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected #rrggbb, got '{val}'"),
        })?;
    }
    Ok(())
}

/// Parses `#rrggbb` (the `#` is optional) into an RGB color.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Whether `TERM` names a terminal without box-drawing diagonals.
fn limited_terminal() -> bool {
    env::var("TERM")
        .map(|t| t.contains("linux") || t.contains("vt100"))
        .unwrap_or(false)
}
