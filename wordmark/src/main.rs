//! OpenPilot logo preview.
//!
//! Prints the wordmark to stdout the way the TUI would lay it out, so the
//! variants can be checked at any width without starting the application.
//!
//! # Commands
//!
//! - `openpilot-logo wide`: full decision pipeline (default)
//! - `openpilot-logo chat`: split-word chat logo
//! - `openpilot-logo small`: single-line brand mark
//! - `openpilot-logo word <LETTERS>`: raw glyphs for any brand letters
//!
//! # Environment Variables
//!
//! See the [`config`](openpilot_wordmark::config) module for available
//! configuration options.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use openpilot_wordmark::config::Config;
use openpilot_wordmark::{
    parse_letters, render, render_chat, render_word, select_variant, small_render,
    RenderOptions, WordmarkError,
};

/// OpenPilot logo preview.
///
/// Renders the OpenPilot wordmark for a given terminal width.
#[derive(Parser, Debug)]
#[command(name = "openpilot-logo")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT VARIABLES:
    OPENPILOT_LOGO_WIDTH         Target width (default: terminal width)
    OPENPILOT_LOGO_VERSION       Version text (default: crate version)
    OPENPILOT_LOGO_*_COLOR       Role colors as #rrggbb
    NO_COLOR                     Disable colors
    RUST_LOG                     Log filter for stderr (default: warn)

EXAMPLES:
    # Wide logo at 80 columns
    openpilot-logo --width 80

    # Stacked layout in a narrow sidebar
    openpilot-logo --width 30 --compact

    # Chat logo without width limit
    openpilot-logo --width 0 chat
")]
struct Cli {
    /// Target width in columns; 0 or less for unconstrained.
    #[arg(short, long, allow_negative_numbers = true, global = true)]
    width: Option<i32>,

    /// Version text shown in the meta row.
    #[arg(long, global = true)]
    version_text: Option<String>,

    /// Prefer the compact layouts.
    #[arg(short, long, global = true)]
    compact: bool,

    /// Disable colors.
    #[arg(long, global = true)]
    monochrome: bool,

    /// Draw decorative fields with '/' instead of '╱'.
    #[arg(long, global = true)]
    ascii: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Render the logo through the full layout pipeline.
    Wide,

    /// Render the split-word logo shown when a chat starts.
    Chat,

    /// Render the single-line brand mark.
    Small,

    /// Render raw glyphs for the given brand letters.
    Word {
        /// Letters to draw (any of O P E N I L T).
        letters: String,

        /// Index of the letter to stretch.
        #[arg(short, long)]
        stretch: Option<usize>,

        /// Blank columns between letters.
        #[arg(long, default_value_t = 1)]
        spacing: usize,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    let width = cli
        .width
        .or(config.width)
        .unwrap_or_else(terminal_width);
    let version = cli.version_text.clone().unwrap_or(config.version);
    let colors = if cli.monochrome {
        openpilot_wordmark::ColorScheme::monochrome()
    } else {
        config.colors
    };
    let options = RenderOptions::new(colors)
        .with_width(width)
        .with_ascii_fields(cli.ascii || config.ascii_fields);

    debug!(width, version = %version, ascii = options.ascii_fields, "Configuration loaded");

    let block = match cli.command.unwrap_or(Command::Wide) {
        Command::Wide => {
            info!(variant = %select_variant(cli.compact, &options), "Rendering wordmark");
            render(&version, cli.compact, &options)
        }
        Command::Chat => render_chat(&version, &options),
        Command::Small => small_render(width, &options.colors),
        Command::Word {
            letters,
            stretch,
            spacing,
        } => {
            let letters = parse_letters(&letters).context("Failed to parse letters")?;
            render_word(spacing, stretch, &letters)
        }
    };

    emit(&block).context("Failed to write logo")?;
    Ok(())
}

/// Writes the block to stdout followed by a newline.
fn emit(block: &str) -> Result<(), WordmarkError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{block}")?;
    stdout.flush()?;
    Ok(())
}

/// Width of the attached terminal, or 0 (unconstrained) when stdout is not
/// a terminal.
fn terminal_width() -> i32 {
    if !io::stdout().is_terminal() {
        return 0;
    }
    crossterm::terminal::size()
        .map(|(columns, _)| i32::from(columns))
        .unwrap_or(0)
}

/// Initializes the logging subsystem on stderr.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}
