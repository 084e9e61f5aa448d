// src/config.rs

//! Command-line surface and the immutable render configuration built from it.
//!
//! The configuration is constructed exactly once from the parsed arguments
//! and passed down by value; nothing mutates it afterwards.

use std::path::PathBuf;

use clap::Parser;

use crate::color::{Color, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};
use crate::expr::ParseMode;

/// Grid dimension used when `-r`/`-c` are not given.
const DEFAULT_DIMENSION: u32 = 100;

/// Command-line arguments.
///
/// Dimension flags reject zero and non-numeric input at the value parser,
/// so a constructed `Config` always describes a non-empty grid.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "polyplot",
    about = "Plot polynomial curves of x to a plain-text PPM image"
)]
pub struct CliArgs {
    /// Polynomial expressions, e.g. "x^2 - 3x + 1"
    #[arg(value_name = "EQUATION")]
    pub equations: Vec<String>,

    /// Number of rows in the graph
    #[arg(short, long, value_name = "ROWS", default_value_t = DEFAULT_DIMENSION,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,

    /// Number of columns in the graph
    #[arg(short, long, value_name = "COLS", default_value_t = DEFAULT_DIMENSION,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub cols: u32,

    /// Path of the output file
    #[arg(short, long, value_name = "PATH", default_value = "output.ppm")]
    pub output: PathBuf,

    /// Foreground color as a hex triplet, with or without a leading '#'
    #[arg(short, long, value_name = "FORE", default_value_t = DEFAULT_FOREGROUND)]
    pub foreground: Color,

    /// Background color as a hex triplet, with or without a leading '#'
    #[arg(short, long, value_name = "BACK", default_value_t = DEFAULT_BACKGROUND)]
    pub background: Color,

    /// Fold unknown expression characters into the constant 1 instead of
    /// reporting a parse error
    #[arg(long)]
    pub lenient: bool,
}

/// Immutable rendering configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub foreground: Color,
    pub background: Color,
    pub output: PathBuf,
    pub parse_mode: ParseMode,
}

impl Config {
    /// Builds the configuration from validated command-line arguments.
    pub fn from_args(args: &CliArgs) -> Self {
        Config {
            rows: args.rows as usize,
            cols: args.cols as usize,
            foreground: args.foreground,
            background: args.background,
            output: args.output.clone(),
            parse_mode: if args.lenient {
                ParseMode::Lenient
            } else {
                ParseMode::Strict
            },
        }
    }
}
