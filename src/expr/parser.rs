// src/expr/parser.rs

//! Term-by-term polynomial parser.
//!
//! The grammar is deliberately small: a polynomial is a sequence of additive
//! terms, each an optional sign, an optional scale, and an optional power of
//! `x` (`x`, `x2`, or `x^2`). No parentheses, no products of variable terms,
//! no division. Exponents are never signed, so `x^-2` reads as the term `x`
//! followed by the constant `-2`.

use log::{debug, trace};
use thiserror::Error;

use super::cursor::Cursor;
use crate::poly::{Polynomial, Term};

/// How the parser treats a character the grammar does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Reject the character with a positioned error.
    #[default]
    Strict,
    /// Fold the character into the constant term 1, consuming it so that
    /// parsing always makes progress.
    Lenient,
}

/// An expression character outside the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid character '{ch}' at position {pos}")]
pub struct ParseError {
    pub ch: char,
    pub pos: usize,
}

/// Parses a whole expression into a polynomial by extracting terms until
/// end of input.
pub fn parse_polynomial(src: &str, mode: ParseMode) -> Result<Polynomial, ParseError> {
    let mut cursor = Cursor::new(src);
    let mut poly = Polynomial::new();

    while let Some(term) = parse_term(&mut cursor, mode)? {
        trace!("parsed term {:?} at offset {}", term, cursor.pos());
        poly.push(term);
    }

    debug!("parsed {:?} into {} term(s)", src, poly.terms().len());
    Ok(poly)
}

/// Extracts one additive term and advances the cursor past it, or returns
/// `Ok(None)` at end of input.
fn parse_term(cursor: &mut Cursor, mode: ParseMode) -> Result<Option<Term>, ParseError> {
    cursor.skip_whitespace();

    let scale = match cursor.peek() {
        None => return Ok(None),
        Some('-') => {
            cursor.bump();
            -parse_scale(cursor)
        }
        Some('+') => {
            cursor.bump();
            parse_scale(cursor)
        }
        Some(c) if c.is_ascii_digit() || c == 'x' => parse_scale(cursor),
        Some(c) => {
            return match mode {
                ParseMode::Strict => Err(ParseError {
                    ch: c,
                    pos: cursor.pos(),
                }),
                ParseMode::Lenient => {
                    cursor.bump();
                    Ok(Some(Term::new(1.0, 0)))
                }
            };
        }
    };

    let power = parse_power(cursor);
    Ok(Some(Term::new(scale, power)))
}

/// Parses the scale of a term. Falls back to a magnitude of 1.0 when the
/// term has no numeral (`x`, `-x`); a `-` that the float scanner cannot
/// digest yields 0.0 without consuming anything.
fn parse_scale(cursor: &mut Cursor) -> f64 {
    cursor.skip_whitespace();
    match cursor.peek() {
        Some(c) if c.is_ascii_digit() || c == '-' => cursor.scan_float().unwrap_or(0.0),
        _ => 1.0,
    }
}

/// Parses the power of a term: 0 when no `x` follows, otherwise the integer
/// after the `x` (an optional `^` in between), defaulting to 1 for a bare
/// `x`. Only unsigned digits are consumed.
fn parse_power(cursor: &mut Cursor) -> u32 {
    cursor.skip_whitespace();
    if cursor.peek() != Some('x') {
        return 0;
    }
    cursor.bump();

    cursor.skip_whitespace();
    if cursor.peek() == Some('^') {
        cursor.bump();
        cursor.skip_whitespace();
    }

    cursor.scan_integer().unwrap_or(1)
}
