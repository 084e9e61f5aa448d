// src/expr/tests.rs

use proptest::prelude::*;

use crate::expr::{parse_polynomial, ParseError, ParseMode};
use crate::poly::{Polynomial, Term};

fn parse(src: &str) -> Polynomial {
    parse_polynomial(src, ParseMode::Strict).expect("expression should parse")
}

fn eval(src: &str, x: f64) -> f64 {
    parse(src).eval(x)
}

// --- Grammar ---

#[test]
fn test_square_term() {
    assert_eq!(eval("x^2", 3.0), 9.0);
}

#[test]
fn test_full_quadratic() {
    assert_eq!(eval("2x^2 - 4x + 1", 2.0), 1.0);
}

#[test]
fn test_negated_bare_variable() {
    assert_eq!(eval("-x", 5.0), -5.0);
}

#[test]
fn test_bare_variable_has_implicit_scale_and_power() {
    assert_eq!(parse("x").terms(), &[Term::new(1.0, 1)]);
}

#[test]
fn test_exponent_without_caret() {
    // Digits directly after `x` are an exponent too.
    assert_eq!(eval("x3", 2.0), 8.0);
}

#[test]
fn test_whitespace_between_tokens() {
    assert_eq!(eval("  2 x ^ 2 ", 3.0), 18.0);
}

#[test]
fn test_fractional_scale() {
    assert_eq!(eval("0.5x", 4.0), 2.0);
}

#[test]
fn test_leading_dot_is_not_a_numeral() {
    // A fraction must start with a digit; `.5x` trips over the dot.
    let err = parse_polynomial(".5x", ParseMode::Strict).unwrap_err();
    assert_eq!(err, ParseError { ch: '.', pos: 0 });
}

#[test]
fn test_explicit_plus_sign() {
    assert_eq!(eval("+3x + 1", 2.0), 7.0);
}

#[test]
fn test_constant_power_is_zero() {
    assert_eq!(parse("7").terms(), &[Term::new(7.0, 0)]);
}

#[test]
fn test_power_zero_at_zero_input() {
    // x^0 is 1 even at x = 0.
    assert_eq!(eval("5", 0.0), 5.0);
}

#[test]
fn test_empty_expression_is_empty_polynomial() {
    assert!(parse("").is_empty());
    assert_eq!(eval("   ", 3.0), 0.0);
}

// --- Documented quirks ---

#[test]
fn test_bare_minus_is_negative_one() {
    // The scale parser falls through to 1.0 after the sign is consumed.
    assert_eq!(parse("-").terms(), &[Term::new(-1.0, 0)]);
}

#[test]
fn test_negative_exponent_not_supported() {
    // `x^-2` is the term `x` followed by the constant `-2`, never x⁻².
    assert_eq!(parse("x^-2").terms(), &[Term::new(1.0, 1), Term::new(-2.0, 0)]);
    assert_eq!(eval("x^-2", 2.0), 0.0);
}

#[test]
fn test_double_sign_scale_falls_through_to_zero() {
    // After the first sign, the scanner sees `-x`, digests nothing, and the
    // scale collapses to 0.
    let poly = parse("--x");
    assert_eq!(poly.terms().len(), 2);
    assert_eq!(poly.terms()[1], Term::new(-1.0, 1));
    assert_eq!(poly.eval(3.0), -3.0);
}

// --- Error handling ---

#[test]
fn test_strict_rejects_invalid_character() {
    let err = parse_polynomial("x + $", ParseMode::Strict).unwrap_err();
    assert_eq!(err, ParseError { ch: '$', pos: 4 });
}

#[test]
fn test_strict_error_position_is_byte_offset() {
    let err = parse_polynomial("(x)", ParseMode::Strict).unwrap_err();
    assert_eq!(err, ParseError { ch: '(', pos: 0 });
}

#[test]
fn test_lenient_folds_invalid_character_into_constant_one() {
    let poly = parse_polynomial("$", ParseMode::Lenient).expect("lenient never fails");
    assert_eq!(poly.terms(), &[Term::new(1.0, 0)]);
}

#[test]
fn test_lenient_always_makes_progress() {
    // Four junk characters, four constant-1 terms; no infinite loop.
    let poly = parse_polynomial("@@@@", ParseMode::Lenient).expect("lenient never fails");
    assert_eq!(poly.terms().len(), 4);
    assert_eq!(poly.eval(0.0), 4.0);
}

#[test]
fn test_lenient_resumes_after_invalid_character() {
    let poly = parse_polynomial("x$3", ParseMode::Lenient).expect("lenient never fails");
    assert_eq!(
        poly.terms(),
        &[Term::new(1.0, 1), Term::new(1.0, 0), Term::new(3.0, 0)]
    );
}

// --- Properties ---

/// Renders `(scale, power)` pairs the way a user would write them.
fn render(terms: &[(f64, u32)]) -> String {
    let mut out = String::new();
    for (i, &(scale, power)) in terms.iter().enumerate() {
        if i == 0 {
            if scale.is_sign_negative() {
                out.push_str("- ");
            }
        } else {
            out.push_str(if scale.is_sign_negative() { " - " } else { " + " });
        }
        let magnitude = scale.abs();
        match power {
            0 => out.push_str(&format!("{magnitude}")),
            1 => out.push_str(&format!("{magnitude}x")),
            p => out.push_str(&format!("{magnitude}x^{p}")),
        }
    }
    out
}

proptest! {
    #[test]
    fn test_eval_at_zero_is_sum_of_constant_scales(
        terms in prop::collection::vec((-1000.0f64..1000.0, 0u32..5), 0..6)
    ) {
        let src = render(&terms);
        let poly = parse_polynomial(&src, ParseMode::Strict).expect("rendered input is valid");
        let expected: f64 = terms.iter().filter(|&&(_, p)| p == 0).map(|&(s, _)| s).sum();
        prop_assert_eq!(poly.eval(0.0), expected);
    }

    #[test]
    fn test_parse_round_trips_term_count(
        terms in prop::collection::vec((-1000.0f64..1000.0, 0u32..5), 0..6)
    ) {
        let poly = parse_polynomial(&render(&terms), ParseMode::Strict).expect("rendered input is valid");
        prop_assert_eq!(poly.terms().len(), terms.len());
    }
}
