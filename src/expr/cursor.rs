// src/expr/cursor.rs

//! Character cursor over an expression string.
//!
//! Keeps a byte position into the source so parse errors can point at the
//! offending character. The scanning helpers consume the longest valid
//! prefix and leave the cursor untouched when nothing matches.

#[derive(Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// Byte offset of the next unconsumed character.
    pub fn pos(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }
    }

    /// Scans a floating-point literal: optional `-`, digits, optional
    /// fraction, optional `e`/`E` exponent. Returns `None` without
    /// consuming anything when no mantissa digit is present (so a lone
    /// `-` is left for the caller to deal with).
    pub fn scan_float(&mut self) -> Option<f64> {
        let bytes = self.rest().as_bytes();
        let mut end = 0;

        if bytes.first() == Some(&b'-') {
            end = 1;
        }

        let int_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        let int_digits = end - int_start;

        let mut frac_digits = 0;
        if bytes.get(end) == Some(&b'.') {
            let mut frac_end = end + 1;
            while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
                frac_end += 1;
            }
            frac_digits = frac_end - end - 1;
            // "3." is a valid literal; a bare "." is not.
            if int_digits > 0 || frac_digits > 0 {
                end = frac_end;
            }
        }

        if int_digits == 0 && frac_digits == 0 {
            return None;
        }

        if matches!(bytes.get(end), Some(&b'e') | Some(&b'E')) {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(&b'+') | Some(&b'-')) {
                exp_end += 1;
            }
            let exp_digit_start = exp_end;
            while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
                exp_end += 1;
            }
            // An `e` with no digits belongs to whatever follows, not to
            // this literal.
            if exp_end > exp_digit_start {
                end = exp_end;
            }
        }

        let literal = &self.rest()[..end];
        let value = literal.parse::<f64>().ok()?;
        self.pos += end;
        Some(value)
    }

    /// Scans a run of decimal digits into a `u32`, saturating on overflow.
    /// Returns `None` without consuming anything when no digit is present.
    pub fn scan_integer(&mut self) -> Option<u32> {
        let mut value: u32 = 0;
        let mut seen = false;

        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            value = value.saturating_mul(10).saturating_add(digit);
            seen = true;
            self.bump();
        }

        seen.then_some(value)
    }
}
