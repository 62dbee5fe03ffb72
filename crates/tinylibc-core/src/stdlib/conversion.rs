//! Unsigned integer parsing (`strtoul`), OpenBSD lineage.

use crate::ctype;

/// Result of a string-to-number conversion.
///
/// This is API richness for Rust callers only; the C boundary has no
/// error channel and discards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    Success,
    Overflow,
    InvalidBase,
}

/// Parses an unsigned integer of the given base from `s`.
///
/// Returns `(value, consumed, status)` where `consumed` is the index of
/// the first unconsumed byte if at least one digit was accepted, and 0
/// otherwise (so an end pointer resets to the start of the string).
///
/// Semantics:
/// - Leading whitespace is skipped; an optional `+`/`-` sign follows. A
///   `-` negates the final magnitude with unsigned wraparound.
/// - When base is 0 or 16 and the input continues `0x`/`0X`, both prefix
///   bytes are consumed and the base becomes 16, even if no hex digit
///   follows. Base 0 otherwise auto-detects octal (leading `0`) vs decimal.
/// - A resolved base outside 2..=36 yields `(0, 0, InvalidBase)`.
/// - Overflow clamps to `u64::MAX` and the clamp is sticky: remaining
///   digits of the base are consumed but ignored, and the clamped value is
///   not negated. No range error is reported.
///
/// A zero byte in `s` acts as a terminator: it is not a digit of any base,
/// so parsing never continues past it.
pub fn strtoul_impl(s: &[u8], base: i32) -> (u64, usize, ConversionStatus) {
    let mut i = 0;
    while i < s.len() && ctype::is_space(s[i]) {
        i += 1;
    }

    let mut neg = false;
    if i < s.len() && (s[i] == b'-' || s[i] == b'+') {
        neg = s[i] == b'-';
        i += 1;
    }

    let mut effective_base = base as u64;
    if (base == 0 || base == 16)
        && i + 1 < s.len()
        && s[i] == b'0'
        && matches!(s[i + 1], b'x' | b'X')
    {
        i += 2;
        effective_base = 16;
    }
    if effective_base == 0 {
        effective_base = if i < s.len() && s[i] == b'0' { 8 } else { 10 };
    }
    if !(2..=36).contains(&effective_base) {
        return (0, 0, ConversionStatus::InvalidBase);
    }

    let cutoff = u64::MAX / effective_base;
    let cutlim = u64::MAX % effective_base;

    let mut acc = 0u64;
    let mut any = false;
    let mut overflow = false;

    while i < s.len() {
        let c = s[i];
        let digit = if ctype::is_digit(c) {
            c - b'0'
        } else if ctype::is_alpha(c) {
            if ctype::is_upper(c) {
                c - b'A' + 10
            } else {
                c - b'a' + 10
            }
        } else {
            break;
        };
        if u64::from(digit) >= effective_base {
            break;
        }

        any = true;
        if !overflow {
            if acc > cutoff || (acc == cutoff && u64::from(digit) > cutlim) {
                acc = u64::MAX;
                overflow = true;
            } else {
                acc = acc * effective_base + u64::from(digit);
            }
        }
        i += 1;
    }

    if !any {
        return (0, 0, ConversionStatus::Success);
    }
    if overflow {
        return (u64::MAX, i, ConversionStatus::Overflow);
    }

    let value = if neg { acc.wrapping_neg() } else { acc };
    (value, i, ConversionStatus::Success)
}

/// [`strtoul_impl`] without the status, for callers that only want the
/// C-visible result.
pub fn strtoul(s: &[u8], base: i32) -> (u64, usize) {
    let (value, consumed, _) = strtoul_impl(s, base);
    (value, consumed)
}
