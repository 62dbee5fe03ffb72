//! ABI layer for the `<ctype.h>` subset.
//!
//! Pure compute -- no pointers. Each function masks the input to u8 and
//! delegates to `tinylibc_core::ctype`. Values outside `0..=255`
//! (including `EOF`) classify as 0, which is what the unsigned-wraparound
//! range checks compute for them.

use core::ffi::c_int;

#[inline]
fn classify(c: c_int, f: fn(u8) -> bool) -> c_int {
    if !(0..=255).contains(&c) {
        return 0;
    }
    c_int::from(f(c as u8))
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isdigit(c: c_int) -> c_int {
    classify(c, tinylibc_core::ctype::is_digit)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isalpha(c: c_int) -> c_int {
    classify(c, tinylibc_core::ctype::is_alpha)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isupper(c: c_int) -> c_int {
    classify(c, tinylibc_core::ctype::is_upper)
}

#[cfg_attr(not(debug_assertions), unsafe(no_mangle))]
pub unsafe extern "C" fn isspace(c: c_int) -> c_int {
    classify(c, tinylibc_core::ctype::is_space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifiers_on_ascii() {
        // SAFETY: pure functions, no pointer arguments.
        unsafe {
            assert_eq!(isdigit(c_int::from(b'7')), 1);
            assert_eq!(isdigit(c_int::from(b'x')), 0);
            assert_eq!(isalpha(c_int::from(b'g')), 1);
            assert_eq!(isalpha(c_int::from(b'4')), 0);
            assert_eq!(isupper(c_int::from(b'G')), 1);
            assert_eq!(isupper(c_int::from(b'g')), 0);
            assert_eq!(isspace(c_int::from(b'\t')), 1);
            assert_eq!(isspace(c_int::from(b'_')), 0);
        }
    }

    #[test]
    fn test_out_of_domain_values_classify_as_zero() {
        // SAFETY: pure functions, no pointer arguments.
        unsafe {
            for c in [-1, -128, 256, 0x130, c_int::MAX, c_int::MIN] {
                assert_eq!(isdigit(c), 0, "isdigit({c})");
                assert_eq!(isalpha(c), 0, "isalpha({c})");
                assert_eq!(isupper(c), 0, "isupper({c})");
                assert_eq!(isspace(c), 0, "isspace({c})");
            }
        }
    }
}
