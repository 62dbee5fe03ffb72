//! ABI layer for `<stdlib.h>` numeric conversion.

use core::ffi::{c_char, c_int, c_ulong};
use core::slice;

use crate::util::scan_c_string;

// ---------------------------------------------------------------------------
// strtoul
// ---------------------------------------------------------------------------

/// C `strtoul` -- parses an unsigned integer of the given base from `nptr`.
///
/// Skips leading whitespace, accepts an optional `+`/`-` sign (a `-`
/// negates the magnitude with unsigned wraparound), and a `0x`/`0X`
/// prefix when base is 0 or 16. Base 0 auto-detects octal vs decimal.
/// Overflow clamps to `ULONG_MAX`; there is no `errno` reporting.
///
/// When `endptr` is non-null it receives the address of the first
/// unconsumed character, or `nptr` itself when no digit was consumed.
///
/// # Safety
///
/// Caller must ensure `nptr` is a valid null-terminated string and that
/// `endptr`, when non-null, is valid for a pointer write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strtoul(
    nptr: *const c_char,
    endptr: *mut *mut c_char,
    base: c_int,
) -> c_ulong {
    if nptr.is_null() {
        return 0;
    }

    // SAFETY: caller guarantees a NUL-terminated string.
    let (len, _) = unsafe { scan_c_string(nptr, None) };
    // SAFETY: `len` bytes precede the terminator just scanned.
    let bytes = unsafe { slice::from_raw_parts(nptr.cast::<u8>(), len) };

    let (value, consumed) = tinylibc_core::stdlib::conversion::strtoul(bytes, base);

    if !endptr.is_null() {
        // SAFETY: caller guarantees `endptr` is writable; `consumed` is at
        // most `len`, so the result stays inside the scanned string.
        unsafe { *endptr = (nptr as *mut c_char).add(consumed) };
    }

    value as c_ulong
}
