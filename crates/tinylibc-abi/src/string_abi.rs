//! ABI layer for the `<string.h>` subset.
//!
//! Each function is an `extern "C"` entry point that guards its pointer
//! arguments and delegates to `tinylibc-core` safe implementations or to
//! the pointer-level helpers in [`crate::util`].

use core::ffi::{c_char, c_int, c_void};
use core::{ptr, slice};

use crate::util::{move_bytes, scan_c_string};

// ---------------------------------------------------------------------------
// memcpy
// ---------------------------------------------------------------------------

/// C `memcpy` -- copies `n` bytes from `src` to `dst`.
///
/// # Safety
///
/// Caller must ensure `src` and `dst` are valid for `n` bytes and do not overlap.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcpy(dst: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
    if n == 0 {
        return dst;
    }
    if dst.is_null() || src.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: caller guarantees disjoint validity for `n` bytes.
    unsafe { ptr::copy_nonoverlapping(src.cast::<u8>(), dst.cast::<u8>(), n) };
    dst
}

// ---------------------------------------------------------------------------
// memmove
// ---------------------------------------------------------------------------

/// C `memmove` -- copies `n` bytes from `src` to `dst`, handling overlap.
///
/// Produces the same result as copying `src` through a scratch buffer.
/// Guaranteed-disjoint ranges are detected with a wraparound
/// pointer-difference test and take the `memcpy` fast path.
///
/// # Safety
///
/// Caller must ensure `src` and `dst` are valid for `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memmove(dst: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
    if n == 0 {
        return dst;
    }
    if dst.is_null() || src.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: caller guarantees both ranges are valid for `n` bytes.
    unsafe { move_bytes(dst.cast::<u8>(), src.cast::<u8>(), n) };
    dst
}

// ---------------------------------------------------------------------------
// memcmp
// ---------------------------------------------------------------------------

/// C `memcmp` -- compares `n` bytes of `s1` and `s2`.
///
/// Returns the difference of the first mismatching byte pair as
/// unsigned-byte values, or 0 when the spans match or `n == 0`.
///
/// # Safety
///
/// Caller must ensure `s1` and `s2` are valid for `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcmp(s1: *const c_void, s2: *const c_void, n: usize) -> c_int {
    if n == 0 {
        return 0;
    }
    if s1.is_null() || s2.is_null() {
        return 0;
    }
    // SAFETY: caller guarantees both ranges are valid for `n` bytes.
    let (a, b) = unsafe {
        (
            slice::from_raw_parts(s1.cast::<u8>(), n),
            slice::from_raw_parts(s2.cast::<u8>(), n),
        )
    };
    tinylibc_core::string::mem::memcmp(a, b, n)
}

// ---------------------------------------------------------------------------
// memchr
// ---------------------------------------------------------------------------

/// C `memchr` -- locates the first occurrence of byte `c` in the first `n`
/// bytes of `s`.
///
/// Returns a pointer to the matching byte, or null if not found.
///
/// # Safety
///
/// Caller must ensure `s` is valid for `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memchr(s: *const c_void, c: c_int, n: usize) -> *mut c_void {
    if n == 0 || s.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: caller guarantees the range is valid for `n` bytes.
    let bytes = unsafe { slice::from_raw_parts(s.cast::<u8>(), n) };
    match tinylibc_core::string::mem::memchr(bytes, c as u8, n) {
        // SAFETY: `idx` is in bounds of the scanned range.
        Some(idx) => unsafe { (s as *mut u8).add(idx).cast() },
        None => ptr::null_mut(),
    }
}

// ---------------------------------------------------------------------------
// memrchr
// ---------------------------------------------------------------------------

/// C `memrchr` (GNU extension) -- locates the last occurrence of byte `c`
/// in the first `n` bytes of `s`.
///
/// Returns a pointer to the matching byte, or null if not found.
///
/// # Safety
///
/// Caller must ensure `s` is valid for `n` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memrchr(s: *const c_void, c: c_int, n: usize) -> *mut c_void {
    if n == 0 || s.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: caller guarantees the range is valid for `n` bytes.
    let bytes = unsafe { slice::from_raw_parts(s.cast::<u8>(), n) };
    match tinylibc_core::string::mem::memrchr(bytes, c as u8, n) {
        // SAFETY: `idx` is in bounds of the scanned range.
        Some(idx) => unsafe { (s as *mut u8).add(idx).cast() },
        None => ptr::null_mut(),
    }
}

// ---------------------------------------------------------------------------
// strlen
// ---------------------------------------------------------------------------

/// C `strlen` -- computes the length of a null-terminated string.
///
/// # Safety
///
/// Caller must ensure `s` points to a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strlen(s: *const c_char) -> usize {
    if s.is_null() {
        return 0;
    }
    // SAFETY: caller guarantees a NUL-terminated string.
    let (len, _) = unsafe { scan_c_string(s, None) };
    len
}

// ---------------------------------------------------------------------------
// strnlen
// ---------------------------------------------------------------------------

/// C `strnlen` -- computes the string length, reading at most `n` bytes.
///
/// Returns `n` when no terminator occurs in range, so unterminated
/// buffers are never over-read.
///
/// # Safety
///
/// Caller must ensure `s` is valid up to the terminator or `n` bytes,
/// whichever comes first.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strnlen(s: *const c_char, n: usize) -> usize {
    if s.is_null() {
        return 0;
    }
    // SAFETY: the scan stops at the terminator or at `n` bytes.
    let (len, _) = unsafe { scan_c_string(s, Some(n)) };
    len
}

// ---------------------------------------------------------------------------
// strchr
// ---------------------------------------------------------------------------

/// C `strchr` -- locates the first occurrence of `c` in the string `s`.
///
/// Returns a pointer to the first occurrence, or null if not found.
/// Searching for `'\0'` returns a pointer to the terminator.
///
/// # Safety
///
/// Caller must ensure `s` is a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strchr(s: *const c_char, c: c_int) -> *mut c_char {
    if s.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: caller guarantees a NUL-terminated string.
    let (len, _) = unsafe { scan_c_string(s, None) };
    // SAFETY: `len` bytes plus the terminator were just scanned.
    let bytes = unsafe { slice::from_raw_parts(s.cast::<u8>(), len + 1) };
    match tinylibc_core::string::str::strchr(bytes, c as u8) {
        // SAFETY: `idx` is in bounds of the scanned range.
        Some(idx) => unsafe { (s as *mut c_char).add(idx) },
        None => ptr::null_mut(),
    }
}

// ---------------------------------------------------------------------------
// strrchr
// ---------------------------------------------------------------------------

/// C `strrchr` -- locates the last occurrence of `c` in the string `s`.
///
/// The search range includes the terminator, so searching for `'\0'`
/// returns a pointer to it.
///
/// # Safety
///
/// Caller must ensure `s` is a valid null-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strrchr(s: *const c_char, c: c_int) -> *mut c_char {
    if s.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: caller guarantees a NUL-terminated string.
    let (len, _) = unsafe { scan_c_string(s, None) };
    // SAFETY: `len` bytes plus the terminator were just scanned.
    let bytes = unsafe { slice::from_raw_parts(s.cast::<u8>(), len + 1) };
    match tinylibc_core::string::str::strrchr(bytes, c as u8) {
        // SAFETY: `idx` is in bounds of the scanned range.
        Some(idx) => unsafe { (s as *mut c_char).add(idx) },
        None => ptr::null_mut(),
    }
}
