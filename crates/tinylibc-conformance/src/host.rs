//! Host libc reference calls.
//!
//! The only module in the workspace that talks to the host C library.
//! Every wrapper takes slices whose bounds the caller has already
//! validated against the requested span.

use std::ffi::c_void;
use std::ptr;

fn offset_in(buf: &[u8], p: *const c_void) -> Option<usize> {
    if p.is_null() {
        None
    } else {
        Some(p as usize - buf.as_ptr() as usize)
    }
}

pub fn memcmp(a: &[u8], b: &[u8], n: usize) -> i32 {
    // SAFETY: caller checked `n <= a.len()` and `n <= b.len()`.
    unsafe { libc::memcmp(a.as_ptr().cast(), b.as_ptr().cast(), n) }
}

pub fn memchr(buf: &[u8], c: i32, n: usize) -> Option<usize> {
    // SAFETY: caller checked `n <= buf.len()`.
    let p = unsafe { libc::memchr(buf.as_ptr().cast(), c, n) };
    offset_in(buf, p)
}

pub fn memrchr(buf: &[u8], c: i32, n: usize) -> Option<usize> {
    // SAFETY: caller checked `n <= buf.len()`.
    let p = unsafe { libc::memrchr(buf.as_ptr().cast(), c, n) };
    offset_in(buf, p)
}

pub fn memmove_within(buf: &mut [u8], dest: usize, src: usize, n: usize) {
    // SAFETY: caller checked that both ranges lie inside `buf`.
    unsafe {
        let base = buf.as_mut_ptr();
        libc::memmove(base.add(dest).cast(), base.add(src).cast::<c_void>(), n);
    }
}

pub fn strlen(s: &[u8]) -> usize {
    debug_assert!(s.contains(&0));
    // SAFETY: caller checked that `s` contains a terminator.
    unsafe { libc::strlen(s.as_ptr().cast()) }
}

pub fn strnlen(s: &[u8], n: usize) -> usize {
    // SAFETY: caller checked `n <= s.len()`.
    unsafe { libc::strnlen(s.as_ptr().cast(), n) }
}

pub fn strchr(s: &[u8], c: i32) -> Option<usize> {
    debug_assert!(s.contains(&0));
    // SAFETY: caller checked that `s` contains a terminator.
    let p = unsafe { libc::strchr(s.as_ptr().cast(), c) };
    offset_in(s, p.cast())
}

pub fn strrchr(s: &[u8], c: i32) -> Option<usize> {
    debug_assert!(s.contains(&0));
    // SAFETY: caller checked that `s` contains a terminator.
    let p = unsafe { libc::strrchr(s.as_ptr().cast(), c) };
    offset_in(s, p.cast())
}

pub fn classify(function: &str, c: i32) -> Option<i32> {
    // SAFETY: caller restricted `c` to the ctype domain (-1..=255).
    let raw = unsafe {
        match function {
            "isdigit" => libc::isdigit(c),
            "isalpha" => libc::isalpha(c),
            "isupper" => libc::isupper(c),
            "isspace" => libc::isspace(c),
            _ => return None,
        }
    };
    Some(i32::from(raw != 0))
}

pub fn strtoul(s: &[u8], base: i32) -> (u64, usize) {
    debug_assert!(s.contains(&0));
    let mut end: *mut libc::c_char = ptr::null_mut();
    // SAFETY: caller checked that `s` contains a terminator; `end` is a
    // local out-pointer.
    let value = unsafe { libc::strtoul(s.as_ptr().cast(), &mut end, base) };
    let consumed = end as usize - s.as_ptr() as usize;
    (value as u64, consumed)
}
