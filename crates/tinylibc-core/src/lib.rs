//! # tinylibc-core
//!
//! Safe Rust implementations of a minimal C standard library subset for
//! freestanding environments (kernels, bootloaders, embedded runtimes).
//!
//! Every routine is pure, stateless, and non-owning: inputs are
//! caller-owned byte slices, "strings" are byte slices containing a
//! terminating zero byte, and not-found results are `Option::None`. The
//! pointer-level calling conventions live in `tinylibc-abi`; this crate
//! holds the algorithms in a form that can be tested exhaustively without
//! `unsafe`.
//!
//! There is deliberately no error channel: `strtoul` clamps on overflow
//! instead of reporting a range error, matching the legacy callers this
//! library exists to serve.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ctype;
pub mod stdlib;
pub mod string;
