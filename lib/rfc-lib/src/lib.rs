//! # RFC Shared Library
//!
//! This crate provides implementations of small, self-contained RFC
//! building blocks: the SHA-1 message digest of RFC 3174, and views over
//! NUL-terminated byte strings as passed around at C interfaces.
//!
//! The streaming JSON writer of RFC 4627 lives in the independent `rfc-json`
//! crate.

#![no_std]

extern crate alloc;
extern crate core;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod hash;
pub mod str;
