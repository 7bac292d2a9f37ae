//! # RFC Primitives
//!
//! This crate bundles small, dependency-light implementations of common RFC
//! building blocks. It is a facade over the individual crates of this
//! workspace:
//!
//!  * `json`: Streaming JSON writer following RFC 4627.
//!  * `hash`: Hashing engines, including SHA-1 following RFC 3174.
//!  * `str`: Non-owning views over NUL-terminated byte strings.
//!
//! All crates are `no_std` but require `alloc`. The `std` feature enables
//! integration with `std::io`.

#![no_std]

#[cfg(test)]
extern crate std;

pub use rfc_json as json;
pub use rfc_lib::{hash, str};
