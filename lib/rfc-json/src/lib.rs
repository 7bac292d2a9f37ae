//! # Streaming JSON Writer
//!
//! This crate implements a streaming JSON serializer following RFC 4627. It
//! writes JSON tokens straight into a byte sink, without building any
//! in-memory representation of the document first.
//!
//! ## Grammar Enforcement
//!
//! The writer tracks the nesting of objects and arrays and rejects any call
//! that would produce a document violating the JSON grammar (e.g., a value
//! where an object key is required, or a second top-level value). Such
//! violations, as well as failures of the underlying sink, poison the
//! writer: every later call is a no-op that reports the original error.
//!
//! ## Strings
//!
//! JSON Strings are written byte by byte. Quotes, backslashes, slashes and
//! control characters are escaped, anything else is copied verbatim. The
//! writer does not validate UTF-8 [^rfc_encoding], as Rust strings already
//! guarantee it and raw byte input is explicitly left to the caller.
//!
//! [^rfc_encoding]: <https://datatracker.ietf.org/doc/html/rfc4627#section-3>

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;
extern crate core;

pub mod sink;
pub mod writer;
