//! # Hashing Support
//!
//! This modules provides access to standard hashing functions with streaming
//! support. A common trait is provided to allow uniform access regardless of
//! the hashing function used.

pub mod sha1;

/// ## Hash Engine
///
/// A hash engine can be used to stream data into a hashing function and
/// produce the final hash value. A single engine can be reused for multiple
/// hash operations.
///
/// Hash engines operate on an input byte stream and produce a fixed hash
/// type (usually a fixed-size byte array).
pub trait Engine {
    /// ## Hash Result
    ///
    /// This associated type represents the result of a hashing function.
    /// In most cases it is a fixed size byte array. See `Hash` for a
    /// common type used for this.
    type Hash;

    /// ## Check whether the Engine is reset
    ///
    /// Return whether the engine is currently reset, or whether it has
    /// data queued or processed.
    fn is_reset(&self) -> bool;

    /// ## Reset Engine
    ///
    /// Reset the engine to its initial state. This allows discarding an
    /// ongoing streaming operation without having to recreate the engine.
    ///
    /// Note that an engine is automatically reset on initialization and
    /// after every finalization. There is no need to manually reset the
    /// engine in these situations.
    fn reset(&mut self);

    /// ## Push Data into the Engine
    ///
    /// Push the given bytes into the engine. In most cases, the engine will
    /// buffer data up to a fixed limit before processing it.
    fn push(&mut self, data: &[u8]);

    /// ## Push Zeroes into the Engine
    ///
    /// Push a given amount of zero-bytes into the engine. This is an
    /// optimization to allow pushing large amounts of zeros without
    /// actually creating the input data.
    fn push_zero(&mut self, mut length: usize) {
        while length > 0 {
            let n = core::cmp::min(length, 128);
            self.push(&[0u8; 128][0..n]);
            length -= n;
        }
    }

    /// ## Produce Final Hash
    ///
    /// Finalize the streaming operation and produce the final hash for the
    /// entire data that was streamed into the engine.
    ///
    /// The engine is automatically reset after this operation and ready
    /// for the next hashing operation.
    fn finalize(&mut self) -> Self::Hash;
}

/// ## Hash Errors
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(thiserror::Error)]
pub enum Error {
    /// The source does not have the size of the hash value.
    #[error("hash value requires {expected} bytes, got {actual}")]
    Length {
        expected: usize,
        actual: usize,
    },
}

/// ## Hash Value
///
/// This represents a possible hash value of most hashing functions. This
/// can be used by the hashing functions to implement their hash type, if
/// the hash is a fixed-size byte array.
///
/// Hash values are plain bytes. They compare lexicographically, starting
/// with the first byte, and are all zeroes by default.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Hash<const SIZE: usize>(pub [u8; SIZE]);

/// ## Produce Instant Hash
///
/// Produce the hash value of the given bytes. This is a shortcut when
/// a streaming API is not required.
pub fn hash<Backend: Default + Engine>(data: &[u8]) -> Backend::Hash {
    let mut e = <Backend as Default>::default();
    e.push(data);
    e.finalize()
}

impl<const SIZE: usize> Hash<SIZE> {
    /// ## Create from Bytes
    ///
    /// Create a new hash value from its byte representation. This is
    /// equivalent to creating it via `Hash(bytes)`.
    pub fn from_bytes(bytes: &[u8; SIZE]) -> Self {
        Self(*bytes)
    }

    /// ## Return Byte Representation
    ///
    /// Return a reference to the byte representation of the hash value. This
    /// is equivalent to `&h.0`
    pub fn as_bytes(&self) -> &[u8; SIZE] {
        &self.0
    }

    /// ## Return Mutable Byte Representation
    pub fn as_mut_bytes(&mut self) -> &mut [u8; SIZE] {
        &mut self.0
    }

    /// ## First Byte
    ///
    /// Return the first byte of the hash value. Zero-sized hash values have
    /// no bytes and yield `None`.
    pub fn front(&self) -> Option<u8> {
        self.0.first().copied()
    }

    /// ## Last Byte
    pub fn back(&self) -> Option<u8> {
        self.0.last().copied()
    }

    /// ## First Byte, Mutably
    pub fn front_mut(&mut self) -> Option<&mut u8> {
        self.0.first_mut()
    }

    /// ## Last Byte, Mutably
    pub fn back_mut(&mut self) -> Option<&mut u8> {
        self.0.last_mut()
    }

    /// ## Clear Hash Value
    ///
    /// Reset all bytes to zero.
    pub fn clear(&mut self) {
        self.0.fill(0);
    }

    /// ## Exchange Hash Values
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.0, &mut other.0);
    }

    /// ## Compare Hash Values
    ///
    /// Compare the bytes of both hash values lexicographically, starting with
    /// the first byte. This is the same order as used by `Ord`.
    pub fn compare(&self, other: &Self) -> core::cmp::Ordering {
        self.0.as_slice().cmp(other.0.as_slice())
    }

    /// ## Produce Hex-String Representation
    ///
    /// Format the hash as a hex-string. That is, produce a string with only
    /// the characters '0'-'9' and 'a'-'f'. Each character represents 4-bits
    /// of the hash value (in big-endian order).
    ///
    /// Due to limitations of the const-evaluation of Rust, this returns a
    /// `String` rather than `[char; SIZE * 2]`.
    pub fn to_hex(&self) -> alloc::string::String {
        const HEX: &[u8; 16] = b"0123456789abcdef";

        let mut s = alloc::string::String::with_capacity(SIZE * 2);

        for b in self.0 {
            s.push(char::from(HEX[usize::from(b >> 4)]));
            s.push(char::from(HEX[usize::from(b & 0x0f)]));
        }

        s
    }
}

impl<const SIZE: usize> Default for Hash<SIZE> {
    fn default() -> Self {
        Self([0u8; SIZE])
    }
}

impl<const SIZE: usize> From<&[u8; SIZE]> for Hash<SIZE> {
    fn from(v: &[u8; SIZE]) -> Self {
        Self::from_bytes(v)
    }
}

impl<const SIZE: usize> From<[u8; SIZE]> for Hash<SIZE> {
    fn from(v: [u8; SIZE]) -> Self {
        Self(v)
    }
}

impl<const SIZE: usize> TryFrom<&[u8]> for Hash<SIZE> {
    type Error = Error;

    fn try_from(v: &[u8]) -> Result<Self, Self::Error> {
        <[u8; SIZE]>::try_from(v)
            .map(|v| Self(v))
            .map_err(|_| Error::Length {
                expected: SIZE,
                actual: v.len(),
            })
    }
}

impl<const SIZE: usize> core::ops::Index<usize> for Hash<SIZE> {
    type Output = u8;

    fn index(&self, pos: usize) -> &u8 {
        &self.0[pos]
    }
}

impl<const SIZE: usize> core::ops::IndexMut<usize> for Hash<SIZE> {
    fn index_mut(&mut self, pos: usize) -> &mut u8 {
        &mut self.0[pos]
    }
}

impl<const SIZE: usize> AsRef<[u8]> for Hash<SIZE> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const SIZE: usize> core::fmt::LowerHex for Hash<SIZE> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for b in self.0 {
            write!(fmt, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl<const SIZE: usize> core::fmt::Display for Hash<SIZE> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerHex::fmt(self, fmt)
    }
}
