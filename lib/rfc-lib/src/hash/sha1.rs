//! # SHA-1 Hash Function
//!
//! This is an implementation of the SHA-1 hash function, as defined in
//! RFC-3174. SHA-1 is no longer considered secure against collision attacks
//! and is provided for interoperability with existing formats only.

/// ## Size of SHA-1 Hashes
///
/// The SHA-1 engine produces a fixed-size hash as result. This is the size
/// of the hash in bytes.
pub const SIZE: usize = 20;

/// ## Size of SHA-1 Engine Chunks
///
/// The SHA-1 engine operates on input chunks of this size. The final chunk
/// is padded by the engine.
const SHA1_CHUNK: usize = 64;

/// ## SHA-1 Digest
///
/// The hash value produced by the SHA-1 engine. The bytes are the five
/// 32-bit registers of the engine in order, each in big-endian.
pub type Digest = crate::hash::Hash<SIZE>;

/// ## SHA-1 Engine
///
/// This is the streaming engine for the SHA-1 hashing function. It
/// implements the `crate::hash::Engine` trait for SHA-1.
#[derive(Clone, Debug)]
pub struct Engine {
    hash: [u32; 5],
    chunk: [u8; SHA1_CHUNK],
    remaining: usize,
    total: u64,
}

/// ## Initial SHA-1 Engine Hash
///
/// This is the initial state of the SHA-1 engine as defined in RFC-3174.
const SHA1_H: [u32; 5] = [
    0x67452301,
    0xefcdab89,
    0x98badcfe,
    0x10325476,
    0xc3d2e1f0,
];

/// ## SHA-1 Engine Constants
///
/// One constant for each block of 20 steps, as defined in RFC-3174.
const SHA1_K: [u32; 4] = [
    0x5a827999,
    0x6ed9eba1,
    0x8f1bbcdc,
    0xca62c1d6,
];

/// ## Advance the SHA-1 Engine one Step
///
/// This performs a single step of the SHA-1 engine. It takes the scheduled
/// input word `word` and current `state` as input and updates the state
/// accordingly. The logical function and constant are selected based on
/// `step`.
fn sha1_step(
    word: u32,
    state: &mut [u32; 5],
    step: usize,
) {
    assert!(step < 80);

    let [a, b, c, d, e] = *state;

    let f = match step / 20 {
        0 => (b & c) | (!b & d),
        1 | 3 => b ^ c ^ d,
        _ => (b & c) | (b & d) | (c & d),
    };

    let temp = a.rotate_left(5)
        .wrapping_add(f)
        .wrapping_add(e)
        .wrapping_add(word)
        .wrapping_add(SHA1_K[step / 20]);

    *state = [temp, a, b.rotate_left(30), c, d];
}

/// ## Advance the SHA-1 Engine one Round
///
/// This performs a full round of the SHA-1 engine. It takes an entire chunk
/// as input data and calculates the state update for a full round (i.e., 80
/// steps). The message schedule is kept in a circular buffer of 16 words,
/// as suggested by method 2 of RFC-3174.
fn sha1_round(
    data: &[u8; SHA1_CHUNK],
    hash: &mut [u32; 5],
) {
    let mut state: [u32; 5] = *hash;
    let mut schedule = [0u32; 16];

    for (i, v) in schedule.iter_mut().enumerate() {
        *v = u32::from_be_bytes([
            data[i * 4 + 0], data[i * 4 + 1], data[i * 4 + 2], data[i * 4 + 3],
        ]);
    }

    for step in 0..80 {
        let s = step % 16;
        if step >= 16 {
            schedule[s] = (
                schedule[(s + 13) % 16]
                ^ schedule[(s + 8) % 16]
                ^ schedule[(s + 2) % 16]
                ^ schedule[s]
            ).rotate_left(1);
        }
        sha1_step(schedule[s], &mut state, step);
    }

    // Update the hash value with the result of this round.
    for (h, v) in hash.iter_mut().zip(state.iter()) {
        *h = h.wrapping_add(*v);
    }
}

/// ## Compute SHA-1 Digest
///
/// Produce the SHA-1 digest of the given bytes. This is a shortcut for
/// `crate::hash::hash::<Engine>()`.
pub fn compute(data: &[u8]) -> Digest {
    crate::hash::hash::<Engine>(data)
}

/// ## Compute SHA-1 Digest of a C String
///
/// Produce the SHA-1 digest of the bytes of `data`, excluding the
/// terminating NUL.
pub fn compute_cstr(data: &core::ffi::CStr) -> Digest {
    compute(data.to_bytes())
}

/// ## Compute SHA-1 Digest of a String View
///
/// Produce the SHA-1 digest of the bytes covered by `data`, excluding the
/// terminating NUL. A null view hashes like an empty string.
pub fn compute_str(data: &crate::str::Str<'_>) -> Digest {
    compute(data.as_bytes())
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            hash: SHA1_H,
            chunk: [0; SHA1_CHUNK],
            remaining: SHA1_CHUNK,
            total: 0,
        }
    }
}

impl crate::hash::Engine for Engine {
    type Hash = Digest;

    fn is_reset(&self) -> bool {
        self.total == 0
    }

    fn reset(&mut self) {
        self.hash = SHA1_H;
        self.remaining = SHA1_CHUNK;
        self.total = 0;
    }

    fn push(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            // Copy as much as possible into the remaining space of the
            // stream buffer, and adjust `data` accordingly.
            let n = core::cmp::min(self.remaining, data.len());
            let idx = SHA1_CHUNK - self.remaining;

            self.chunk[idx..(idx + n)].copy_from_slice(&data[..n]);
            data = &data[n..];

            self.remaining -= n;
            self.total = self.total.wrapping_add(n as u64);

            // If the stream buffer is full, commit it to the engine.
            if self.remaining == 0 {
                sha1_round(&self.chunk, &mut self.hash);
                self.remaining = SHA1_CHUNK;
            }
        }
    }

    fn finalize(&mut self) -> Self::Hash {
        // RFC-3174 limits messages to less than 2^64 bits, so the length
        // is taken modulo 2^64 bits.
        let total: u64 = self.total.wrapping_mul(8);

        // Stream buffer is immediately committed when full, so there
        // must always be remaining space. Push a final 1-bit and pad with
        // 0-bits until the next byte boundary.
        assert_ne!(self.remaining, 0);
        let mut idx = SHA1_CHUNK - self.remaining;
        self.chunk[idx] = 0x80u8;
        idx += 1;

        // Now pad with 0-bytes until the chunk is full, except for 8 final
        // bytes. Those take the total size in bits. If it does not fit into
        // the current chunk, commit it and start a new one.
        if idx > SHA1_CHUNK - 8 {
            self.chunk[idx..].fill(0);
            sha1_round(&self.chunk, &mut self.hash);
            idx = 0;
        }
        self.chunk[idx..(SHA1_CHUNK - 8)].fill(0);
        self.chunk[(SHA1_CHUNK - 8)..].copy_from_slice(&total.to_be_bytes());
        sha1_round(&self.chunk, &mut self.hash);

        // Turn the final hash value into bytes.
        let mut r = Digest::default();
        for (dst, src) in r.0.chunks_exact_mut(4).zip(self.hash.iter()) {
            dst.copy_from_slice(&src.to_be_bytes());
        }

        crate::hash::Engine::reset(self);

        r
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use super::*;
    use crate::hash::Engine as _;

    // Test the SHA-1 engine against the reference vectors of RFC-3174, plus
    // some well-known additional ones.
    #[test]
    fn reference_vectors() {
        assert_eq!(
            compute(b"").to_hex(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        );
        assert_eq!(
            compute(b"abc").to_hex(),
            "a9993e364706816aba3e25717850c26c9cd0d89d",
        );
        assert_eq!(
            compute(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").to_hex(),
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        );
        assert_eq!(
            compute(b"The quick brown fox jumps over the lazy dog").to_hex(),
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
        );
        assert_eq!(
            compute(b"The quick brown fox jumps over the lazy cog").to_hex(),
            "de9f2c7fd25e1b3afad3e85a0bd17d9b100db4b3",
        );
        assert_eq!(
            compute(&b"0123456701234567012345670123456701234567012345670123456701234567".repeat(10)).to_hex(),
            "dea356a2cddd90c7a7ecedc5ebb563934f460452",
        );
    }

    // Run the one-million-'a' reference vector through the streaming API
    // in unevenly sized pieces.
    #[test]
    fn reference_million() {
        let mut e = Engine::default();
        let data = [b'a'; 1000];

        for i in 0..1000 {
            let split = i % 7;
            e.push(&data[..split]);
            e.push(&data[split..]);
        }

        assert_eq!(
            e.finalize().to_hex(),
            "34aa973cd4c4daa4f61eeb2bdbad27316534016f",
        );
        assert!(e.is_reset());
    }

    // Verify the exact bytes of a digest, rather than just its hex-string.
    #[test]
    fn digest_bytes() {
        let h = compute(b"abc");

        assert_eq!(
            h.as_bytes(),
            &[
                0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e,
                0x25, 0x71, 0x78, 0x50, 0xc2, 0x6c, 0x9c, 0xd0, 0xd8, 0x9d,
            ],
        );
        assert_eq!(h.as_bytes().len(), SIZE);
        assert_eq!(h.front(), Some(0xa9));
        assert_eq!(h.back(), Some(0x9d));
    }

    // C strings and string views hash the bytes before their terminator.
    #[test]
    fn digest_cstr() {
        let expected = compute(b"abc");

        assert_eq!(compute_cstr(c"abc"), expected);
        assert_eq!(compute_str(&crate::str::Str::from_bytes(b"abc\0def")), expected);
        assert_eq!(compute_str(&crate::str::Str::new()), compute(b""));
    }

    // Verify `Engine` is object safe.
    #[test]
    fn object_safety() {
        let e: &mut dyn crate::hash::Engine<Hash = _> = &mut <Engine as Default>::default();

        assert_eq!(
            e.finalize().to_hex(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        );
    }

    // Verify splitting of the input does not affect the output.
    #[test]
    fn split() {
        let e: &mut dyn crate::hash::Engine<Hash = _> = &mut <Engine as Default>::default();

        e.push(b"a");
        e.push(b"");
        e.push(b"b");
        e.push(b"c");

        assert_eq!(
            e.finalize().to_hex(),
            "a9993e364706816aba3e25717850c26c9cd0d89d",
        );
    }

    // Lengths around the chunk and padding boundaries must produce the same
    // result whether fed as zeroes, as a single slice, or byte by byte.
    #[test]
    fn padding_boundaries() {
        let mut e = Engine::default();

        for n in (0..=3).flat_map(|v| (v * 64 + 52)..=(v * 64 + 66)) {
            let data = vec![0u8; n];

            e.push_zero(n);
            let zeroes = e.finalize();

            for b in data.iter() {
                e.push(core::slice::from_ref(b));
            }
            let bytes = e.finalize();

            assert_eq!(zeroes, compute(&data));
            assert_eq!(bytes, zeroes);
        }
    }

    // An engine can be reset mid-stream and reused.
    #[test]
    fn reset() {
        let mut e = Engine::default();
        assert!(e.is_reset());

        e.push(b"foobar");
        assert!(!e.is_reset());
        e.reset();
        assert!(e.is_reset());

        e.push(b"abc");
        assert_eq!(e.finalize(), compute(b"abc"));
    }

    #[quickcheck_macros::quickcheck]
    fn deterministic(data: alloc::vec::Vec<u8>, split: usize) -> bool {
        let split = if data.is_empty() { 0 } else { split % data.len() };

        let mut e = Engine::default();
        e.push(&data[..split]);
        e.push(&data[split..]);

        let h = e.finalize();
        h == compute(&data) && h.as_bytes().len() == SIZE
    }
}
