//! # String Views
//!
//! This module provides non-owning views over NUL-terminated byte strings,
//! as commonly found at C interfaces. A view borrows its bytes and thus
//! cannot outlive them. The string ends at the first NUL byte, or at the end
//! of the borrowed slice if it contains no NUL.
//!
//! Lengths are not cached, but computed on demand by scanning for the
//! terminator. Callers should retain the length if they need it repeatedly.
//!
//! Views are not `Clone`. A second view of the same bytes can be created via
//! `Str::substr(0)`.

/// ## Not-Found Sentinel
///
/// The search operations report missing matches as `None`. This sentinel is
/// provided for interfaces that need a plain index, e.g., via
/// `find_byte(c, 0).unwrap_or(NPOS)`.
pub const NPOS: usize = usize::MAX;

/// ## String Errors
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(thiserror::Error)]
pub enum Error {
    /// Bounds-checked access past the end of the string.
    #[error("string index {index} out of range for length {len}")]
    OutOfRange {
        index: usize,
        len: usize,
    },
}

/// ## String View
///
/// A borrowed view of a NUL-terminated byte string. A view can be null,
/// in which case it behaves like an empty string.
#[derive(Debug, Default)]
pub struct Str<'a> {
    data: Option<&'a [u8]>,
}

/// ## Mutable String View
///
/// A mutably borrowed view of a NUL-terminated byte string. In addition to
/// the queries of `Str`, it allows modifying the bytes in place.
#[derive(Debug, Default)]
pub struct StrMut<'a> {
    data: Option<&'a mut [u8]>,
}

// Return the length of the string in `data`, which is the index of the
// first NUL, or the length of the slice if it has none.
fn terminate(data: &[u8]) -> usize {
    data.iter().position(|v| *v == 0).unwrap_or(data.len())
}

fn is_blank(v: u8) -> bool {
    matches!(v, b' ' | b'\t')
}

fn is_print(v: u8) -> bool {
    v == b' ' || v.is_ascii_graphic()
}

// Unlike `u8::is_ascii_whitespace()`, this includes the vertical tab.
fn is_space(v: u8) -> bool {
    matches!(v, b' ' | b'\t'..=b'\r')
}

impl<'a> Str<'a> {
    /// ## Create Null View
    pub fn new() -> Self {
        Self {
            data: None,
        }
    }

    /// ## Create View from Bytes
    ///
    /// Create a view of the string in `data`, which ends at the first NUL
    /// byte, or at the end of `data`.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        Self {
            data: Some(data),
        }
    }

    /// ## Create View from C String
    pub fn from_cstr(data: &'a core::ffi::CStr) -> Self {
        Self::from_bytes(data.to_bytes_with_nul())
    }

    fn raw(&self) -> &'a [u8] {
        self.data.unwrap_or(&[])
    }

    /// ## Check for Null View
    pub fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// ## Check for Empty String
    ///
    /// A string is empty if the view is null, or if its first byte is NUL.
    pub fn is_empty(&self) -> bool {
        self.raw().first().map_or(true, |v| *v == 0)
    }

    /// ## Clear View
    ///
    /// Turn this into a null view. The underlying bytes are not modified.
    pub fn clear(&mut self) {
        self.data = None;
    }

    /// ## Length in Bytes
    ///
    /// Scan the string for its terminator and return the number of bytes
    /// before it.
    pub fn len(&self) -> usize {
        terminate(self.raw())
    }

    /// ## String Bytes
    ///
    /// Return the bytes of the string, excluding the terminator.
    pub fn as_bytes(&self) -> &'a [u8] {
        let raw = self.raw();
        &raw[..terminate(raw)]
    }

    /// ## Iterate Bytes
    pub fn iter(&self) -> core::slice::Iter<'a, u8> {
        self.as_bytes().iter()
    }

    /// ## Bounds-Checked Access
    ///
    /// Return the byte at `pos`, or an error if `pos` is not before the end
    /// of the string.
    pub fn at(&self, pos: usize) -> Result<u8, Error> {
        let bytes = self.as_bytes();

        bytes.get(pos).copied().ok_or(Error::OutOfRange {
            index: pos,
            len: bytes.len(),
        })
    }

    /// ## First Byte
    pub fn front(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    /// ## Last Byte
    pub fn back(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// ## Compare Strings
    ///
    /// Compare this string bytewise with the string in `other`, which ends at
    /// its first NUL byte or at its end. This is the order of `strcmp()`.
    pub fn compare(&self, other: &[u8]) -> core::cmp::Ordering {
        self.as_bytes().cmp(&other[..terminate(other)])
    }

    /// ## Check Strings for Equality
    pub fn equal(&self, other: &[u8]) -> bool {
        self.compare(other).is_eq()
    }

    /// ## Copy into Buffer
    ///
    /// Copy the string starting at `pos` into `target`, and fill the
    /// remainder of `target` with NUL bytes. If the string does not fit,
    /// the copy is truncated and `target` will not be NUL-terminated. This
    /// mirrors `strncpy()`.
    ///
    /// Return the number of string bytes copied.
    pub fn copy_to(&self, target: &mut [u8], pos: usize) -> usize {
        let bytes = self.as_bytes();
        let src = bytes.get(pos..).unwrap_or(&[]);
        let n = core::cmp::min(src.len(), target.len());

        target[..n].copy_from_slice(&src[..n]);
        target[n..].fill(0);
        n
    }

    /// ## Find Byte
    ///
    /// Return the index of the first occurrence of `c` at or after `pos`.
    /// The terminator is never matched.
    pub fn find_byte(&self, c: u8, pos: usize) -> Option<usize> {
        self.as_bytes()
            .get(pos..)?
            .iter()
            .position(|v| *v == c)
            .map(|v| v + pos)
    }

    /// ## Find Byte from the End
    ///
    /// Return the index of the last occurrence of `c` at or after `pos`.
    pub fn rfind_byte(&self, c: u8, pos: usize) -> Option<usize> {
        self.as_bytes()
            .get(pos..)?
            .iter()
            .rposition(|v| *v == c)
            .map(|v| v + pos)
    }

    /// ## Find Substring
    ///
    /// Return the index of the first occurrence of the string `needle` at or
    /// after `pos`. The needle ends at its first NUL, if any. An empty
    /// needle matches at `pos`.
    pub fn find(&self, needle: &[u8], pos: usize) -> Option<usize> {
        let needle = &needle[..terminate(needle)];
        let hay = self.as_bytes().get(pos..)?;

        if needle.is_empty() {
            return Some(pos);
        }

        hay.windows(needle.len())
            .position(|v| v == needle)
            .map(|v| v + pos)
    }

    /// ## Substring from Position
    ///
    /// Return a view of this string starting at `pos`, sharing the same
    /// bytes. If `pos` is past the end, a null view is returned.
    pub fn substr(&self, pos: usize) -> Str<'a> {
        match self.data {
            Some(v) if pos <= terminate(v) => Str::from_bytes(&v[pos..]),
            _ => Str::new(),
        }
    }

    /// ## Substring from Byte
    ///
    /// Return a view starting at the first occurrence of `c`, or a null view
    /// if `c` does not occur.
    pub fn substr_from(&self, c: u8) -> Str<'a> {
        match self.find_byte(c, 0) {
            Some(v) => self.substr(v),
            None => Str::new(),
        }
    }

    /// ## Substring after Byte
    ///
    /// Return a view starting right after the first occurrence of `c`, or a
    /// null view if `c` does not occur.
    pub fn substr_after(&self, c: u8) -> Str<'a> {
        match self.find_byte(c, 0) {
            Some(v) => self.substr(v + 1),
            None => Str::new(),
        }
    }

    /// ## Check Prefix
    pub fn has_prefix(&self, prefix: &[u8]) -> bool {
        self.as_bytes().starts_with(&prefix[..terminate(prefix)])
    }

    /// ## Check Suffix
    pub fn has_suffix(&self, suffix: &[u8]) -> bool {
        self.as_bytes().ends_with(&suffix[..terminate(suffix)])
    }

    /// ## Classify String
    ///
    /// Return whether `predicate` holds for every byte of the string. This
    /// is trivially true for empty strings.
    pub fn is<F: FnMut(u8) -> bool>(&self, mut predicate: F) -> bool {
        self.iter().all(|v| predicate(*v))
    }

    /// ## Check for Alphanumeric ASCII
    pub fn is_alnum(&self) -> bool {
        self.is(|v| v.is_ascii_alphanumeric())
    }

    /// ## Check for Alphabetic ASCII
    pub fn is_alpha(&self) -> bool {
        self.is(|v| v.is_ascii_alphabetic())
    }

    /// ## Check for ASCII
    pub fn is_ascii(&self) -> bool {
        self.is(|v| v.is_ascii())
    }

    /// ## Check for Spaces and Tabs
    pub fn is_blank(&self) -> bool {
        self.is(is_blank)
    }

    /// ## Check for Control Characters
    pub fn is_cntrl(&self) -> bool {
        self.is(|v| v.is_ascii_control())
    }

    /// ## Check for Decimal Digits
    pub fn is_digit(&self) -> bool {
        self.is(|v| v.is_ascii_digit())
    }

    /// ## Check for Graphic Characters
    ///
    /// Graphic characters are all printable characters except for space.
    pub fn is_graph(&self) -> bool {
        self.is(|v| v.is_ascii_graphic())
    }

    /// ## Check for Lowercase Letters
    pub fn is_lower(&self) -> bool {
        self.is(|v| v.is_ascii_lowercase())
    }

    /// ## Check for Printable Characters
    pub fn is_print(&self) -> bool {
        self.is(is_print)
    }

    /// ## Check for Punctuation
    pub fn is_punct(&self) -> bool {
        self.is(|v| v.is_ascii_punctuation())
    }

    /// ## Check for Whitespace
    ///
    /// This follows `isspace()` of the C locale, hence includes the vertical
    /// tab.
    pub fn is_space(&self) -> bool {
        self.is(is_space)
    }

    /// ## Check for Uppercase Letters
    pub fn is_upper(&self) -> bool {
        self.is(|v| v.is_ascii_uppercase())
    }

    /// ## Check for Hexadecimal Digits
    pub fn is_xdigit(&self) -> bool {
        self.is(|v| v.is_ascii_hexdigit())
    }
}

impl<'a> StrMut<'a> {
    /// ## Create Null View
    pub fn new() -> Self {
        Self {
            data: None,
        }
    }

    /// ## Create View from Bytes
    ///
    /// Create a mutable view of the string in `data`, which ends at the first
    /// NUL byte, or at the end of `data`.
    pub fn from_bytes(data: &'a mut [u8]) -> Self {
        Self {
            data: Some(data),
        }
    }

    /// ## Borrow as Immutable View
    pub fn as_str(&self) -> Str<'_> {
        match &self.data {
            Some(v) => Str::from_bytes(v),
            None => Str::new(),
        }
    }

    /// ## Convert into Immutable View
    pub fn into_str(self) -> Str<'a> {
        match self.data {
            Some(v) => Str::from_bytes(v),
            None => Str::new(),
        }
    }

    fn raw_mut(&mut self) -> &mut [u8] {
        match &mut self.data {
            Some(v) => &mut **v,
            None => &mut [],
        }
    }

    /// ## Check for Empty String
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// ## Length in Bytes
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// ## Mutable String Bytes
    ///
    /// Return the bytes of the string, excluding the terminator.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let raw = self.raw_mut();
        let n = terminate(raw);
        &mut raw[..n]
    }

    /// ## Bounds-Checked Mutable Access
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut u8, Error> {
        let bytes = self.as_bytes_mut();
        let len = bytes.len();

        bytes.get_mut(pos).ok_or(Error::OutOfRange {
            index: pos,
            len,
        })
    }

    /// ## First Byte, Mutably
    pub fn front_mut(&mut self) -> Option<&mut u8> {
        self.as_bytes_mut().first_mut()
    }

    /// ## Last Byte, Mutably
    pub fn back_mut(&mut self) -> Option<&mut u8> {
        self.as_bytes_mut().last_mut()
    }

    /// ## Remove Last Byte
    ///
    /// Shorten the string by one byte, overwriting its last byte with NUL.
    /// Empty strings are left unmodified.
    pub fn pop_back(&mut self) {
        if let Some(v) = self.back_mut() {
            *v = 0;
        }
    }
}

impl<'a> From<&'a str> for Str<'a> {
    fn from(v: &'a str) -> Self {
        Self::from_bytes(v.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Str<'a> {
    fn from(v: &'a [u8]) -> Self {
        Self::from_bytes(v)
    }
}

impl<'a> From<&'a core::ffi::CStr> for Str<'a> {
    fn from(v: &'a core::ffi::CStr) -> Self {
        Self::from_cstr(v)
    }
}

impl<'a> From<&'a mut [u8]> for StrMut<'a> {
    fn from(v: &'a mut [u8]) -> Self {
        Self::from_bytes(v)
    }
}

// Indexing does not stop at the terminator, so the NUL itself can be read.
// Indices past the borrowed bytes panic.
impl core::ops::Index<usize> for Str<'_> {
    type Output = u8;

    fn index(&self, pos: usize) -> &u8 {
        &self.raw()[pos]
    }
}

impl core::ops::Index<usize> for StrMut<'_> {
    type Output = u8;

    fn index(&self, pos: usize) -> &u8 {
        let raw: &[u8] = match &self.data {
            Some(v) => &**v,
            None => &[],
        };
        &raw[pos]
    }
}

impl core::ops::IndexMut<usize> for StrMut<'_> {
    fn index_mut(&mut self, pos: usize) -> &mut u8 {
        &mut self.raw_mut()[pos]
    }
}

impl<'a> IntoIterator for &Str<'a> {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for Str<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Str<'_> {}

impl PartialOrd for Str<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Str<'_> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.compare(other.as_bytes())
    }
}

impl PartialEq<[u8]> for Str<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.equal(other)
    }
}

impl PartialEq<str> for Str<'_> {
    fn eq(&self, other: &str) -> bool {
        self.equal(other.as_bytes())
    }
}

impl PartialEq<&str> for Str<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.equal(other.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use super::*;

    // Verify length, emptiness, and null handling of views.
    #[test]
    fn view_basic() {
        let s = Str::new();
        assert!(s.is_null());
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.as_bytes(), b"");
        assert_eq!(s.front(), None);

        let s = Str::from_bytes(b"\0foo");
        assert!(!s.is_null());
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);

        let mut s = Str::from_bytes(b"foo\0bar");
        assert!(!s.is_empty());
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_bytes(), b"foo");
        assert_eq!(s, "foo");
        assert_eq!(s[1], b'o');
        assert_eq!(s[3], 0);
        assert_eq!(s.front(), Some(b'f'));
        assert_eq!(s.back(), Some(b'o'));
        assert_eq!(s.iter().copied().collect::<Vec<u8>>(), b"foo");
        assert_eq!((&s).into_iter().count(), 3);
        s.clear();
        assert!(s.is_null());

        let s = Str::from("unterminated");
        assert_eq!(s.len(), 12);

        let s = Str::from(c"foobar");
        assert_eq!(s.len(), 6);
        assert_eq!(s[6], 0);
    }

    // Bounds-checked access stops at the terminator.
    #[test]
    fn view_at() {
        let s = Str::from_bytes(b"ab\0c");
        assert_eq!(s.at(0), Ok(b'a'));
        assert_eq!(s.at(1), Ok(b'b'));
        assert_eq!(s.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
        assert_eq!(s.at(3), Err(Error::OutOfRange { index: 3, len: 2 }));
        assert_eq!(Str::new().at(0), Err(Error::OutOfRange { index: 0, len: 0 }));
    }

    // Verify comparisons follow `strcmp()`, ignoring anything past the
    // terminator on either side.
    #[test]
    fn view_compare() {
        use core::cmp::Ordering;

        let s = Str::from_bytes(b"abc\0zzz");
        assert_eq!(s.compare(b"abc"), Ordering::Equal);
        assert_eq!(s.compare(b"abc\0aaa"), Ordering::Equal);
        assert_eq!(s.compare(b"abd"), Ordering::Less);
        assert_eq!(s.compare(b"ab"), Ordering::Greater);
        assert_eq!(s.compare(b"abcd"), Ordering::Less);
        assert_eq!(s.compare(b"\x80"), Ordering::Less);
        assert!(s.equal(b"abc"));
        assert!(!s.equal(b"ab"));

        assert!(Str::from("a") < Str::from("b"));
        assert!(Str::from("b") > Str::from("a\0c"));
        assert!(Str::new() == Str::from(""));
        assert!(s == *b"abc".as_slice());
    }

    // Verify `strncpy()` semantics of `copy_to()`.
    #[test]
    fn view_copy() {
        let s = Str::from_bytes(b"foobar\0");

        let mut buf = [0xffu8; 8];
        assert_eq!(s.copy_to(&mut buf, 0), 6);
        assert_eq!(&buf, b"foobar\0\0");

        let mut buf = [0xffu8; 4];
        assert_eq!(s.copy_to(&mut buf, 0), 4);
        assert_eq!(&buf, b"foob");

        let mut buf = [0xffu8; 4];
        assert_eq!(s.copy_to(&mut buf, 4), 2);
        assert_eq!(&buf, b"ar\0\0");

        let mut buf = [0xffu8; 2];
        assert_eq!(s.copy_to(&mut buf, 10), 0);
        assert_eq!(&buf, b"\0\0");
    }

    // Verify byte and substring searches, including start positions.
    #[test]
    fn view_find() {
        let s = Str::from_bytes(b"foo.bar.baz\0.");

        assert_eq!(s.find_byte(b'.', 0), Some(3));
        assert_eq!(s.find_byte(b'.', 3), Some(3));
        assert_eq!(s.find_byte(b'.', 4), Some(7));
        assert_eq!(s.find_byte(b'.', 8), None);
        assert_eq!(s.find_byte(b'x', 0), None);
        assert_eq!(s.find_byte(0, 0), None);
        assert_eq!(s.find_byte(b'f', 100), None);
        assert_eq!(s.find_byte(b'x', 0).unwrap_or(NPOS), NPOS);

        assert_eq!(s.rfind_byte(b'.', 0), Some(7));
        assert_eq!(s.rfind_byte(b'.', 8), None);
        assert_eq!(s.rfind_byte(b'f', 0), Some(0));

        assert_eq!(s.find(b"ba", 0), Some(4));
        assert_eq!(s.find(b"ba", 5), Some(8));
        assert_eq!(s.find(b"baz.", 0), None);
        assert_eq!(s.find(b"", 2), Some(2));
        assert_eq!(s.find(b"", 11), Some(11));
        assert_eq!(s.find(b"", 12), None);
        assert_eq!(s.find(b"bar\0xyz", 0), Some(4));
    }

    // Verify substrings share the same bytes and handle missing matches.
    #[test]
    fn view_substr() {
        let s = Str::from("key=value");

        assert_eq!(s.substr(0), "key=value");
        assert_eq!(s.substr(4), "value");
        assert!(s.substr(9).is_empty());
        assert!(!s.substr(9).is_null());
        assert!(s.substr(10).is_null());
        assert_eq!(s.substr_from(b'='), "=value");
        assert_eq!(s.substr_after(b'='), "value");
        assert!(s.substr_from(b'#').is_null());
        assert!(s.substr_after(b'#').is_null());

        assert_eq!(
            s.substr(4).as_bytes().as_ptr(),
            s.as_bytes()[4..].as_ptr(),
        );
    }

    // Verify prefix and suffix checks.
    #[test]
    fn view_affix() {
        let s = Str::from("foobar");

        assert!(s.has_prefix(b"foo"));
        assert!(s.has_prefix(b""));
        assert!(s.has_prefix(b"foobar"));
        assert!(!s.has_prefix(b"foobarx"));
        assert!(!s.has_prefix(b"bar"));
        assert!(s.has_suffix(b"bar"));
        assert!(s.has_suffix(b"bar\0foo"));
        assert!(!s.has_suffix(b"foo"));
        assert!(!s.has_suffix(b"xfoobar"));
        assert!(Str::new().has_prefix(b""));
    }

    // Verify the ASCII classification predicates, following the C locale.
    #[test]
    fn view_classify() {
        assert!(Str::from("abcXYZ019").is_alnum());
        assert!(!Str::from("abc-").is_alnum());
        assert!(Str::from("abcXYZ").is_alpha());
        assert!(!Str::from("abc1").is_alpha());
        assert!(Str::from("\x01~").is_ascii());
        assert!(!Str::from_bytes(b"\xff").is_ascii());
        assert!(Str::from(" \t").is_blank());
        assert!(!Str::from(" \n").is_blank());
        assert!(Str::from("\x01\x1f\x7f").is_cntrl());
        assert!(!Str::from("\x01a").is_cntrl());
        assert!(Str::from("0123456789").is_digit());
        assert!(!Str::from("12a").is_digit());
        assert!(Str::from("a!~").is_graph());
        assert!(!Str::from("a b").is_graph());
        assert!(Str::from("abc").is_lower());
        assert!(!Str::from("aBc").is_lower());
        assert!(Str::from("a b!").is_print());
        assert!(!Str::from("a\tb").is_print());
        assert!(Str::from("!.,;").is_punct());
        assert!(!Str::from("!a").is_punct());
        assert!(Str::from(" \t\n\x0b\x0c\r").is_space());
        assert!(!Str::from(" x").is_space());
        assert!(Str::from("ABC").is_upper());
        assert!(!Str::from("ABc").is_upper());
        assert!(Str::from("09afAF").is_xdigit());
        assert!(!Str::from("0g").is_xdigit());

        // Classification of empty strings trivially succeeds.
        assert!(Str::new().is_digit());
        assert!(Str::from("").is_alpha());
        assert!(Str::from("42").is(|v| v != b'x'));
    }

    // Verify mutable views and `pop_back()`.
    #[test]
    fn view_mut() {
        let mut buf = *b"foobar\0";
        let mut s = StrMut::from_bytes(&mut buf);

        assert_eq!(s.len(), 6);
        s.pop_back();
        assert_eq!(s.as_str(), "fooba");
        *s.front_mut().unwrap() = b'F';
        s[1] = b'O';
        *s.at_mut(2).unwrap() = b'O';
        assert_eq!(s.at_mut(5), Err(Error::OutOfRange { index: 5, len: 5 }));
        *s.back_mut().unwrap() = b'A';
        assert_eq!(s[4], b'A');
        s.as_bytes_mut()[3] = b'B';
        assert_eq!(s.into_str(), "FOOBA");
        assert_eq!(&buf, b"FOOBA\0\0");

        let mut s = StrMut::new();
        s.pop_back();
        assert!(s.is_empty());
        assert_eq!(s.front_mut(), None);

        let mut buf = *b"\0";
        let mut s = StrMut::from(&mut buf[..]);
        s.pop_back();
        assert_eq!(s.len(), 0);
    }

    #[quickcheck_macros::quickcheck]
    fn length_matches_terminator(data: Vec<u8>) -> bool {
        let s = Str::from_bytes(&data);
        let n = data.iter().position(|v| *v == 0).unwrap_or(data.len());

        s.len() == n && s.as_bytes() == &data[..n]
    }

    #[quickcheck_macros::quickcheck]
    fn find_substr(data: Vec<u8>, c: u8) -> bool {
        let s = Str::from_bytes(&data);

        match s.find_byte(c, 0) {
            Some(i) => {
                s.substr(i).front() == Some(c)
                    && s.substr_from(c).front() == Some(c)
                    && s.substr_after(c).len() + i + 1 == s.len()
            },
            None => s.substr_from(c).is_null(),
        }
    }
}
