//! # Byte Sinks
//!
//! The JSON writer never talks to files, sockets, or buffers directly.
//! Instead, it is handed a byte sink, which is the minimal capability needed
//! to emit a document: append bytes, and request buffered bytes to be pushed
//! out. Sinks cannot seek and cannot be read from.

/// ## Byte Sink
///
/// A byte sink accepts a stream of bytes and forwards it to its final
/// destination. Both operations can fail, in which case the sink reports its
/// own error type. The JSON writer retains the first such error verbatim.
pub trait Sink {
    /// ## Sink Error
    ///
    /// The error type reported by failed sink operations.
    type Error;

    /// ## Append Bytes
    ///
    /// Append all of `data` to the sink. Partial writes are not reported; a
    /// sink either accepts the entire slice or fails.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// ## Flush Sink
    ///
    /// Request that any buffered bytes are pushed to their destination.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl Sink for alloc::vec::Vec<u8> {
    type Error = core::convert::Infallible;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

/// ## Sink over `std::io::Write`
///
/// This adapter turns any `std::io::Write` implementation into a byte sink.
/// Writes use `write_all()`, so short writes are retried by the standard
/// library rather than surfacing as errors.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// ## Wrap Writer
    ///
    /// Create a new sink that forwards all bytes to `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            inner: inner,
        }
    }

    /// ## Unwrap Writer
    ///
    /// Consume the sink and return the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    type Error = std::io::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()
    }
}
