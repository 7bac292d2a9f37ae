//! # JSON Writer
//!
//! The writer streams JSON tokens into a byte sink. It keeps an explicit
//! stack with one state per open container, plus a bottom entry for the
//! document itself. Every operation first consults the top of this stack to
//! decide whether it is allowed, which separator to emit, and what the new
//! top state becomes:
//!
//! | Top state       | Emitted before          | Top state after  |
//! |-----------------|-------------------------|------------------|
//! | `Document`      | nothing                 | `DocumentDone`   |
//! | `ArrayBegin`    | nothing                 | `ArrayElement`   |
//! | `ArrayElement`  | `,`                     | `ArrayElement`   |
//! | `ObjectBegin`   | nothing (keys only)     | `ObjectKey`      |
//! | `ObjectValue`   | `,` (keys only)         | `ObjectKey`      |
//! | `ObjectKey`     | `:` (values only)       | `ObjectValue`    |
//!
//! All checks run before any byte is emitted, so a rejected call leaves no
//! trace in the sink.

use crate::sink::Sink;

/// ## Default Maximum Depth
///
/// The maximum number of nested containers a writer accepts, unless
/// configured otherwise via `Options::max_depth`.
pub const DEPTH_MAX: usize = 256;

/// ## Writer Errors
///
/// The closed set of errors a writer can report. Once any of these is
/// raised, the writer is poisoned and reports the same error from every
/// later operation.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(thiserror::Error)]
pub enum Error {
    /// The sink failed to accept written bytes.
    #[error("JSON sink failed to write")]
    SinkWrite,
    /// The sink failed to flush.
    #[error("JSON sink failed to flush")]
    SinkFlush,
    /// NaN and infinities have no JSON representation.
    #[error("non-finite number cannot be represented in JSON")]
    NonFiniteNumber,
    /// The operation would produce a document violating the JSON grammar.
    #[error("JSON grammar violation")]
    GrammarViolation,
    /// Opening another container would exceed the maximum depth.
    #[error("maximum JSON nesting depth exceeded")]
    DepthExceeded,
}

/// ## Writer State
///
/// Every open container carries one of these states, describing what was
/// last written into it. The bottom of the stack carries either `Document`
/// or `DocumentDone`, depending on whether the top-level value was written.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum State {
    /// No top-level value was written, yet.
    #[default]
    Document,
    /// The top-level value was written.
    DocumentDone,
    /// An array was opened, but has no elements.
    ArrayBegin,
    /// An array has at least one element.
    ArrayElement,
    /// An object was opened, but has no members.
    ObjectBegin,
    /// A key was written and its value is expected next.
    ObjectKey,
    /// A member value was written and the next key (or the end) is expected.
    ObjectValue,
}

/// ## Pretty-Printing Configuration
///
/// When configured, the writer inserts whitespace between tokens. Each
/// element and key is placed on its own line, prefixed by `indent` once per
/// nesting level. Empty containers are written as `[]` and `{}`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Pretty {
    /// Indentation unit, repeated once per nesting level.
    pub indent: &'static str,
    /// Line separator written before each indentation.
    pub newline: &'static str,
    /// Whether to write a single space after each `:`.
    pub space_after_colon: bool,
}

/// ## Writer Options
///
/// Options are fixed over the lifetime of a writer and have to be specified
/// when it is created.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Options {
    /// Maximum number of nested containers.
    pub max_depth: usize,
    /// Whitespace configuration. `None` produces compact output.
    pub pretty: Option<Pretty>,
}

mod private {
    pub trait Sealed {}
}

/// ## JSON Numbers
///
/// This sealed trait is implemented for all primitive integer and floating
/// point types. Integers are written as plain decimal digits. Floating point
/// numbers use the shortest decimal representation that parses back to the
/// same value, switching to exponent notation for magnitudes below `1e-5` or
/// from `1e16` upwards. Negative zero is written as `-0`.
pub trait Number: private::Sealed + core::fmt::Display + core::fmt::LowerExp + Copy {
    #[doc(hidden)]
    fn finite(self) -> bool {
        true
    }

    #[doc(hidden)]
    fn exponent(self) -> bool {
        false
    }
}

macro_rules! implement_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl private::Sealed for $t {}
            impl Number for $t {}
        )*
    };
}

implement_integer!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
);

impl private::Sealed for f32 {}
impl Number for f32 {
    fn finite(self) -> bool {
        self.is_finite()
    }

    fn exponent(self) -> bool {
        self != 0.0 && (self.abs() < 1e-5 || self.abs() >= 1e16)
    }
}

impl private::Sealed for f64 {}
impl Number for f64 {
    fn finite(self) -> bool {
        self.is_finite()
    }

    fn exponent(self) -> bool {
        self != 0.0 && (self.abs() < 1e-5 || self.abs() >= 1e16)
    }
}

// Adapter to feed `core::fmt` output into a sink, retaining the sink error
// since `core::fmt::Error` carries no payload.
struct Format<'sink, S: Sink> {
    sink: &'sink mut S,
    error: Option<S::Error>,
}

/// ## Streaming JSON Writer
///
/// The writer takes JSON tokens from the caller and writes them into its
/// sink. It owns the sink for the lifetime of the document; use
/// `Self::into_sink()` to get it back.
///
/// A writer produces exactly one document. Once the top-level value is
/// complete, any further value is rejected as grammar violation.
pub struct Writer<S: Sink> {
    sink: S,
    options: Options,
    stack: alloc::vec::Vec<State>,
    error: Option<Error>,
    sink_error: Option<S::Error>,
}

impl Default for Pretty {
    fn default() -> Self {
        Self {
            indent: "  ",
            newline: "\n",
            space_after_colon: true,
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEPTH_MAX,
            pretty: None,
        }
    }
}

impl<S: Sink> core::fmt::Write for Format<'_, S> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.sink.write(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            core::fmt::Error
        })
    }
}

impl<S> core::fmt::Debug for Writer<S>
where
    S: Sink + core::fmt::Debug,
    S::Error: core::fmt::Debug,
{
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt.debug_struct("Writer")
            .field("sink", &self.sink)
            .field("options", &self.options)
            .field("stack", &self.stack)
            .field("error", &self.error)
            .field("sink_error", &self.sink_error)
            .finish()
    }
}

impl<S: Sink> Writer<S> {
    /// ## Create New Writer
    ///
    /// Create a new writer that emits into `sink`, configured with the given
    /// options.
    pub fn with(sink: S, options: Options) -> Self {
        let mut stack = alloc::vec::Vec::with_capacity(16);
        stack.push(State::Document);

        Self {
            sink: sink,
            options: options,
            stack: stack,
            error: None,
            sink_error: None,
        }
    }

    /// ## Create New Writer
    ///
    /// Create a new writer with the default options. See `Self::with()` for
    /// details.
    pub fn new(sink: S) -> Self {
        Self::with(sink, Default::default())
    }

    /// ## Current Depth
    ///
    /// Return the number of currently open containers.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// ## Current State
    ///
    /// Return the state of the innermost open container, or the document
    /// state if no container is open.
    pub fn state(&self) -> State {
        self.stack.last().copied().unwrap_or_default()
    }

    /// ## Check for Completion
    ///
    /// Return whether a full document was written, i.e., the top-level value
    /// is complete and no error occurred.
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.stack.as_slice() == [State::DocumentDone]
    }

    /// ## Latched Error
    ///
    /// Return the error that poisoned this writer, if any.
    pub fn error(&self) -> Option<Error> {
        self.error
    }

    /// ## Sink Error
    ///
    /// Return the error reported by the sink, if a sink operation poisoned
    /// this writer.
    pub fn sink_error(&self) -> Option<&S::Error> {
        self.sink_error.as_ref()
    }

    /// ## Access Sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// ## Unwrap Sink
    ///
    /// Consume the writer and return its sink. Nothing is flushed.
    pub fn into_sink(self) -> S {
        self.sink
    }

    // Latch `error` unless an earlier one is latched already, and return it
    // for convenient propagation.
    fn fail(&mut self, error: Error) -> Error {
        if self.error.is_none() {
            tracing::debug!(error = %error, depth = self.depth(), "JSON writer poisoned");
            self.error = Some(error);
        }
        error
    }

    fn check(&self) -> Result<(), Error> {
        match self.error {
            Some(v) => Err(v),
            None => Ok(()),
        }
    }

    fn set_state(&mut self, state: State) {
        if let Some(v) = self.stack.last_mut() {
            *v = state;
        }
    }

    fn emit(&mut self, data: &[u8]) -> Result<(), Error> {
        if data.is_empty() {
            return Ok(());
        }

        match self.sink.write(data) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.sink_error = Some(e);
                Err(self.fail(Error::SinkWrite))
            },
        }
    }

    fn emit_fmt(&mut self, args: core::fmt::Arguments<'_>) -> Result<(), Error> {
        let mut f = Format {
            sink: &mut self.sink,
            error: None,
        };

        match core::fmt::write(&mut f, args) {
            Ok(()) => Ok(()),
            Err(_) => {
                self.sink_error = f.error.take();
                Err(self.fail(Error::SinkWrite))
            },
        }
    }

    // Whitespace hook. Without pretty-printing this never emits anything.
    // Otherwise, it starts a new line indented for the given depth.
    fn emit_indent(&mut self, depth: usize) -> Result<(), Error> {
        if let Some(pretty) = self.options.pretty {
            self.emit(pretty.newline.as_bytes())?;
            for _ in 0..depth {
                self.emit(pretty.indent.as_bytes())?;
            }
        }
        Ok(())
    }

    fn emit_string(&mut self, data: &[u8]) -> Result<(), Error> {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";

        let mut unicode = *b"\\u0000";
        let mut start = 0;

        self.emit(b"\"")?;

        // Copy runs of verbatim bytes in one go and only break them up for
        // bytes that need an escape sequence.
        for (i, &v) in data.iter().enumerate() {
            let escape: &[u8] = match v {
                b'"' => b"\\\"",
                b'\\' => b"\\\\",
                b'/' => b"\\/",
                0x08 => b"\\b",
                0x0c => b"\\f",
                b'\n' => b"\\n",
                b'\r' => b"\\r",
                b'\t' => b"\\t",
                0x00..=0x1f => {
                    unicode[4] = HEX[usize::from(v >> 4)];
                    unicode[5] = HEX[usize::from(v & 0x0f)];
                    &unicode
                },
                _ => continue,
            };

            self.emit(&data[start..i])?;
            self.emit(escape)?;
            start = i + 1;
        }

        self.emit(&data[start..])?;
        self.emit(b"\"")
    }

    fn accept_value(&self) -> Result<(), Error> {
        match self.state() {
            State::Document
            | State::ArrayBegin
            | State::ArrayElement
            | State::ObjectKey => Ok(()),

            State::DocumentDone
            | State::ObjectBegin
            | State::ObjectValue => Err(Error::GrammarViolation),
        }
    }

    // Emit the separator required before a value and advance the state of
    // the innermost container. The caller must have checked the value is
    // acceptable.
    fn separate_value(&mut self) -> Result<(), Error> {
        let depth = self.depth();

        match self.state() {
            State::Document => {
                self.set_state(State::DocumentDone);
            },
            State::ArrayBegin => {
                self.set_state(State::ArrayElement);
                self.emit_indent(depth)?;
            },
            State::ArrayElement => {
                self.emit(b",")?;
                self.emit_indent(depth)?;
            },
            State::ObjectKey => {
                self.set_state(State::ObjectValue);
                self.emit(b":")?;
                if self.options.pretty.map_or(false, |v| v.space_after_colon) {
                    self.emit(b" ")?;
                }
            },
            State::DocumentDone
            | State::ObjectBegin
            | State::ObjectValue => {
                return Err(self.fail(Error::GrammarViolation));
            },
        }

        Ok(())
    }

    fn begin_value(&mut self) -> Result<(), Error> {
        self.check()?;
        if let Err(e) = self.accept_value() {
            return Err(self.fail(e));
        }
        self.separate_value()
    }

    fn begin_container(&mut self, token: &[u8], state: State) -> Result<(), Error> {
        self.check()?;
        if let Err(e) = self.accept_value() {
            return Err(self.fail(e));
        }
        if self.depth() >= self.options.max_depth {
            return Err(self.fail(Error::DepthExceeded));
        }

        self.separate_value()?;
        self.emit(token)?;
        self.stack.push(state);
        Ok(())
    }

    fn finish_container(
        &mut self,
        token: &[u8],
        empty: State,
        filled: State,
    ) -> Result<(), Error> {
        self.check()?;

        let state = self.state();
        let depth = self.depth();

        if depth == 0 || (state != empty && state != filled) {
            return Err(self.fail(Error::GrammarViolation));
        }

        if state == filled {
            self.emit_indent(depth - 1)?;
        }
        self.emit(token)?;
        self.stack.pop();
        Ok(())
    }

    /// ## Begin Object
    ///
    /// Open a new JSON Object. This is valid wherever a value is valid.
    pub fn begin_object(&mut self) -> Result<(), Error> {
        self.begin_container(b"{", State::ObjectBegin)
    }

    /// ## Finish Object
    ///
    /// Close the innermost container, which must be an object that is not
    /// waiting for the value of a key.
    pub fn finish_object(&mut self) -> Result<(), Error> {
        self.finish_container(b"}", State::ObjectBegin, State::ObjectValue)
    }

    /// ## Begin Array
    ///
    /// Open a new JSON Array. This is valid wherever a value is valid.
    pub fn begin_array(&mut self) -> Result<(), Error> {
        self.begin_container(b"[", State::ArrayBegin)
    }

    /// ## Finish Array
    ///
    /// Close the innermost container, which must be an array.
    pub fn finish_array(&mut self) -> Result<(), Error> {
        self.finish_container(b"]", State::ArrayBegin, State::ArrayElement)
    }

    /// ## Write Object Key
    ///
    /// Write the key of the next object member. This is only valid directly
    /// inside an object, either as first key or following a member value.
    /// The name separator is written lazily together with the value.
    pub fn write_key(&mut self, key: &str) -> Result<(), Error> {
        self.check()?;

        let depth = self.depth();

        match self.state() {
            State::ObjectBegin => {
                self.set_state(State::ObjectKey);
                self.emit_indent(depth)?;
            },
            State::ObjectValue => {
                self.set_state(State::ObjectKey);
                self.emit(b",")?;
                self.emit_indent(depth)?;
            },
            _ => {
                return Err(self.fail(Error::GrammarViolation));
            },
        }

        self.emit_string(key.as_bytes())
    }

    /// ## Write Null
    pub fn write_null(&mut self) -> Result<(), Error> {
        self.begin_value()?;
        self.emit(b"null")
    }

    /// ## Write Boolean
    pub fn write_boolean(&mut self, value: bool) -> Result<(), Error> {
        let token: &[u8] = if value { b"true" } else { b"false" };

        self.begin_value()?;
        self.emit(token)
    }

    /// ## Write Optional String
    ///
    /// Write `value` as JSON String, or write `null` if no string is given.
    pub fn write_string(&mut self, value: Option<&str>) -> Result<(), Error> {
        match value {
            Some(v) => self.write_str(v),
            None => self.write_null(),
        }
    }

    /// ## Write String
    ///
    /// Write `value` as quoted and escaped JSON String.
    pub fn write_str(&mut self, value: &str) -> Result<(), Error> {
        self.write_bytes(value.as_bytes())
    }

    /// ## Write String from Bytes
    ///
    /// Write raw bytes as JSON String. The bytes are escaped just like
    /// `Self::write_str()` does, but they are not validated. If `value` is
    /// not valid UTF-8, neither is the produced document.
    pub fn write_bytes(&mut self, value: &[u8]) -> Result<(), Error> {
        self.begin_value()?;
        self.emit_string(value)
    }

    /// ## Write Number
    ///
    /// Write any primitive integer or floating point number. Non-finite
    /// floating point numbers are rejected with `Error::NonFiniteNumber`
    /// and poison the writer, without emitting anything.
    pub fn write_number<N: Number>(&mut self, value: N) -> Result<(), Error> {
        self.check()?;
        if !value.finite() {
            return Err(self.fail(Error::NonFiniteNumber));
        }

        self.begin_value()?;
        if value.exponent() {
            self.emit_fmt(format_args!("{:e}", value))
        } else {
            self.emit_fmt(format_args!("{}", value))
        }
    }

    /// ## Flush Sink
    ///
    /// Ask the sink to flush any buffered data. This does not affect the
    /// state of the writer, unless the sink fails.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.check()?;

        tracing::trace!(depth = self.depth(), "flushing JSON writer");

        match self.sink.flush() {
            Ok(()) => Ok(()),
            Err(e) => {
                self.sink_error = Some(e);
                Err(self.fail(Error::SinkFlush))
            },
        }
    }
}
