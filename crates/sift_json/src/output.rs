//! The JSON token sink.

use core::fmt;
use std::io::{self, BufWriter, Write};

// -----------------------------------------------------------------------------
// Escaping

// Replacement for each byte below 0x20, plus `"` and `\`.
const fn escape_of(byte: u8) -> Option<&'static str> {
    const CONTROL: [&str; 32] = [
        "\\u0000", "\\u0001", "\\u0002", "\\u0003", "\\u0004", "\\u0005", "\\u0006", "\\u0007",
        "\\b", "\\t", "\\n", "\\u000b", "\\f", "\\r", "\\u000e", "\\u000f", "\\u0010", "\\u0011",
        "\\u0012", "\\u0013", "\\u0014", "\\u0015", "\\u0016", "\\u0017", "\\u0018", "\\u0019",
        "\\u001a", "\\u001b", "\\u001c", "\\u001d", "\\u001e", "\\u001f",
    ];
    match byte {
        b'"' => Some("\\\""),
        b'\\' => Some("\\\\"),
        0..0x20 => Some(CONTROL[byte as usize]),
        _ => None,
    }
}

// -----------------------------------------------------------------------------
// Output

/// A mechanical writer of JSON tokens.
///
/// Implementors only provide [`write_raw`](Output::write_raw); every other
/// token is written through it. The sink makes no decisions: separators and
/// keys are written exactly when they are asked for.
pub trait Output {
    /// Writes `text` as is.
    fn write_raw(&mut self, text: &str) -> io::Result<()>;

    #[inline]
    fn begin_array(&mut self) -> io::Result<()> {
        self.write_raw("[")
    }

    #[inline]
    fn end_array(&mut self) -> io::Result<()> {
        self.write_raw("]")
    }

    #[inline]
    fn begin_object(&mut self) -> io::Result<()> {
        self.write_raw("{")
    }

    #[inline]
    fn end_object(&mut self) -> io::Result<()> {
        self.write_raw("}")
    }

    /// Writes the `,` between two items.
    #[inline]
    fn item_separator(&mut self) -> io::Result<()> {
        self.write_raw(",")
    }

    /// Writes an object key: the quoted, escaped name and a `:`.
    fn key(&mut self, name: &str) -> io::Result<()> {
        self.write_quoted(name)?;
        self.write_raw(":")
    }

    /// Writes `text` as a quoted JSON string.
    ///
    /// `"` and `\` and the control characters below U+0020 are escaped, using
    /// the short forms `\t`, `\b`, `\n`, `\r` and `\f` where they exist.
    fn write_quoted(&mut self, text: &str) -> io::Result<()> {
        self.write_raw("\"")?;
        let mut start = 0;
        for (index, byte) in text.bytes().enumerate() {
            // Escaped bytes are all ASCII, so `index` is a char boundary.
            if let Some(escaped) = escape_of(byte) {
                if start < index {
                    self.write_raw(&text[start..index])?;
                }
                self.write_raw(escaped)?;
                start = index + 1;
            }
        }
        if start < text.len() {
            self.write_raw(&text[start..])?;
        }
        self.write_raw("\"")
    }

    #[inline]
    fn write_null(&mut self) -> io::Result<()> {
        self.write_raw("null")
    }

    #[inline]
    fn write_bool(&mut self, value: bool) -> io::Result<()> {
        self.write_raw(if value { "true" } else { "false" })
    }

    #[inline]
    fn write_char(&mut self, value: char) -> io::Result<()> {
        self.write_quoted(value.encode_utf8(&mut [0; 4]))
    }

    fn write_i64(&mut self, value: i64) -> io::Result<()> {
        self.write_raw(&value.to_string())
    }

    fn write_u64(&mut self, value: u64) -> io::Result<()> {
        self.write_raw(&value.to_string())
    }

    fn write_i128(&mut self, value: i128) -> io::Result<()> {
        self.write_raw(&value.to_string())
    }

    fn write_u128(&mut self, value: u128) -> io::Result<()> {
        self.write_raw(&value.to_string())
    }

    /// Writes a finite float; non-finite values have no JSON form and are
    /// written as `null`.
    fn write_f32(&mut self, value: f32) -> io::Result<()> {
        if value.is_finite() {
            self.write_raw(&value.to_string())
        } else {
            self.write_null()
        }
    }

    /// See [`write_f32`](Output::write_f32).
    fn write_f64(&mut self, value: f64) -> io::Result<()> {
        if value.is_finite() {
            self.write_raw(&value.to_string())
        } else {
            self.write_null()
        }
    }
}

// -----------------------------------------------------------------------------
// StringOutput

/// An [`Output`] collecting into a `String`.
///
/// ```
/// use sift_json::{Output, StringOutput};
///
/// let mut out = StringOutput::new();
/// out.begin_object().unwrap();
/// out.key("say").unwrap();
/// out.write_quoted("\"hi\"\n").unwrap();
/// out.end_object().unwrap();
///
/// assert_eq!(out.as_str(), r#"{"say":"\"hi\"\n"}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringOutput {
    buf: String,
}

impl StringOutput {
    /// Creates an empty output.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Returns the text written so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the output and returns the text.
    #[inline]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Output for StringOutput {
    #[inline]
    fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.buf.push_str(text);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// WriterOutput

/// An [`Output`] over a byte stream, buffered.
///
/// Call [`finish`](WriterOutput::finish) to flush the buffer; dropping the
/// output flushes as well but ignores errors.
pub struct WriterOutput<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> WriterOutput<W> {
    /// Wraps `writer` in a [`BufWriter`].
    pub fn new(writer: W) -> Self {
        Self {
            inner: BufWriter::new(writer),
        }
    }

    /// Flushes the buffer and returns the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        self.inner.into_inner().map_err(io::IntoInnerError::into_error)
    }
}

impl<W: Write> Output for WriterOutput<W> {
    #[inline]
    fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }
}

// -----------------------------------------------------------------------------
// FmtOutput

/// An [`Output`] over a [`fmt::Write`] target, such as a `Formatter`.
pub struct FmtOutput<'a, W: fmt::Write + ?Sized> {
    inner: &'a mut W,
}

impl<'a, W: fmt::Write + ?Sized> FmtOutput<'a, W> {
    #[inline]
    pub fn new(writer: &'a mut W) -> Self {
        Self { inner: writer }
    }
}

impl<W: fmt::Write + ?Sized> Output for FmtOutput<'_, W> {
    fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.inner
            .write_str(text)
            .map_err(|_| io::Error::other("formatter error"))
    }
}

#[cfg(test)]
mod tests {
    use super::{FmtOutput, Output, StringOutput, WriterOutput};

    fn quoted(text: &str) -> String {
        let mut out = StringOutput::new();
        out.write_quoted(text).unwrap();
        out.into_string()
    }

    #[test]
    fn escapes_quote_backslash_and_newline_only() {
        assert_eq!(quoted("a\"b\\c\nd"), r#""a\"b\\c\nd""#);
        assert_eq!(quoted("plain / é ✓"), "\"plain / é ✓\"");
    }

    #[test]
    fn control_characters() {
        assert_eq!(quoted("\t\u{8}\r\u{c}"), r#""\t\b\r\f""#);
        assert_eq!(quoted("\u{0}\u{1f}\u{b}"), r#""\u0000\u001f\u000b""#);
        let parsed: String = serde_json::from_str(&quoted("x\u{1}y")).unwrap();
        assert_eq!(parsed, "x\u{1}y");
    }

    #[test]
    fn numbers_and_literals() {
        let mut out = StringOutput::new();
        out.begin_array().unwrap();
        out.write_i64(-3).unwrap();
        out.item_separator().unwrap();
        out.write_f64(0.5).unwrap();
        out.item_separator().unwrap();
        out.write_f32(f32::NAN).unwrap();
        out.item_separator().unwrap();
        out.write_bool(false).unwrap();
        out.item_separator().unwrap();
        out.write_char('"').unwrap();
        out.end_array().unwrap();
        assert_eq!(out.as_str(), r#"[-3,0.5,null,false,"\""]"#);
    }

    #[test]
    fn writer_and_fmt_targets() {
        let mut out = WriterOutput::new(Vec::new());
        out.key("k").unwrap();
        assert_eq!(out.finish().unwrap(), b"\"k\":");

        let mut text = String::new();
        FmtOutput::new(&mut text).write_u64(42).unwrap();
        assert_eq!(text, "42");
    }
}
