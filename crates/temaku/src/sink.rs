//! Byte sinks and the primitives backends write through.
//!
//! Every [`std::io::Write`] is a [`Sink`], so standard output, files, sockets and
//! in-memory buffers all work out of the box. Each primitive reports how many
//! bytes it wrote, or forwards the sink's failure unchanged.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A destination that accepts raw bytes.
pub trait Sink {
    /// Write all of `bytes`, returning how many were written.
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<usize>;

    /// Write a string without any framing.
    fn write_text(&mut self, text: &str) -> io::Result<usize> {
        self.write_bytes(text.as_bytes())
    }

    /// Write a single byte.
    fn write_char(&mut self, byte: u8) -> io::Result<usize> {
        self.write_bytes(&[byte])
    }

    /// Write `value` in decimal.
    fn write_int(&mut self, value: i32) -> io::Result<usize> {
        write_formatted(self, format_args!("{value}"))
    }

    /// Write `value` in lowercase hexadecimal, without a prefix.
    ///
    /// Negative values are written as their two's complement bit pattern.
    fn write_hex(&mut self, value: i32) -> io::Result<usize> {
        write_formatted(self, format_args!("{value:x}"))
    }

    /// Write `url`, percent-encoding control bytes, non-ASCII bytes and
    /// `<`, `>`, `%` and `"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use temaku::Sink;
    ///
    /// let mut out = Vec::new();
    /// out.write_url(b"http://a/<b c>").unwrap();
    /// assert_eq!(out, b"http://a/%3cb%20c%3e");
    /// ```
    fn write_url(&mut self, url: &[u8]) -> io::Result<usize> {
        let mut written = 0;
        let mut run = 0;
        for (i, &byte) in url.iter().enumerate() {
            if !needs_percent_encoding(byte) {
                continue;
            }
            if run < i {
                written += self.write_bytes(&url[run..i])?;
            }
            written += self.write_char(b'%')?;
            written += write_formatted(self, format_args!("{byte:02x}"))?;
            run = i + 1;
        }
        if run < url.len() {
            written += self.write_bytes(&url[run..])?;
        }
        Ok(written)
    }
}

impl<W: Write + ?Sized> Sink for W {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.write_all(bytes)?;
        Ok(bytes.len())
    }
}

/// Bytes that cannot appear verbatim inside an `href` attribute.
pub fn needs_percent_encoding(byte: u8) -> bool {
    byte <= 0x20 || byte >= 0x7f || matches!(byte, b'<' | b'>' | b'%' | b'"')
}

/// Formats into a stack buffer, so concurrent callers never share scratch space.
fn write_formatted<S: Sink + ?Sized>(
    sink: &mut S,
    args: std::fmt::Arguments<'_>,
) -> io::Result<usize> {
    let mut buf = [0u8; 16];
    let mut cursor = io::Cursor::new(&mut buf[..]);
    cursor.write_fmt(args)?;
    let len = cursor.position() as usize;
    sink.write_bytes(&buf[..len])
}

/// Standard output sink.
pub fn stdout() -> io::Stdout {
    io::stdout()
}

/// Standard error sink.
pub fn stderr() -> io::Stderr {
    io::stderr()
}

/// Create (or truncate) a file and return a buffered sink writing to it.
///
/// Call [`Write::flush`] when done to observe write failures.
pub fn create_file(path: impl AsRef<Path>) -> io::Result<BufWriter<File>> {
    let path = path.as_ref();
    log::debug!("sink: creating file {}", path.display());
    Ok(BufWriter::new(File::create(path)?))
}
