//! Backends turn [`Event`]s into bytes.
//!
//! Two reference backends are provided: [`ANSI`] for terminals and [`HTML`] for
//! web pages. Custom backends implement [`Backend`], or wrap a closure with
//! [`from_fn`].

mod ansi;
mod html;

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::error::BackendParseError;
use crate::event::Event;
use crate::options::Options;
use crate::sink::Sink;

pub use ansi::AnsiBackend;
pub use html::HtmlBackend;

/// ANSI terminal escape backend.
pub static ANSI: AnsiBackend = AnsiBackend;

/// HTML backend.
pub static HTML: HtmlBackend = HtmlBackend;

/// Renders one event at a time.
///
/// Backends hold no per-document state: every call must be answerable from the
/// event, the options and read-only tables. An effect the backend cannot express
/// writes nothing and reports zero bytes.
pub trait Backend: Send + Sync {
    /// Short name, used in logs.
    fn name(&self) -> &'static str {
        "custom"
    }

    /// Write `event` to `sink`, returning the number of bytes written.
    fn write_event(
        &self,
        options: &Options<'_>,
        sink: &mut dyn Sink,
        event: &Event<'_>,
    ) -> io::Result<usize>;
}

/// A backend backed by a closure. See [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnBackend<F> {
    f: F,
}

/// Create a backend from a closure.
///
/// # Examples
///
/// ```
/// use temaku::{Options, Sink, backend};
///
/// let names = backend::from_fn(|_, sink, event| {
///     sink.write_text(event.name())?;
///     sink.write_char(b' ')
/// });
/// let options = Options::new(&names);
/// let out = temaku::render_string(&options, "*b*").unwrap();
/// assert_eq!(out, "START BOLD_START DATA BOLD_END END ");
/// ```
pub fn from_fn<F>(f: F) -> FnBackend<F>
where
    F: Fn(&Options<'_>, &mut dyn Sink, &Event<'_>) -> io::Result<usize> + Send + Sync,
{
    FnBackend { f }
}

impl<F> Backend for FnBackend<F>
where
    F: Fn(&Options<'_>, &mut dyn Sink, &Event<'_>) -> io::Result<usize> + Send + Sync,
{
    fn write_event(
        &self,
        options: &Options<'_>,
        sink: &mut dyn Sink,
        event: &Event<'_>,
    ) -> io::Result<usize> {
        (self.f)(options, sink, event)
    }
}

/// The reference backends, by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    #[default]
    Ansi,
    Html,
}

impl BackendKind {
    /// The static backend for this kind.
    pub fn backend(self) -> &'static dyn Backend {
        match self {
            BackendKind::Ansi => &ANSI,
            BackendKind::Html => &HTML,
        }
    }
}

impl FromStr for BackendKind {
    type Err = BackendParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ansi" => Ok(BackendKind::Ansi),
            "html" => Ok(BackendKind::Html),
            _ => Err(BackendParseError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.backend().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_backend_kind() {
        assert_eq!("ansi".parse::<BackendKind>().unwrap(), BackendKind::Ansi);
        assert_eq!(" HTML ".parse::<BackendKind>().unwrap(), BackendKind::Html);
        assert_eq!(
            "pdf".parse::<BackendKind>(),
            Err(BackendParseError::Unknown("pdf".into()))
        );
    }

    #[test]
    fn backend_kind_display() {
        assert_eq!(BackendKind::Ansi.to_string(), "ansi");
        assert_eq!(BackendKind::Html.to_string(), "html");
        assert_eq!(BackendKind::default(), BackendKind::Ansi);
    }

    #[test]
    fn closure_backend() {
        let upper = from_fn(|_, sink, event| match event {
            Event::Data(data) => sink.write_bytes(&data.to_ascii_uppercase()),
            _ => Ok(0),
        });
        let options = Options::new(&upper);
        let mut out = Vec::new();
        let n = upper
            .write_event(&options, &mut out, &Event::Data(b"abc"))
            .unwrap();
        assert_eq!(n, 3);
        assert_eq!(out, b"ABC");
        assert_eq!(upper.name(), "custom");
    }
}
