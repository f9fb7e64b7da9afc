//! The markup scanner.
//!
//! A single pass over the input bytes. Each byte is classified and turned into
//! events for the configured backend:
//!
//! - `=` at the start of a line opens a header.
//! - `*`, `/`, `_` and `|` toggle bold, italic, underline and alternative text.
//!   A tag opens only outside a word and closes only before a non-word byte.
//! - `%` starts an escape tag (`%B`, `%F{red}`, `%L{url}`, `%{literal%}`, ...).
//! - `\n` ends the line and closes everything opened on it.
//!
//! Option gating decides only whether an event reaches the backend. Open
//! contexts and colors are tracked the same way whatever is rendered, so
//! disabling a feature never changes how the rest of the text is parsed.

use bitflags::bitflags;

use crate::color::ColorSpec;
use crate::error::Result;
use crate::event::Event;
use crate::options::Options;
use crate::sink::Sink;

bitflags! {
    /// Contexts opened on the current line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Context: u8 {
        const HEADER = 0x01;
        const BOLD = 0x02;
        const ITALIC = 0x04;
        const UNDERLINE = 0x08;
        const ALTERNATIVE = 0x10;
        const BGLINE = 0x20;
    }
}

/// Contexts are flags, not a stack: they always close in this order, whatever
/// order they were opened in.
const CLOSE_ORDER: [(Context, Event<'static>); 6] = [
    (Context::HEADER, Event::HeaderEnd),
    (Context::BOLD, Event::BoldEnd),
    (Context::ITALIC, Event::ItalicEnd),
    (Context::UNDERLINE, Event::UnderlineEnd),
    (Context::ALTERNATIVE, Event::AlternativeEnd),
    (Context::BGLINE, Event::BgLineEnd),
];

/// A toggle tag: its context flag and the events that open and close it.
fn toggle_tag(byte: u8) -> Option<(Context, Event<'static>, Event<'static>)> {
    match byte {
        b'*' => Some((Context::BOLD, Event::BoldStart, Event::BoldEnd)),
        b'/' => Some((Context::ITALIC, Event::ItalicStart, Event::ItalicEnd)),
        b'_' => Some((Context::UNDERLINE, Event::UnderlineStart, Event::UnderlineEnd)),
        b'|' => Some((Context::ALTERNATIVE, Event::AlternativeStart, Event::AlternativeEnd)),
        _ => None,
    }
}

/// Explicit style escapes; these ignore word boundaries and open contexts.
#[rustfmt::skip]
fn explicit_style(code: u8) -> Option<Event<'static>> {
    match code {
        b'B' => Some(Event::BoldStart),
        b'b' => Some(Event::BoldEnd),
        b'I' => Some(Event::ItalicStart),
        b'i' => Some(Event::ItalicEnd),
        b'U' => Some(Event::UnderlineStart),
        b'u' => Some(Event::UnderlineEnd),
        b'S' => Some(Event::StrikethroughStart),
        b's' => Some(Event::StrikethroughEnd),
        b'R' => Some(Event::ReverseVideoStart),
        b'r' => Some(Event::ReverseVideoEnd),
        b'A' => Some(Event::AlternativeStart),
        b'a' => Some(Event::AlternativeEnd),
        _    => None,
    }
}

/// The argument of a `{...}` group starting at `pos`.
///
/// Returns the contents and the position after the closing `}`. An unterminated
/// group runs to the end of input.
fn braced(text: &[u8], pos: usize) -> Option<(&[u8], usize)> {
    if text.get(pos) != Some(&b'{') {
        return None;
    }
    let start = pos + 1;
    match text[start..].iter().position(|&b| b == b'}') {
        Some(len) => Some((&text[start..start + len], start + len + 1)),
        None => {
            log::debug!("markup: unterminated group at byte {}", pos);
            Some((&text[start..], text.len()))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layer {
    Foreground,
    Background,
}

/// Per-call scanning state.
struct Scanner<'o, 'a, 's> {
    options: &'o Options<'a>,
    sink: &'s mut dyn Sink,
    /// Bytes reported by the backend so far.
    written: usize,
    row: usize,
    column: usize,
    context: Context,
    fg: Option<u8>,
    bg: Option<u8>,
    /// The previous consumed byte was a word character.
    in_word: bool,
}

impl<'o, 'a, 's> Scanner<'o, 'a, 's> {
    fn new(options: &'o Options<'a>, sink: &'s mut dyn Sink) -> Self {
        Self {
            options,
            sink,
            written: 0,
            row: 0,
            column: 0,
            context: Context::empty(),
            fg: None,
            bg: None,
            in_word: false,
        }
    }

    /// Send `event` to the backend if its category is enabled.
    fn emit(&mut self, event: Event<'_>) -> Result<()> {
        if event.category().is_enabled(self.options) {
            self.written += self
                .options
                .backend
                .write_event(self.options, &mut *self.sink, &event)?;
        }
        Ok(())
    }

    /// Emit literal data. `from` is the input at the tag that produced it, and
    /// decides whether we are now inside a word.
    fn put(&mut self, data: &[u8], from: &[u8]) -> Result<()> {
        self.in_word = self.options.is_word_at(from);
        self.column += 1;
        self.emit(Event::Data(data))
    }

    fn run(&mut self, input: &[u8]) -> Result<()> {
        let text = match input.iter().position(|&b| b == 0) {
            Some(nul) => &input[..nul],
            None => input,
        };
        self.emit(Event::Start(input))?;

        let mut pos = 0;
        while pos < text.len() {
            let at = pos;
            let byte = text[pos];
            pos += 1;
            match byte {
                b'=' if self.column == 0 => {
                    self.context.insert(Context::HEADER);
                    self.emit(Event::HeaderStart)?;
                }
                b'\n' => self.end_line(&text[at..pos])?,
                b'%' => pos = self.escape(text, at)?,
                _ => match toggle_tag(byte) {
                    Some(tag) => self.toggle(tag, text, at)?,
                    None => self.put(&text[at..pos], &text[at..])?,
                },
            }
        }

        self.close_line()?;
        self.emit(Event::End(input))
    }

    fn toggle(
        &mut self,
        (flag, start, end): (Context, Event<'static>, Event<'static>),
        text: &[u8],
        at: usize,
    ) -> Result<()> {
        if !self.context.contains(flag) {
            if self.in_word {
                return self.put(&text[at..at + 1], &text[at..]);
            }
            self.context.insert(flag);
            self.emit(start)
        } else if !self.options.is_word_at(&text[at + 1..]) {
            self.context.remove(flag);
            self.emit(end)
        } else {
            // Still inside a word: the tag is text and the style stays open.
            self.put(&text[at..at + 1], &text[at..])
        }
    }

    fn end_line(&mut self, newline: &[u8]) -> Result<()> {
        self.emit(Event::Data(newline))?;
        self.close_line()?;
        self.row += 1;
        self.column = 0;
        self.in_word = false;
        Ok(())
    }

    /// Close every open context in the fixed order and clear them.
    fn close_line(&mut self) -> Result<()> {
        for (flag, event) in CLOSE_ORDER {
            if self.context.contains(flag) {
                self.emit(event)?;
            }
        }
        self.context = Context::empty();
        Ok(())
    }

    /// Handle the escape tag whose `%` is at `at`; returns the next position.
    fn escape(&mut self, text: &[u8], at: usize) -> Result<usize> {
        let Some(&code) = text.get(at + 1) else {
            return Ok(text.len());
        };
        let pos = at + 2;

        if let Some(event) = explicit_style(code) {
            self.emit(event)?;
            return Ok(pos);
        }

        match code {
            b'{' => self.literal(text, pos),
            b'F' | b'K' => {
                let layer = if code == b'F' {
                    Layer::Foreground
                } else {
                    Layer::Background
                };
                match braced(text, pos) {
                    Some((name, next)) => {
                        self.set_color(layer, name)?;
                        Ok(next)
                    }
                    None => Ok(pos),
                }
            }
            b'f' => {
                self.reset_color(Layer::Foreground)?;
                Ok(pos)
            }
            b'k' => {
                self.reset_color(Layer::Background)?;
                Ok(pos)
            }
            b'L' => match braced(text, pos) {
                Some((url, next)) => {
                    self.emit(Event::LinkStart(url))?;
                    Ok(next)
                }
                None => Ok(pos),
            },
            b'l' => {
                self.emit(Event::LinkEnd)?;
                Ok(pos)
            }
            b'E' => {
                self.emit(Event::BgLineStart(self.bg))?;
                self.context.insert(Context::BGLINE);
                Ok(pos)
            }
            // `%%` and `%x`: the second byte is text.
            _ => {
                self.put(&text[at + 1..pos], &text[at..])?;
                Ok(pos)
            }
        }
    }

    /// `%{...%}`: pass everything up to the first `%}` through as data.
    fn literal(&mut self, text: &[u8], start: usize) -> Result<usize> {
        let body = &text[start..];
        let (data, next) = match body.windows(2).position(|w| w == b"%}") {
            Some(len) => (&body[..len], start + len + 2),
            None => {
                log::debug!("markup: unterminated literal at byte {}", start - 2);
                (body, text.len())
            }
        };
        if !data.is_empty() {
            self.emit(Event::Data(data))?;
        }
        Ok(next)
    }

    fn set_color(&mut self, layer: Layer, name: &[u8]) -> Result<()> {
        match ColorSpec::lookup(name) {
            Some(ColorSpec::Reset) => self.reset_color(layer),
            Some(ColorSpec::Index(index)) => match layer {
                Layer::Foreground => {
                    self.fg = Some(index);
                    self.emit(Event::FgColorStart(self.fg))
                }
                Layer::Background => {
                    self.bg = Some(index);
                    self.emit(Event::BgColorStart(self.bg))
                }
            },
            None => {
                log::debug!(
                    "markup: unknown color name {:?}",
                    String::from_utf8_lossy(name)
                );
                Ok(())
            }
        }
    }

    fn reset_color(&mut self, layer: Layer) -> Result<()> {
        match layer {
            Layer::Foreground => {
                self.fg = None;
                self.emit(Event::FgColorEnd)
            }
            Layer::Background => {
                self.bg = None;
                self.emit(Event::BgColorEnd)
            }
        }
    }
}

/// Render `input` through the backend in `options`, writing to `sink`.
///
/// Uses [`Options::global`] when `options` is `None`. Scanning stops at the
/// first NUL byte. Returns the number of bytes the backend wrote; the only
/// failure is the sink's, which is returned as soon as it happens.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// temaku::markup(None, &mut out, "*bold* text").unwrap();
/// assert_eq!(out, b"\x1b[1mbold\x1b[22m text");
/// ```
pub fn markup(
    options: Option<&Options<'_>>,
    sink: &mut dyn Sink,
    input: impl AsRef<[u8]>,
) -> Result<usize> {
    let options = options.unwrap_or_else(|| Options::global());
    let input = input.as_ref();
    log::trace!(
        "markup: scanning {} bytes with {} backend",
        input.len(),
        options.backend.name()
    );

    let mut scanner = Scanner::new(options, sink);
    scanner.run(input)?;

    log::trace!(
        "markup: wrote {} bytes over {} lines",
        scanner.written,
        scanner.row + 1
    );
    Ok(scanner.written)
}

/// Render `input` into a byte buffer.
pub fn render(options: &Options<'_>, input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    markup(Some(options), &mut out, input)?;
    Ok(out)
}

/// Render `input` into a string, replacing invalid UTF-8.
pub fn render_string(options: &Options<'_>, input: impl AsRef<[u8]>) -> Result<String> {
    let out = render(options, input)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
