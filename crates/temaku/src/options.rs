//! Options controlling how markup is rendered.

use std::fmt;

use once_cell::sync::Lazy;

use crate::backend::{ANSI, Backend};

/// BEL string terminator. Understood by most terminals.
pub const BEL: &str = "\x07";

/// ANSI "string terminator" escape sequence.
pub const ST: &str = "\x1b\\";

/// Characters that make up "words" by default.
///
/// Toggle tags like `_` are treated as plain text inside a word.
pub const DEFAULT_WORDCHARS: &str =
    "%@!#+-./~_ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

static GLOBAL: Lazy<Options<'static>> = Lazy::new(|| Options::new(&ANSI));

/// Rendering options.
///
/// Options only borrow the backend and strings; the caller owns them. The
/// scanner never mutates options.
///
/// # Examples
///
/// ```
/// use temaku::{Options, backend::HTML};
///
/// let options = Options::new(&HTML).with_color(false);
/// let out = temaku::render_string(&options, "%F{red}x%f").unwrap();
/// assert_eq!(out, "<pre>x</pre>");
/// ```
#[derive(Clone, Copy)]
pub struct Options<'a> {
    /// Backend that turns events into bytes.
    pub backend: &'a dyn Backend,
    /// Bytes that count as word characters.
    pub wordchars: &'a str,
    /// Terminator for the ANSI hyperlink escape.
    pub terminator: &'a str,
    /// Master switch; when off no markup event is rendered.
    pub do_markup: bool,
    /// Render foreground, background and line-fill colors.
    pub do_color: bool,
    /// Render header, bold, italic and the other text styles.
    pub do_style: bool,
    /// Render hyperlinks.
    pub do_links: bool,
}

impl<'a> Options<'a> {
    /// Options for `backend` with default word characters, BEL terminator and
    /// every feature enabled.
    pub fn new(backend: &'a dyn Backend) -> Self {
        Self {
            backend,
            wordchars: DEFAULT_WORDCHARS,
            terminator: BEL,
            do_markup: true,
            do_color: true,
            do_style: true,
            do_links: true,
        }
    }

    /// The process-wide default options, used when none are given.
    pub fn global() -> &'static Options<'static> {
        &GLOBAL
    }

    pub fn with_backend(mut self, backend: &'a dyn Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_wordchars(mut self, wordchars: &'a str) -> Self {
        self.wordchars = wordchars;
        self
    }

    pub fn with_terminator(mut self, terminator: &'a str) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn with_markup(mut self, enabled: bool) -> Self {
        self.do_markup = enabled;
        self
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.do_color = enabled;
        self
    }

    pub fn with_style(mut self, enabled: bool) -> Self {
        self.do_style = enabled;
        self
    }

    pub fn with_links(mut self, enabled: bool) -> Self {
        self.do_links = enabled;
        self
    }

    /// Whether the input starting at `rest` begins with a word character.
    ///
    /// If `%` is a word character, only the escaped pair `%%` counts; a lone
    /// `%` starts an escape tag. Empty input is not a word character.
    pub fn is_word_at(&self, rest: &[u8]) -> bool {
        let wordchars = self.wordchars.as_bytes();
        match rest {
            [] => false,
            [b'%', tail @ ..] if wordchars.contains(&b'%') => tail.first() == Some(&b'%'),
            [first, ..] => wordchars.contains(first),
        }
    }
}

impl Default for Options<'static> {
    fn default() -> Self {
        *Options::global()
    }
}

impl fmt::Debug for Options<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("backend", &self.backend.name())
            .field("wordchars", &self.wordchars)
            .field("terminator", &self.terminator)
            .field("do_markup", &self.do_markup)
            .field("do_color", &self.do_color)
            .field("do_style", &self.do_style)
            .field("do_links", &self.do_links)
            .finish()
    }
}
