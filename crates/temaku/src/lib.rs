//! Lightweight inline markup for terminals and the web.
//!
//! temaku turns text like `=Title` or `Use *bold* and %F{red}red%f` into a stream
//! of [`Event`]s, which a [`Backend`] turns into bytes: ANSI escapes for a
//! terminal, or HTML.
//!
//! # Markup
//!
//! | Tag | Meaning |
//! |---|---|
//! | `=` at the start of a line | header, until the end of the line |
//! | `*bold*` `/italic/` `_underline_` `\|alternative\|` | toggles, outside words only |
//! | `%B %b %I %i %U %u %S %s %R %r %A %a` | explicit style start/end |
//! | `%F{red}` `%K{red}` | foreground/background color, `RED` for bright, `reset` to close |
//! | `%f` `%k` | close foreground/background color |
//! | `%L{url}` `%l` | hyperlink |
//! | `%E` | fill the rest of the line with the background color |
//! | `%{text%}` | literal text |
//! | `%%` | a literal `%` |
//!
//! Every style opened by `=` or a toggle is closed at the end of its line.
//!
//! # Usage
//!
//! ```
//! use temaku::{Options, backend::HTML};
//!
//! let mut out = Vec::new();
//! temaku::markup(None, &mut out, "*bold* %F{red}red%f").unwrap();
//! assert_eq!(out, b"\x1b[1mbold\x1b[22m \x1b[31mred\x1b[39m");
//!
//! let html = temaku::render_string(&Options::new(&HTML), "%L{http://a}t%l").unwrap();
//! assert_eq!(html, "<pre><a href=\"http://a\">t</a></pre>");
//! ```

pub mod backend;
pub mod color;
pub mod error;
pub mod event;
pub mod options;
pub mod scanner;
pub mod sink;

// Re-export main types at crate root
pub use backend::{Backend, BackendKind};
pub use error::{BackendParseError, MarkupError, Result};
pub use event::{Category, Event};
pub use options::Options;
pub use scanner::{markup, render, render_string};
pub use sink::Sink;
