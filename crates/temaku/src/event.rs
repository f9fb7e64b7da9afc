//! Rendering events produced by the scanner.
//!
//! An [`Event`] is a structured markup occurrence: a start/end pair for one
//! style, raw data, or the document brackets. Backends turn events into bytes.

use crate::options::Options;

/// One rendering event.
///
/// Colors are indices into the 16-color palette: 0-7 are the normal colors
/// (black, red, green, yellow, blue, purple, cyan, white) and 8-15 their bright
/// variants. `None` means "no color" and renders nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event<'a> {
    /// Start of a document; carries the whole input.
    Start(&'a [u8]),
    /// End of a document; carries the whole input.
    End(&'a [u8]),
    /// Raw text. Backends apply only their own escaping.
    Data(&'a [u8]),
    HeaderStart,
    HeaderEnd,
    BoldStart,
    BoldEnd,
    ItalicStart,
    ItalicEnd,
    UnderlineStart,
    UnderlineEnd,
    StrikethroughStart,
    StrikethroughEnd,
    ReverseVideoStart,
    ReverseVideoEnd,
    AlternativeStart,
    AlternativeEnd,
    FgColorStart(Option<u8>),
    FgColorEnd,
    BgColorStart(Option<u8>),
    BgColorEnd,
    /// Fill the rest of the line with the given background color.
    BgLineStart(Option<u8>),
    BgLineEnd,
    /// Start a hyperlink; carries the unescaped URL.
    LinkStart(&'a [u8]),
    LinkEnd,
}

/// Which option gates an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Document brackets and data; never gated.
    Document,
    /// Gated by `do_style`.
    Style,
    /// Gated by `do_color`.
    Color,
    /// Gated by `do_links`.
    Link,
}

impl Category {
    /// Whether events of this category reach the backend under `options`.
    pub fn is_enabled(self, options: &Options<'_>) -> bool {
        match self {
            Category::Document => true,
            Category::Style => options.do_markup && options.do_style,
            Category::Color => options.do_markup && options.do_color,
            Category::Link => options.do_markup && options.do_links,
        }
    }
}

impl Event<'_> {
    pub fn category(&self) -> Category {
        match self {
            Event::Start(_) | Event::End(_) | Event::Data(_) => Category::Document,
            Event::HeaderStart
            | Event::HeaderEnd
            | Event::BoldStart
            | Event::BoldEnd
            | Event::ItalicStart
            | Event::ItalicEnd
            | Event::UnderlineStart
            | Event::UnderlineEnd
            | Event::StrikethroughStart
            | Event::StrikethroughEnd
            | Event::ReverseVideoStart
            | Event::ReverseVideoEnd
            | Event::AlternativeStart
            | Event::AlternativeEnd => Category::Style,
            Event::FgColorStart(_)
            | Event::FgColorEnd
            | Event::BgColorStart(_)
            | Event::BgColorEnd
            | Event::BgLineStart(_)
            | Event::BgLineEnd => Category::Color,
            Event::LinkStart(_) | Event::LinkEnd => Category::Link,
        }
    }

    /// Stable upper-case name, used in logs and event traces.
    #[rustfmt::skip]
    pub fn name(&self) -> &'static str {
        match self {
            Event::Start(_)             => "START",
            Event::End(_)               => "END",
            Event::Data(_)              => "DATA",
            Event::HeaderStart          => "HEADER_START",
            Event::HeaderEnd            => "HEADER_END",
            Event::BoldStart            => "BOLD_START",
            Event::BoldEnd              => "BOLD_END",
            Event::ItalicStart          => "ITALIC_START",
            Event::ItalicEnd            => "ITALIC_END",
            Event::UnderlineStart       => "UNDERLINE_START",
            Event::UnderlineEnd         => "UNDERLINE_END",
            Event::StrikethroughStart   => "STRIKETHROUGH_START",
            Event::StrikethroughEnd     => "STRIKETHROUGH_END",
            Event::ReverseVideoStart    => "REVERSE_VIDEO_START",
            Event::ReverseVideoEnd      => "REVERSE_VIDEO_END",
            Event::AlternativeStart     => "ALTERNATIVE_START",
            Event::AlternativeEnd       => "ALTERNATIVE_END",
            Event::FgColorStart(_)      => "FGCOLOR_START",
            Event::FgColorEnd           => "FGCOLOR_END",
            Event::BgColorStart(_)      => "BGCOLOR_START",
            Event::BgColorEnd           => "BGCOLOR_END",
            Event::BgLineStart(_)       => "BGLINE_START",
            Event::BgLineEnd            => "BGLINE_END",
            Event::LinkStart(_)         => "LINK_START",
            Event::LinkEnd              => "LINK_END",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ANSI;

    #[test]
    fn categories() {
        assert_eq!(Event::Data(b"x").category(), Category::Document);
        assert_eq!(Event::Start(b"").category(), Category::Document);
        assert_eq!(Event::AlternativeEnd.category(), Category::Style);
        assert_eq!(Event::ReverseVideoStart.category(), Category::Style);
        assert_eq!(Event::BgLineEnd.category(), Category::Color);
        assert_eq!(Event::FgColorStart(Some(1)).category(), Category::Color);
        assert_eq!(Event::LinkStart(b"u").category(), Category::Link);
    }

    #[test]
    fn gating_requires_master_switch() {
        let options = Options::new(&ANSI).with_markup(false);
        assert!(Category::Document.is_enabled(&options));
        assert!(!Category::Style.is_enabled(&options));
        assert!(!Category::Color.is_enabled(&options));
        assert!(!Category::Link.is_enabled(&options));
    }

    #[test]
    fn gating_per_category() {
        let options = Options::new(&ANSI).with_color(false);
        assert!(Category::Style.is_enabled(&options));
        assert!(!Category::Color.is_enabled(&options));
        assert!(Category::Link.is_enabled(&options));
    }

    #[test]
    fn names() {
        assert_eq!(Event::BoldStart.name(), "BOLD_START");
        assert_eq!(Event::BgLineStart(None).name(), "BGLINE_START");
        assert_eq!(Event::LinkEnd.name(), "LINK_END");
    }
}
