//! HTML backend.
//!
//! The document is wrapped in `<pre>`, styles become inline-styled `<span>`s and
//! links become anchors with a percent-encoded `href`.

use std::io;

use crate::color::palette_slot;
use crate::event::Event;
use crate::options::Options;
use crate::sink::Sink;

use super::Backend;

/// Hex colors for the 16-color palette: normal, then bright.
const PALETTE: [&str; 16] = [
    "#010101", // black
    "#DE382B", // red
    "#39B54A", // green
    "#FFC706", // yellow
    "#006FB8", // blue
    "#762671", // purple
    "#2CB5E9", // cyan
    "#CCCCCC", // white
    "#808080", // bright black
    "#FF0000", // bright red
    "#00FF00", // bright green
    "#FFFF00", // bright yellow
    "#0000FF", // bright blue
    "#FF00FF", // bright purple
    "#00FFFF", // bright cyan
    "#FFFFFF", // bright white
];

const SPAN_END: &str = "</span>";

/// Renders events as HTML.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlBackend;

impl HtmlBackend {
    /// Write `data`, escaping `<`, `>` and `&`.
    fn write_escaped(sink: &mut dyn Sink, data: &[u8]) -> io::Result<usize> {
        let mut written = 0;
        let mut run = 0;
        for (i, &byte) in data.iter().enumerate() {
            let entity = match byte {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                _ => continue,
            };
            if run < i {
                written += sink.write_bytes(&data[run..i])?;
            }
            written += sink.write_text(entity)?;
            run = i + 1;
        }
        if run < data.len() {
            written += sink.write_bytes(&data[run..])?;
        }
        Ok(written)
    }

    /// Open a `<span>` styling `property` with a palette color, if any.
    fn write_color_span(
        sink: &mut dyn Sink,
        property: &str,
        color: Option<u8>,
    ) -> io::Result<usize> {
        let Some(index) = color else {
            return Ok(0);
        };
        Ok(sink.write_text("<span style=\"")?
            + sink.write_text(property)?
            + sink.write_char(b':')?
            + sink.write_text(PALETTE[palette_slot(index)])?
            + sink.write_text("\">")?)
    }
}

impl Backend for HtmlBackend {
    fn name(&self) -> &'static str {
        "html"
    }

    #[rustfmt::skip]
    fn write_event(
        &self,
        _options: &Options<'_>,
        sink: &mut dyn Sink,
        event: &Event<'_>,
    ) -> io::Result<usize> {
        match *event {
            Event::Start(_)             => sink.write_text("<pre>"),
            Event::End(_)               => sink.write_text("</pre>"),
            Event::Data(data)           => Self::write_escaped(sink, data),
            Event::HeaderStart          => sink.write_text("<h1>"),
            Event::HeaderEnd            => sink.write_text("</h1>"),
            Event::BoldStart            => sink.write_text("<span style=\"font-weight:bold\">"),
            Event::ItalicStart          => sink.write_text("<span style=\"font-style:italic\">"),
            Event::UnderlineStart       => sink.write_text("<span style=\"text-decoration:underline\">"),
            Event::StrikethroughStart   => sink.write_text("<span style=\"text-decoration:line-through\">"),
            Event::AlternativeStart     => sink.write_text("<span style=\"color:#404040\">"),
            // No inline style can swap foreground and background.
            Event::ReverseVideoStart
            | Event::ReverseVideoEnd    => Ok(0),
            Event::FgColorStart(color)  => Self::write_color_span(sink, "color", color),
            Event::BgColorStart(color)
            | Event::BgLineStart(color) => Self::write_color_span(sink, "background", color),
            Event::BoldEnd
            | Event::ItalicEnd
            | Event::UnderlineEnd
            | Event::StrikethroughEnd
            | Event::AlternativeEnd
            | Event::FgColorEnd
            | Event::BgColorEnd
            | Event::BgLineEnd          => sink.write_text(SPAN_END),
            Event::LinkStart(url)       => {
                Ok(sink.write_text("<a href=\"")? + sink.write_url(url)? + sink.write_text("\">")?)
            }
            Event::LinkEnd              => sink.write_text("</a>"),
        }
    }
}
