//! ANSI terminal backend.
//!
//! Styles map to SGR escapes (`ESC [ n m`), hyperlinks to OSC 8. Data is written
//! as-is.

use std::io;

use crate::color::palette_slot;
use crate::event::Event;
use crate::options::Options;
use crate::sink::Sink;

use super::Backend;

const CSI: &str = "\x1b[";
const OSC8: &str = "\x1b]8;;";

const FG_CODES: [&str; 16] = [
    "30", "31", "32", "33", "34", "35", "36", "37", //
    "90", "91", "92", "93", "94", "95", "96", "97",
];

const BG_CODES: [&str; 16] = [
    "40", "41", "42", "43", "44", "45", "46", "47", //
    "100", "101", "102", "103", "104", "105", "106", "107",
];

/// Renders events as ANSI escape sequences.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiBackend;

impl AnsiBackend {
    fn write_sgr(sink: &mut dyn Sink, code: &str) -> io::Result<usize> {
        Ok(sink.write_text(CSI)? + sink.write_text(code)? + sink.write_char(b'm')?)
    }

    fn write_color(
        sink: &mut dyn Sink,
        table: &[&str; 16],
        color: Option<u8>,
    ) -> io::Result<usize> {
        match color {
            Some(index) => Self::write_sgr(sink, table[palette_slot(index)]),
            None => Ok(0),
        }
    }
}

impl Backend for AnsiBackend {
    fn name(&self) -> &'static str {
        "ansi"
    }

    #[rustfmt::skip]
    fn write_event(
        &self,
        options: &Options<'_>,
        sink: &mut dyn Sink,
        event: &Event<'_>,
    ) -> io::Result<usize> {
        match *event {
            Event::Start(_) | Event::End(_) => Ok(0),
            Event::Data(data)               => sink.write_bytes(data),
            Event::HeaderStart              => sink.write_text("\x1b[1;4m"),
            Event::HeaderEnd                => sink.write_text("\x1b[22;24m"),
            Event::BoldStart                => sink.write_text("\x1b[1m"),
            Event::BoldEnd                  => sink.write_text("\x1b[22m"),
            Event::ItalicStart              => sink.write_text("\x1b[3m"),
            Event::ItalicEnd                => sink.write_text("\x1b[23m"),
            Event::UnderlineStart           => sink.write_text("\x1b[4m"),
            Event::UnderlineEnd             => sink.write_text("\x1b[24m"),
            Event::StrikethroughStart       => sink.write_text("\x1b[9m"),
            Event::StrikethroughEnd         => sink.write_text("\x1b[29m"),
            Event::ReverseVideoStart        => sink.write_text("\x1b[7m"),
            Event::ReverseVideoEnd          => sink.write_text("\x1b[27m"),
            Event::AlternativeStart         => sink.write_text("\x1b[2m"),
            Event::AlternativeEnd           => sink.write_text("\x1b[22m"),
            Event::FgColorStart(color)      => Self::write_color(sink, &FG_CODES, color),
            Event::FgColorEnd               => sink.write_text("\x1b[39m"),
            Event::BgColorStart(color)      => Self::write_color(sink, &BG_CODES, color),
            Event::BgColorEnd               => sink.write_text("\x1b[49m"),
            // Erase-in-line paints the rest of the row with the current background.
            Event::BgLineStart(_)           => sink.write_text("\x1b[K"),
            Event::BgLineEnd                => Ok(0),
            Event::LinkStart(url)           => {
                Ok(sink.write_text(OSC8)?
                    + sink.write_bytes(url)?
                    + sink.write_text(options.terminator)?)
            }
            Event::LinkEnd                  => {
                Ok(sink.write_text(OSC8)? + sink.write_text(options.terminator)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ST;

    fn render(event: Event<'_>) -> Vec<u8> {
        let options = Options::new(&AnsiBackend);
        let mut out = Vec::new();
        let n = AnsiBackend.write_event(&options, &mut out, &event).unwrap();
        assert_eq!(n, out.len(), "reported length for {}", event.name());
        out
    }

    #[test]
    fn document_brackets_are_silent() {
        assert!(render(Event::Start(b"doc")).is_empty());
        assert!(render(Event::End(b"doc")).is_empty());
    }

    #[test]
    fn data_is_unescaped() {
        assert_eq!(render(Event::Data(b"<a & b>")), b"<a & b>");
    }

    #[test]
    fn style_pairs() {
        assert_eq!(render(Event::HeaderStart), b"\x1b[1;4m");
        assert_eq!(render(Event::HeaderEnd), b"\x1b[22;24m");
        assert_eq!(render(Event::BoldStart), b"\x1b[1m");
        assert_eq!(render(Event::BoldEnd), b"\x1b[22m");
        assert_eq!(render(Event::ItalicStart), b"\x1b[3m");
        assert_eq!(render(Event::ItalicEnd), b"\x1b[23m");
        assert_eq!(render(Event::UnderlineStart), b"\x1b[4m");
        assert_eq!(render(Event::UnderlineEnd), b"\x1b[24m");
        assert_eq!(render(Event::StrikethroughStart), b"\x1b[9m");
        assert_eq!(render(Event::StrikethroughEnd), b"\x1b[29m");
        assert_eq!(render(Event::ReverseVideoStart), b"\x1b[7m");
        assert_eq!(render(Event::ReverseVideoEnd), b"\x1b[27m");
        assert_eq!(render(Event::AlternativeStart), b"\x1b[2m");
        assert_eq!(render(Event::AlternativeEnd), b"\x1b[22m");
    }

    #[test]
    fn foreground_palette() {
        assert_eq!(render(Event::FgColorStart(Some(0))), b"\x1b[30m");
        assert_eq!(render(Event::FgColorStart(Some(7))), b"\x1b[37m");
        assert_eq!(render(Event::FgColorStart(Some(8))), b"\x1b[90m");
        assert_eq!(render(Event::FgColorStart(Some(15))), b"\x1b[97m");
        assert_eq!(render(Event::FgColorStart(Some(17))), b"\x1b[31m");
        assert!(render(Event::FgColorStart(None)).is_empty());
        assert_eq!(render(Event::FgColorEnd), b"\x1b[39m");
    }

    #[test]
    fn background_palette() {
        assert_eq!(render(Event::BgColorStart(Some(4))), b"\x1b[44m");
        assert_eq!(render(Event::BgColorStart(Some(12))), b"\x1b[104m");
        assert!(render(Event::BgColorStart(None)).is_empty());
        assert_eq!(render(Event::BgColorEnd), b"\x1b[49m");
    }

    #[test]
    fn line_fill() {
        assert_eq!(render(Event::BgLineStart(Some(2))), b"\x1b[K");
        assert_eq!(render(Event::BgLineStart(None)), b"\x1b[K");
        assert!(render(Event::BgLineEnd).is_empty());
    }

    #[test]
    fn links_use_configured_terminator() {
        assert_eq!(
            render(Event::LinkStart(b"http://a")),
            b"\x1b]8;;http://a\x07"
        );
        assert_eq!(render(Event::LinkEnd), b"\x1b]8;;\x07");

        let options = Options::new(&AnsiBackend).with_terminator(ST);
        let mut out = Vec::new();
        AnsiBackend
            .write_event(&options, &mut out, &Event::LinkStart(b"x"))
            .unwrap();
        assert_eq!(out, b"\x1b]8;;x\x1b\\");
    }
}
