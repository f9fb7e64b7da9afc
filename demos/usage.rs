//! Renders a usage screen written in temaku markup.
//!
//! Run with: cargo run --example usage -- [--help | --export-usage | --html | <file>]
//!
//! Set `TEMAKU_LOG=<path>` to write scanner logs to a file.

use std::io::Write;

use temaku_rs::{BackendKind, Options, init_logger, markup, sink};

const USAGE: &str = "\
=USAGE
  _progname_ |--help|               You're looking at it!
  _progname_ |--version|            Print %F{blue}version%f and %F{BLUE}stuff%f
  _progname_ |--export-usage|       Showcase custom sinks
  _progname_ |--html|               Render this screen as HTML
  _progname_ |<file>|               Do the thing with the file
=OPTIONS
  |-florg|                        Enable the |florg| capability
  |-floop|                        Use |floop| /whenever possible/
  |-no-floop|                     Do *not* use |%Sfloop%s|
  |-red|                          It's %F{red}red%f!
  |-inverse|                      Enable %RInverse video%r!
=ABOUT
  See also %L{https://www.example.com/about}the website%l
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("TEMAKU_LOG") {
        init_logger(path, log::Level::Trace)?;
    }

    let arg = std::env::args().nth(1);
    match arg.as_deref() {
        None | Some("--help") => {
            markup(None, &mut sink::stderr(), USAGE)?;
        }
        Some("--export-usage") => {
            let mut file = sink::create_file("usage.txt")?;
            let options = Options::default().with_markup(false);
            markup(Some(&options), &mut file, USAGE)?;
            file.flush()?;
        }
        Some("--html") => {
            let options = Options::new(BackendKind::Html.backend());
            markup(Some(&options), &mut sink::stdout(), USAGE)?;
            println!();
        }
        Some(_) => {
            let options = Options::default().with_color(false).with_links(false);
            markup(Some(&options), &mut sink::stdout(), USAGE)?;
        }
    }
    Ok(())
}
