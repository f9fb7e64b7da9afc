//! Whole-document rendering through the reference backends.

use temaku::backend::{ANSI, HTML};
use temaku::{Backend, BackendKind, Event, Options, render_string};

const DOC: &str = "=USAGE\n  _prog_ |--help| %F{blue}v%f\n";

/// ANSI output with escapes made printable.
fn ansi(input: &str) -> String {
    render_string(&Options::new(&ANSI), input)
        .unwrap()
        .escape_debug()
        .to_string()
}

/// HTML output on a single line.
fn html(input: &str) -> String {
    render_string(&Options::new(&HTML), input)
        .unwrap()
        .replace('\n', "\\n")
}

// ============================================================================
// Documents
// ============================================================================

#[test]
fn ansi_document() {
    insta::assert_snapshot!(
        ansi(DOC),
        @r"\u{1b}[1;4mUSAGE\n\u{1b}[22;24m  \u{1b}[4mprog\u{1b}[24m \u{1b}[2m--help\u{1b}[22m \u{1b}[34mv\u{1b}[39m\n"
    );
}

#[test]
fn html_document() {
    insta::assert_snapshot!(
        html(DOC),
        @r#"<pre><h1>USAGE\n</h1>  <span style="text-decoration:underline">prog</span> <span style="color:#404040">--help</span> <span style="color:#006FB8">v</span>\n</pre>"#
    );
}

#[test]
fn html_escapes_text_but_not_markup() {
    insta::assert_snapshot!(
        html("*a<b>* & %L{http://x/?q=<1>}link%l"),
        @r#"<pre><span style="font-weight:bold">a&lt;b&gt;</span> &amp; <a href="http://x/?q=%3c1%3e">link</a></pre>"#
    );
}

#[test]
fn html_reverse_video_is_dropped() {
    insta::assert_snapshot!(html("%Rinv%r"), @"<pre>inv</pre>");
}

#[test]
fn ansi_bright_background_line() {
    insta::assert_snapshot!(
        ansi("%K{CYAN}%E status\nnext"),
        @r"\u{1b}[106m\u{1b}[K status\nnext"
    );
}

// ============================================================================
// Palettes
// ============================================================================

#[test]
fn ansi_palette_by_name() {
    let names = ["black", "red", "green", "yellow", "blue", "purple", "cyan", "white"];
    for (i, name) in names.iter().enumerate() {
        let normal = render_string(&Options::new(&ANSI), format!("%F{{{name}}}")).unwrap();
        assert_eq!(normal, format!("\x1b[{}m", 30 + i), "fg {}", name);

        let bright =
            render_string(&Options::new(&ANSI), format!("%K{{{}}}", name.to_uppercase())).unwrap();
        assert_eq!(bright, format!("\x1b[{}m", 100 + i), "bright bg {}", name);
    }
}

#[test]
fn html_palette_by_name() {
    let expected = [
        ("black", "#010101"),
        ("Black", "#808080"),
        ("green", "#39B54A"),
        ("GREEN", "#00FF00"),
        ("yellow", "#FFC706"),
        ("Yellow", "#FFFF00"),
        ("purple", "#762671"),
        ("PURPLE", "#FF00FF"),
        ("white", "#CCCCCC"),
        ("White", "#FFFFFF"),
    ];
    for (name, hex) in expected {
        let out = render_string(&Options::new(&HTML), format!("%F{{{name}}}%f")).unwrap();
        assert_eq!(
            out,
            format!("<pre><span style=\"color:{hex}\"></span></pre>"),
            "color {}",
            name
        );
    }
}

// ============================================================================
// Backend Selection
// ============================================================================

#[test]
fn backend_kind_selects_reference_backend() {
    let kind: BackendKind = "html".parse().unwrap();
    let options = Options::new(kind.backend());
    assert_eq!(render_string(&options, "x").unwrap(), "<pre>x</pre>");
    assert_eq!(BackendKind::Ansi.backend().name(), ANSI.name());
}

#[test]
fn backends_agree_on_silent_events() {
    for backend in [&ANSI as &dyn Backend, &HTML] {
        let options = Options::new(backend);
        let mut out = Vec::new();
        let n = backend
            .write_event(&options, &mut out, &Event::FgColorStart(None))
            .unwrap();
        assert_eq!(n, 0, "{}", backend.name());
        assert!(out.is_empty());
    }
}
