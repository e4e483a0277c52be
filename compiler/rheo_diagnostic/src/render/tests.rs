use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;
use rheo_ir::{FileId, Span};

fn sources_with(name: &str, text: &str) -> (SourceManager, FileId) {
    let mut sources = SourceManager::new();
    let id = sources.add_file(name, text);
    (sources, id)
}

fn malformed_float(file: FileId) -> Diagnostic {
    Diagnostic::error("malformed float literal `1.2.3`")
        .with_code(ErrorCode::E0002)
        .with_label(
            file,
            Span::new(3, 4),
            "a number literal can have only one decimal point",
        )
        .with_help("use `1.2` or `1.23`")
}

#[test]
fn test_render_primary_label() {
    let (sources, id) = sources_with("main.rheo", "1.2.3");
    assert_eq!(
        render(&malformed_float(id), &sources),
        "\
error[E0002]: malformed float literal `1.2.3`
  --> main.rheo:1:4
   |
 1 | 1.2.3
   |    ^
   |    a number literal can have only one decimal point
   = help: use `1.2` or `1.23`
"
    );
}

#[test]
fn test_render_is_deterministic() {
    let (sources, id) = sources_with("main.rheo", "1.2.3");
    let diag = malformed_float(id);
    let first = render(&diag, &sources);
    let second = render(&diag, &sources);
    assert_eq!(first, second);
    assert_eq!(render_colored(&diag, &sources), render_colored(&diag, &sources));
}

#[test]
fn test_render_multi_char_underline_and_secondary_label() {
    let (sources, id) = sources_with("lib.rheo", "let x = 1\nlet x = 2");
    let diag = Diagnostic::warning("`x` is declared twice")
        .with_secondary_label(id, Span::new(4, 5), "first declared here")
        .with_label(id, Span::new(10, 19), "redeclared here");
    assert_eq!(
        render(&diag, &sources),
        "\
warning: `x` is declared twice
  ::: lib.rheo:1:5
   |
 1 | let x = 1
   |     -
   |     first declared here
  --> lib.rheo:2:1
   |
 2 | let x = 2
   | ^^^^^^^^^
   | redeclared here
"
    );
}

#[test]
fn test_render_gutter_grows_with_line_number() {
    let text = "x\n".repeat(11) + "@";
    let (sources, id) = sources_with("wide.rheo", &text);
    let diag = Diagnostic::error("unexpected character '@'")
        .with_code(ErrorCode::E0001)
        .with_label(id, Span::new(22, 23), "unexpected character");
    assert_eq!(
        render(&diag, &sources),
        "\
error[E0001]: unexpected character '@'
   --> wide.rheo:12:1
    |
 12 | @
    | ^
    | unexpected character
"
    );
}

#[test]
fn test_render_skips_unknown_file() {
    let (sources, id) = sources_with("main.rheo", "1.2.3");
    let mut diag = malformed_float(id);
    diag.add_label(Label::secondary(FileId::from_raw(9), Span::new(0, 1)).with_message("gone"));
    let text = render(&diag, &sources);
    assert!(!text.contains("gone"));
    assert!(text.contains("main.rheo:1:4"));
}

#[test]
fn test_render_without_labels_or_help() {
    let sources = SourceManager::new();
    let diag = Diagnostic::note("compilation finished");
    assert_eq!(render(&diag, &sources), "note: compilation finished\n");
}

#[test]
fn test_render_empty_span_gets_one_caret() {
    let (sources, id) = sources_with("main.rheo", "func");
    let diag = Diagnostic::error("expected `(`").with_label(id, Span::point(4), "here");
    assert_eq!(
        render(&diag, &sources),
        "\
error: expected `(`
  --> main.rheo:1:5
   |
 1 | func
   |     ^
   |     here
"
    );
}

#[test]
fn test_render_keeps_tabs_in_padding() {
    let (sources, id) = sources_with("tabs.rheo", "\tx @");
    let diag = Diagnostic::error("unexpected character '@'")
        .with_label(id, Span::new(3, 4), "unexpected character");
    let text = render(&diag, &sources);
    assert!(text.contains("   | \t  ^\n"), "got:\n{text}");
}

#[test]
fn test_render_strips_carriage_return() {
    let (sources, id) = sources_with("crlf.rheo", "a @\r\nb");
    let diag = Diagnostic::error("unexpected character '@'").with_label(id, Span::new(2, 3), "here");
    let text = render(&diag, &sources);
    assert!(text.contains(" 1 | a @\n"), "got:\n{text}");
    assert!(!text.contains('\r'));
}

#[test]
fn test_render_multibyte_character_single_caret() {
    let (sources, id) = sources_with("utf8.rheo", "é€");
    let diag = Diagnostic::error("unexpected character '€'").with_label(id, Span::new(2, 5), "here");
    let text = render(&diag, &sources);
    assert!(text.contains("   |  ^\n"), "got:\n{text}");
    assert!(text.contains("utf8.rheo:1:3"));
}

#[test]
fn test_render_multiline_span_clamps_to_first_line() {
    let (sources, id) = sources_with("main.rheo", "ab\ncd");
    let diag = Diagnostic::error("spans lines").with_label(id, Span::new(1, 5), "x");
    let text = render(&diag, &sources);
    assert!(text.contains("   |  ^\n"), "got:\n{text}");
}

#[test]
fn test_render_colored_contains_escapes() {
    let (sources, id) = sources_with("main.rheo", "1.2.3");
    let text = render_colored(&malformed_float(id), &sources);
    assert!(text.contains(colors::ERROR));
    assert!(text.contains(colors::RESET));
    assert!(text.contains("E0002"));
    assert!(!render(&malformed_float(id), &sources).contains('\x1b'));
}

#[test]
fn test_render_labels_across_files_share_gutter() {
    let mut sources = SourceManager::new();
    let a = sources.add_file("a.rheo", "let a = @");
    let b = sources.add_file("b.rheo", &("x\n".repeat(11) + "y = 1"));
    let diag = Diagnostic::error("unexpected character '@'")
        .with_code(ErrorCode::E0001)
        .with_label(a, Span::new(8, 9), "unexpected character")
        .with_secondary_label(b, Span::new(22, 23), "related here");
    assert_eq!(
        render(&diag, &sources),
        "\
error[E0001]: unexpected character '@'
   --> a.rheo:1:9
    |
  1 | let a = @
    |         ^
    |         unexpected character
   ::: b.rheo:12:1
    |
 12 | y = 1
    | -
    | related here
"
    );
}
