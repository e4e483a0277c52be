use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rheo_diagnostic::{render, ErrorCode};
use rheo_ir::SourceManager;

use crate::char_class;

fn file() -> FileId {
    FileId::from_raw(0)
}

fn lex_all(text: &str) -> (Vec<Token<'_>>, DiagnosticEngine) {
    let mut engine = DiagnosticEngine::new();
    let tokens = lex(file(), text, &mut engine);
    (tokens, engine)
}

fn kinds(text: &str) -> Vec<TokenKind> {
    lex_all(text).0.iter().map(|t| t.kind).collect()
}

fn pairs(text: &str) -> Vec<(TokenKind, &str)> {
    lex_all(text).0.iter().map(|t| (t.kind, t.text)).collect()
}

// === Scenarios ===

#[test]
fn test_function_header() {
    let (tokens, engine) = lex_all("func main() -> Int { return 1399 }");
    let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::Func, "func"),
            (TokenKind::Identifier, "main"),
            (TokenKind::LParen, "("),
            (TokenKind::RParen, ")"),
            (TokenKind::Arrow, "->"),
            (TokenKind::Int, "Int"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::IntLiteral, "1399"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Eof, ""),
        ]
    );
    assert!(engine.is_empty());
    assert_eq!(tokens[8].span, Span::new(28, 32));
}

#[test]
fn test_malformed_float_reports_once() {
    let (tokens, engine) = lex_all("1.2.3");
    assert_eq!(tokens[0].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[0].text, "1.2");
    assert_eq!(tokens[0].span, Span::new(0, 3));

    assert_eq!(engine.len(), 1);
    let diag = &engine.diagnostics()[0];
    assert_eq!(diag.code, Some(ErrorCode::E0002));
    assert_eq!(diag.message, "malformed float literal `1.2.3`");
    assert_eq!(diag.primary_span(), Some(Span::new(3, 4)));
    assert_eq!(diag.help.as_deref(), Some("use `1.2` or `1.23`"));
}

#[test]
fn test_malformed_float_tail_is_relexed() {
    assert_eq!(
        pairs("1.2.3"),
        vec![
            (TokenKind::FloatLiteral, "1.2"),
            (TokenKind::Dot, "."),
            (TokenKind::IntLiteral, "3"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn test_at_sign_is_unexpected() {
    let (tokens, engine) = lex_all("@");
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].span, Span::new(0, 1));
    assert_eq!(engine.len(), 1);

    let diag = &engine.diagnostics()[0];
    assert_eq!(diag.code, Some(ErrorCode::E0001));
    assert_eq!(diag.message, "unexpected character '@'");
    assert!(diag.help.as_deref().is_some_and(|h| h.contains("remove '@'")));
}

#[test]
fn test_empty_input() {
    let (tokens, engine) = lex_all("");
    assert_eq!(tokens, vec![Token::eof(0)]);
    assert!(engine.is_empty());
}

// === Eof and iteration ===

#[test]
fn test_eof_is_a_fixed_point() {
    let mut engine = DiagnosticEngine::new();
    let mut lexer = Lexer::new(file(), "x  ", &mut engine);
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        let eof = lexer.next_token();
        assert!(eof.is_eof());
        assert_eq!(eof.span, Span::point(3));
    }
    assert_eq!(lexer.position(), 3);
}

#[test]
fn test_iterator_stops_after_eof() {
    let mut engine = DiagnosticEngine::new();
    let mut lexer = Lexer::new(file(), "a b", &mut engine);
    assert_eq!(lexer.by_ref().count(), 3);
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

#[test]
fn test_diagnostics_accessor_shares_the_engine() {
    let mut engine = DiagnosticEngine::new();
    {
        let mut lexer = Lexer::new(file(), "@", &mut engine);
        assert_eq!(lexer.file(), file());
        lexer.next_token();
        assert_eq!(lexer.diagnostics().len(), 1);
        lexer
            .diagnostics()
            .emit(rheo_diagnostic::Diagnostic::error("expected expression"));
    }
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.diagnostics()[1].message, "expected expression");
}

// === Whitespace and newlines ===

#[test]
fn test_newlines_are_tokens() {
    let (tokens, _) = lex_all("a\n\tb\r\nc");
    let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.span)).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::Identifier, Span::new(0, 1)),
            (TokenKind::NewLine, Span::new(1, 2)),
            (TokenKind::Identifier, Span::new(3, 4)),
            (TokenKind::NewLine, Span::new(5, 6)),
            (TokenKind::Identifier, Span::new(6, 7)),
            (TokenKind::Eof, Span::point(7)),
        ]
    );
}

#[test]
fn test_vertical_tab_and_form_feed_are_skipped() {
    assert_eq!(
        kinds("\x0Ba\x0C"),
        vec![TokenKind::Identifier, TokenKind::Eof]
    );
}

// === Operators ===

#[test]
fn test_all_punctuation() {
    let got = kinds("( ) { } [ ] , : ; . -> + - * / % = == ! != < <= > >= && ||");
    assert_eq!(
        got,
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Comma,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Dot,
            TokenKind::Arrow,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::AndAnd,
            TokenKind::OrOr,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_longest_match_without_spaces() {
    assert_eq!(
        pairs("a->b<=c===d"),
        vec![
            (TokenKind::Identifier, "a"),
            (TokenKind::Arrow, "->"),
            (TokenKind::Identifier, "b"),
            (TokenKind::LessEqual, "<="),
            (TokenKind::Identifier, "c"),
            (TokenKind::EqualEqual, "=="),
            (TokenKind::Equal, "="),
            (TokenKind::Identifier, "d"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn test_lone_ampersand_and_pipe_are_errors() {
    let (tokens, engine) = lex_all("a & b | c &&&");
    let got: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        got,
        vec![
            TokenKind::Identifier,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::Error,
            TokenKind::Identifier,
            TokenKind::AndAnd,
            TokenKind::Error,
            TokenKind::Eof,
        ]
    );
    let messages: Vec<_> = engine.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "unexpected character '&'",
            "unexpected character '|'",
            "unexpected character '&'",
        ]
    );
    assert!(engine.iter().all(|d| d.help.is_none()));
}

#[test]
fn test_hash_help() {
    let (_, engine) = lex_all("#include");
    assert_eq!(engine.len(), 1);
    assert_eq!(
        engine.diagnostics()[0].help.as_deref(),
        Some("remove '#' or start a preprocessor directive if supported")
    );
}

#[test]
fn test_non_ascii_error_spans_whole_character() {
    let (tokens, engine) = lex_all("a€b");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].span, Span::new(1, 4));
    assert_eq!(tokens[1].text, "€");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(engine.diagnostics()[0].message, "unexpected character '€'");
}

#[test]
fn test_resilient_after_errors() {
    let (tokens, engine) = lex_all("@@ let x = 1");
    assert_eq!(engine.error_count(), 2);
    assert_eq!(tokens[2].kind, TokenKind::Let);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

// === Identifiers and keywords ===

#[test]
fn test_identifiers_and_keywords() {
    assert_eq!(
        pairs("_foo bar9 Int32x Int32 UInt64 Float64 true false"),
        vec![
            (TokenKind::Identifier, "_foo"),
            (TokenKind::Identifier, "bar9"),
            (TokenKind::Identifier, "Int32x"),
            (TokenKind::Int32, "Int32"),
            (TokenKind::UInt64, "UInt64"),
            (TokenKind::Float64, "Float64"),
            (TokenKind::True, "true"),
            (TokenKind::False, "false"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn test_control_keywords() {
    assert_eq!(
        kinds("let var if else while for in break continue struct"),
        vec![
            TokenKind::Let,
            TokenKind::Var,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::For,
            TokenKind::In,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Struct,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_digit_then_letters_splits() {
    assert_eq!(
        pairs("12ab"),
        vec![
            (TokenKind::IntLiteral, "12"),
            (TokenKind::Identifier, "ab"),
            (TokenKind::Eof, ""),
        ]
    );
}

// === Numbers ===

#[test]
fn test_trailing_dot_is_float() {
    let (tokens, engine) = lex_all("1. 2.50");
    assert_eq!(tokens[0].kind, TokenKind::FloatLiteral);
    assert_eq!(tokens[0].text, "1.");
    assert_eq!(tokens[1].text, "2.50");
    assert!(engine.is_empty());
}

#[test]
fn test_member_access_is_not_a_float() {
    let (tokens, engine) = lex_all("x.1");
    let got: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        got,
        vec![
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::IntLiteral,
            TokenKind::Eof
        ]
    );
    assert!(engine.is_empty());
}

#[test]
fn test_four_fragments_report_once() {
    let (tokens, engine) = lex_all("1.2.3.4");
    let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::FloatLiteral, "1.2"),
            (TokenKind::Dot, "."),
            (TokenKind::FloatLiteral, "3.4"),
            (TokenKind::Eof, ""),
        ]
    );
    assert_eq!(engine.len(), 1);
    let diag = &engine.diagnostics()[0];
    assert_eq!(diag.message, "malformed float literal `1.2.3.4`");
    assert_eq!(diag.help.as_deref(), Some("use `1.2` or `1.234`"));
}

#[test]
fn test_five_fragments_report_once() {
    let (tokens, engine) = lex_all("1.2.3.4.5");
    let got: Vec<_> = tokens.iter().map(|t| t.text).collect();
    assert_eq!(got, vec!["1.2", ".", "3.4", ".", "5", ""]);
    assert_eq!(engine.len(), 1);
    assert_eq!(
        engine.diagnostics()[0].help.as_deref(),
        Some("use `1.2` or `1.2345`")
    );
}

#[test]
fn test_trailing_extra_dot() {
    let (tokens, engine) = lex_all("1.2.");
    let got: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        got,
        vec![TokenKind::FloatLiteral, TokenKind::Dot, TokenKind::Eof]
    );
    assert_eq!(engine.len(), 1);
    let diag = &engine.diagnostics()[0];
    assert_eq!(diag.message, "malformed float literal `1.2.`");
    assert_eq!(
        diag.help.as_deref(),
        Some("remove the trailing `.` to write `1.2`")
    );
}

#[test]
fn test_double_dot_after_integer() {
    let (tokens, engine) = lex_all("1..2");
    let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::FloatLiteral, "1."),
            (TokenKind::Dot, "."),
            (TokenKind::IntLiteral, "2"),
            (TokenKind::Eof, ""),
        ]
    );
    assert_eq!(engine.len(), 1);
    let diag = &engine.diagnostics()[0];
    assert_eq!(diag.primary_span(), Some(Span::new(2, 3)));
    assert_eq!(diag.help.as_deref(), Some("use `1.` or `1.2`"));
}

#[test]
fn test_separate_malformed_floats_each_report() {
    let (_, engine) = lex_all("1.2.3 4.5.6");
    let spans: Vec<_> = engine.iter().filter_map(|d| d.primary_span()).collect();
    assert_eq!(spans, vec![Span::new(3, 4), Span::new(9, 10)]);
}

// === Rendering ===

#[test]
fn test_malformed_float_renders() {
    let mut sources = SourceManager::new();
    let id = sources.add_file("main.rheo", "1.2.3");
    let mut engine = DiagnosticEngine::new();
    let _ = lex(id, "1.2.3", &mut engine);

    assert_eq!(
        render(&engine.diagnostics()[0], &sources),
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

// === Properties ===

proptest! {
    #[test]
    fn prop_spans_ordered_and_disjoint(text in "[a-zA-Z0-9_ .@#&|()+*/=<>!\\-\n\t{}é€]{0,48}") {
        let (tokens, _) = lex_all(&text);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end() <= pair[1].span.start());
        }
        for token in &tokens {
            prop_assert_eq!(token.text, &text[token.span.to_range()]);
        }
    }

    #[test]
    fn prop_gaps_are_whitespace_and_rebuild_source(text in "[a-z0-9_ .@&|(){}=<>!\\-\n\t\r\x0B\x0Cé]{0,48}") {
        let (tokens, _) = lex_all(&text);
        let mut rebuilt = String::new();
        let mut prev = 0usize;
        for token in &tokens {
            let gap = &text[prev..token.span.start() as usize];
            prop_assert!(gap.bytes().all(char_class::is_whitespace), "gap {:?}", gap);
            rebuilt.push_str(gap);
            rebuilt.push_str(token.text);
            prev = token.span.end() as usize;
        }
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_exactly_one_eof_at_end(text in "\\PC{0,32}") {
        let (tokens, _) = lex_all(&text);
        let eofs = tokens.iter().filter(|t| t.is_eof()).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(tokens.last().map(|t| t.span.start() as usize), Some(text.len()));
    }
}
