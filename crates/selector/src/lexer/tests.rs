use super::*;
use assert_matches::assert_matches;
use rstest::rstest;

use crate::TokenKind::*;

fn kinds(source: &str) -> Vec<TokenKind<'_>> {
    tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_empty() {
    assert_eq!(kinds(""), vec![End]);
    assert_eq!(kinds("  \t\n"), vec![End]);
}

#[test]
fn test_spans() {
    let tokens = tokenize("team = infra").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(Label("team"), Span::new(0, 4)),
            Token::new(Equals, Span::new(5, 6)),
            Token::new(Label("infra"), Span::new(7, 12)),
            Token::new(End, Span::new(12, 12)),
        ]
    );
}

#[rstest]
#[case("a", vec![Label("a"), End])] // 1
#[case("team=infra", vec![Label("team"), Equals, Label("infra"), End])] // 2
#[case("role!=admin", vec![Label("role"), NotEquals, Label("admin"), End])] // 3
#[case("!beta", vec![Not, Label("beta"), End])] // 4
#[case("a&&b||c", vec![Label("a"), And, Label("b"), Or, Label("c"), End])] // 5
#[case("(a)", vec![LParen, Label("a"), RParen, End])] // 6
#[case("app.kubernetes.io_name-1", vec![Label("app.kubernetes.io_name-1"), End])] // 7
#[case("v=1.2.3", vec![Label("v"), Equals, Label("1.2.3"), End])] // 8
#[case("! = !=", vec![Not, Equals, NotEquals, End])] // 9
#[case("a !b", vec![Label("a"), Not, Label("b"), End])] // 10
fn test_kinds(#[case] source: &str, #[case] expected: Vec<TokenKind<'static>>) {
    assert_eq!(kinds(source), expected);
}

#[rstest]
#[case(r#"status="disabled by owner""#, "disabled by owner")] // 1
#[case(r#"x="a && b || (c)""#, "a && b || (c)")] // 2
#[case(r#"x="""#, "")] // 3
#[case(r#"x="it's""#, "it's")] // 4
fn test_quoted(#[case] source: &str, #[case] expected: &str) {
    let tokens = kinds(source);
    assert_eq!(tokens[2], StringLiteral(expected));
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_quoted_span_includes_quotes() {
    let tokens = tokenize(r#"a="b c""#).unwrap();
    assert_eq!(tokens[2].span, Span::new(2, 7));
}

#[rstest]
#[case("a & b", '&', 2)] // 1
#[case("a | b", '|', 2)] // 2
#[case("a == b?", '?', 6)] // 3
#[case("-a", '-', 0)] // 4
#[case("_a", '_', 0)] // 5
#[case("a=é", 'é', 2)] // 6
#[case("a,b", ',', 1)] // 7
fn test_unexpected_char(#[case] source: &str, #[case] ch: char, #[case] offset: usize) {
    assert_eq!(tokenize(source), Err(LexError::UnexpectedChar { ch, offset }));
}

#[test]
fn test_unterminated_literal() {
    assert_matches!(
        tokenize(r#"a="open && b"#),
        Err(LexError::UnterminatedLiteral { literal, offset: 2 }) if literal == r#""open && b"#
    );
}

#[test]
fn test_lexer_stops_after_error() {
    let mut lexer = Lexer::new("a $ b");
    assert_eq!(lexer.next(), Some(Ok(Token::new(Label("a"), Span::new(0, 1)))));
    assert_matches!(lexer.next(), Some(Err(LexError::UnexpectedChar { ch: '$', offset: 2 })));
    assert_eq!(lexer.next(), None);
}

#[test]
fn test_lexer_ends_once() {
    let mut lexer = Lexer::new("a");
    assert_matches!(lexer.next(), Some(Ok(Token { kind: Label("a"), .. })));
    assert_matches!(lexer.next(), Some(Ok(Token { kind: End, .. })));
    assert_eq!(lexer.next(), None);
}
