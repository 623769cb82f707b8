use super::*;

#[test]
fn test_highlight_quoted() {
    assert_eq!("hello".hlq().to_string(), "\u{1b}[33m\"hello\"\u{1b}[0m");
    assert_eq!(Path::new("hello").hlq().to_string(), "\u{1b}[33m\"hello\"\u{1b}[0m");
    assert_eq!(String::from("a\"b").hlq().to_string(), "\u{1b}[33m\"a\\\"b\"\u{1b}[0m");
}

#[test]
fn test_caret() {
    let caret = Caret {
        text: "a && ",
        offset: 5,
    };
    let text = caret.to_string();
    assert!(text.starts_with("    a && \n         \u{1b}["), "{text:?}");
    assert!(text.contains('^'));

    let caret = Caret {
        text: "é & b",
        offset: 3,
    };
    assert!(caret.to_string().starts_with("    é & b\n      \u{1b}"));
}
