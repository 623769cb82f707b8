use super::*;
use assert_matches::assert_matches;

use crate::error::Error;

#[test]
fn test_embedded_defaults() {
    let settings = Settings::load(Vec::<Source>::new()).unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.page_selector.is_empty());
}

#[test]
fn test_overrides() {
    let settings = Settings::load([Source::String(
        "page-selector: env=prod && !experimental\ninvalid-selector: match-none\n".into(),
        FileFormat::Yaml,
    )])
    .unwrap();

    assert_eq!(settings.page_selector, Selector::parse("env=prod && !experimental").unwrap());
    assert_eq!(settings.invalid_selector, InvalidSelectorPolicy::MatchNone);
    assert_eq!(settings.base_path, "/");
    assert_eq!(settings.shell_context, "application-shell");
}

#[test]
fn test_later_sources_win() {
    let settings = Settings::load([
        Source::String(r#"{"base-path": "/a/"}"#.into(), FileFormat::Json),
        Source::String("base-path = \"/b/\"\n".into(), FileFormat::Toml),
    ])
    .unwrap();
    assert_eq!(settings.base_path, "/b/");
}

#[test]
fn test_invalid_page_selector() {
    let result = Settings::load([Source::String("page-selector: 'env=(prod'\n".into(), FileFormat::Yaml)]);
    assert_matches!(result, Err(Error::Config(_)));
}

#[test]
fn test_missing_file() {
    let missing = SourceFile::new("does/not/exist.yaml");
    assert_matches!(Settings::load([missing.clone().into()]), Err(Error::Config(_)));
    assert_eq!(Settings::load([missing.required(false).into()]).unwrap(), Settings::default());
}
