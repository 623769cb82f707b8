use super::*;

use std::{fs, process};

use crate::filtering::InvalidSelectorPolicy;

#[test]
fn test_default() {
    assert_eq!(default().base_path, "/");
    assert_eq!(default().shell_context, "application-shell");
    assert!(default().page_selector.is_empty());
}

#[test]
fn test_load_files() {
    let dir = std::env::temp_dir().join(format!("ufe-config-test-{}", process::id()));
    fs::create_dir_all(&dir).unwrap();
    let first = dir.join("first.yaml");
    let second = dir.join("second.toml");
    fs::write(&first, "base-path: /portal/\ninvalid-selector: match-all\n").unwrap();
    fs::write(&second, "page-selector = \"env=prod\"\n").unwrap();

    let settings = at([&first, &second]).no_default(true).load().unwrap();
    fs::remove_dir_all(&dir).ok();

    assert_eq!(settings.base_path, "/portal/");
    assert_eq!(settings.invalid_selector, InvalidSelectorPolicy::MatchAll);
    assert_eq!(settings.page_selector.to_string(), "env=prod");
    assert_eq!(settings.shell_context, "application-shell");
}

#[test]
fn test_load_missing_file() {
    assert!(at(["missing.yaml"]).no_default(true).load().is_err());
}

#[test]
fn test_global() {
    assert_eq!(global::get().base_path, "/");
}
