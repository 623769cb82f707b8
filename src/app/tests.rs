use super::*;
use assert_matches::assert_matches;

use crate::{
    filtering::InvalidSelectorPolicy,
    model::Catalog,
    registry::{self, Registry},
};

const CATALOG: &str = r#"{
    "preload": [
        {"load_url": "/modules/common.js", "styles": ["/css/common.css"]},
        {"load_url": "/modules/common.js"}
    ],
    "apps": [
        {
            "title": "Orders",
            "path": "orders",
            "priority": 1,
            "element": "orders-app",
            "load_url": "/modules/orders.js",
            "attributes": [{"name": "api", "value": "/api/orders"}],
            "labels": {"team": "sales", "env": "prod"}
        },
        {
            "title": "Admin",
            "path": "admin",
            "priority": 9,
            "element": "admin-app",
            "load_url": "/modules/admin.js",
            "labels": {"team": "infra", "env": "prod"}
        },
        {
            "title": "Sandbox",
            "path": "sandbox",
            "element": "sandbox-app",
            "load_url": "/modules/sandbox.js",
            "labels": {"team": "sales", "env": "dev"}
        }
    ],
    "contexts": [
        {"contextNames": ["application-shell"], "element": "corp-shell", "load_url": "/modules/shell.js"},
        {"contextNames": ["sidebar"], "element": "corp-links", "load_url": "/modules/links.js", "labels": {"env": "prod"}}
    ],
    "user": {"id": "jane@example.com", "name": "Jane", "roles": ["admin", "sales"]}
}"#;

fn registry() -> Registry {
    Registry::new(
        Catalog::from_slice(CATALOG.as_bytes(), "test").unwrap(),
        registry::Options {
            base_path: "/ui/".into(),
            ..Default::default()
        },
    )
}

fn run(options: Options) -> Result<String> {
    let mut output = Vec::new();
    App::new(options).run(&registry(), &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

fn options(list: ListKind, selectors: &[&str]) -> Options {
    Options {
        list,
        context: "application-shell".into(),
        selectors: selectors.iter().map(|s| s.to_string()).collect(),
        location: "/ui/orders/42".into(),
        ..Default::default()
    }
}

#[test]
fn test_list_apps() {
    assert_eq!(
        run(options(ListKind::Apps, &[])).unwrap(),
        "  Admin\t/ui/admin\n* Orders\t/ui/orders\n  Sandbox\t/ui/sandbox\n"
    );
}

#[test]
fn test_list_apps_narrowed() {
    assert_eq!(
        run(options(ListKind::Apps, &["team=sales", "env!=dev"])).unwrap(),
        "* Orders\t/ui/orders\n"
    );
}

#[test]
fn test_list_apps_html() {
    let options = Options {
        html: true,
        ..options(ListKind::Apps, &["team=sales"])
    };
    assert_eq!(
        run(options).unwrap(),
        "<orders-app api=\"/api/orders\"></orders-app>\n<sandbox-app></sandbox-app>\n"
    );
}

#[test]
fn test_list_apps_json() {
    let options = Options {
        output_format: OutputFormat::Json,
        ..options(ListKind::Apps, &["env=prod"])
    };
    let value: json::Value = json::from_str(&run(options).unwrap()).unwrap();
    assert_eq!(value[0]["title"], "Admin");
    assert_eq!(value[0]["isActive"], false);
    assert_eq!(value[1]["title"], "Orders");
    assert_eq!(value[1]["isActive"], true);
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[test]
fn test_list_contexts() {
    assert_eq!(run(options(ListKind::Contexts, &[])).unwrap(), "corp-shell\n");

    let options = Options {
        context: "sidebar".into(),
        ..options(ListKind::Contexts, &["env"])
    };
    assert_eq!(run(options).unwrap(), "corp-links\n");
}

#[test]
fn test_list_preload() {
    assert_eq!(
        run(options(ListKind::Preload, &[])).unwrap(),
        "style /css/common.css\nmodule /modules/common.js\n"
    );
}

#[test]
fn test_show_shell() {
    assert_eq!(run(options(ListKind::Shell, &[])).unwrap(), "corp-shell\n");

    let options = Options {
        context: "kiosk".into(),
        html: true,
        ..options(ListKind::Shell, &[])
    };
    assert_eq!(run(options).unwrap(), "<ufe-default-shell></ufe-default-shell>\n");
}

#[test]
fn test_show_user() {
    assert_eq!(
        run(options(ListKind::User, &[])).unwrap(),
        "jane@example.com (Jane)\nroles: admin, sales\n"
    );

    let mut output = Vec::new();
    let anonymous = Registry::new(Catalog::default(), registry::Options::default());
    App::new(options(ListKind::User, &[])).run(&anonymous, &mut output).unwrap();
    assert_eq!(output, b"anonymous\n");
}

#[test]
fn test_invalid_selector() {
    assert_matches!(run(options(ListKind::Apps, &["team=sales", "env=("])), Err(Error::Selector { text, .. }) if text == "env=(");

    let mut output = Vec::new();
    let registry = Registry::new(
        Catalog::from_slice(CATALOG.as_bytes(), "test").unwrap(),
        registry::Options {
            invalid_selector: InvalidSelectorPolicy::MatchAll,
            ..Default::default()
        },
    );
    App::new(options(ListKind::Contexts, &["&"])).run(&registry, &mut output).unwrap();
    assert_eq!(output, b"corp-shell\n");
}

#[test]
fn test_check() {
    let app = App::new(Options::default());
    let mut output = Vec::new();
    app.check("(a || b) && !(c = \"x y\")", &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "(a || b) && c!=\"x y\"\n");

    assert_matches!(app.check("a &&", &mut Vec::new()), Err(Error::Selector { .. }));
}

#[test]
fn test_list_apps_html_with_attributes() {
    let options = Options {
        html: true,
        attributes: vec![Attribute::new("api", "/other"), Attribute::new("theme", "dark")],
        ..options(ListKind::Apps, &["team=sales", "env=prod"])
    };
    assert_eq!(
        run(options).unwrap(),
        "<orders-app api=\"/api/orders\" theme=\"dark\"></orders-app>\n"
    );
}
