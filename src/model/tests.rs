use super::*;
use assert_matches::assert_matches;

const CATALOG: &str = r#"{
    "preload": [{"load_url": "/modules/common.js", "styles": ["/css/common.css"]}],
    "apps": [
        {
            "title": "Orders",
            "details": "Order management",
            "path": "orders",
            "priority": 2,
            "icon": "/icons/orders.svg",
            "element": "orders-app",
            "load_url": "/modules/orders.js",
            "attributes": [{"name": "api", "value": "/api/orders"}, {"name": "page-size", "value": 20}],
            "labels": {"team": "sales", "canary": ""}
        },
        {
            "title": "Inventory",
            "path": "/inventory",
            "element": "inventory-app",
            "load_url": "/modules/inventory.js"
        }
    ],
    "contexts": [
        {
            "contextNames": ["application-shell"],
            "element": "corp-shell",
            "load_url": "/modules/shell.js",
            "attributes": []
        }
    ],
    "anonymous": false,
    "user": {"id": "jane@example.com", "name": "Jane", "roles": ["admin"]}
}"#;

#[test]
fn test_parse_catalog() {
    let catalog = Catalog::from_slice(CATALOG.as_bytes(), "test").unwrap();

    assert_eq!(catalog.preload.len(), 1);
    assert_eq!(catalog.preload[0].styles, Some(vec!["/css/common.css".to_string()]));

    let orders = &catalog.apps[0];
    assert_eq!(orders.title, "Orders");
    assert_eq!(orders.priority, 2.0);
    assert_eq!(orders.element.element, "orders-app");
    assert_eq!(orders.load_url, "/modules/orders.js");
    assert_eq!(orders.attributes[1], Attribute::new("page-size", 20));
    assert_eq!(orders.label("team"), Some("sales"));
    assert_eq!(orders.label("canary"), Some(""));
    assert_eq!(orders.label("missing"), None);

    let inventory = &catalog.apps[1];
    assert_eq!(inventory.priority, 0.0);
    assert_eq!(inventory.details, "");
    assert!(inventory.attributes.is_empty());
    assert_eq!(inventory.labels, None);
    assert_eq!(inventory.label("team"), None);

    let shell = &catalog.contexts[0];
    assert!(shell.in_context("application-shell"));
    assert!(!shell.in_context("application"));

    assert_eq!(catalog.anonymous, Some(false));
    assert_eq!(catalog.user.as_ref().map(|u| u.id.as_str()), Some("jane@example.com"));
}

#[test]
fn test_empty_catalog() {
    let catalog = Catalog::from_slice(b"{}", "test").unwrap();
    assert_eq!(catalog, Catalog::default());
}

#[test]
fn test_invalid_catalog() {
    let result = Catalog::from_slice(br#"{"apps": 1}"#, "inline");
    assert_matches!(result, Err(Error::Catalog { origin, .. }) if origin == "inline");
}

#[test]
fn test_from_reader() {
    let catalog = Catalog::from_reader(CATALOG.as_bytes(), "stdin").unwrap();
    assert_eq!(catalog.apps.len(), 2);
}

#[test]
fn test_load_missing_file() {
    let result = Catalog::load(Path::new("definitely/not/here.json"));
    assert_matches!(result, Err(Error::FileNotFound { .. }));
}

#[test]
fn test_default_shell() {
    let shell = ContextElement::default_shell();
    assert_eq!(shell.element.element, "ufe-default-shell");
    assert_eq!(shell.load_url, "");
    assert_eq!(shell.roles, Some(vec!["*".to_string()]));
}

#[test]
fn test_serialize_skips_absent() {
    let module = Module {
        load_url: "/m.js".into(),
        styles: None,
    };
    assert_eq!(json::to_string(&module).unwrap(), r#"{"load_url":"/m.js"}"#);
}
