//! Catalog of micro-frontend modules, applications and context elements,
//! as served by the controller in its configuration document.

// std imports
use std::{collections::BTreeMap, fs, io::Read, path::Path};

// third-party imports
use derive_more::Deref;
use selector::Labels;
use serde::{Deserialize, Serialize};

// local imports
use crate::error::{Error, Result};

// ---

/// Loadable unit: a script module plus optional stylesheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// URL from which the module can be loaded.
    #[serde(default)]
    pub load_url: String,
    /// Stylesheet URLs to load together with the module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<Vec<String>>,
}

// ---

/// Web component that can be placed into a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Deref)]
pub struct Element {
    #[deref]
    #[serde(flatten)]
    pub module: Module,
    /// Tag name of the element.
    pub element: String,
    /// Attributes applied when the element is rendered.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Labels used by selectors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    /// Roles of users that shall see this element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

impl Labels for Element {
    #[inline]
    fn label(&self, name: &str) -> Option<&str> {
        self.labels.label(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: json::Value,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<json::Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

// ---

/// Navigable micro application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Deref)]
pub struct WebApp {
    #[deref]
    #[serde(flatten)]
    pub element: Element,
    pub title: String,
    #[serde(default)]
    pub details: String,
    /// Location at which the application is served, relative to the base path.
    pub path: String,
    /// Higher priority apps are listed first.
    #[serde(default)]
    pub priority: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Labels for WebApp {
    #[inline]
    fn label(&self, name: &str) -> Option<&str> {
        self.element.label(name)
    }
}

// ---

/// Element placed into named contexts of a page, e.g. the application shell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Deref)]
pub struct ContextElement {
    #[deref]
    #[serde(flatten)]
    pub element: Element,
    #[serde(rename = "contextNames", default)]
    pub context_names: Vec<String>,
}

impl ContextElement {
    pub const DEFAULT_SHELL: &'static str = "ufe-default-shell";

    /// Shell used when the catalog provides none for the shell context.
    pub fn default_shell() -> Self {
        Self {
            element: Element {
                element: Self::DEFAULT_SHELL.into(),
                roles: Some(vec!["*".into()]),
                ..Default::default()
            },
            context_names: Vec::new(),
        }
    }

    pub fn in_context(&self, context: &str) -> bool {
        self.context_names.iter().any(|name| name == context)
    }
}

impl Labels for ContextElement {
    #[inline]
    fn label(&self, name: &str) -> Option<&str> {
        self.element.label(name)
    }
}

// ---

/// Identity of the signed-in user as provided by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

// ---

/// Configuration document describing everything the registry knows about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Modules loaded up front regardless of the active application.
    pub preload: Vec<Module>,
    pub apps: Vec<WebApp>,
    pub contexts: Vec<ContextElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

impl Catalog {
    pub fn from_slice(data: &[u8], origin: &str) -> Result<Self> {
        json::from_slice(data).map_err(|source| Error::Catalog {
            origin: origin.into(),
            source,
        })
    }

    pub fn from_reader<R: Read>(mut reader: R, origin: &str) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_slice(&data, origin)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound { path: path.into() },
            _ => Error::Io(e),
        })?;
        log::debug!("loaded catalog from {} ({} bytes)", path.display(), data.len());
        Self::from_slice(&data, &path.to_string_lossy())
    }
}

#[cfg(test)]
mod tests;
