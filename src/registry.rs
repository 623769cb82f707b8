//! Registry queries over a loaded catalog.

// std imports
use std::{borrow::Cow, fmt};

// third-party imports
use derive_more::Deref;
use itertools::Itertools;
use selector::{Labels, Selector};
use serde::Serialize;

// local imports
use crate::{
    error::Result,
    filtering::{InvalidSelectorPolicy, SelectorFilter},
    model::{Attribute, Catalog, ContextElement, Element, Module, UserInfo, WebApp},
};

// ---

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Path at which the application shell is served.
    pub base_path: String,
    /// Selector applied to every listing before the call-site selector.
    pub page_selector: Selector,
    pub invalid_selector: InvalidSelectorPolicy,
}

// ---

/// Registry of micro-frontend elements described by a [`Catalog`].
#[derive(Debug, Clone)]
pub struct Registry {
    catalog: Catalog,
    base_path: String,
    filter: SelectorFilter,
}

impl Registry {
    pub fn new(catalog: Catalog, options: Options) -> Self {
        let base_path = normalize_base_path(&options.base_path);
        log::debug!(
            "registry: {} apps, {} contexts, base path {base_path:?}, page selector {:?}",
            catalog.apps.len(),
            catalog.contexts.len(),
            options.page_selector.to_string(),
        );
        Self {
            catalog,
            base_path,
            filter: SelectorFilter::new(options.page_selector, options.invalid_selector),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Base path, always starting and ending with `/`.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Prefixes `path` with the base path.
    pub fn rebase_path(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}{}", self.base_path, path)
    }

    /// Keeps the elements matching both the page selector and `selector`.
    pub fn filter_elements<'a, T>(&self, elements: &'a [T], selector: &str) -> Result<Vec<&'a T>>
    where
        T: Labels,
    {
        self.filter.apply(elements, selector)
    }

    /// Narrows a listing down with one more call-site selector.
    pub fn refine<T>(&self, entries: Vec<T>, selector: &str) -> Result<Vec<T>>
    where
        T: Labels,
    {
        self.filter.refine(entries, selector)
    }

    /// Lists applications matching `selector`, highest priority first.
    ///
    /// An application is active when `location` lies under its rebased path.
    pub fn navigable_apps(&self, selector: &str, location: &str) -> Result<Vec<NavigableApp<'_>>> {
        let mut apps = self.filter_elements(&self.catalog.apps, selector)?;
        apps.sort_by(|a, b| b.priority.total_cmp(&a.priority));
        Ok(apps
            .into_iter()
            .map(|app| NavigableApp {
                app,
                is_active: location.starts_with(&self.rebase_path(&app.path)),
            })
            .collect())
    }

    /// Lists context elements matching `selector` that belong to `context`.
    pub fn context_elements(&self, context: &str, selector: &str) -> Result<Vec<&ContextElement>> {
        Ok(self
            .filter_elements(&self.catalog.contexts, selector)?
            .into_iter()
            .filter(|element| element.in_context(context))
            .collect())
    }

    /// Resolves the element hosting the whole page for the given shell context.
    pub fn app_shell(&self, context: &str) -> Result<Cow<'_, ContextElement>> {
        Ok(match self.context_elements(context, "")?.into_iter().next() {
            Some(shell) => Cow::Borrowed(shell),
            None => {
                log::debug!("no shell registered for context {context:?}, using default");
                Cow::Owned(ContextElement::default_shell())
            }
        })
    }

    /// Dependencies to load before the catalog is usable.
    pub fn preload_plan(&self) -> DependencyPlan<'_> {
        DependencyPlan::new(&self.catalog.preload)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.catalog.user.as_ref().map(|user| user.id.as_str())
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.catalog.user.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.catalog.anonymous.unwrap_or(self.catalog.user.is_none())
    }
}

fn normalize_base_path(path: &str) -> String {
    let mut result = String::with_capacity(path.len() + 2);
    if !path.starts_with('/') {
        result.push('/');
    }
    result.push_str(path);
    if !result.ends_with('/') {
        result.push('/');
    }
    result
}

// ---

/// Application listed by [`Registry::navigable_apps`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deref)]
pub struct NavigableApp<'a> {
    #[deref]
    #[serde(flatten)]
    pub app: &'a WebApp,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Labels for NavigableApp<'_> {
    #[inline]
    fn label(&self, name: &str) -> Option<&str> {
        self.app.label(name)
    }
}

// ---

/// Stylesheets to link in module order and script modules to load once each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyPlan<'a> {
    pub styles: Vec<&'a str>,
    pub modules: Vec<&'a str>,
}

impl<'a> DependencyPlan<'a> {
    pub fn new<I, M>(modules: I) -> Self
    where
        I: IntoIterator<Item = &'a M>,
        M: AsRef<Module> + 'a,
    {
        let modules = modules.into_iter().map(AsRef::as_ref).collect_vec();
        Self {
            styles: modules
                .iter()
                .copied()
                .flat_map(|m| m.styles.iter().flatten())
                .map(String::as_str)
                .collect(),
            modules: modules
                .iter()
                .copied()
                .map(|m| m.load_url.as_str())
                .filter(|url| !url.is_empty())
                .unique()
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.modules.is_empty()
    }
}

impl AsRef<Module> for Module {
    fn as_ref(&self) -> &Module {
        self
    }
}

impl AsRef<Module> for Element {
    fn as_ref(&self) -> &Module {
        &self.module
    }
}

impl AsRef<Module> for WebApp {
    fn as_ref(&self) -> &Module {
        &self.element.module
    }
}

impl AsRef<Module> for ContextElement {
    fn as_ref(&self) -> &Module {
        &self.element.module
    }
}

// ---

/// HTML text of an element with its configured attributes, e.g.
/// `<orders-app api="/api/orders"></orders-app>`.
pub fn element_html_text(element: &Element) -> String {
    HtmlText::new(element).to_string()
}

/// HTML text of an element with `extra` attributes added after the configured
/// ones. Configured attributes win over extra ones with the same name.
pub fn element_html_text_with(element: &Element, extra: &[Attribute]) -> String {
    HtmlText::new(element).with_extra(extra).to_string()
}

pub struct HtmlText<'a> {
    element: &'a Element,
    extra: &'a [Attribute],
}

impl<'a> HtmlText<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self { element, extra: &[] }
    }

    pub fn with_extra(self, extra: &'a [Attribute]) -> Self {
        Self { extra, ..self }
    }

    fn attributes(&self) -> impl Iterator<Item = &'a Attribute> {
        let configured: &'a [Attribute] = &self.element.attributes;
        let extra = self.extra;
        let added = extra
            .iter()
            .enumerate()
            .filter(move |(i, a)| {
                let seen = |b: &Attribute| b.name == a.name;
                !configured.iter().any(seen) && !extra[..*i].iter().any(seen)
            })
            .map(|(_, a)| a);
        configured.iter().chain(added)
    }
}

impl fmt::Display for HtmlText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = &self.element.element;
        write!(f, "<{tag}")?;
        for attribute in self.attributes() {
            write!(f, " {}=\"", attribute.name)?;
            match &attribute.value {
                json::Value::String(value) => write_escaped(f, value)?,
                value => write_escaped(f, &value.to_string())?,
            }
            f.write_str("\"")?;
        }
        write!(f, "></{tag}>")
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let mut rest = value;
    while let Some(i) = rest.find(['&', '"']) {
        f.write_str(&rest[..i])?;
        f.write_str(match rest.as_bytes()[i] {
            b'&' => "&amp;",
            _ => "&quot;",
        })?;
        rest = &rest[i + 1..];
    }
    f.write_str(rest)
}
