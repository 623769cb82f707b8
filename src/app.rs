// std imports
use std::io::Write;

// third-party imports
use selector::{Labels, Selector};
use serde::Serialize;

// local imports
use crate::{
    error::*,
    model::{Attribute, ContextElement, Element, UserInfo},
    registry::{DependencyPlan, NavigableApp, Registry, element_html_text_with},
};

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    #[default]
    Apps,
    Contexts,
    Preload,
    Shell,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub list: ListKind,
    /// Context listed by [`ListKind::Contexts`] and resolved by [`ListKind::Shell`].
    pub context: String,
    /// Call-site selectors, each one narrowing the result of the previous.
    pub selectors: Vec<String>,
    pub location: String,
    pub html: bool,
    /// Attributes added to rendered elements unless configured by the catalog.
    pub attributes: Vec<Attribute>,
    pub output_format: OutputFormat,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn run<W: Write>(&self, registry: &Registry, output: &mut W) -> Result<()> {
        log::debug!("listing {:?} with selectors {:?}", self.options.list, self.options.selectors);

        match self.options.list {
            ListKind::Apps => self.list_apps(registry, output),
            ListKind::Contexts => self.list_contexts(registry, output),
            ListKind::Preload => self.list_preload(registry.preload_plan(), output),
            ListKind::Shell => self.show_shell(registry, output),
            ListKind::User => self.show_user(registry, output),
        }
    }

    /// Parses `text` and writes its canonical form.
    pub fn check<W: Write>(&self, text: &str, output: &mut W) -> Result<()> {
        let selector = Selector::parse(text).map_err(|e| Error::selector(text, e))?;
        match self.options.output_format {
            OutputFormat::Text => writeln!(output, "{selector}")?,
            OutputFormat::Json => self.write_json(&selector, output)?,
        }
        Ok(())
    }

    fn list_apps<W: Write>(&self, registry: &Registry, output: &mut W) -> Result<()> {
        let (first, rest) = self.call_site();
        let apps = self.narrow(registry, registry.navigable_apps(first, &self.options.location)?, rest)?;

        if self.options.html {
            return self.write_html(apps.iter().map(|app| &app.app.element), output);
        }

        match self.options.output_format {
            OutputFormat::Json => self.write_json(&apps, output),
            OutputFormat::Text => {
                for app in &apps {
                    self.write_app(registry, app, output)?;
                }
                Ok(())
            }
        }
    }

    fn list_contexts<W: Write>(&self, registry: &Registry, output: &mut W) -> Result<()> {
        let (first, rest) = self.call_site();
        let elements = registry.context_elements(&self.options.context, first)?;
        let elements = self.narrow(registry, elements, rest)?;

        if self.options.html {
            return self.write_html(elements.iter().map(|e| &e.element), output);
        }

        match self.options.output_format {
            OutputFormat::Json => self.write_json(&elements, output),
            OutputFormat::Text => {
                for element in elements {
                    writeln!(output, "{}", element.element.element)?;
                }
                Ok(())
            }
        }
    }

    fn list_preload<W: Write>(&self, plan: DependencyPlan<'_>, output: &mut W) -> Result<()> {
        match self.options.output_format {
            OutputFormat::Json => self.write_json(&plan, output),
            OutputFormat::Text => {
                for style in &plan.styles {
                    writeln!(output, "style {style}")?;
                }
                for module in &plan.modules {
                    writeln!(output, "module {module}")?;
                }
                Ok(())
            }
        }
    }

    fn show_shell<W: Write>(&self, registry: &Registry, output: &mut W) -> Result<()> {
        let shell = registry.app_shell(&self.options.context)?;
        let shell: &ContextElement = &shell;

        if self.options.html {
            return self.write_html([&shell.element], output);
        }

        match self.options.output_format {
            OutputFormat::Json => self.write_json(shell, output),
            OutputFormat::Text => Ok(writeln!(output, "{}", shell.element.element)?),
        }
    }

    fn show_user<W: Write>(&self, registry: &Registry, output: &mut W) -> Result<()> {
        match self.options.output_format {
            OutputFormat::Json => self.write_json(
                &UserSummary {
                    anonymous: registry.is_anonymous(),
                    user: registry.user_info(),
                },
                output,
            ),
            OutputFormat::Text => {
                match registry.user_info() {
                    Some(user) if !registry.is_anonymous() => {
                        writeln!(output, "{} ({})", user.id, user.name)?;
                        if !user.roles.is_empty() {
                            writeln!(output, "roles: {}", user.roles.join(", "))?;
                        }
                    }
                    _ => writeln!(output, "anonymous")?,
                }
                Ok(())
            }
        }
    }

    fn call_site(&self) -> (&str, &[String]) {
        match self.options.selectors.split_first() {
            Some((first, rest)) => (first.as_str(), rest),
            None => ("", &[]),
        }
    }

    fn narrow<T: Labels>(&self, registry: &Registry, entries: Vec<T>, selectors: &[String]) -> Result<Vec<T>> {
        selectors
            .iter()
            .try_fold(entries, |entries, selector| registry.refine(entries, selector))
    }

    fn write_app<W: Write>(&self, registry: &Registry, app: &NavigableApp<'_>, output: &mut W) -> Result<()> {
        let marker = if app.is_active { '*' } else { ' ' };
        writeln!(output, "{marker} {}\t{}", app.title, registry.rebase_path(&app.path))?;
        Ok(())
    }

    fn write_html<'a, W: Write>(&self, elements: impl IntoIterator<Item = &'a Element>, output: &mut W) -> Result<()> {
        let extra = &self.options.attributes;
        let elements = elements.into_iter().map(|e| element_html_text_with(e, extra));
        match self.options.output_format {
            OutputFormat::Json => self.write_json(&elements.collect::<Vec<_>>(), output),
            OutputFormat::Text => {
                for html in elements {
                    writeln!(output, "{html}")?;
                }
                Ok(())
            }
        }
    }

    fn write_json<T: Serialize + ?Sized, W: Write>(&self, value: &T, output: &mut W) -> Result<()> {
        json::to_writer_pretty(&mut *output, value)?;
        writeln!(output)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct UserSummary<'a> {
    anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a UserInfo>,
}

#[cfg(test)]
mod tests;
