// std imports
use std::{include_str, path::PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use selector::Selector;
use serde::{Deserialize, Serialize};

// local imports
use crate::{error::Result, filtering::InvalidSelectorPolicy};

// ---

static DEFAULT_SETTINGS_RAW: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub base_path: String,
    pub page_selector: Selector,
    pub shell_context: String,
    pub invalid_selector: InvalidSelectorPolicy,
}

impl Settings {
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS_RAW, FileFormat::Yaml));

        for source in sources {
            builder = match source {
                Source::File(SourceFile { path, required }) => {
                    log::debug!("added configuration file {} (required={required})", path.display());
                    builder.add_source(File::from(path).required(required))
                }
                Source::String(text, format) => builder.add_source(File::from_str(&text, format)),
            };
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_path: "/".into(),
            page_selector: Selector::all(),
            shell_context: "application-shell".into(),
            invalid_selector: InvalidSelectorPolicy::Fail,
        }
    }
}

// ---

/// Configuration source layered on top of the embedded defaults.
#[derive(Debug, Clone)]
pub enum Source {
    File(SourceFile),
    String(String, FileFormat),
}

impl From<SourceFile> for Source {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}

#[cfg(test)]
mod tests;
