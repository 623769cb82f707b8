// std imports
use std::path::{Path, PathBuf};

// third-party imports
use once_cell::sync::{Lazy, OnceCell};

// local imports
use crate::{
    error::{Error, Result},
    settings::{Settings, Source, SourceFile},
};

// ---

pub const APP_NAME: &str = "ufe";
pub const CONFIG_ENV: &str = "UFE_CONFIG";

static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Default settings, as embedded into the binary.
pub fn default() -> &'static Settings {
    &DEFAULT
}

/// Prepares loading of settings layered from the given configuration files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().to_owned()).collect())
}

/// Path of the user configuration file, `UFE_CONFIG` takes precedence.
pub fn default_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(path.into());
    }
    Ok(dirs::config_dir().ok_or(Error::AppDirs)?.join(APP_NAME).join("config.yaml"))
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the user configuration file.
    pub fn no_default(self, value: bool) -> Self {
        Self {
            no_default: value,
            ..self
        }
    }

    pub fn load(self) -> Result<Settings> {
        let mut sources = Vec::with_capacity(self.paths.len() + 1);

        if !self.no_default {
            match default_path() {
                Ok(path) => sources.push(SourceFile::new(path).required(false).into()),
                Err(err) => log::warn!("skipped user configuration: {err}"),
            }
        }

        sources.extend(self.paths.into_iter().map(|path| Source::from(SourceFile::new(path))));

        Settings::load(sources)
    }
}

// ---

pub mod global {
    use super::*;

    static SETTINGS: OnceCell<Settings> = OnceCell::new();

    /// Sets the settings used for the rest of the process lifetime.
    pub fn initialize(settings: Settings) {
        if SETTINGS.set(settings).is_err() {
            log::debug!("global settings already initialized");
        }
    }

    /// Settings set by [`initialize`], or defaults if it was never called.
    pub fn get() -> &'static Settings {
        SETTINGS.get().unwrap_or_else(|| default())
    }
}

#[cfg(test)]
mod tests;
