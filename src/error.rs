// std imports
use std::{
    fmt,
    io::{self, Write},
    path::PathBuf,
};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// local imports
use crate::xerr::{Caret, HighlightQuoted};

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to parse catalog {}: {source}", .origin.hlq())]
    Catalog { origin: String, source: json::Error },
    #[error("file {} not found", .path.as_path().hlq())]
    FileNotFound { path: PathBuf },
    #[error("invalid selector {}: {error}", .text.hlq())]
    Selector {
        text: String,
        #[source]
        error: selector::Error,
    },
    #[error("failed to serialize output: {0}")]
    Output(#[from] json::Error),
    #[error("failed to locate user configuration directory")]
    AppDirs,
}

impl Error {
    pub fn selector(text: impl Into<String>, error: selector::Error) -> Self {
        Self::Selector {
            text: text.into(),
            error,
        }
    }

    /// Writes the error and hints about its cause to stderr.
    pub fn log(&self) {
        self.log_to(&mut io::stderr()).ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)?;
        write!(target, "{}", self.tips())
    }

    pub fn tips(&self) -> Tips<'_> {
        Tips(self)
    }
}

// ---

pub struct Tips<'a>(&'a Error);

impl fmt::Display for Tips<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Error::Selector { text, error } if !text.contains('\n') => {
                writeln!(f, "{}", Caret { text, offset: error.offset() })
            }
            Error::FileNotFound { .. } => {
                writeln!(f, "{} use {} to read the catalog from stdin", "  tip:".green().bold(), "-".hlq())
            }
            _ => Ok(()),
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
