// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Args, Parser, ValueEnum};
use clap_complete::Shell;

// local imports
use crate::{app, config, filtering::InvalidSelectorPolicy, model::Attribute};

// ---

/// Options parsed before settings are loaded.
#[derive(Parser)]
#[command(ignore_errors = true, disable_help_flag = true, disable_version_flag = true)]
pub struct BootstrapOpt {
    #[command(flatten)]
    pub args: BootstrapArgs,
}

#[derive(Args)]
pub struct BootstrapArgs {
    /// Configuration file path, may be repeated, specify "-" to skip the default configuration file.
    #[arg(long, value_name = "FILE", num_args = 1)]
    pub config: Vec<String>,
}

// ---

/// Micro-frontend registry explorer, lists catalog entries matching label selectors.
#[derive(Parser)]
#[command(name = "ufe", version)]
pub struct Opt {
    #[command(flatten)]
    pub bootstrap: BootstrapArgs,

    /// What to list.
    #[arg(short, long, value_enum, default_value_t = ListOption::Apps, overrides_with = "list")]
    pub list: ListOption,

    /// Context name used by --list=contexts, defaults to the shell context.
    #[arg(short, long, overrides_with = "context")]
    pub context: Option<String>,

    /// Label selector, e.g. 'env=prod && !experimental', may be repeated to narrow the result further.
    #[arg(short, long, number_of_values = 1, allow_hyphen_values = true)]
    pub selector: Vec<String>,

    /// Selector applied to every listing before --selector.
    #[arg(
        long,
        env = "UFE_PAGE_SELECTOR",
        default_value_t = config::global::get().page_selector.to_string(),
        overrides_with = "page_selector",
        allow_hyphen_values = true,
    )]
    pub page_selector: String,

    /// Path at which the application shell is served.
    #[arg(
        long,
        env = "UFE_BASE_PATH",
        default_value_t = config::global::get().base_path.clone(),
        overrides_with = "base_path",
    )]
    pub base_path: String,

    /// Current location, used to mark active applications.
    #[arg(long, default_value = "/", overrides_with = "location")]
    pub location: String,

    /// What to do with a selector that fails to parse.
    #[arg(
        long,
        value_enum,
        env = "UFE_INVALID_SELECTOR",
        default_value_t = config::global::get().invalid_selector.into(),
        overrides_with = "invalid_selector",
    )]
    pub invalid_selector: InvalidSelectorOption,

    /// Render listed elements as HTML text.
    #[arg(long, overrides_with = "html")]
    pub html: bool,

    /// Attribute added to elements rendered with --html in form NAME=VALUE, may be repeated.
    #[arg(short, long, number_of_values = 1, value_name = "NAME=VALUE", value_parser = parse_attribute)]
    pub attribute: Vec<Attribute>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "UFE_OUTPUT_FORMAT", overrides_with = "output_format")]
    pub output_format: OutputFormat,

    /// Parse the selector, print its canonical form and exit.
    #[arg(long, value_name = "SELECTOR", allow_hyphen_values = true)]
    pub check: Option<String>,

    /// Print shell auto-completion script and exit.
    #[arg(long, value_parser = clap::value_parser!(Shell), value_name = "SHELL")]
    pub shell_completions: Option<Shell>,

    /// Catalog file, specify "-" or omit to read from stdin.
    #[arg(name = "CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOption {
    Apps,
    Contexts,
    Preload,
    Shell,
    User,
}

impl From<ListOption> for app::ListKind {
    fn from(option: ListOption) -> Self {
        match option {
            ListOption::Apps => Self::Apps,
            ListOption::Contexts => Self::Contexts,
            ListOption::Preload => Self::Preload,
            ListOption::Shell => Self::Shell,
            ListOption::User => Self::User,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for app::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSelectorOption {
    Fail,
    MatchNone,
    MatchAll,
}

impl From<InvalidSelectorOption> for InvalidSelectorPolicy {
    fn from(option: InvalidSelectorOption) -> Self {
        match option {
            InvalidSelectorOption::Fail => Self::Fail,
            InvalidSelectorOption::MatchNone => Self::MatchNone,
            InvalidSelectorOption::MatchAll => Self::MatchAll,
        }
    }
}

impl From<InvalidSelectorPolicy> for InvalidSelectorOption {
    fn from(policy: InvalidSelectorPolicy) -> Self {
        match policy {
            InvalidSelectorPolicy::Fail => Self::Fail,
            InvalidSelectorPolicy::MatchNone => Self::MatchNone,
            InvalidSelectorPolicy::MatchAll => Self::MatchAll,
        }
    }
}

fn parse_attribute(s: &str) -> std::result::Result<Attribute, String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok(Attribute::new(name, value)),
        _ => Err(format!("expected NAME=VALUE, found {s:?}")),
    }
}
