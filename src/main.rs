// std imports
use std::{
    io::{BufWriter, IsTerminal, Write, stdin, stdout},
    path::Path,
    process,
};

// third-party imports
use clap::{CommandFactory, Parser};
use env_logger::{self as logger};

// local imports
use ufe::{
    app::{self, App},
    cli, config,
    error::*,
    model::Catalog,
    registry::{self, Registry},
    selector::Selector,
    settings::Settings,
};

const UFE_DEBUG_LOG: &str = "UFE_DEBUG_LOG";
const UFE_DEBUG_LOG_STYLE: &str = "UFE_DEBUG_LOG_STYLE";

// ---

fn bootstrap() -> Result<Settings> {
    if std::env::var(UFE_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(UFE_DEBUG_LOG).write_style(UFE_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let opt = cli::BootstrapOpt::parse().args;

    let (offset, no_default_configs) = opt
        .config
        .iter()
        .rposition(|x| x.is_empty() || x == "-")
        .map(|x| (x + 1, true))
        .unwrap_or_default();
    let configs = &opt.config[offset..];

    let settings = config::at(configs).no_default(no_default_configs).load()?;
    config::global::initialize(settings.clone());

    Ok(settings)
}

fn run() -> Result<()> {
    let settings = bootstrap()?;

    let opt = cli::Opt::parse();

    if let Some(shell) = opt.shell_completions {
        let mut cmd = cli::Opt::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut stdout());
        return Ok(());
    }

    let app = App::new(app::Options {
        list: opt.list.into(),
        context: opt.context.unwrap_or(settings.shell_context),
        selectors: opt.selector,
        location: opt.location,
        html: opt.html,
        attributes: opt.attribute,
        output_format: opt.output_format.into(),
    });

    let mut output = BufWriter::new(stdout().lock());

    if let Some(text) = opt.check {
        app.check(&text, &mut output)?;
        return Ok(output.flush()?);
    }

    let page_selector = Selector::parse(&opt.page_selector).map_err(|e| Error::selector(&opt.page_selector, e))?;

    let catalog = match opt.catalog.as_deref() {
        Some(path) if path != Path::new("-") => Catalog::load(path)?,
        _ => {
            if stdin().is_terminal() {
                log::debug!("no catalog given and stdin is a terminal");
                return cli::Opt::command().print_help().map_err(Error::Io);
            }
            Catalog::from_reader(stdin().lock(), "<stdin>")?
        }
    };

    let registry = Registry::new(
        catalog,
        registry::Options {
            base_path: opt.base_path,
            page_selector,
            invalid_selector: opt.invalid_selector.into(),
        },
    );

    app.run(&registry, &mut output)?;
    Ok(output.flush()?)
}

fn main() {
    if let Err(err) = run() {
        err.log();
        process::exit(1);
    }
}
