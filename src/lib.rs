// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filtering;
pub mod model;
pub mod registry;
pub mod settings;

// private modules
mod xerr;

// public uses
pub use app::App;
pub use registry::Registry;
pub use selector;
pub use settings::Settings;
