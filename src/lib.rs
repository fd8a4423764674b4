pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::DemoArgs;

pub use adapters::http::HttpOptionSource;
pub use adapters::page::{InMemoryPage, InMemorySelect};
pub use config::GeoConfig;
pub use core::cascade::GeoCascade;
pub use core::render::render_options;
pub use domain::model::{Level, OptionEntry, OptionList, Trigger};
pub use domain::ports::{Dom, OptionSource, SelectControl};
pub use utils::error::{GeoError, Result};
