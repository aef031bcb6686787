pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{ContentPaths, LocalContentStore};
pub use app::PortfolioServer;
pub use core::slug::slugify;
pub use utils::error::{PortfolioError, Result};
