pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use crate::core::{etl::LeagueEngine, pipeline::LeaguePipeline};
pub use utils::error::{LeagueError, ParseError, Result};
pub use utils::format::OutputFormat;
