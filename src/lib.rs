pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::DemoConfig;
pub use domain::model::{PcSpecs, TimeOffset};
pub use utils::error::{Result, UtilError};
