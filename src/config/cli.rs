use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub use crate::utils::logger::LogFormat;

pub const SECTIONS: [&str; 8] = [
    "strings",
    "math",
    "collections",
    "dates",
    "conversions",
    "validation",
    "misc",
    "specs",
];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "aio-toolkit")]
#[command(about = "Runs every utility once and prints the results")]
pub struct CliConfig {
    /// Optional TOML file with demo inputs
    #[arg(short, long)]
    pub config: Option<String>,

    /// Limit the demo to these sections (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub section: Vec<String>,

    /// Print PC specs as JSON instead of key/value lines
    #[arg(long)]
    pub json: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// True when `name` should run; no `--section` means all of them.
    pub fn wants(&self, name: &str) -> bool {
        self.section.is_empty() || self.section.iter().any(|s| s == name)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        for section in &self.section {
            validate_one_of("section", section, &SECTIONS)?;
        }
        Ok(())
    }
}
