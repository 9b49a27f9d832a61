pub mod scenario;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_one_of, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub use scenario::Scenario;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fault-demo")]
#[command(about = "Checked vs unchecked failure handling with logging")]
pub struct CliConfig {
    /// TOML file overriding the built-in demonstration inputs
    #[arg(long)]
    pub scenario: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log record format: compact or json
    #[arg(long, default_value = "compact")]
    pub log_format: String,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_scenario(&self) -> Result<Scenario> {
        match &self.scenario {
            Some(path) => Scenario::from_file(path),
            None => Ok(Scenario::default()),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.scenario {
            validate_path("scenario", path)?;
        }
        validate_one_of("log_format", &self.log_format, &LOG_FORMATS)
    }
}
