pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{BufferedConsole, CapturingSink, StdoutConsole, TracingSink};
pub use config::Scenario;
pub use crate::core::demo::DemoRunner;
pub use domain::model::{DemoReport, Demonstration, FailureRecord};
pub use utils::error::{DemoError, Fault, FaultKind, InvalidStudentMarks, Result, RuntimeFault};
