pub mod cleanup;
pub mod demo;
pub mod validators;

pub use crate::domain::model::{DemoReport, Demonstration, FailureRecord};
pub use crate::domain::ports::{Console, FailureSink};
pub use crate::utils::error::Result;
