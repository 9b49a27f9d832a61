// Adapters layer: concrete implementations of the domain ports.

pub mod console;
pub mod sink;

pub use console::{BufferedConsole, StdoutConsole};
pub use sink::{CapturingSink, TracingSink};
