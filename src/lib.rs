pub mod cli;
pub mod display;
pub mod loader;
pub mod output;
pub mod transform;
pub mod types;

pub use cli::{parse_args, print_usage, CliError, Invocation, Operation};
pub use types::PixelBuffer;
