pub mod parser;
pub mod types;

pub use types::*;
pub use parser::{load_config, parse_config, validate_config, CONFIG_ENV};
