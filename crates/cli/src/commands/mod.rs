//! CLI command modules

pub mod serve;
pub mod validate;

pub use serve::{ServeArgs, execute_serve_command, parse_listen_address};
pub use validate::validate_seed_file;
