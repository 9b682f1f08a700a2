pub mod commands;

pub use commands::{render_file, Cli};
