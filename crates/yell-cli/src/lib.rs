mod args;
mod commands;
pub mod input;
pub mod types;

pub use args::Cli;
pub use commands::run;
