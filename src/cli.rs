mod args;
mod commands;

pub use args::{ApplyArgs, Cli, Command, GlobalArgs, ImportArgs, InstanceArgs};
pub use commands::{execute, run};
