pub mod builder;
pub mod shell;

pub use builder::{CommandBuilder, Operation};
pub use shell::ShellCommand;
