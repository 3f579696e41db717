pub mod resolver;
pub mod runner;

// Re-exports for convenience (used in commands module)
pub use resolver::{ToolResolver, WhichResolver};
pub use runner::{ExecutionResult, ProcessRunner, StdProcessRunner};
