pub mod prompt;

pub use prompt::ConfirmPrompt;
