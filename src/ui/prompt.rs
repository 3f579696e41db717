use crate::error::{MyDbaError, Result};
use colored::*;
use dialoguer::Confirm;

pub struct ConfirmPrompt;

impl ConfirmPrompt {
    pub fn new() -> Self {
        Self
    }

    pub fn confirm_drop(&self, database: &str) -> Result<bool> {
        // Output to stderr so stdout stays clean for command output
        eprintln!(
            "\n{} Database {} will be dropped. This cannot be undone.",
            "[!]".red().bold(),
            database.red().bold()
        );

        let result = Confirm::new()
            .with_prompt(format!("Drop database '{}'?", database))
            .default(false)
            .interact()
            .map_err(|_| MyDbaError::UserCancelled)?;

        Ok(result)
    }
}
