use thiserror::Error;

#[derive(Error, Debug)]
pub enum MyDbaError {
    #[error("Missing value for `database` in options")]
    MissingDatabase,

    #[error("Could not find executable: '{0}'")]
    ExecutableNotFound(String),

    #[error("Command execution failed: {0}")]
    ExecutionError(String),

    #[error("User cancelled")]
    UserCancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, MyDbaError>;
