use serde::Serialize;
use thiserror::Error;

/// Errors raised by the theme services.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// One or more required files are absent from a theme package or directory.
    /// `message` is the translated text shown to the user.
    #[error("{message}")]
    MissingFiles { files: Vec<String>, message: String },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    Protected(String),
    #[error("Invalid theme name: {0}")]
    InvalidName(String),
    #[error("Archive error: {0}")]
    Archive(String),
    #[error("Manifest error: {0}")]
    Manifest(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for ThemeError {
    fn from(error: zip::result::ZipError) -> Self {
        match error {
            zip::result::ZipError::Io(e) => ThemeError::Io(e),
            other => ThemeError::Archive(other.to_string()),
        }
    }
}

pub type ThemeResult<T> = Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ThemeError> for CommandError {
    fn from(error: ThemeError) -> Self {
        match error {
            ThemeError::NotFound(msg) => CommandError::NotFound(msg),
            ThemeError::Io(e) => CommandError::Io(e.to_string()),
            ThemeError::Archive(_) | ThemeError::Manifest(_) => {
                CommandError::Internal(error.to_string())
            }
            other => CommandError::Validation(other.to_string()),
        }
    }
}

impl Serialize for CommandError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
