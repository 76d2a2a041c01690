use thiserror::Error;

#[derive(Error, Debug)]
pub enum CombineError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Cannot open output file for writing: {path}")]
    OutputOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for CombineError {
    fn user_message(&self) -> String {
        match self {
            CombineError::Io(err) => {
                format!("IO operation failed: {}", err)
            }
            CombineError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            CombineError::OutputOpen { path, source } => {
                format!("Cannot open output file {}: {}", path, source)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            CombineError::Config { .. } => Some(
                "Check your configuration file syntax and ensure roots, extensions, and the output file are all set.".to_string()
            ),
            CombineError::OutputOpen { .. } => Some(
                "Ensure the output directory exists and you have write permission, or choose a different path with --output.".to_string()
            ),
            CombineError::Io(_) => Some(
                "The output file may be partially written. Check free disk space and rerun to regenerate it.".to_string()
            ),
        }
    }
}

impl From<toml::de::Error> for CombineError {
    fn from(error: toml::de::Error) -> Self {
        CombineError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CombineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = CombineError::Config {
            message: "at least one root directory must be specified".to_string(),
        };
        assert!(error.user_message().contains("Configuration error"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_output_open_message_names_path() {
        let error = CombineError::OutputOpen {
            path: "out/all_code.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert!(error.user_message().contains("out/all_code.txt"));
        assert!(error.suggestion().unwrap().contains("--output"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
        let error = CombineError::from(toml_error);
        assert!(matches!(error, CombineError::Config { .. }));
    }
}
