use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlamesError {
    #[error("both names required")]
    EmptyNameError,

    #[error("letters and spaces only (got {name:?})")]
    InvalidCharacterError { name: String },

    #[error("Unknown FLAMES label code: {code:?}")]
    UnknownLabelError { code: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FlamesError {
    /// Validation failures are recoverable: the user fixes the input and tries again.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FlamesError::EmptyNameError | FlamesError::InvalidCharacterError { .. }
        )
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FlamesError::EmptyNameError | FlamesError::InvalidCharacterError { .. } => {
                ErrorSeverity::Medium
            }
            FlamesError::UnknownLabelError { .. }
            | FlamesError::ConfigError { .. }
            | FlamesError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            FlamesError::IoError(_)
            | FlamesError::CsvError(_)
            | FlamesError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FlamesError::EmptyNameError => "Please enter both names!".to_string(),
            FlamesError::InvalidCharacterError { .. } => {
                "Please use only letters and spaces in names.".to_string()
            }
            FlamesError::UnknownLabelError { code } => {
                format!("'{}' is not one of F, L, A, M, E, S", code)
            }
            FlamesError::IoError(e) => format!("Could not read or write a file: {}", e),
            FlamesError::CsvError(e) => format!("The batch file could not be parsed: {}", e),
            FlamesError::SerializationError(e) => format!("Could not produce JSON: {}", e),
            FlamesError::ConfigError { message } => format!("Configuration problem: {}", message),
            FlamesError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FlamesError::EmptyNameError => "Provide a non-blank value for both names",
            FlamesError::InvalidCharacterError { .. } => {
                "Remove digits, punctuation and accented letters, then try again"
            }
            FlamesError::UnknownLabelError { .. } => "Use one of the codes F, L, A, M, E or S",
            FlamesError::IoError(_) => "Check that the path exists and is readable",
            FlamesError::CsvError(_) => "Make sure the file has a 'name1,name2' header row",
            FlamesError::SerializationError(_) => "Try the text output format instead",
            FlamesError::ConfigError { .. } | FlamesError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlamesError>;
