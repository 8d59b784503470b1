//! Error handling for the strandalign CLI

use thiserror::Error;

use strandalign_core::AlignError;

/// Main error type for strandalign CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("Invalid sequence: {message}")]
    InvalidSequence { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource error: {message}")]
    Resource { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn invalid_sequence<S: Into<String>>(message: S) -> Self {
        Self::InvalidSequence { message: message.into() }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn resource<S: Into<String>>(message: S) -> Self {
        Self::Resource { message: message.into() }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<AlignError> for CliError {
    fn from(err: AlignError) -> Self {
        match err {
            AlignError::ResourceExhausted { .. } => Self::resource(err.to_string()),
            AlignError::InvalidScoring(_) => Self::config(err.to_string()),
            AlignError::InvalidRange { .. } | AlignError::EmptyAlphabet => {
                Self::validation(err.to_string())
            }
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your strandalign.toml configuration file\n\
                 • Use 'strandalign config' to print a sample configuration\n\
                 • Keep match_score >= mismatch_score and gap_penalty <= 0"
            );
        }

        CliError::InvalidSequence { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Pass sequences as plain ASCII strings, e.g. GATTACA\n\
                 • Quote sequences that contain shell metacharacters"
            );
        }

        CliError::Validation { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Lengths must satisfy 0 < --min-len <= --max-len\n\
                 • The generator alphabet needs at least one symbol"
            );
        }

        CliError::Resource { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Raise the limit with --max-cells or engine.max_cells\n\
                 • Align shorter sequences\n\
                 • Free up system memory"
            );
        }

        CliError::Io { .. } => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}
