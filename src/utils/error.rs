use thiserror::Error;

#[derive(Error, Debug)]
pub enum SumError {
    #[error("Error opening file {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading from Stdin: {0}")]
    StdinRead(#[source] std::io::Error),

    #[error("Error decoding JSON from {source_name}: {source}")]
    Decode {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Sum of numbers overflows a 64-bit integer")]
    Overflow,

    #[error("Error making HTTP request to {url}: {source}")]
    HttpTransport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request failed to {url}. Status: {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Error creating output file {path}: {source}")]
    OutputCreate {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing output to {destination}: {source}")]
    OutputWrite {
        destination: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error loading env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Invalid configuration value for {field} '{value}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Processing,
    Network,
    Output,
}

impl SumError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SumError::FileOpen { .. }
            | SumError::FileRead { .. }
            | SumError::StdinRead(_)
            | SumError::Decode { .. } => ErrorCategory::Input,
            SumError::Overflow => ErrorCategory::Processing,
            SumError::HttpTransport { .. } | SumError::HttpStatus { .. } => {
                ErrorCategory::Network
            }
            SumError::OutputCreate { .. } | SumError::OutputWrite { .. } => ErrorCategory::Output,
            SumError::EnvFile { .. } | SumError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// Process exit status for this error. Never zero.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Processing => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Network => 3,
            ErrorCategory::Output => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SumError::FileOpen { .. } | SumError::FileRead { .. } => {
                "Check that the -file path exists and is readable"
            }
            SumError::StdinRead(_) => "Pipe a JSON document into stdin or pass -file <path>",
            SumError::Decode { .. } => {
                "Input must be a JSON object like {\"values\": [1, 2, 3]} with integer values"
            }
            SumError::Overflow => "Split the input into smaller batches",
            SumError::HttpTransport { .. } => {
                "Check network connectivity and the HTTP_URL setting"
            }
            SumError::HttpStatus { .. } => "The endpoint must answer GET with 200 OK",
            SumError::OutputCreate { .. } | SumError::OutputWrite { .. } => {
                "Check that the -output directory exists and is writable"
            }
            SumError::EnvFile { .. } => "Fix or remove the env file",
            SumError::InvalidConfigValue { .. } => "Set HTTP_URL to an http:// or https:// URL",
        }
    }
}

pub type Result<T> = std::result::Result<T, SumError>;
