use std::fmt;

/// Custom error type for NBA loader operations
#[derive(Debug)]
pub enum LoaderError {
    /// File I/O errors
    Io(std::io::Error),
    /// CSV reading errors
    Csv(csv::Error),
    /// JSON serialization errors
    Json(serde_json::Error),
    /// YAML parsing errors
    Yaml(serde_yaml::Error),
    /// MongoDB connection, ping or insert errors
    Database(String),
    /// Configuration errors
    Config(String),
    /// A CSV row that cannot be turned into a record
    Row {
        file: String,
        row: u64,
        message: String,
    },
    /// City and team name with an unsupported number of words
    TeamName { row: u64, value: String },
    /// Data quality problem rejected in strict mode
    Strict(String),
    /// Generic errors with message
    Generic(String),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Io(err) => write!(f, "I/O error: {}", err),
            LoaderError::Csv(err) => write!(f, "CSV error: {}", err),
            LoaderError::Json(err) => write!(f, "JSON error: {}", err),
            LoaderError::Yaml(err) => write!(f, "YAML error: {}", err),
            LoaderError::Database(msg) => write!(f, "Database error: {}", msg),
            LoaderError::Config(msg) => write!(f, "Configuration error: {}", msg),
            LoaderError::Row { file, row, message } => {
                write!(f, "Malformed row {} in {}: {}", row, file, message)
            }
            LoaderError::TeamName { row, value } => write!(
                f,
                "Unsupported team name '{}' in row {}: expected 2 or 3 words",
                value, row
            ),
            LoaderError::Strict(msg) => write!(f, "Strict mode: {}", msg),
            LoaderError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Io(err) => Some(err),
            LoaderError::Csv(err) => Some(err),
            LoaderError::Json(err) => Some(err),
            LoaderError::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err)
    }
}

impl From<csv::Error> for LoaderError {
    fn from(err: csv::Error) -> Self {
        LoaderError::Csv(err)
    }
}

impl From<serde_json::Error> for LoaderError {
    fn from(err: serde_json::Error) -> Self {
        LoaderError::Json(err)
    }
}

impl From<serde_yaml::Error> for LoaderError {
    fn from(err: serde_yaml::Error) -> Self {
        LoaderError::Yaml(err)
    }
}

impl From<mongodb::error::Error> for LoaderError {
    fn from(err: mongodb::error::Error) -> Self {
        LoaderError::Database(err.to_string())
    }
}

impl From<String> for LoaderError {
    fn from(err: String) -> Self {
        LoaderError::Generic(err)
    }
}

impl From<anyhow::Error> for LoaderError {
    fn from(err: anyhow::Error) -> Self {
        LoaderError::Generic(err.to_string())
    }
}

/// Result type alias for NBA loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;
