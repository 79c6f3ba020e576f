//! Defines the crate level error type.
//!
//! The filter and pagination engines never fail. Errors only come from the
//! edges: loading transaction data, reading configuration and resolving the
//! local date.

/// The errors that may occur when loading data for the view engines.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A date string could not be parsed as a calendar date.
    ///
    /// Callers should pass in the date string that caused the error.
    #[error("could not parse \"{0}\" as a date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The CSV had issues that prevented it from being parsed.
    #[error("Could not parse the CSV file: {0}")]
    InvalidCSV(String),

    /// The JSON input could not be parsed as transactions or day groups.
    #[error("could not parse JSON: {0}")]
    JSONError(String),

    /// A file could not be read.
    #[error("could not read \"{path}\": {reason}")]
    IoError {
        /// The path of the file that could not be read.
        path: String,
        /// The underlying IO error message.
        reason: String,
    },

    /// The input file has an extension that no parser handles.
    #[error("unsupported input format \"{0}\", expected .json or .csv")]
    UnsupportedFormat(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The configuration file contained invalid values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Could not acquire the filter store lock.
    #[error("could not acquire the filter store lock")]
    StoreLockError,
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONError(value.to_string())
    }
}
