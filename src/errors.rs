use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the input or writing an output file failed
    #[error("IO error: {0}")]
    IoError(String),
    /// The input document is not well-formed XML
    #[error("Parse error: {0}")]
    ParseError(String),
    /// A CSV record could not be written
    #[error("CSV error: {0}")]
    CsvError(String),
    /// Invalid configuration or command-line input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An element or attribute the registry schema guarantees is absent
    #[error("Missing mandatory field '{field}' in <{element}>")]
    MissingField { element: String, field: String },
}

impl AppError {
    pub fn missing(element: impl Into<String>, field: impl Into<String>) -> Self {
        AppError::MissingField {
            element: element.into(),
            field: field.into(),
        }
    }
}

// Conversion implementations for common errors
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<quick_xml::Error> for AppError {
    fn from(err: quick_xml::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for AppError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        AppError::ParseError(format!("Malformed attribute: {err}"))
    }
}

impl From<quick_xml::encoding::EncodingError> for AppError {
    fn from(err: quick_xml::encoding::EncodingError) -> Self {
        AppError::ParseError(format!("Failed to decode XML text: {err}"))
    }
}

impl From<quick_xml::escape::EscapeError> for AppError {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        AppError::ParseError(format!("Bad reference in attribute value: {err}"))
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::ParseError(format!("Invalid declaration pattern: {err}"))
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::CsvError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
