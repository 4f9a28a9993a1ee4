//! Error types for reading, extraction and export.
//!
//! Only structural failures are errors: missing required columns, unreadable
//! CSV and failures while building an export. Rows without authors and
//! authors without a usable email are skipped, never reported.

use thiserror::Error;

/// A byte-offset span into the original source text.
///
/// Both `start` and `end` are byte offsets (not character indices) from the
/// beginning of the source string.  `start` is inclusive, `end` is exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSpan {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl SourceSpan {
    /// Create a new `SourceSpan`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Logical field names, used as keys in reader configuration and errors.
pub mod fields {
    pub const AUTHORS_WITH_AFFILIATIONS: &str = "authors_with_affiliations";
    pub const CORRESPONDENCE_ADDRESS: &str = "correspondence_address";
    pub const TITLE: &str = "title";
    pub const YEAR: &str = "year";
}

/// Top-level error type for an extraction run.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Required columns are absent from the header row. Raised before any
    /// row is processed.
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid reader configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Error while reading the input table, with location information.
#[derive(Error, Debug)]
#[error("Error reading input{}: {error}",
    match (line, column) {
        (Some(l), Some(c)) => format!(" at line {} column {}", l, c),
        (Some(l), None) => format!(" at line {}", l),
        (None, Some(c)) => format!(" at column {}", c),
        (None, None) => String::new(),
    }
)]
pub struct ParseError {
    /// Line number where the error occurred (1-based, None if not available)
    pub line: Option<usize>,
    /// Column number where the error occurred (1-based, None if not available)
    pub column: Option<usize>,
    /// Byte-offset span into the source text, for rich diagnostic rendering.
    pub span: Option<SourceSpan>,
    /// The specific error that occurred
    pub error: ValueError,
}

impl ParseError {
    /// Create a new ParseError.
    pub fn new(line: Option<usize>, column: Option<usize>, error: ValueError) -> Self {
        Self {
            line,
            column,
            span: None,
            error,
        }
    }

    /// Attach a byte-offset span to this error, returning `self` (builder style).
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Create a ParseError with just line information.
    pub fn at_line(line: usize, error: ValueError) -> Self {
        Self::new(Some(line), None, error)
    }

    /// Create a ParseError with line and column information.
    pub fn at_position(line: usize, column: usize, error: ValueError) -> Self {
        Self::new(Some(line), Some(column), error)
    }

    /// Create a ParseError without position information.
    pub fn without_position(error: ValueError) -> Self {
        Self::new(None, None, error)
    }
}

/// Specific value-level errors that can occur while reading.
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("Bad syntax: {0}")]
    Syntax(String),

    #[error("Invalid UTF-8: {0}")]
    Encoding(String),
}

/// Failure while serializing a [`crate::ContactTable`].
#[derive(Error, Debug)]
pub enum ExportError {
    #[cfg(feature = "csv")]
    #[error("CSV export failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[cfg(feature = "xlsx")]
    #[error("Spreadsheet export failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "csv")]
impl From<::csv::Error> for ParseError {
    fn from(err: ::csv::Error) -> Self {
        let position = err.position().cloned();
        let error = match err.kind() {
            ::csv::ErrorKind::Utf8 { .. } => ValueError::Encoding(err.to_string()),
            _ => ValueError::Syntax(err.to_string()),
        };

        match position {
            Some(position) => {
                let offset = position.byte() as usize;
                ParseError::at_line(position.line() as usize, error)
                    .with_span(SourceSpan::new(offset, offset))
            }
            None => ParseError::without_position(error),
        }
    }
}
