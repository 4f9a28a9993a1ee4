//! Reading of Scopus CSV exports.
//!
//! Only the columns the extractor needs are read: "Authors with affiliations"
//! and "Correspondence Address" are required, "Title" and "Year" are passed
//! through when present. Every other column is ignored.
//!
//! # Example
//!
//! ```
//! use scopus_contacts::csv::ScopusReader;
//!
//! let input = "Authors with affiliations,Correspondence Address\n\
//! \"Smith, J., University X, London, United Kingdom.\",\"Smith, J.; email: j.smith@ux.ac.uk\"";
//!
//! let dataset = ScopusReader::new().read(input).unwrap();
//! assert_eq!(dataset.rows.len(), 1);
//! ```

mod config;
mod parse;
mod structure;

use crate::Dataset;
use crate::error::ExtractError;
pub use config::ReaderConfig;
use parse::read_dataset;

/// Reader for Scopus CSV exports with configurable column names.
///
/// # Examples
///
/// With a semicolon-delimited export:
/// ```
/// use scopus_contacts::csv::{ReaderConfig, ScopusReader};
///
/// let mut config = ReaderConfig::new();
/// config.set_delimiter(b';');
///
/// let reader = ScopusReader::with_config(config);
/// let dataset = reader
///     .read("Authors with affiliations;Correspondence Address\nA, B., C, France.;x")
///     .unwrap();
/// assert_eq!(dataset.rows.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScopusReader {
    config: ReaderConfig,
}

impl ScopusReader {
    /// Creates a reader with the Scopus column names
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader with custom configuration
    #[must_use]
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Sets the configuration for this reader
    pub fn set_config(&mut self, config: ReaderConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Gets a reference to the current configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Gets a mutable reference to the current configuration
    pub fn config_mut(&mut self) -> &mut ReaderConfig {
        &mut self.config
    }

    /// Reads CSV text into a [`Dataset`].
    ///
    /// # Errors
    ///
    /// - [`ExtractError::InvalidConfig`] if the configuration does not validate
    /// - [`ExtractError::MissingColumns`] if a required column is absent
    /// - [`ExtractError::Parse`] for malformed records, with the line number
    pub fn read(&self, input: &str) -> Result<Dataset, ExtractError> {
        read_dataset(input.as_bytes(), &self.config)
    }

    /// Reads raw CSV bytes, e.g. an uploaded file, into a [`Dataset`].
    ///
    /// Invalid UTF-8 is reported as [`crate::ValueError::Encoding`].
    pub fn read_bytes(&self, input: &[u8]) -> Result<Dataset, ExtractError> {
        read_dataset(input, &self.config)
    }
}
