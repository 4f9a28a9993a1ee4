//! Extract author contact records from Scopus CSV exports.
//!
//! `scopus-contacts` reads the "Authors with affiliations" and "Correspondence
//! Address" columns of a Scopus export, attributes correspondence emails to
//! individual authors, and keeps the authors whose country passes a
//! [`FilterPolicy`]. The result is a [`ContactTable`] that can be exported as a
//! spreadsheet.
//!
//! # Features
//!
//! - `csv` - Read Scopus CSV exports and export tables as CSV (enabled by default)
//! - `xlsx` - Export tables as `.xlsx` workbooks (enabled by default)
//! - `regex` - Use the `regex` crate for email extraction (enabled by default)
//! - `lite` - Use `regex-lite` instead of `regex`
//! - `diagnostics` - Render CSV read errors with source context
//!
//! # Basic Usage
//!
//! ```rust
//! use scopus_contacts::{FilterPolicy, extract_contacts};
//!
//! let input = r#"Title,Year,Authors with affiliations,Correspondence Address
//! "On Things",2023,"Smith, J., University X, London, United Kingdom.; Rossi, M., Univ Y, Milan, Italy.","Smith, J.; University X; email: j.smith@ux.ac.uk"
//! "#;
//!
//! let table = extract_contacts(input, &FilterPolicy::twinning()).unwrap();
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.records()[0].author_name, "Smith, J.");
//! assert_eq!(table.records()[0].email, "j.smith@ux.ac.uk");
//! ```
//!
//! # Pipeline
//!
//! Each row goes through the same steps:
//!
//! 1. [`parse_correspondence`] pulls every `email: <address>` and the leading
//!    name out of the correspondence field.
//! 2. [`split_authors`] breaks the authors field into [`AuthorCandidate`]s.
//! 3. [`EmailMatcher`] attributes at most one email to each candidate.
//! 4. [`FilterPolicy::includes`] decides whether the candidate is kept.
//!
//! Only candidates with an email that pass the policy become [`OutputRecord`]s.
//!
//! # Error Handling
//!
//! Missing required columns are reported as [`ExtractError::MissingColumns`]
//! before any row is processed. Rows without authors and authors without an
//! attributable email are skipped silently.
//!
//! ```rust
//! use scopus_contacts::{ExtractError, FilterPolicy, extract_contacts};
//!
//! let result = extract_contacts("Title,Authors\nX,Y", &FilterPolicy::twinning());
//! assert!(matches!(result, Err(ExtractError::MissingColumns(_))));
//! ```

use serde::{Deserialize, Serialize};

pub mod authors;
pub mod correspondence;
#[cfg(feature = "csv")]
pub mod csv;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod filter;
pub mod matcher;
pub mod pipeline;

// Reexports
pub use authors::{AuthorCandidate, Authors, split_authors};
pub use correspondence::{CorrespondenceInfo, parse_correspondence};
#[cfg(feature = "csv")]
pub use csv::ScopusReader;
#[cfg(feature = "diagnostics")]
pub use diagnostics::read_with_diagnostics;
pub use error::{ExportError, ExtractError, ParseError, SourceSpan, ValueError};
#[cfg(feature = "csv")]
pub use export::CsvExporter;
pub use export::TabularExporter;
#[cfg(feature = "xlsx")]
pub use export::XlsxExporter;
pub use filter::FilterPolicy;
pub use matcher::{EmailMatcher, match_email};
pub use pipeline::{ExtractionPipeline, NoProgress, ProgressSink};

mod regex;
mod utils;

/// One bibliographic record of the input table.
///
/// Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    /// Semicolon-delimited "Surname, Initials, Affiliation..., Country." entries
    pub authors_with_affiliations: Option<String>,
    /// Free text with the corresponding author's name and `email:` markers
    pub correspondence_address: Option<String>,
    /// Passed through to the output unchanged
    pub title: Option<String>,
    /// Passed through to the output unchanged
    pub year: Option<String>,
}

/// The rows of an input table, plus which optional columns it carried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub rows: Vec<InputRow>,
    /// The source had a `Title` column
    pub has_title: bool,
    /// The source had a `Year` column
    pub has_year: bool,
}

impl Dataset {
    /// A dataset without the optional `Title` and `Year` columns.
    pub fn from_rows(rows: Vec<InputRow>) -> Self {
        Self {
            rows,
            has_title: false,
            has_year: false,
        }
    }

    /// The columns an output table built from this dataset carries.
    pub fn output_columns(&self) -> Vec<OutputColumn> {
        let mut columns = OutputColumn::REQUIRED.to_vec();
        if self.has_title {
            columns.push(OutputColumn::Title);
        }
        if self.has_year {
            columns.push(OutputColumn::Year);
        }
        columns
    }
}

/// One author with an attributed email who passed the filter policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "Author Name")]
    pub author_name: String,
    /// Never empty
    #[serde(rename = "Author Email")]
    pub email: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Affiliation")]
    pub affiliation: String,
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Year", skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl OutputRecord {
    /// The cell value of this record in `column`; absent values are empty.
    pub fn value(&self, column: OutputColumn) -> &str {
        match column {
            OutputColumn::AuthorName => &self.author_name,
            OutputColumn::AuthorEmail => &self.email,
            OutputColumn::Country => &self.country,
            OutputColumn::Affiliation => &self.affiliation,
            OutputColumn::Title => self.title.as_deref().unwrap_or_default(),
            OutputColumn::Year => self.year.as_deref().unwrap_or_default(),
        }
    }
}

/// Columns of the output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputColumn {
    AuthorName,
    AuthorEmail,
    Country,
    Affiliation,
    Title,
    Year,
}

impl OutputColumn {
    /// Columns present in every output table.
    pub const REQUIRED: &'static [OutputColumn] = &[
        OutputColumn::AuthorName,
        OutputColumn::AuthorEmail,
        OutputColumn::Country,
        OutputColumn::Affiliation,
    ];

    /// Every column, in output order.
    pub const ALL: &'static [OutputColumn] = &[
        OutputColumn::AuthorName,
        OutputColumn::AuthorEmail,
        OutputColumn::Country,
        OutputColumn::Affiliation,
        OutputColumn::Title,
        OutputColumn::Year,
    ];

    /// Header text of the column.
    pub fn header(&self) -> &'static str {
        match self {
            OutputColumn::AuthorName => "Author Name",
            OutputColumn::AuthorEmail => "Author Email",
            OutputColumn::Country => "Country",
            OutputColumn::Affiliation => "Affiliation",
            OutputColumn::Title => "Title",
            OutputColumn::Year => "Year",
        }
    }
}

impl std::fmt::Display for OutputColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

/// The filtered result of an extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactTable {
    columns: Vec<OutputColumn>,
    records: Vec<OutputRecord>,
}

impl ContactTable {
    pub fn new(columns: Vec<OutputColumn>, records: Vec<OutputRecord>) -> Self {
        Self { columns, records }
    }

    /// Output columns, in order.
    pub fn columns(&self) -> &[OutputColumn] {
        &self.columns
    }

    /// Records in (row order, author order).
    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<OutputRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over rows of cell values, in column order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.records
            .iter()
            .map(|record| self.columns.iter().map(|&c| record.value(c)).collect())
    }
}

/// Read a Scopus CSV export and extract the contacts that pass `policy`.
///
/// Uses the default [`csv::ReaderConfig`] and [`EmailMatcher`]. Any failure
/// aborts the run without partial output.
///
/// # Errors
///
/// [`ExtractError::MissingColumns`] when a required column is absent, and
/// [`ExtractError::Parse`] for malformed CSV.
#[cfg(feature = "csv")]
pub fn extract_contacts(
    csv_text: &str,
    policy: &FilterPolicy,
) -> std::result::Result<ContactTable, ExtractError> {
    let dataset = ScopusReader::new().read(csv_text)?;
    Ok(ExtractionPipeline::new(policy.clone()).run(&dataset, &mut NoProgress))
}

/// Read a Scopus CSV export, extract the contacts that pass `policy` and
/// serialize them with `exporter`.
///
/// # Errors
///
/// The errors of [`extract_contacts`], plus [`ExtractError::Export`] when the
/// exporter fails.
///
/// # Examples
///
/// ```
/// use scopus_contacts::{CsvExporter, FilterPolicy, export_contacts};
///
/// let input = "Authors with affiliations,Correspondence Address\n\
/// \"Smith, J., University X, London, United Kingdom.\",\"Smith, J.; email: j.smith@ux.ac.uk\"";
///
/// let bytes = export_contacts(input, &FilterPolicy::twinning(), &CsvExporter::new()).unwrap();
/// assert!(bytes.starts_with(b"Author Name,Author Email"));
/// ```
#[cfg(feature = "csv")]
pub fn export_contacts<E>(
    csv_text: &str,
    policy: &FilterPolicy,
    exporter: &E,
) -> std::result::Result<Vec<u8>, ExtractError>
where
    E: TabularExporter + ?Sized,
{
    let table = extract_contacts(csv_text, policy)?;
    Ok(exporter.export(&table)?)
}
