//! Low-level reading of Scopus CSV text into a [`Dataset`].

use crate::Dataset;
use crate::csv::config::ReaderConfig;
use crate::csv::structure::ColumnLayout;
use crate::error::{ExtractError, ParseError};
use csv::ReaderBuilder;
use itertools::Itertools;
use tracing::debug;

/// Read CSV bytes into a [`Dataset`].
///
/// The header row is validated before any record is read, so a missing
/// required column is reported even if the body is malformed.
pub(crate) fn read_dataset(input: &[u8], config: &ReaderConfig) -> Result<Dataset, ExtractError> {
    config.validate().map_err(ExtractError::InvalidConfig)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .quote(config.quote)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .flexible(config.flexible)
        .from_reader(input);

    let headers = reader.headers().map_err(ParseError::from)?.clone();
    let layout = ColumnLayout::from_headers(&headers, config)?;

    let rows: Vec<_> = reader
        .records()
        .map(|record| {
            record
                .map(|record| layout.row_from_record(&record, config.trim))
                .map_err(ParseError::from)
        })
        .try_collect()?;

    debug!(
        rows = rows.len(),
        has_title = layout.title.is_some(),
        has_year = layout.year.is_some(),
        "read CSV dataset"
    );

    Ok(Dataset {
        rows,
        has_title: layout.title.is_some(),
        has_year: layout.year.is_some(),
    })
}
