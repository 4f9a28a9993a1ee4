//! Mapping of CSV header positions to the fields of an [`InputRow`].

use crate::InputRow;
use crate::csv::config::{REQUIRED_FIELDS, ReaderConfig};
use crate::error::{ExtractError, fields};
use csv::StringRecord;

/// Column positions of the fields the extractor reads.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ColumnLayout {
    pub(crate) authors: usize,
    pub(crate) correspondence: usize,
    pub(crate) title: Option<usize>,
    pub(crate) year: Option<usize>,
}

impl ColumnLayout {
    /// Locate the configured columns in a header row.
    ///
    /// When a header appears more than once the first occurrence wins.
    /// Fails with every missing required column named at once.
    pub(crate) fn from_headers(
        headers: &StringRecord,
        config: &ReaderConfig,
    ) -> Result<Self, ExtractError> {
        let position = |field: &str| -> Option<usize> {
            headers
                .iter()
                .position(|header| config.get_field_for_header(header) == Some(field))
        };

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|&field| position(field).is_none())
            .map(|field| config.display_name(field))
            .collect();

        match (
            position(fields::AUTHORS_WITH_AFFILIATIONS),
            position(fields::CORRESPONDENCE_ADDRESS),
        ) {
            (Some(authors), Some(correspondence)) => Ok(Self {
                authors,
                correspondence,
                title: position(fields::TITLE),
                year: position(fields::YEAR),
            }),
            _ => Err(ExtractError::MissingColumns(missing)),
        }
    }

    /// Build an [`InputRow`] from one record. Empty or absent cells become `None`.
    pub(crate) fn row_from_record(&self, record: &StringRecord, trim: bool) -> InputRow {
        let cell = |index: usize| {
            record
                .get(index)
                .map(|value| if trim { value.trim() } else { value })
                .filter(|value| !value.trim().is_empty())
                .map(String::from)
        };

        InputRow {
            authors_with_affiliations: cell(self.authors),
            correspondence_address: cell(self.correspondence),
            title: self.title.and_then(&cell),
            year: self.year.and_then(&cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_layout_from_scopus_headers() {
        let headers = record(&[
            "Authors",
            "Title",
            "Year",
            "Authors with affiliations",
            "Correspondence Address",
        ]);
        let layout = ColumnLayout::from_headers(&headers, &ReaderConfig::new()).unwrap();
        assert_eq!(
            layout,
            ColumnLayout {
                authors: 3,
                correspondence: 4,
                title: Some(1),
                year: Some(2),
            }
        );
    }

    #[test]
    fn test_missing_required_columns() {
        let headers = record(&["Title", "Authors"]);
        match ColumnLayout::from_headers(&headers, &ReaderConfig::new()) {
            Err(ExtractError::MissingColumns(columns)) => assert_eq!(
                columns,
                vec!["Authors with affiliations", "Correspondence Address"]
            ),
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_one_column() {
        let headers = record(&["Authors with affiliations"]);
        match ColumnLayout::from_headers(&headers, &ReaderConfig::new()) {
            Err(ExtractError::MissingColumns(columns)) => {
                assert_eq!(columns, vec!["Correspondence Address"])
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn test_row_from_record() {
        let layout = ColumnLayout {
            authors: 0,
            correspondence: 1,
            title: None,
            year: Some(2),
        };
        let row = layout.row_from_record(&record(&[" Smith, J., X, France. ", "  ", "2020"]), true);
        assert_eq!(
            row,
            InputRow {
                authors_with_affiliations: Some("Smith, J., X, France.".to_string()),
                correspondence_address: None,
                title: None,
                year: Some("2020".to_string()),
            }
        );
    }

    #[test]
    fn test_short_record_yields_none() {
        let layout = ColumnLayout {
            authors: 0,
            correspondence: 3,
            title: None,
            year: None,
        };
        let row = layout.row_from_record(&record(&["A, B., C, D."]), false);
        assert_eq!(row.correspondence_address, None);
    }
}
