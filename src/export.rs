//! Serialization of a [`ContactTable`] into downloadable artifacts.
//!
//! [`XlsxExporter`] builds a single-sheet workbook, [`CsvExporter`] plain CSV.
//! Both write the header row followed by one row per record, in table order.

use crate::ContactTable;
use crate::error::ExportError;

/// Turns a [`ContactTable`] into file bytes.
pub trait TabularExporter {
    /// Serialize the table.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the underlying writer fails.
    fn export(&self, table: &ContactTable) -> Result<Vec<u8>, ExportError>;

    /// MIME type of the produced bytes.
    fn content_type(&self) -> &'static str;

    /// Conventional file extension, without the dot.
    fn extension(&self) -> &'static str;
}

#[cfg(feature = "xlsx")]
pub use xlsx::XlsxExporter;

#[cfg(feature = "xlsx")]
mod xlsx {
    use super::TabularExporter;
    use crate::ContactTable;
    use crate::error::ExportError;
    use rust_xlsxwriter::{Format, Workbook, XlsxError};
    use std::path::Path;
    use tracing::debug;

    /// Writes a [`ContactTable`] as an `.xlsx` workbook with a single sheet.
    ///
    /// # Examples
    ///
    /// ```
    /// use scopus_contacts::{ContactTable, OutputColumn, TabularExporter, XlsxExporter};
    ///
    /// let table = ContactTable::new(OutputColumn::REQUIRED.to_vec(), Vec::new());
    /// let bytes = XlsxExporter::new().export(&table).unwrap();
    /// assert!(bytes.starts_with(b"PK"));
    /// ```
    #[derive(Debug, Clone)]
    pub struct XlsxExporter {
        sheet_name: String,
        max_column_width: usize,
    }

    impl Default for XlsxExporter {
        fn default() -> Self {
            Self {
                sheet_name: "Sheet1".to_string(),
                max_column_width: 60,
            }
        }
    }

    impl XlsxExporter {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Name of the worksheet. Excel limits names to 31 characters.
        #[must_use]
        pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
            self.sheet_name = name.into();
            self
        }

        /// Upper bound for automatic column widths, in characters.
        #[must_use]
        pub fn with_max_column_width(mut self, width: usize) -> Self {
            self.max_column_width = width;
            self
        }

        /// Write the workbook straight to `path`.
        pub fn save(
            &self,
            table: &ContactTable,
            path: impl AsRef<Path>,
        ) -> Result<(), ExportError> {
            let mut workbook = self.build_workbook(table)?;
            workbook.save(path.as_ref())?;
            Ok(())
        }

        fn build_workbook(&self, table: &ContactTable) -> Result<Workbook, XlsxError> {
            let mut workbook = Workbook::new();
            let header_format = Format::new().set_bold();
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(self.sheet_name.as_str())?;

            for (col, column) in table.columns().iter().enumerate() {
                let col = col as u16;
                worksheet.write_string_with_format(0, col, column.header(), &header_format)?;

                let mut width = column.header().chars().count();
                for (row, record) in table.records().iter().enumerate() {
                    let value = record.value(*column);
                    worksheet.write_string(row as u32 + 1, col, value)?;
                    width = width.max(value.chars().count());
                }
                let width = (width + 2).min(self.max_column_width);
                worksheet.set_column_width(col, width as f64)?;
            }

            debug!(rows = table.len(), sheet = %self.sheet_name, "built workbook");
            Ok(workbook)
        }
    }

    impl TabularExporter for XlsxExporter {
        fn export(&self, table: &ContactTable) -> Result<Vec<u8>, ExportError> {
            let mut workbook = self.build_workbook(table)?;
            Ok(workbook.save_to_buffer()?)
        }

        fn content_type(&self) -> &'static str {
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        }

        fn extension(&self) -> &'static str {
            "xlsx"
        }
    }
}

#[cfg(feature = "csv")]
pub use delimited::CsvExporter;

#[cfg(feature = "csv")]
mod delimited {
    use super::TabularExporter;
    use crate::ContactTable;
    use crate::error::ExportError;
    use csv::WriterBuilder;

    /// Writes a [`ContactTable`] as delimited text.
    #[derive(Debug, Clone)]
    pub struct CsvExporter {
        delimiter: u8,
    }

    impl Default for CsvExporter {
        fn default() -> Self {
            Self { delimiter: b',' }
        }
    }

    impl CsvExporter {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn with_delimiter(mut self, delimiter: u8) -> Self {
            self.delimiter = delimiter;
            self
        }
    }

    impl TabularExporter for CsvExporter {
        fn export(&self, table: &ContactTable) -> Result<Vec<u8>, ExportError> {
            let mut writer = WriterBuilder::new()
                .delimiter(self.delimiter)
                .from_writer(Vec::new());

            writer.write_record(table.columns().iter().map(|column| column.header()))?;
            for row in table.rows() {
                writer.write_record(row)?;
            }

            writer
                .into_inner()
                .map_err(|err| ExportError::Io(err.into_error()))
        }

        fn content_type(&self) -> &'static str {
            "text/csv"
        }

        fn extension(&self) -> &'static str {
            "csv"
        }
    }
}
