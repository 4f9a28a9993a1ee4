//! Pretty diagnostic reporting using [ariadne].
//!
//! Renders [`ParseError`] values from the CSV reader with source context, so
//! a malformed export points at the offending record. Only compiled with the
//! `diagnostics` Cargo feature:
//!
//! ```toml
//! [dependencies]
//! scopus-contacts = { version = "0.1", features = ["diagnostics"] }
//! ```

use crate::error::{ExtractError, ParseError};
use crate::{Dataset, ScopusReader};
use ariadne::{Color, Label, Report, ReportKind, Source};

impl ParseError {
    /// Render this error as a pretty Ariadne diagnostic.
    ///
    /// The returned `String` contains ANSI colour codes when the terminal
    /// supports them.
    ///
    /// # Arguments
    ///
    /// * `filename` – Label shown in the report header (e.g. `"scopus.csv"`).
    /// * `source`   – The original source text that was read.
    pub fn to_diagnostic(&self, filename: &str, source: &str) -> String {
        let primary_range = self.primary_byte_range(source);

        let report = Report::build(ReportKind::Error, (filename, primary_range.clone()))
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, primary_range))
                    .with_message(self.error.to_string())
                    .with_color(Color::Red),
            )
            .finish();

        let mut buf = Vec::new();
        if report
            .write((filename, Source::from(source)), &mut buf)
            .is_err()
        {
            return self.to_string();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Byte range of the error location, used for label placement.
    ///
    /// An empty span (the CSV reader only knows where a record starts) is
    /// widened to the end of its line.
    fn primary_byte_range(&self, source: &str) -> std::ops::Range<usize> {
        if let Some(ref span) = self.span {
            let start = span.start.min(source.len());
            if span.end > start {
                return start..span.end.min(source.len());
            }
            return match source.get(start..) {
                Some(rest) => start..rest.find('\n').map_or(source.len(), |offset| start + offset),
                None => start..start,
            };
        }
        if let Some(line) = self.line {
            let line_start: usize = source
                .lines()
                .take(line.saturating_sub(1))
                .map(|l| l.len() + 1)
                .sum();
            let line_len = source
                .lines()
                .nth(line.saturating_sub(1))
                .map(|l| l.len())
                .unwrap_or(0);
            return line_start..line_start + line_len;
        }
        0..0
    }
}

/// Read a Scopus export and, on failure, return a human-readable report.
///
/// Parse errors are rendered with [`ParseError::to_diagnostic`]; other errors
/// (missing columns, bad configuration) use their plain message.
pub fn read_with_diagnostics(
    reader: &ScopusReader,
    input: &str,
    filename: &str,
) -> Result<Dataset, String> {
    reader.read(input).map_err(|err| match err {
        ExtractError::Parse(parse_err) => parse_err.to_diagnostic(filename, input),
        other => other.to_string(),
    })
}
