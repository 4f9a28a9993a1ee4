//! Per-row orchestration of parsing, email matching and country filtering.

use crate::authors::split_authors;
use crate::correspondence::parse_correspondence;
use crate::filter::FilterPolicy;
use crate::matcher::EmailMatcher;
use crate::{ContactTable, Dataset, InputRow, OutputRecord};
use tracing::{debug, trace};

/// Observer for extraction progress.
///
/// Called with `(index, total)` before each row is processed and once with
/// `(total, total)` when the run finishes. Closures taking two `usize`
/// arguments implement this trait.
pub trait ProgressSink {
    /// Report that `index` of `total` rows have been processed.
    fn report(&mut self, index: usize, total: usize);
}

impl<F> ProgressSink for F
where
    F: FnMut(usize, usize),
{
    fn report(&mut self, index: usize, total: usize) {
        self(index, total)
    }
}

/// A [`ProgressSink`] that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _index: usize, _total: usize) {}
}

/// Turns a [`Dataset`] into a [`ContactTable`] under one [`FilterPolicy`].
///
/// The pipeline holds only configuration; running it twice over the same
/// dataset yields identical tables.
///
/// # Examples
///
/// ```
/// use scopus_contacts::{Dataset, ExtractionPipeline, FilterPolicy, InputRow, NoProgress};
///
/// let dataset = Dataset::from_rows(vec![InputRow {
///     authors_with_affiliations: Some("Smith, J., University X, London, United Kingdom.".into()),
///     correspondence_address: Some("Smith, J.; email: j.smith@ux.ac.uk".into()),
///     ..Default::default()
/// }]);
///
/// let table = ExtractionPipeline::new(FilterPolicy::twinning()).run(&dataset, &mut NoProgress);
/// assert_eq!(table.records()[0].email, "j.smith@ux.ac.uk");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractionPipeline {
    policy: FilterPolicy,
    matcher: EmailMatcher,
}

impl ExtractionPipeline {
    #[must_use]
    pub fn new(policy: FilterPolicy) -> Self {
        Self {
            policy,
            matcher: EmailMatcher::new(),
        }
    }

    /// Replace the email matcher.
    #[must_use]
    pub fn with_matcher(mut self, matcher: EmailMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    pub fn matcher(&self) -> &EmailMatcher {
        &self.matcher
    }

    /// Process every row of `dataset` in order.
    ///
    /// Records come out in row order, then author order within each row.
    /// Identical records from different rows are kept.
    pub fn run<P>(&self, dataset: &Dataset, progress: &mut P) -> ContactTable
    where
        P: ProgressSink + ?Sized,
    {
        let total = dataset.rows.len();
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (index, row) in dataset.rows.iter().enumerate() {
            progress.report(index, total);
            if row.authors_with_affiliations.is_none() {
                skipped += 1;
                continue;
            }
            records.extend(self.extract_row(row));
        }
        progress.report(total, total);

        debug!(
            rows = total,
            skipped,
            emitted = records.len(),
            policy = self.policy.label(),
            "extraction finished"
        );

        ContactTable::new(dataset.output_columns(), records)
    }

    /// Extract the contact records of a single row.
    ///
    /// A row without an authors field yields nothing.
    pub fn extract_row(&self, row: &InputRow) -> Vec<OutputRecord> {
        let Some(authors) = row.authors_with_affiliations.as_deref() else {
            return Vec::new();
        };
        let raw = row.correspondence_address.as_deref();
        let info = parse_correspondence(raw);
        let raw = raw.unwrap_or_default();

        split_authors(authors)
            .filter_map(|author| {
                let Some(email) = self.matcher.match_email(&author.name, &info, raw) else {
                    trace!(author = %author.name, "no email attributed");
                    return None;
                };
                if !self.policy.includes(&author.country, Some(email)) {
                    trace!(author = %author.name, country = %author.country, "rejected by policy");
                    return None;
                }
                Some(OutputRecord {
                    author_name: author.name,
                    email: email.to_string(),
                    country: author.country,
                    affiliation: author.affiliation,
                    title: row.title.clone(),
                    year: row.year.clone(),
                })
            })
            .collect()
    }
}
