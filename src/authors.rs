//! Splitting of the "Authors with affiliations" field into author candidates.
//!
//! Scopus joins one entry per author with `"; "`, and each entry is itself a
//! `", "`-joined list whose first two parts are the author's surname and
//! initials and whose last part is the country:
//!
//! ```text
//! Smith, J., Department of Physics, University X, London, United Kingdom.; Doe, A., Institute Y, Paris, France.
//! ```

use crate::utils::{normalize_country, surname_of};
use serde::{Deserialize, Serialize};

/// One author parsed from an author-affiliation entry, before email matching
/// or filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCandidate {
    /// "Surname, Initials" when derivable, otherwise the raw entry.
    pub name: String,
    /// Affiliation parts between the name and the country, possibly empty.
    pub affiliation: String,
    /// Country with trailing periods stripped, possibly empty.
    pub country: String,
}

impl AuthorCandidate {
    /// Parse a single author-affiliation entry.
    ///
    /// Entries with fewer than three `", "`-separated parts carry no
    /// affiliation or country, and the whole entry becomes the name.
    pub fn from_entry(entry: &str) -> Self {
        let parts: Vec<&str> = entry.split(", ").collect();
        if parts.len() < 3 {
            return Self {
                name: entry.to_string(),
                ..Self::default()
            };
        }

        let last = parts.len() - 1;
        Self {
            name: format!("{}, {}", parts[0], parts[1]),
            affiliation: parts[2..last].join(", "),
            country: normalize_country(parts[last]),
        }
    }

    /// The author's surname, i.e. the name up to the first `", "`.
    pub fn surname(&self) -> &str {
        surname_of(&self.name)
    }
}

/// Lazy iterator over the authors of one "Authors with affiliations" value.
///
/// Created by [`split_authors`]. Cloning the iterator or calling
/// [`split_authors`] again restarts from the first entry.
#[derive(Debug, Clone)]
pub struct Authors<'a> {
    entries: std::str::Split<'a, &'static str>,
}

impl Iterator for Authors<'_> {
    type Item = AuthorCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(AuthorCandidate::from_entry)
    }
}

/// Split an "Authors with affiliations" value into author candidates, in entry order.
///
/// # Examples
///
/// ```
/// use scopus_contacts::split_authors;
///
/// let mut authors = split_authors("Smith, J., University X, London, United Kingdom.");
/// let smith = authors.next().unwrap();
/// assert_eq!(smith.name, "Smith, J.");
/// assert_eq!(smith.affiliation, "University X, London");
/// assert_eq!(smith.country, "United Kingdom");
/// ```
pub fn split_authors(value: &str) -> Authors<'_> {
    Authors {
        entries: value.split("; "),
    }
}
