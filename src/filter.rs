//! Country filter policies.
//!
//! A [`FilterPolicy`] decides whether an author's country (and, for the
//! exclusion policy, their matched email) keeps the record in the output.

use crate::utils::split_comma_list;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// European countries of the built-in "twinning" preset, as Scopus spells them.
pub const TWINNING_COUNTRIES: &[&str] = &[
    "Austria",
    "Belgium",
    "Denmark",
    "Finland",
    "France",
    "Germany",
    "Iceland",
    "Ireland",
    "Italy",
    "Luxembourg",
    "Netherlands",
    "Norway",
    "Spain",
    "Sweden",
    "Switzerland",
    "United Kingdom",
    "UK",
];

/// Lowercase spellings of Turkey used by [`FilterPolicy::exclude_turkey`].
pub const TURKEY_ALIASES: &[&str] = &["turkey", "türkiye", "turkiye"];

/// Email domain suffix of Turkish academic institutions.
pub const TURKISH_ACADEMIC_SUFFIX: &str = ".edu.tr";

/// Which countries an extraction run keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterPolicy {
    /// Keep countries in the set (exact, case-sensitive).
    FixedSet(BTreeSet<String>),
    /// Keep every country, including empty ones.
    WorldwideIncludeAll,
    /// Keep every country except one, identified by its spellings and by the
    /// email domain suffix of its institutions.
    WorldwideExcludeCountry {
        /// Country spellings, compared case-insensitively.
        aliases: BTreeSet<String>,
        /// Emails containing this suffix (case-insensitive) are dropped
        /// regardless of country.
        email_suffix: String,
    },
    /// Keep countries picked by the user, plus free-text additions.
    ManualSet(BTreeSet<String>),
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self::twinning()
    }
}

impl FilterPolicy {
    /// The built-in European preset, see [`TWINNING_COUNTRIES`].
    pub fn twinning() -> Self {
        Self::fixed(TWINNING_COUNTRIES.iter().copied())
    }

    /// A fixed set of country names.
    pub fn fixed<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::FixedSet(countries.into_iter().map(Into::into).collect())
    }

    /// Worldwide minus Turkey: drops Turkey under any of [`TURKEY_ALIASES`] and
    /// any email under [`TURKISH_ACADEMIC_SUFFIX`].
    pub fn exclude_turkey() -> Self {
        Self::exclude_country(TURKEY_ALIASES.iter().copied(), TURKISH_ACADEMIC_SUFFIX)
    }

    /// Worldwide minus one country, given its spellings and institutional email suffix.
    pub fn exclude_country<I, S>(aliases: I, email_suffix: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::WorldwideExcludeCountry {
            aliases: aliases
                .into_iter()
                .map(|alias| alias.as_ref().trim().to_lowercase())
                .filter(|alias| !alias.is_empty())
                .collect(),
            email_suffix: email_suffix.trim().to_lowercase(),
        }
    }

    /// A user-curated set: `selected` countries merged with the comma-separated
    /// entries of `free_text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scopus_contacts::FilterPolicy;
    ///
    /// let policy = FilterPolicy::manual(["France"], " Japan, , Brazil");
    /// assert!(policy.includes("Japan", None));
    /// assert!(policy.includes("France", None));
    /// assert!(!policy.includes("Chile", None));
    /// ```
    pub fn manual<I, S>(selected: I, free_text: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut countries: BTreeSet<String> = selected.into_iter().map(Into::into).collect();
        countries.extend(parse_manual_entries(free_text));
        Self::ManualSet(countries)
    }

    /// Short name for log output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FixedSet(_) => "fixed-set",
            Self::WorldwideIncludeAll => "worldwide",
            Self::WorldwideExcludeCountry { .. } => "worldwide-exclude",
            Self::ManualSet(_) => "manual-set",
        }
    }

    /// Whether a record with this country and matched email passes the policy.
    ///
    /// `email` is only consulted by [`FilterPolicy::WorldwideExcludeCountry`].
    pub fn includes(&self, country: &str, email: Option<&str>) -> bool {
        match self {
            Self::FixedSet(countries) | Self::ManualSet(countries) => countries.contains(country),
            Self::WorldwideIncludeAll => true,
            Self::WorldwideExcludeCountry {
                aliases,
                email_suffix,
            } => {
                let country = country.to_lowercase();
                if aliases.iter().any(|alias| alias.to_lowercase() == country) {
                    return false;
                }
                let suffix = email_suffix.to_lowercase();
                match email {
                    Some(email) if !suffix.is_empty() => !email.to_lowercase().contains(&suffix),
                    _ => true,
                }
            }
        }
    }
}

/// Split a free-text country list on commas, trimming and dropping empty entries.
pub fn parse_manual_entries(text: &str) -> Vec<String> {
    split_comma_list(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("France", true)]
    #[case("Germany", true)]
    #[case("Italy", false)]
    #[case("france", false)]
    #[case("", false)]
    fn test_fixed_set(#[case] country: &str, #[case] expected: bool) {
        let policy = FilterPolicy::fixed(["France", "Germany"]);
        assert_eq!(policy.includes(country, Some("x@y.org")), expected);
    }

    #[rstest]
    #[case("United Kingdom")]
    #[case("UK")]
    #[case("Switzerland")]
    fn test_twinning_preset(#[case] country: &str) {
        assert!(FilterPolicy::twinning().includes(country, None));
        assert!(FilterPolicy::default().includes(country, None));
    }

    #[test]
    fn test_twinning_excludes_others() {
        assert!(!FilterPolicy::twinning().includes("Poland", None));
    }

    #[rstest]
    #[case("")]
    #[case("Turkey")]
    #[case("Mars")]
    fn test_worldwide(#[case] country: &str) {
        assert!(FilterPolicy::WorldwideIncludeAll.includes(country, Some("a@b.edu.tr")));
    }

    #[rstest]
    #[case("Turkey", Some("x@x.edu.tr"), false)]
    #[case("Turkey", Some("x@x.com"), false)]
    #[case("TÜRKIYE", None, false)]
    #[case("Turkiye", Some("x@x.com"), false)]
    #[case("Germany", Some("x@metu.edu.tr"), false)]
    #[case("Germany", Some("X@METU.EDU.TR"), false)]
    #[case("Germany", Some("x@tum.de"), true)]
    #[case("Germany", None, true)]
    #[case("", Some("x@y.org"), true)]
    fn test_exclude_turkey(
        #[case] country: &str,
        #[case] email: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(FilterPolicy::exclude_turkey().includes(country, email), expected);
    }

    #[test]
    fn test_exclude_country_normalizes_aliases() {
        let policy = FilterPolicy::exclude_country([" Norway ", ""], " .NO ");
        assert_eq!(
            policy,
            FilterPolicy::WorldwideExcludeCountry {
                aliases: BTreeSet::from(["norway".to_string()]),
                email_suffix: ".no".to_string(),
            }
        );
        assert!(!policy.includes("NORWAY", None));
        assert!(!policy.includes("Sweden", Some("a@uio.no")));
    }

    #[test]
    fn test_manual_set() {
        let policy = FilterPolicy::manual(["France", "Spain"], "Japan,  Brazil ,,");
        assert_eq!(
            policy,
            FilterPolicy::ManualSet(BTreeSet::from(
                ["Brazil", "France", "Japan", "Spain"].map(String::from)
            ))
        );
        assert!(policy.includes("Brazil", Some("x@usp.br")));
        assert!(!policy.includes("brazil", Some("x@usp.br")));
    }

    #[test]
    fn test_manual_set_empty_free_text() {
        let policy = FilterPolicy::manual(Vec::<String>::new(), "   ");
        assert_eq!(policy, FilterPolicy::ManualSet(BTreeSet::new()));
        assert!(!policy.includes("", None));
    }

    #[test]
    fn test_labels() {
        assert_eq!(FilterPolicy::twinning().label(), "fixed-set");
        assert_eq!(FilterPolicy::exclude_turkey().label(), "worldwide-exclude");
    }
}
