//! Parsing of the free-text "Correspondence Address" field.
//!
//! Scopus writes the corresponding author's name first, followed by a postal
//! address and one or more `email: <address>` markers, with segments joined by
//! semicolons:
//!
//! ```text
//! Smith, J.; Department of Physics, University X, London, United Kingdom; email: j.smith@ux.ac.uk
//! ```

use crate::regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"email:\s*([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})").unwrap()
});

/// Contact information derived from one correspondence field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrespondenceInfo {
    /// Every address that followed an `email:` marker, in order of appearance.
    /// Duplicates are kept.
    pub emails: Vec<String>,
    /// Text before the first semicolon, trimmed. Usually the corresponding
    /// author's name.
    pub primary_name: String,
}

impl CorrespondenceInfo {
    /// Whether at least one email address was found.
    pub fn has_emails(&self) -> bool {
        !self.emails.is_empty()
    }
}

/// Extract email addresses and the leading name segment from a correspondence field.
///
/// A missing field yields an empty [`CorrespondenceInfo`]. This never fails:
/// text without any `email:` marker simply produces no addresses.
///
/// # Examples
///
/// ```
/// use scopus_contacts::parse_correspondence;
///
/// let info = parse_correspondence(Some("Smith, J.; email: j.smith@ux.ac.uk"));
/// assert_eq!(info.primary_name, "Smith, J.");
/// assert_eq!(info.emails, vec!["j.smith@ux.ac.uk".to_string()]);
/// ```
pub fn parse_correspondence(text: Option<&str>) -> CorrespondenceInfo {
    let Some(text) = text else {
        return CorrespondenceInfo::default();
    };

    let emails = EMAIL_MARKER_REGEX
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|address| address.as_str().to_string())
        .collect();

    let primary_name = text
        .split_once(';')
        .map_or(text, |(head, _)| head)
        .trim()
        .to_string();

    CorrespondenceInfo {
        emails,
        primary_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_missing_field() {
        assert_eq!(parse_correspondence(None), CorrespondenceInfo::default());
    }

    #[test]
    fn test_single_email() {
        let info = parse_correspondence(Some(
            "Smith, J.; Department of Physics, University X, London, United Kingdom; email: j.smith@ux.ac.uk",
        ));
        assert_eq!(info.primary_name, "Smith, J.");
        assert_eq!(info.emails, vec!["j.smith@ux.ac.uk"]);
        assert!(info.has_emails());
    }

    #[test]
    fn test_multiple_emails_keep_order_and_duplicates() {
        let info = parse_correspondence(Some(
            "Doe, A.; Institute Y; email: a.doe@y.org; email:b.roe@y.org; email: a.doe@y.org",
        ));
        assert_eq!(info.emails, vec!["a.doe@y.org", "b.roe@y.org", "a.doe@y.org"]);
    }

    #[rstest]
    #[case("Smith, J.; University X; London")]
    #[case("contact j.smith@ux.ac.uk for details")]
    #[case("Email: j.smith@ux.ac.uk")]
    #[case("email: not-an-address")]
    #[case("")]
    fn test_no_email_marker_yields_no_emails(#[case] input: &str) {
        assert!(parse_correspondence(Some(input)).emails.is_empty());
    }

    #[rstest]
    #[case("  Smith, J.  ; rest", "Smith, J.")]
    #[case("No semicolon here ", "No semicolon here")]
    #[case("; leading separator", "")]
    #[case("", "")]
    fn test_primary_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse_correspondence(Some(input)).primary_name, expected);
    }

    #[test]
    fn test_address_stops_at_invalid_characters() {
        let info = parse_correspondence(Some("email: first.last@sub.uni-x.edu.tr, Turkey"));
        assert_eq!(info.emails, vec!["first.last@sub.uni-x.edu.tr"]);
    }
}
