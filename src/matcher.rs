//! Surname-based assignment of correspondence emails to authors.
//!
//! The heuristic is conservative: an email is only assigned when the author
//! is identifiably the corresponding author, or when the row carries a single
//! address and the author's surname appears somewhere in the correspondence
//! text. With several addresses and no corresponding-author match nothing is
//! guessed.

use crate::correspondence::CorrespondenceInfo;
use crate::utils::{contains_ignore_case, surname_of};
use tracing::trace;

/// Assigns at most one email from a row's correspondence data to an author.
///
/// # Examples
///
/// ```
/// use scopus_contacts::{EmailMatcher, parse_correspondence};
///
/// let raw = "Smith, J.; email: j.smith@ux.ac.uk";
/// let info = parse_correspondence(Some(raw));
///
/// let matcher = EmailMatcher::new();
/// assert_eq!(matcher.match_email("Smith, J.", &info, raw), Some("j.smith@ux.ac.uk"));
/// assert_eq!(matcher.match_email("Doe, A.", &info, raw), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailMatcher {
    case_sensitive_fallback: bool,
}

impl EmailMatcher {
    /// Creates a matcher with case-insensitive surname comparison for both rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare the surname case-sensitively in the sole-email fallback.
    ///
    /// The corresponding-author check always ignores case.
    #[must_use]
    pub fn with_case_sensitive_fallback(mut self, enabled: bool) -> Self {
        self.case_sensitive_fallback = enabled;
        self
    }

    /// Whether the sole-email fallback compares case-sensitively.
    pub fn case_sensitive_fallback(&self) -> bool {
        self.case_sensitive_fallback
    }

    /// Pick the email for `author_name`, if one can be attributed.
    ///
    /// Rules, first match wins:
    ///
    /// 1. No emails in the row: no match.
    /// 2. The surname occurs in the correspondence's primary name: the first email.
    /// 3. The row has exactly one email and the surname occurs anywhere in
    ///    `raw`: that email.
    ///
    /// An empty surname is contained in every primary name, so blank entries
    /// take the first email under rule 2. The returned address always borrows
    /// from `info.emails`.
    ///
    /// # Arguments
    ///
    /// * `author_name` - Author name, usually "Surname, Initials"
    /// * `info` - Parsed correspondence data for the author's row
    /// * `raw` - The unparsed correspondence text of the same row
    pub fn match_email<'c>(
        &self,
        author_name: &str,
        info: &'c CorrespondenceInfo,
        raw: &str,
    ) -> Option<&'c str> {
        let first = info.emails.first()?.as_str();
        let surname = surname_of(author_name);

        if contains_ignore_case(&info.primary_name, surname) {
            return Some(first);
        }

        if info.emails.len() == 1 {
            let mentioned = if self.case_sensitive_fallback {
                raw.contains(surname)
            } else {
                contains_ignore_case(raw, surname)
            };
            return mentioned.then_some(first);
        }

        trace!(
            surname,
            emails = info.emails.len(),
            "ambiguous correspondence, no email assigned"
        );
        None
    }
}

/// [`EmailMatcher::match_email`] with the default matcher.
pub fn match_email<'c>(
    author_name: &str,
    info: &'c CorrespondenceInfo,
    raw: &str,
) -> Option<&'c str> {
    EmailMatcher::new().match_email(author_name, info, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correspondence::parse_correspondence;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn matched<'c>(name: &str, info: &'c CorrespondenceInfo, raw: &str) -> Option<&'c str> {
        match_email(name, info, raw)
    }

    #[test]
    fn test_corresponding_author() {
        let raw = "Smith, J.; email: j.smith@ux.ac.uk";
        let info = parse_correspondence(Some(raw));
        assert_eq!(matched("Smith, J.", &info, raw), Some("j.smith@ux.ac.uk"));
    }

    #[test]
    fn test_corresponding_author_takes_first_of_many() {
        let raw = "Smith, J.; Univ X; email: j.smith@ux.ac.uk; email: k.lee@ux.ac.uk";
        let info = parse_correspondence(Some(raw));
        assert_eq!(matched("SMITH, J.", &info, raw), Some("j.smith@ux.ac.uk"));
    }

    #[test]
    fn test_ambiguous_emails_do_not_match() {
        let raw = "Jones, K.; Univ X; email: k.jones@ux.ac.uk; email: smith@ux.ac.uk";
        let info = parse_correspondence(Some(raw));
        assert_eq!(matched("Smith, J.", &info, raw), None);
    }

    #[test]
    fn test_sole_email_fallback() {
        let raw = "Jones, K.; Smith Lab, Univ X; email: lab@ux.ac.uk";
        let info = parse_correspondence(Some(raw));
        assert_eq!(matched("Smith, J.", &info, raw), Some("lab@ux.ac.uk"));
        assert_eq!(matched("Brown, T.", &info, raw), None);
    }

    #[rstest]
    #[case(false, Some("lab@ux.ac.uk"))]
    #[case(true, None)]
    fn test_fallback_case_sensitivity(#[case] strict: bool, #[case] expected: Option<&str>) {
        let raw = "Jones, K.; SMITH LAB, Univ X; email: lab@ux.ac.uk";
        let info = parse_correspondence(Some(raw));
        let matcher = EmailMatcher::new().with_case_sensitive_fallback(strict);
        assert_eq!(matcher.match_email("Smith, J.", &info, raw), expected);
    }

    #[test]
    fn test_no_emails() {
        let raw = "Smith, J.; Univ X";
        let info = parse_correspondence(Some(raw));
        assert_eq!(matched("Smith, J.", &info, raw), None);
    }

    #[rstest]
    #[case("")]
    #[case(", J.")]
    fn test_empty_surname_takes_first_email(#[case] name: &str) {
        let raw = "Smith, J.; email: j.smith@ux.ac.uk; email: k.lee@ux.ac.uk";
        let info = parse_correspondence(Some(raw));
        assert_eq!(matched(name, &info, raw), Some("j.smith@ux.ac.uk"));
    }

    #[rstest]
    #[case("Smith, J.")]
    #[case("Jones, K.")]
    #[case("Lab")]
    #[case("Nobody, X.")]
    fn test_result_is_always_a_parsed_email(#[case] name: &str) {
        let raw = "Smith, J.; Jones Lab; email: j.smith@ux.ac.uk; email: k.jones@ux.ac.uk";
        let info = parse_correspondence(Some(raw));
        if let Some(email) = matched(name, &info, raw) {
            assert!(info.emails.iter().any(|e| e == email));
        }
    }
}
