/// Normalizes the trailing country segment of an author-affiliation entry.
///
/// Scopus ends each entry with a full stop ("United Kingdom."), so trailing
/// periods are removed and the remainder is trimmed.
///
/// # Arguments
///
/// * `segment` - The last comma-separated segment of the entry
pub fn normalize_country(segment: &str) -> String {
    segment.trim().trim_end_matches('.').trim().to_string()
}

/// Returns the surname portion of a "Surname, Initials" author name.
///
/// Names without a `", "` separator are returned whole (trimmed).
pub fn surname_of(name: &str) -> &str {
    name.split_once(", ").map_or(name, |(surname, _)| surname).trim()
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Splits a comma-separated free-text list, trimming entries and dropping empty ones.
pub fn split_comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("United Kingdom.", "United Kingdom")]
    #[case(" France ", "France")]
    #[case("Germany. ", "Germany")]
    #[case("Spain..", "Spain")]
    #[case("", "")]
    fn test_normalize_country(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_country(input), expected);
    }

    #[rstest]
    #[case("Smith, J.", "Smith")]
    #[case("van der Berg, A.B.", "van der Berg")]
    #[case("Consortium", "Consortium")]
    #[case(" Doe ", "Doe")]
    #[case("Smith,J.", "Smith,J.")]
    fn test_surname_of(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(surname_of(input), expected);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("SMITH J.", "smith"));
        assert!(contains_ignore_case("Öztürk, A.", "ÖZTÜRK"));
        assert!(!contains_ignore_case("Jones, K.", "Smith"));
    }

    #[test]
    fn test_split_comma_list() {
        assert_eq!(
            split_comma_list(" Japan, ,Brazil ,, Chile"),
            vec!["Japan".to_string(), "Brazil".to_string(), "Chile".to_string()]
        );
        assert!(split_comma_list("  ").is_empty());
    }
}
