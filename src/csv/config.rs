//! Column mapping and dialect configuration for reading Scopus CSV exports.

use crate::error::fields;
use std::collections::HashMap;

/// Default header names for each logical field, as Scopus exports them.
pub(crate) const DEFAULT_HEADERS: &[(&str, &[&str])] = &[
    (
        fields::AUTHORS_WITH_AFFILIATIONS,
        &["Authors with affiliations"],
    ),
    (fields::CORRESPONDENCE_ADDRESS, &["Correspondence Address"]),
    (fields::TITLE, &["Title"]),
    (fields::YEAR, &["Year"]),
];

/// Fields that must be present in the header row.
pub(crate) const REQUIRED_FIELDS: &[&str] = &[
    fields::AUTHORS_WITH_AFFILIATIONS,
    fields::CORRESPONDENCE_ADDRESS,
];

/// Configuration for reading Scopus CSV exports.
///
/// Maps header names to the logical fields the extractor needs, and carries
/// general CSV options like the delimiter. Header lookup is case-insensitive.
///
/// # Examples
///
/// ```
/// use scopus_contacts::csv::ReaderConfig;
///
/// let mut config = ReaderConfig::new();
/// config
///     .add_header_aliases("correspondence_address", vec!["Corresponding Author".to_string()])
///     .set_delimiter(b';');
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Header aliases per logical field; the first alias names the column in errors
    pub(crate) header_map: HashMap<String, Vec<String>>,
    /// Reverse lookup map for O(1) header-to-field mapping
    pub(crate) reverse_map: HashMap<String, String>,
    /// Delimiter to use for parsing the CSV
    pub(crate) delimiter: u8,
    /// Quote character
    pub(crate) quote: u8,
    /// Whether to trim whitespace
    pub(crate) trim: bool,
    /// Accept records whose length differs from the header row
    pub(crate) flexible: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderConfig {
    /// Creates a new configuration with the Scopus header names
    #[must_use]
    pub fn new() -> Self {
        let mut config = Self {
            header_map: HashMap::new(),
            reverse_map: HashMap::new(),
            delimiter: b',',
            quote: b'"',
            trim: true,
            flexible: false,
        };
        config.set_default_headers();
        config
    }

    fn set_default_headers(&mut self) {
        for (field, aliases) in DEFAULT_HEADERS {
            self.header_map.insert(
                field.to_string(),
                aliases.iter().map(|s| s.to_string()).collect(),
            );
        }
        self.rebuild_reverse_map();
    }

    /// Rebuild the reverse lookup map after header mappings change
    fn rebuild_reverse_map(&mut self) {
        self.reverse_map.clear();
        for (field, aliases) in &self.header_map {
            for alias in aliases {
                self.reverse_map
                    .insert(alias.trim().to_lowercase(), field.clone());
            }
        }
    }

    /// Replaces the header names of a field
    pub fn set_header_mapping(&mut self, field: &str, aliases: Vec<String>) -> &mut Self {
        self.header_map.insert(field.to_string(), aliases);
        self.rebuild_reverse_map();
        self
    }

    /// Adds header names to a field, keeping the existing ones
    pub fn add_header_aliases(&mut self, field: &str, aliases: Vec<String>) -> &mut Self {
        self.header_map
            .entry(field.to_string())
            .or_default()
            .extend(aliases);
        self.rebuild_reverse_map();
        self
    }

    /// Sets the delimiter character
    pub fn set_delimiter(&mut self, delimiter: u8) -> &mut Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character
    pub fn set_quote(&mut self, quote: u8) -> &mut Self {
        self.quote = quote;
        self
    }

    /// Sets whether to trim whitespace from fields
    pub fn set_trim(&mut self, trim: bool) -> &mut Self {
        self.trim = trim;
        self
    }

    /// Sets whether records may have more or fewer fields than the header
    pub fn set_flexible(&mut self, flexible: bool) -> &mut Self {
        self.flexible = flexible;
        self
    }

    /// Finds the field name for a given header using O(1) lookup
    pub(crate) fn get_field_for_header(&self, header: &str) -> Option<&str> {
        let header = header.trim_start_matches('\u{feff}').trim().to_lowercase();
        self.reverse_map.get(&header).map(|s| s.as_str())
    }

    /// The header name reported for a field when its column is missing.
    pub(crate) fn display_name(&self, field: &str) -> String {
        self.header_map
            .get(field)
            .and_then(|aliases| aliases.first())
            .cloned()
            .unwrap_or_else(|| field.to_string())
    }

    /// Gets all field mappings
    pub fn get_field_mappings(&self) -> &HashMap<String, Vec<String>> {
        &self.header_map
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        for field in REQUIRED_FIELDS {
            match self.header_map.get(*field) {
                Some(aliases) if !aliases.is_empty() => {}
                _ => return Err(format!("Required field '{}' has no aliases defined", field)),
            }
        }

        for (field, aliases) in &self.header_map {
            if field.is_empty() {
                return Err("Empty field name found in mappings".to_string());
            }
            for alias in aliases {
                if alias.trim().is_empty() {
                    return Err(format!("Empty alias found for field '{}'", field));
                }
            }
        }

        if self.delimiter == b'\n' || self.delimiter == b'\r' {
            return Err("Delimiter cannot be a newline character".to_string());
        }
        if self.delimiter == self.quote {
            return Err("Delimiter and quote character must differ".to_string());
        }

        let mut all_aliases = HashMap::new();
        for (field, aliases) in &self.header_map {
            for alias in aliases {
                let alias_lower = alias.trim().to_lowercase();
                if let Some(existing_field) = all_aliases.get(&alias_lower)
                    && existing_field != field
                {
                    return Err(format!(
                        "Alias '{}' is mapped to both '{}' and '{}'",
                        alias, existing_field, field
                    ));
                }
                all_aliases.insert(alias_lower, field.clone());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = ReaderConfig::new();
        assert_eq!(config.delimiter, b',');
        assert!(config.trim);
        assert!(!config.flexible);
        assert_eq!(config.header_map.len(), DEFAULT_HEADERS.len());
    }

    #[test]
    fn test_scopus_headers() {
        let config = ReaderConfig::new();
        assert_eq!(
            config.get_field_for_header("Authors with affiliations"),
            Some(fields::AUTHORS_WITH_AFFILIATIONS)
        );
        assert_eq!(
            config.get_field_for_header("Correspondence Address"),
            Some(fields::CORRESPONDENCE_ADDRESS)
        );
        assert_eq!(config.get_field_for_header("Authors"), None);
    }

    #[test]
    fn test_header_lookup_ignores_case_and_bom() {
        let config = ReaderConfig::new();
        assert_eq!(config.get_field_for_header("TITLE"), Some(fields::TITLE));
        assert_eq!(config.get_field_for_header("\u{feff}Year"), Some(fields::YEAR));
    }

    #[test]
    fn test_add_header_aliases() {
        let mut config = ReaderConfig::new();
        config.add_header_aliases(fields::YEAR, vec!["Publication Year".to_string()]);

        assert_eq!(config.get_field_for_header("year"), Some(fields::YEAR));
        assert_eq!(config.get_field_for_header("publication year"), Some(fields::YEAR));
        assert_eq!(config.display_name(fields::YEAR), "Year");
    }

    #[test]
    fn test_set_header_mapping_replaces() {
        let mut config = ReaderConfig::new();
        config.set_header_mapping(fields::TITLE, vec!["Document Title".to_string()]);
        assert_eq!(config.get_field_for_header("Title"), None);
        assert_eq!(config.display_name(fields::TITLE), "Document Title");
    }

    #[test]
    fn test_validate_success() {
        assert!(ReaderConfig::new().validate().is_ok());
    }

    #[test]
    fn test_validate_required_field_without_aliases() {
        let mut config = ReaderConfig::new();
        config.set_header_mapping(fields::CORRESPONDENCE_ADDRESS, Vec::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_duplicate_aliases() {
        let mut config = ReaderConfig::new();
        config.set_header_mapping(fields::TITLE, vec!["Year".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_alias() {
        let mut config = ReaderConfig::new();
        config.add_header_aliases(fields::TITLE, vec!["  ".to_string()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_invalid_delimiter() {
        let mut config = ReaderConfig::new();
        config.set_delimiter(b'\n');
        assert!(config.validate().is_err());

        config.set_delimiter(b'"');
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configuration_chaining() {
        let mut config = ReaderConfig::new();
        config
            .set_delimiter(b';')
            .set_quote(b'\'')
            .set_trim(false)
            .set_flexible(true);

        assert_eq!(config.delimiter, b';');
        assert_eq!(config.quote, b'\'');
        assert!(!config.trim);
        assert!(config.flexible);
    }
}
