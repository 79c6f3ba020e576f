//! Configuration for the view engines.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::Error;

/// The config for pagination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Items per page for viewports between 1024 and 1400 pixels wide.
    pub medium_items_per_page: usize,
    /// Items per page for viewports 2100 pixels wide or more.
    pub max_items_per_page: usize,
    /// Items per page for viewports between 1600 and 2100 pixels wide.
    pub large_breakpoint_items_per_page: usize,
    /// The maximum number of pages to show in the pagination indicator.
    pub max_page_indicators: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            medium_items_per_page: 2,
            max_items_per_page: 4,
            large_breakpoint_items_per_page: 3,
            max_page_indicators: 5,
        }
    }
}

/// Top level configuration, usually loaded from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Page sizes and indicator limits.
    pub pagination: PaginationConfig,
    /// The canonical timezone used to decide what "today" is.
    pub timezone: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            pagination: PaginationConfig::default(),
            timezone: "Etc/UTC".to_owned(),
        }
    }
}

impl ViewConfig {
    /// Read the config from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [Error::IoError] if the file cannot be read,
    /// [Error::JSONError] if it is not valid JSON, or
    /// [Error::InvalidConfig] if a page size is zero.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|error| Error::IoError {
            path: path.display().to_string(),
            reason: error.to_string(),
        })?;

        Self::from_json(&text)
    }

    /// Parse the config from JSON text.
    ///
    /// # Errors
    /// See [ViewConfig::load].
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let config: ViewConfig = serde_json::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        let pagination = &self.pagination;

        for (name, value) in [
            ("medium_items_per_page", pagination.medium_items_per_page),
            ("max_items_per_page", pagination.max_items_per_page),
            (
                "large_breakpoint_items_per_page",
                pagination.large_breakpoint_items_per_page,
            ),
        ] {
            if value == 0 {
                return Err(Error::InvalidConfig(format!("{name} must be at least 1")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{PaginationConfig, ViewConfig};

    #[test]
    fn empty_object_uses_defaults() {
        let got = ViewConfig::from_json("{}").unwrap();

        assert_eq!(got, ViewConfig::default());
    }

    #[test]
    fn partial_pagination_section_keeps_other_defaults() {
        let got = ViewConfig::from_json(r#"{"pagination": {"max_items_per_page": 6}}"#).unwrap();

        assert_eq!(
            got.pagination,
            PaginationConfig {
                max_items_per_page: 6,
                ..Default::default()
            }
        );
        assert_eq!(got.timezone, "Etc/UTC");
    }

    #[test]
    fn rejects_zero_page_size() {
        let got = ViewConfig::from_json(r#"{"pagination": {"medium_items_per_page": 0}}"#);

        assert_eq!(
            got,
            Err(Error::InvalidConfig(
                "medium_items_per_page must be at least 1".to_owned()
            ))
        );
    }

    #[test]
    fn rejects_malformed_json() {
        let got = ViewConfig::from_json("{");

        assert!(matches!(got, Err(Error::JSONError(_))));
    }
}
