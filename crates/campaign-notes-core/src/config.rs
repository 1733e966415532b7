//! Page configuration
//!
//! Every field is optional; an empty JSON object yields the stock page with a
//! single "Eberron" campaign and "All" selected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::markdown::MarkdownOptions;
use crate::page::PageLayout;
use crate::types::{CampaignOption, FilterCategory, MalformedEntryPolicy, DEFAULT_CAMPAIGN};

/// Default `<title>` of generated pages
pub const DEFAULT_TITLE: &str = "Campaign Notes";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Page title
    pub title: String,
    /// Campaign names offered by the selector, in order
    pub campaigns: Vec<String>,
    /// Filter button shown as selected
    pub selected_filter: FilterCategory,
    /// Handling of entries without a `markdown` string
    pub malformed_entries: MalformedEntryPolicy,
    /// Markdown extensions
    pub markdown: MarkdownOptions,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            campaigns: vec![DEFAULT_CAMPAIGN.to_string()],
            selected_filter: FilterCategory::All,
            malformed_entries: MalformedEntryPolicy::default(),
            markdown: MarkdownOptions::default(),
        }
    }
}

impl PageConfig {
    /// Parse and validate configuration JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading page config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.campaigns.is_empty() {
            return Err(Error::Config("at least one campaign is required".to_string()));
        }
        if let Some(blank) = self.campaigns.iter().position(|c| c.trim().is_empty()) {
            return Err(Error::Config(format!("campaign {} has an empty name", blank)));
        }
        for (i, name) in self.campaigns.iter().enumerate() {
            if self.campaigns[..i].contains(name) {
                return Err(Error::Config(format!("duplicate campaign: {}", name)));
            }
        }
        Ok(())
    }

    /// Fixed page parts described by this config
    pub fn layout(&self) -> PageLayout {
        PageLayout {
            campaigns: self.campaigns.iter().map(CampaignOption::new).collect(),
            selected_filter: self.selected_filter,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.layout(), PageLayout::default());
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(
            r#"{"campaigns": ["Eberron", "Greyhawk"], "malformed_entries": "reject"}"#,
        )
        .unwrap();
        assert_eq!(config.layout().campaigns.len(), 2);
        assert_eq!(config.malformed_entries, MalformedEntryPolicy::Reject);
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_rejects_empty_campaigns() {
        let err = PageConfig::from_json(r#"{"campaigns": []}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_duplicate_and_blank_campaigns() {
        assert!(PageConfig::from_json(r#"{"campaigns": ["A", "A"]}"#).is_err());
        assert!(PageConfig::from_json(r#"{"campaigns": ["A", "  "]}"#).is_err());
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = PageConfig::from_json(r#"{"filters": ["All"]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_pretty_json_roundtrips() {
        let json = PageConfig::default().to_json_pretty().unwrap();
        assert!(json.contains("\"Eberron\""));
        assert_eq!(PageConfig::from_json(&json).unwrap(), PageConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(&path, r#"{"title": "Sharn"}"#).unwrap();
        assert_eq!(PageConfig::load(&path).unwrap().title, "Sharn");
    }
}
