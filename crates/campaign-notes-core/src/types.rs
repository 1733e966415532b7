//! Core types for Campaign Notes

use serde::{Deserialize, Serialize};

/// One markdown-bearing note, rendered as one card.
///
/// Fields other than `markdown` in the source record are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Markdown body of the note
    pub markdown: String,
    /// Where the note came from (relative path for directory sources)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Entry {
    /// Create an entry from markdown text
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
            source: None,
        }
    }

    /// Attach a source label
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// A selectable campaign in the selector card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignOption {
    /// Visible option text
    pub label: String,
    /// Submitted option value
    pub value: String,
}

impl CampaignOption {
    /// Option whose value mirrors its label
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
        }
    }
}

impl Default for CampaignOption {
    fn default() -> Self {
        Self::new(DEFAULT_CAMPAIGN)
    }
}

/// Name of the campaign offered when none is configured
pub const DEFAULT_CAMPAIGN: &str = "Eberron";

/// Category button in the filter bar.
///
/// The buttons are inert: selection is fixed at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    #[default]
    All,
    Characters,
    Sessions,
    Places,
}

impl FilterCategory {
    /// Every category, in display order
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::All,
        FilterCategory::Characters,
        FilterCategory::Sessions,
        FilterCategory::Places,
    ];

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            FilterCategory::All => "All",
            FilterCategory::Characters => "Characters",
            FilterCategory::Sessions => "Sessions",
            FilterCategory::Places => "Places",
        }
    }
}

impl std::fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What to do with an entry record that has no usable `markdown` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedEntryPolicy {
    /// Render an empty card so every record still yields one card
    #[default]
    EmptyCard,
    /// Drop the record
    Skip,
    /// Fail the whole load
    Reject,
}
