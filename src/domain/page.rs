// Page-level domain models
use super::error::SiteError;
use serde::{Deserialize, Serialize};

/// Descriptive block on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub description: String,
}

impl Panel {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Document metadata and the heading rendered by the layout shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetadata {
    pub title: String,
    pub heading: String,
    pub description: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "NexusCargo Platform".to_string(),
            heading: "NexusCargo AI Platform".to_string(),
            description: "Unified multi-tenant logistics AI SaaS".to_string(),
        }
    }
}

impl SiteMetadata {
    pub fn validate(&self) -> Result<(), SiteError> {
        if self.title.trim().is_empty() {
            return Err(SiteError::EmptySiteTitle);
        }
        Ok(())
    }
}
