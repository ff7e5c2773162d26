// Navigation domain model
use super::error::SiteError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One navigable destination shown in the top bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Ordered, validated set of navigation links. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavModel {
    links: Vec<NavLink>,
}

impl NavModel {
    pub fn new(links: Vec<NavLink>) -> Result<Self, SiteError> {
        let mut seen = HashSet::new();
        for link in &links {
            if !link.path.starts_with('/') {
                return Err(SiteError::InvalidNavPath(link.path.clone()));
            }
            if !seen.insert(link.path.as_str()) {
                return Err(SiteError::DuplicateNavPath(link.path.clone()));
            }
        }
        Ok(Self { links })
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_declared_order() {
        let model = NavModel::new(vec![
            NavLink::new("Station", "/dashboards/station-analytics"),
            NavLink::new("Home", "/"),
        ])
        .unwrap();

        let paths: Vec<&str> = model.links().iter().map(|l| l.path.as_str()).collect();
        assert_eq!(paths, vec!["/dashboards/station-analytics", "/"]);
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let err = NavModel::new(vec![
            NavLink::new("Home", "/"),
            NavLink::new("Start", "/"),
        ])
        .unwrap_err();

        assert_eq!(err, SiteError::DuplicateNavPath("/".to_string()));
    }

    #[test]
    fn test_rejects_relative_path() {
        let err = NavModel::new(vec![NavLink::new("Review", "review")]).unwrap_err();
        assert_eq!(err, SiteError::InvalidNavPath("review".to_string()));
    }

    #[test]
    fn test_empty_model_is_valid() {
        let model = NavModel::new(Vec::new()).unwrap();
        assert!(model.is_empty());
    }
}
