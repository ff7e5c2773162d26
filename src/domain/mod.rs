// Domain layer - Site content models and validation
pub mod error;
pub mod metric;
pub mod navigation;
pub mod page;
pub mod theme;
