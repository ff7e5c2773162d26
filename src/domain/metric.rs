// Station analytics domain models
use serde::{Deserialize, Serialize};

/// A single analytics tile. `value` is already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub hint: String,
}

impl MetricCard {
    pub fn new(label: impl Into<String>, value: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            hint: hint.into(),
        }
    }
}

/// Heading block shown above the station analytics cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationIntro {
    pub heading: String,
    pub text: String,
}

impl Default for StationIntro {
    fn default() -> Self {
        Self {
            heading: "Station Analytics".to_string(),
            text: "Throughput, bottleneck signals, and SLA risk insights powered by daily analytics transforms.".to_string(),
        }
    }
}

/// Content of the station analytics page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationDashboard {
    pub intro: StationIntro,
    pub cards: Vec<MetricCard>,
}
