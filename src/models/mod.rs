pub mod document;

pub use document::{FieldValue, HealthDocument};

/// 集群整体健康状态，未知取值原样保留。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus<'a> {
    Green,
    Yellow,
    Red,
    Other(&'a str),
}

impl<'a> From<&'a str> for HealthStatus<'a> {
    fn from(s: &'a str) -> Self {
        match s {
            "green" => HealthStatus::Green,
            "yellow" => HealthStatus::Yellow,
            "red" => HealthStatus::Red,
            other => HealthStatus::Other(other),
        }
    }
}

impl std::fmt::Display for HealthStatus<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Green => write!(f, "green"),
            HealthStatus::Yellow => write!(f, "yellow"),
            HealthStatus::Red => write!(f, "red"),
            HealthStatus::Other(s) => write!(f, "{s}"),
        }
    }
}
