use crate::metric::Metric;
use std::fmt;

/// The fixed set of metric types a family can declare.
///
/// Every metric within a family must carry a value payload of the matching
/// shape; the codec rejects families that violate this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricType {
    /// Monotonically increasing 64-bit float value
    Counter,
    /// Arbitrary 64-bit float value that can go up and down
    Gauge,
    /// Pre-computed quantiles over a sliding window, plus count and sum
    Summary,
    /// A single float value with no further semantics attached
    Untyped,
    /// Cumulative buckets over fixed upper bounds, plus count and sum
    Histogram,
}

impl MetricType {
    /// Lowercase name as used in text exposition formats
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Counter => "counter",
            MetricType::Gauge => "gauge",
            MetricType::Summary => "summary",
            MetricType::Untyped => "untyped",
            MetricType::Histogram => "histogram",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named group of metrics sharing one type and help text
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricFamily {
    /// Unique name of the family, e.g. `http_requests_total`
    pub name: String,
    /// Human-readable description of what the family measures
    pub help: String,
    /// Type shared by every metric in the family
    pub metric_type: MetricType,
    /// The metrics of this family, in exposition order
    pub metrics: Vec<Metric>,
}
