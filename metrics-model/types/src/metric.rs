use crate::family::MetricType;

/// A single name/value dimension distinguishing one metric from another
/// within its family. Label names must be unique within a metric.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelPair {
    /// Label name, e.g. `method`
    pub name: String,
    /// Label value, e.g. `GET`
    pub value: String,
}

impl LabelPair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A summary payload entry mapping a quantile rank to an observed value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantile {
    /// Rank in the [0, 1] range, e.g. 0.99
    pub quantile: f64,
    /// Observed value at that rank
    pub value: f64,
}

/// A histogram payload entry mapping an upper bound to a cumulative count
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bucket {
    /// Inclusive upper bound of the bucket; `f64::INFINITY` for the last,
    /// unbounded bucket
    pub upper_bound: f64,
    /// Number of observations less than or equal to the upper bound
    pub cumulative_count: u64,
}

/// The value payload of a metric.
///
/// Exactly one variant is present per metric, and it must match the type
/// declared by the owning family.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricValue {
    /// Current value of a counter
    Counter(f64),
    /// Current value of a gauge
    Gauge(f64),
    /// Current value of an untyped metric
    Untyped(f64),
    /// Count, sum and quantiles of a summary
    Summary {
        /// Number of observations
        sample_count: u64,
        /// Sum of all observed values
        sample_sum: f64,
        /// Quantiles in exposition order
        quantiles: Vec<Quantile>,
    },
    /// Count, sum and buckets of a histogram
    Histogram {
        /// Number of observations
        sample_count: u64,
        /// Sum of all observed values
        sample_sum: f64,
        /// Buckets in increasing order of upper bound
        buckets: Vec<Bucket>,
    },
}

impl MetricValue {
    /// The family type this payload shape belongs to
    pub fn metric_type(&self) -> MetricType {
        match self {
            MetricValue::Counter(_) => MetricType::Counter,
            MetricValue::Gauge(_) => MetricType::Gauge,
            MetricValue::Untyped(_) => MetricType::Untyped,
            MetricValue::Summary { .. } => MetricType::Summary,
            MetricValue::Histogram { .. } => MetricType::Histogram,
        }
    }
}

/// One labeled data point (or summary/histogram) within a family
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metric {
    /// Labels of this metric, names unique within the metric
    pub labels: Vec<LabelPair>,
    /// The value payload; its shape must match the family's type
    pub value: MetricValue,
    /// Optional timestamp in milliseconds since the Unix epoch
    pub timestamp_ms: Option<i64>,
}
