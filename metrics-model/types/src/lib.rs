//! In-memory representation of metric exposition data.
//!
//! A [`MetricFamily`] groups metrics that share one name, help text and type;
//! each [`Metric`] inside it carries a set of labels and exactly one value
//! payload whose shape is dictated by the family's [`MetricType`].
//!
//! All types here are immutable value objects: they are constructed once by
//! the instrumentation side, serialized, and discarded. Updates are modeled by
//! constructing a new value, never by mutating an existing one.

mod family;
mod metric;

pub use family::{MetricFamily, MetricType};
pub use metric::{Bucket, LabelPair, Metric, MetricValue, Quantile};
