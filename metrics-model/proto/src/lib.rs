//! Protobuf message types for the metric exposition wire format.
//!
//! These structs mirror `proto/io/prometheus/client/metrics.proto` field for
//! field (proto2 semantics, package `io.prometheus.client`) and are kept in
//! sync with it by hand. Every scalar field is optional on the wire so that
//! absence round-trips as absence rather than as a zero value.
//!
//! This crate only defines the wire shapes. Validation of the type/payload
//! relationship lives in `metrics-model-codec`, which converts between these
//! structs and the `metrics-model-types` data model.
//!
//! # Feature flags
//!
//! - `with-serde`: Add serde serialization support to the message types

/// A label name/value pair
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct LabelPair {
    #[prost(string, optional, tag = "1")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "2")]
    pub value: ::core::option::Option<::prost::alloc::string::String>,
}

/// A gauge value payload
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct Gauge {
    #[prost(double, optional, tag = "1")]
    pub value: ::core::option::Option<f64>,
}

/// A counter value payload
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct Counter {
    #[prost(double, optional, tag = "1")]
    pub value: ::core::option::Option<f64>,
}

/// One quantile rank/value entry of a summary
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct Quantile {
    /// Rank in the [0, 1] range
    #[prost(double, optional, tag = "1")]
    pub quantile: ::core::option::Option<f64>,
    #[prost(double, optional, tag = "2")]
    pub value: ::core::option::Option<f64>,
}

/// A summary value payload
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct Summary {
    #[prost(uint64, optional, tag = "1")]
    pub sample_count: ::core::option::Option<u64>,
    #[prost(double, optional, tag = "2")]
    pub sample_sum: ::core::option::Option<f64>,
    /// In increasing order of rank
    #[prost(message, repeated, tag = "3")]
    pub quantile: ::prost::alloc::vec::Vec<Quantile>,
}

/// An untyped value payload
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct Untyped {
    #[prost(double, optional, tag = "1")]
    pub value: ::core::option::Option<f64>,
}

/// A histogram value payload
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct Histogram {
    #[prost(uint64, optional, tag = "1")]
    pub sample_count: ::core::option::Option<u64>,
    #[prost(double, optional, tag = "2")]
    pub sample_sum: ::core::option::Option<f64>,
    /// In increasing order of upper_bound; the +Inf bucket is last
    #[prost(message, repeated, tag = "3")]
    pub bucket: ::prost::alloc::vec::Vec<Bucket>,
}

/// One cumulative bucket of a histogram
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct Bucket {
    /// Cumulative count of observations <= upper_bound
    #[prost(uint64, optional, tag = "1")]
    pub cumulative_count: ::core::option::Option<u64>,
    /// Inclusive upper bound; +Inf for the last bucket
    #[prost(double, optional, tag = "2")]
    pub upper_bound: ::core::option::Option<f64>,
}

/// One labeled data point within a metric family.
///
/// Exactly one of the value payload fields is expected to be set, matching
/// the type declared by the owning family; the codec enforces this.
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct Metric {
    #[prost(message, repeated, tag = "1")]
    pub label: ::prost::alloc::vec::Vec<LabelPair>,
    #[prost(message, optional, tag = "2")]
    pub gauge: ::core::option::Option<Gauge>,
    #[prost(message, optional, tag = "3")]
    pub counter: ::core::option::Option<Counter>,
    #[prost(message, optional, tag = "4")]
    pub summary: ::core::option::Option<Summary>,
    #[prost(message, optional, tag = "5")]
    pub untyped: ::core::option::Option<Untyped>,
    /// Milliseconds since the Unix epoch
    #[prost(int64, optional, tag = "6")]
    pub timestamp_ms: ::core::option::Option<i64>,
    #[prost(message, optional, tag = "7")]
    pub histogram: ::core::option::Option<Histogram>,
}

/// A named group of metrics sharing one type and help text
#[derive(Clone, PartialEq, ::prost::Message)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
pub struct MetricFamily {
    #[prost(string, optional, tag = "1")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, optional, tag = "2")]
    pub help: ::core::option::Option<::prost::alloc::string::String>,
    /// Stored as a raw tag so unrecognized values survive until validation
    #[prost(enumeration = "MetricType", optional, tag = "3")]
    pub r#type: ::core::option::Option<i32>,
    #[prost(message, repeated, tag = "4")]
    pub metric: ::prost::alloc::vec::Vec<Metric>,
}

/// Wire tags of the fixed metric type set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[repr(i32)]
pub enum MetricType {
    Counter = 0,
    Gauge = 1,
    Summary = 2,
    Untyped = 3,
    Histogram = 4,
}

impl MetricType {
    /// String value of the enum field name as defined in the schema
    pub fn as_str_name(&self) -> &'static str {
        match self {
            MetricType::Counter => "COUNTER",
            MetricType::Gauge => "GAUGE",
            MetricType::Summary => "SUMMARY",
            MetricType::Untyped => "UNTYPED",
            MetricType::Histogram => "HISTOGRAM",
        }
    }

    /// Creates an enum from the schema field name
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "COUNTER" => Some(Self::Counter),
            "GAUGE" => Some(Self::Gauge),
            "SUMMARY" => Some(Self::Summary),
            "UNTYPED" => Some(Self::Untyped),
            "HISTOGRAM" => Some(Self::Histogram),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_label_pair_roundtrip() {
        let pair = LabelPair {
            name: Some("method".to_string()),
            value: Some("GET".to_string()),
        };

        let encoded = pair.encode_to_vec();
        let decoded = LabelPair::decode(encoded.as_slice()).unwrap();
        assert_eq!(decoded, pair);
    }

    #[test]
    fn test_absent_fields_are_not_encoded() {
        // An all-absent message encodes to zero bytes under proto2 optional
        // semantics; nothing is zero-filled.
        let metric = Metric::default();
        assert!(metric.encode_to_vec().is_empty());

        let family = MetricFamily {
            name: Some("up".to_string()),
            ..Default::default()
        };
        let decoded = MetricFamily::decode(family.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.name.as_deref(), Some("up"));
        assert_eq!(decoded.help, None);
        assert_eq!(decoded.r#type, None);
    }

    #[test]
    fn test_unknown_enum_tag_survives_decode() {
        let family = MetricFamily {
            r#type: Some(42),
            ..Default::default()
        };
        let decoded = MetricFamily::decode(family.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.r#type, Some(42));
        assert!(MetricType::try_from(42).is_err());
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn test_serde_field_names() {
        let pair = LabelPair {
            name: Some("method".to_string()),
            value: Some("GET".to_string()),
        };
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["name"], "method");
        assert_eq!(json["value"], "GET");

        let metric = Metric {
            timestamp_ms: Some(1),
            ..Default::default()
        };
        let json = serde_json::to_value(&metric).unwrap();
        assert_eq!(json["timestampMs"], 1);
    }

    #[test]
    fn test_str_names() {
        assert_eq!(MetricType::Histogram.as_str_name(), "HISTOGRAM");
        assert_eq!(
            MetricType::from_str_name("COUNTER"),
            Some(MetricType::Counter)
        );
        assert_eq!(MetricType::from_str_name("counter"), None);
    }
}
