//! Wire codec for the metric exposition data model.
//!
//! [`encode`] turns a [`MetricFamily`] into one varint length-delimited
//! protobuf record of the `io.prometheus.client` schema; [`decode`] is its
//! inverse. [`encode_all`] and [`decode_all`] handle the concatenated
//! multi-family streams used by the delimited exposition format.
//!
//! Both directions validate the data model invariants that the wire format
//! alone cannot express: every metric's payload must match its family's
//! declared type, and label names must be unique within a metric. Unknown
//! fields in incoming bytes are ignored so that schema evolution on the
//! producer side never breaks older consumers.
//!
//! Encoding and decoding are pure and touch no shared state; they can be
//! called concurrently on independent inputs without coordination.
//!
//! # Examples
//!
//! ```rust
//! use metrics_model_codec::{decode, encode};
//! use metrics_model_codec::{LabelPair, Metric, MetricFamily, MetricType, MetricValue};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let family = MetricFamily {
//!     name: "http_requests_total".to_string(),
//!     help: "Total HTTP requests".to_string(),
//!     metric_type: MetricType::Counter,
//!     metrics: vec![Metric {
//!         labels: vec![LabelPair::new("method", "GET")],
//!         value: MetricValue::Counter(42.0),
//!         timestamp_ms: None,
//!     }],
//! };
//!
//! let bytes = encode(&family)?;
//! assert_eq!(decode(&bytes)?, family);
//! # Ok(())
//! # }
//! ```

mod convert;

pub use metrics_model_error::{DecodingError, EncodingError};
pub use metrics_model_types::{
    Bucket, LabelPair, Metric, MetricFamily, MetricType, MetricValue, Quantile,
};

use metrics_model_proto as wire;
use prost::Message;

/// Encode one metric family as a length-delimited wire record.
///
/// The output is deterministic: identical input always yields identical
/// bytes. Optional fields absent from the value are omitted from the wire,
/// never zero-filled.
pub fn encode(family: &MetricFamily) -> Result<Vec<u8>, EncodingError> {
    let record = convert::family_to_wire(family)?;
    Ok(record.encode_length_delimited_to_vec())
}

/// Encode a sequence of metric families as concatenated wire records
pub fn encode_all(families: &[MetricFamily]) -> Result<Vec<u8>, EncodingError> {
    let mut out = Vec::new();
    for family in families {
        let record = convert::family_to_wire(family)?;
        out.extend_from_slice(&record.encode_length_delimited_to_vec());
    }
    Ok(out)
}

/// Decode exactly one length-delimited wire record into a metric family.
///
/// Fails on truncated input, on trailing bytes after the record, on an
/// unrecognized metric type tag, and on payloads that do not match the
/// declared type. Unrecognized fields inside the record are ignored.
pub fn decode(bytes: &[u8]) -> Result<MetricFamily, DecodingError> {
    let mut buf = bytes;
    let record = wire::MetricFamily::decode_length_delimited(&mut buf)?;
    if !buf.is_empty() {
        return Err(DecodingError::TrailingData(buf.len()));
    }
    convert::family_from_wire(record)
}

/// Decode a stream of concatenated length-delimited wire records.
///
/// Empty input yields an empty vector. Any malformed record fails the whole
/// call; no partial result is returned.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<MetricFamily>, DecodingError> {
    let mut buf = bytes;
    let mut families = Vec::new();
    while !buf.is_empty() {
        let record = wire::MetricFamily::decode_length_delimited(&mut buf)?;
        families.push(convert::family_from_wire(record)?);
    }
    Ok(families)
}
