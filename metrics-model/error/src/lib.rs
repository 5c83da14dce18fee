//! Error types shared by the metrics data model crates.
//!
//! Encoding and decoding are pure functions, so every failure is reported
//! synchronously to the caller through one of the two enums below. Nothing is
//! retried or logged here; callers decide what to do with a failed call.

use thiserror::Error;

/// Errors raised when an in-memory metric family cannot be encoded.
///
/// These always indicate a malformed value on the producer side. The wire
/// format itself cannot fail to serialize a well-formed family.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// A metric carries a value payload that does not match its family's type,
    /// e.g. a summary payload inside a counter family.
    #[error("metric family {family:?}: expected a {expected} value, found {found}")]
    PayloadMismatch {
        /// Name of the offending metric family
        family: String,
        /// Type declared by the family
        expected: &'static str,
        /// Type of the payload actually present
        found: &'static str,
    },

    /// A metric declares the same label name more than once.
    #[error("metric family {family:?}: duplicate label name {label:?}")]
    DuplicateLabel {
        /// Name of the offending metric family
        family: String,
        /// The repeated label name
        label: String,
    },
}

/// Errors raised when wire bytes cannot be decoded into a metric family.
#[derive(Debug, Error)]
pub enum DecodingError {
    /// Malformed or truncated protobuf data
    #[error("malformed wire data: {0}")]
    Wire(#[from] prost::DecodeError),

    /// The metric type tag is not one of the known variants
    #[error("unrecognized metric type tag {0}")]
    UnknownMetricType(i32),

    /// A field the data model requires was absent from the wire
    #[error("missing required field {0:?}")]
    MissingField(&'static str),

    /// The declared family type and the payload present on a metric disagree
    #[error("metric family {family:?}: expected a {expected} value, found {found}")]
    PayloadMismatch {
        /// Name of the offending metric family
        family: String,
        /// Type declared by the family
        expected: &'static str,
        /// Payload field actually present
        found: &'static str,
    },

    /// A metric declares the same label name more than once
    #[error("metric family {family:?}: duplicate label name {label:?}")]
    DuplicateLabel {
        /// Name of the offending metric family
        family: String,
        /// The repeated label name
        label: String,
    },

    /// Bytes remain after the end of the decoded record
    #[error("{0} trailing bytes after metric family record")]
    TrailingData(usize),
}
