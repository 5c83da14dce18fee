//! Conversions between the in-memory data model and the wire structs.
//!
//! This is where the type/payload relationship is enforced in both
//! directions. The wire structs keep every payload field independently
//! optional, so a decoded metric may carry no payload, the wrong payload, or
//! several at once; all of those are rejected here.

use metrics_model_error::{DecodingError, EncodingError};
use metrics_model_proto as wire;
use metrics_model_types::{
    Bucket, LabelPair, Metric, MetricFamily, MetricType, MetricValue, Quantile,
};
use std::collections::HashSet;

pub(crate) fn family_to_wire(family: &MetricFamily) -> Result<wire::MetricFamily, EncodingError> {
    let mut metrics = Vec::with_capacity(family.metrics.len());
    for metric in &family.metrics {
        metrics.push(metric_to_wire(family, metric)?);
    }

    Ok(wire::MetricFamily {
        name: Some(family.name.clone()),
        help: Some(family.help.clone()),
        r#type: Some(type_to_wire(family.metric_type) as i32),
        metric: metrics,
    })
}

pub(crate) fn family_from_wire(record: wire::MetricFamily) -> Result<MetricFamily, DecodingError> {
    let name = record.name.ok_or(DecodingError::MissingField("name"))?;
    let help = record.help.ok_or(DecodingError::MissingField("help"))?;
    let raw_type = record.r#type.ok_or(DecodingError::MissingField("type"))?;
    let metric_type = type_from_wire(raw_type)?;

    let mut metrics = Vec::with_capacity(record.metric.len());
    for metric in record.metric {
        metrics.push(metric_from_wire(&name, metric_type, metric)?);
    }

    Ok(MetricFamily {
        name,
        help,
        metric_type,
        metrics,
    })
}

fn type_to_wire(metric_type: MetricType) -> wire::MetricType {
    match metric_type {
        MetricType::Counter => wire::MetricType::Counter,
        MetricType::Gauge => wire::MetricType::Gauge,
        MetricType::Summary => wire::MetricType::Summary,
        MetricType::Untyped => wire::MetricType::Untyped,
        MetricType::Histogram => wire::MetricType::Histogram,
    }
}

fn type_from_wire(raw: i32) -> Result<MetricType, DecodingError> {
    let tag =
        wire::MetricType::try_from(raw).map_err(|_| DecodingError::UnknownMetricType(raw))?;

    Ok(match tag {
        wire::MetricType::Counter => MetricType::Counter,
        wire::MetricType::Gauge => MetricType::Gauge,
        wire::MetricType::Summary => MetricType::Summary,
        wire::MetricType::Untyped => MetricType::Untyped,
        wire::MetricType::Histogram => MetricType::Histogram,
    })
}

fn metric_to_wire(family: &MetricFamily, metric: &Metric) -> Result<wire::Metric, EncodingError> {
    let mut seen = HashSet::with_capacity(metric.labels.len());
    for label in &metric.labels {
        if !seen.insert(label.name.as_str()) {
            return Err(EncodingError::DuplicateLabel {
                family: family.name.clone(),
                label: label.name.clone(),
            });
        }
    }

    if metric.value.metric_type() != family.metric_type {
        return Err(EncodingError::PayloadMismatch {
            family: family.name.clone(),
            expected: family.metric_type.as_str(),
            found: metric.value.metric_type().as_str(),
        });
    }

    let mut out = wire::Metric {
        label: metric
            .labels
            .iter()
            .map(|pair| wire::LabelPair {
                name: Some(pair.name.clone()),
                value: Some(pair.value.clone()),
            })
            .collect(),
        timestamp_ms: metric.timestamp_ms,
        ..Default::default()
    };

    match &metric.value {
        MetricValue::Counter(value) => {
            out.counter = Some(wire::Counter {
                value: Some(*value),
            });
        }
        MetricValue::Gauge(value) => {
            out.gauge = Some(wire::Gauge {
                value: Some(*value),
            });
        }
        MetricValue::Untyped(value) => {
            out.untyped = Some(wire::Untyped {
                value: Some(*value),
            });
        }
        MetricValue::Summary {
            sample_count,
            sample_sum,
            quantiles,
        } => {
            out.summary = Some(wire::Summary {
                sample_count: Some(*sample_count),
                sample_sum: Some(*sample_sum),
                quantile: quantiles
                    .iter()
                    .map(|q| wire::Quantile {
                        quantile: Some(q.quantile),
                        value: Some(q.value),
                    })
                    .collect(),
            });
        }
        MetricValue::Histogram {
            sample_count,
            sample_sum,
            buckets,
        } => {
            out.histogram = Some(wire::Histogram {
                sample_count: Some(*sample_count),
                sample_sum: Some(*sample_sum),
                bucket: buckets
                    .iter()
                    .map(|b| wire::Bucket {
                        cumulative_count: Some(b.cumulative_count),
                        upper_bound: Some(b.upper_bound),
                    })
                    .collect(),
            });
        }
    }

    Ok(out)
}

fn metric_from_wire(
    family: &str,
    metric_type: MetricType,
    metric: wire::Metric,
) -> Result<Metric, DecodingError> {
    let wire::Metric {
        label,
        gauge,
        counter,
        summary,
        untyped,
        histogram,
        timestamp_ms,
    } = metric;

    let mut labels = Vec::with_capacity(label.len());
    let mut seen = HashSet::with_capacity(label.len());
    for pair in label {
        let name = pair.name.ok_or(DecodingError::MissingField("label.name"))?;
        let value = pair
            .value
            .ok_or(DecodingError::MissingField("label.value"))?;
        if !seen.insert(name.clone()) {
            return Err(DecodingError::DuplicateLabel {
                family: family.to_string(),
                label: name,
            });
        }
        labels.push(LabelPair { name, value });
    }

    let expected = metric_type.as_str();

    // Reject every payload field that does not match the declared type
    // before looking at the one that should be there.
    for (found, present) in [
        ("counter", counter.is_some()),
        ("gauge", gauge.is_some()),
        ("summary", summary.is_some()),
        ("untyped", untyped.is_some()),
        ("histogram", histogram.is_some()),
    ] {
        if present && found != expected {
            return Err(DecodingError::PayloadMismatch {
                family: family.to_string(),
                expected,
                found,
            });
        }
    }

    let value = match metric_type {
        MetricType::Counter => {
            let payload = counter.ok_or(DecodingError::MissingField("counter"))?;
            MetricValue::Counter(
                payload
                    .value
                    .ok_or(DecodingError::MissingField("counter.value"))?,
            )
        }
        MetricType::Gauge => {
            let payload = gauge.ok_or(DecodingError::MissingField("gauge"))?;
            MetricValue::Gauge(
                payload
                    .value
                    .ok_or(DecodingError::MissingField("gauge.value"))?,
            )
        }
        MetricType::Untyped => {
            let payload = untyped.ok_or(DecodingError::MissingField("untyped"))?;
            MetricValue::Untyped(
                payload
                    .value
                    .ok_or(DecodingError::MissingField("untyped.value"))?,
            )
        }
        MetricType::Summary => {
            let payload = summary.ok_or(DecodingError::MissingField("summary"))?;
            MetricValue::Summary {
                // proto2 defaults for absent statistics
                sample_count: payload.sample_count.unwrap_or(0),
                sample_sum: payload.sample_sum.unwrap_or(0.0),
                quantiles: payload
                    .quantile
                    .into_iter()
                    .map(quantile_from_wire)
                    .collect::<Result<_, _>>()?,
            }
        }
        MetricType::Histogram => {
            let payload = histogram.ok_or(DecodingError::MissingField("histogram"))?;
            MetricValue::Histogram {
                sample_count: payload.sample_count.unwrap_or(0),
                sample_sum: payload.sample_sum.unwrap_or(0.0),
                buckets: payload
                    .bucket
                    .into_iter()
                    .map(bucket_from_wire)
                    .collect::<Result<_, _>>()?,
            }
        }
    };

    Ok(Metric {
        labels,
        value,
        timestamp_ms,
    })
}

fn quantile_from_wire(quantile: wire::Quantile) -> Result<Quantile, DecodingError> {
    Ok(Quantile {
        quantile: quantile
            .quantile
            .ok_or(DecodingError::MissingField("quantile.quantile"))?,
        value: quantile
            .value
            .ok_or(DecodingError::MissingField("quantile.value"))?,
    })
}

fn bucket_from_wire(bucket: wire::Bucket) -> Result<Bucket, DecodingError> {
    Ok(Bucket {
        upper_bound: bucket
            .upper_bound
            .ok_or(DecodingError::MissingField("bucket.upper_bound"))?,
        cumulative_count: bucket.cumulative_count.unwrap_or(0),
    })
}
