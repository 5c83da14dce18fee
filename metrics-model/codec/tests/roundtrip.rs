use metrics_model_codec::{
    decode, decode_all, encode, encode_all, Bucket, EncodingError, LabelPair, Metric,
    MetricFamily, MetricType, MetricValue, Quantile,
};

fn http_requests_total() -> MetricFamily {
    MetricFamily {
        name: "http_requests_total".to_string(),
        help: "Total HTTP requests".to_string(),
        metric_type: MetricType::Counter,
        metrics: vec![Metric {
            labels: vec![LabelPair::new("method", "GET")],
            value: MetricValue::Counter(42.0),
            timestamp_ms: None,
        }],
    }
}

fn request_duration_seconds() -> MetricFamily {
    MetricFamily {
        name: "request_duration_seconds".to_string(),
        help: "Request duration".to_string(),
        metric_type: MetricType::Histogram,
        metrics: vec![Metric {
            labels: vec![],
            value: MetricValue::Histogram {
                sample_count: 20,
                sample_sum: 13.37,
                buckets: vec![
                    Bucket {
                        upper_bound: 0.1,
                        cumulative_count: 5,
                    },
                    Bucket {
                        upper_bound: 1.0,
                        cumulative_count: 12,
                    },
                    Bucket {
                        upper_bound: f64::INFINITY,
                        cumulative_count: 20,
                    },
                ],
            },
            timestamp_ms: None,
        }],
    }
}

#[test]
fn counter_roundtrip() {
    let family = http_requests_total();
    let decoded = decode(&encode(&family).unwrap()).unwrap();

    assert_eq!(decoded, family);
    assert_eq!(decoded.metrics[0].timestamp_ms, None);
}

#[test]
fn histogram_roundtrip_keeps_infinite_bound() {
    let family = request_duration_seconds();
    let decoded = decode(&encode(&family).unwrap()).unwrap();

    assert_eq!(decoded, family);
    let MetricValue::Histogram { ref buckets, .. } = decoded.metrics[0].value else {
        panic!("expected a histogram payload");
    };
    assert_eq!(buckets.len(), 3);
    assert_eq!(buckets[2].upper_bound, f64::INFINITY);
    assert_eq!(buckets[2].cumulative_count, 20);
}

#[test]
fn summary_roundtrip_with_timestamp() {
    let family = MetricFamily {
        name: "rpc_duration_seconds".to_string(),
        help: "RPC duration".to_string(),
        metric_type: MetricType::Summary,
        metrics: vec![Metric {
            labels: vec![LabelPair::new("service", "auth")],
            value: MetricValue::Summary {
                sample_count: 100,
                sample_sum: 7.5,
                quantiles: vec![
                    Quantile {
                        quantile: 0.5,
                        value: 0.05,
                    },
                    Quantile {
                        quantile: 0.99,
                        value: 0.7,
                    },
                ],
            },
            timestamp_ms: Some(1_700_000_000_000),
        }],
    };

    let decoded = decode(&encode(&family).unwrap()).unwrap();
    assert_eq!(decoded, family);
    assert_eq!(decoded.metrics[0].timestamp_ms, Some(1_700_000_000_000));
}

#[test]
fn gauge_negative_infinity_roundtrips() {
    let family = MetricFamily {
        name: "temperature_celsius".to_string(),
        help: "Temperature".to_string(),
        metric_type: MetricType::Gauge,
        metrics: vec![Metric {
            labels: vec![],
            value: MetricValue::Gauge(f64::NEG_INFINITY),
            timestamp_ms: None,
        }],
    };

    let decoded = decode(&encode(&family).unwrap()).unwrap();
    let MetricValue::Gauge(value) = decoded.metrics[0].value else {
        panic!("expected a gauge payload");
    };
    assert_eq!(value, f64::NEG_INFINITY);
}

#[test]
fn nan_roundtrips_bit_for_bit() {
    // A non-canonical NaN payload; the fixed64 encoding must carry the exact
    // bit pattern through.
    let nan = f64::from_bits(0x7ff8_dead_beef_0001);
    let family = MetricFamily {
        name: "last_error_value".to_string(),
        help: "Last observed value".to_string(),
        metric_type: MetricType::Untyped,
        metrics: vec![Metric {
            labels: vec![],
            value: MetricValue::Untyped(nan),
            timestamp_ms: None,
        }],
    };

    let decoded = decode(&encode(&family).unwrap()).unwrap();
    let MetricValue::Untyped(value) = decoded.metrics[0].value else {
        panic!("expected an untyped payload");
    };
    assert_eq!(value.to_bits(), nan.to_bits());
}

#[test]
fn reencode_of_own_output_is_byte_identical() {
    for family in [http_requests_total(), request_duration_seconds()] {
        let bytes = encode(&family).unwrap();
        let reencoded = encode(&decode(&bytes).unwrap()).unwrap();
        assert_eq!(reencoded, bytes);
    }
}

#[test]
fn encode_is_deterministic() {
    let family = request_duration_seconds();
    assert_eq!(encode(&family).unwrap(), encode(&family).unwrap());
}

#[test]
fn payload_mismatch_rejected_on_encode() {
    let mut family = http_requests_total();
    family.metrics[0].value = MetricValue::Summary {
        sample_count: 1,
        sample_sum: 1.0,
        quantiles: vec![],
    };

    let err = encode(&family).unwrap_err();
    assert!(matches!(
        err,
        EncodingError::PayloadMismatch {
            expected: "counter",
            found: "summary",
            ..
        }
    ));
}

#[test]
fn multi_family_stream_roundtrip() {
    let families = vec![http_requests_total(), request_duration_seconds()];
    let bytes = encode_all(&families).unwrap();

    assert_eq!(decode_all(&bytes).unwrap(), families);
}

#[test]
fn stream_of_one_matches_single_encode() {
    let family = http_requests_total();
    assert_eq!(
        encode_all(std::slice::from_ref(&family)).unwrap(),
        encode(&family).unwrap()
    );
}

#[test]
fn empty_stream_decodes_to_nothing() {
    assert!(decode_all(&[]).unwrap().is_empty());
    assert!(encode_all(&[]).unwrap().is_empty());
}
