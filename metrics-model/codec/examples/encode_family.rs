//! Encode a small metric family and print the wire record.
//!
//! Run with: cargo run -p metrics-model-codec --example encode_family

use metrics_model_codec::{decode, encode, LabelPair, Metric, MetricFamily, MetricType, MetricValue};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let family = MetricFamily {
        name: "http_requests_total".to_string(),
        help: "Total HTTP requests".to_string(),
        metric_type: MetricType::Counter,
        metrics: vec![
            Metric {
                labels: vec![LabelPair::new("method", "GET")],
                value: MetricValue::Counter(42.0),
                timestamp_ms: None,
            },
            Metric {
                labels: vec![LabelPair::new("method", "POST")],
                value: MetricValue::Counter(7.0),
                timestamp_ms: None,
            },
        ],
    };

    let bytes = encode(&family)?;
    println!("{} bytes on the wire:", bytes.len());
    for chunk in bytes.chunks(16) {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        println!("  {}", hex.join(" "));
    }

    let decoded = decode(&bytes)?;
    println!("decoded family: {} ({})", decoded.name, decoded.metric_type);
    for metric in &decoded.metrics {
        println!("  {:?}", metric);
    }

    Ok(())
}
