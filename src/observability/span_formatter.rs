//! OTLP JSON span formatter.
//!
//! Output follows the OTLP/JSON trace encoding, so the file can be replayed
//! into any OTLP collector.
//!
//! ```json
//! {
//!   "resourceSpans": [{
//!     "resource": { "attributes": [{"key": "service.name", "value": {"stringValue": "book-finder"}}] },
//!     "scopeSpans": [{ "scope": {"name": "book-finder"}, "spans": [...] }]
//!   }]
//! }
//! ```

use super::init::SERVICE_NAME;
use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{Duration, SystemTime};

pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Formats a batch of spans as one OTLP JSON document.
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(k, v)| {
                json!({
                    "key": k.to_string(),
                    "value": Self::format_attribute_value(v)
                })
            })
            .collect();

        let spans_json: Vec<JsonValue> = batch.iter().map(Self::format_span).collect();

        json!({
            "resourceSpans": [{
                "resource": {
                    "attributes": resource_attrs
                },
                "scopeSpans": [{
                    "scope": {
                        "name": SERVICE_NAME,
                    },
                    "spans": spans_json
                }]
            }]
        })
    }

    /// IDs as lowercase hex, timestamps as decimal nanosecond strings.
    fn format_span(span: &SpanData) -> JsonValue {
        let (status_code, status_message) = Self::format_status(&span.status);

        json!({
            "traceId": format!("{:032x}", span.span_context.trace_id()),
            "spanId": format!("{:016x}", span.span_context.span_id()),
            "parentSpanId": if span.parent_span_id == SpanId::INVALID {
                String::new()
            } else {
                format!("{:016x}", span.parent_span_id)
            },
            "name": span.name,
            "kind": Self::span_kind_to_int(&span.span_kind),
            "startTimeUnixNano": unix_nanos(span.start_time),
            "endTimeUnixNano": unix_nanos(span.end_time),
            "attributes": Self::format_attributes(&span.attributes),
            "events": Self::format_events(&span.events),
            "links": Self::format_links(&span.links),
            "status": {
                "code": status_code,
                "message": status_message,
            },
        })
    }

    const fn span_kind_to_int(kind: &SpanKind) -> u8 {
        match kind {
            SpanKind::Internal => 1,
            SpanKind::Server => 2,
            SpanKind::Client => 3,
            SpanKind::Producer => 4,
            SpanKind::Consumer => 5,
        }
    }

    fn format_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
        attributes
            .iter()
            .map(|kv| {
                json!({
                    "key": kv.key.to_string(),
                    "value": Self::format_attribute_value(&kv.value)
                })
            })
            .collect()
    }

    /// Arrays have no compact OTLP mapping here and are written as debug strings.
    fn format_attribute_value(value: &Value) -> JsonValue {
        match value {
            Value::Bool(b) => json!({ "boolValue": b }),
            Value::I64(i) => json!({ "intValue": i.to_string() }),
            Value::F64(f) => json!({ "doubleValue": f }),
            Value::String(s) => json!({ "stringValue": s.to_string() }),
            Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
        }
    }

    fn format_events(events: &[Event]) -> Vec<JsonValue> {
        events
            .iter()
            .map(|event| {
                json!({
                    "timeUnixNano": unix_nanos(event.timestamp),
                    "name": event.name,
                    "attributes": Self::format_attributes(&event.attributes),
                })
            })
            .collect()
    }

    fn format_links(links: &[Link]) -> Vec<JsonValue> {
        links
            .iter()
            .map(|link| {
                json!({
                    "traceId": format!("{:032x}", link.span_context.trace_id()),
                    "spanId": format!("{:016x}", link.span_context.span_id()),
                    "attributes": Self::format_attributes(&link.attributes),
                })
            })
            .collect()
    }

    fn format_status(status: &Status) -> (u8, String) {
        match status {
            Status::Unset => (0, String::new()),
            Status::Ok => (1, String::new()),
            Status::Error { description } => (2, description.to_string()),
        }
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_nanos()
        .to_string()
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").finish_non_exhaustive()
    }
}
