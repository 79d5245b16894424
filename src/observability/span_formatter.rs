//! JSON-lines span records.
//!
//! Each exported batch becomes one line: the resource attributes followed by
//! the spans, with OTLP field names so existing trace viewers can ingest it.

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// One exported batch.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecord {
    pub resource: BTreeMap<String, JsonValue>,
    pub scope: &'static str,
    pub spans: Vec<SpanRecord>,
}

/// One finished span.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanRecord {
    pub trace_id: String,
    pub span_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent_span_id: String,
    pub name: String,
    pub kind: &'static str,
    pub start_time_unix_nano: u128,
    pub end_time_unix_nano: u128,
    pub attributes: BTreeMap<String, JsonValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventRecord>,
    pub status: StatusRecord,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub name: String,
    pub time_unix_nano: u128,
    pub attributes: BTreeMap<String, JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct StatusRecord {
    pub code: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// Converts span batches into [`BatchRecord`]s.
pub struct SpanFormatter {
    resource: BTreeMap<String, JsonValue>,
    scope: &'static str,
}

impl SpanFormatter {
    pub fn new(resource: &Resource, scope: &'static str) -> Self {
        Self {
            resource: resource
                .iter()
                .map(|(k, v)| (k.to_string(), attribute_value(v)))
                .collect(),
            scope,
        }
    }

    pub fn format_batch(&self, batch: &[SpanData]) -> BatchRecord {
        BatchRecord {
            resource: self.resource.clone(),
            scope: self.scope,
            spans: batch.iter().map(span_record).collect(),
        }
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").field("scope", &self.scope).finish()
    }
}

fn span_record(span: &SpanData) -> SpanRecord {
    let parent_span_id = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };

    let (code, message) = match &span.status {
        Status::Unset => ("unset", String::new()),
        Status::Ok => ("ok", String::new()),
        Status::Error { description } => ("error", description.to_string()),
    };

    SpanRecord {
        trace_id: format!("{:032x}", span.span_context.trace_id()),
        span_id: format!("{:016x}", span.span_context.span_id()),
        parent_span_id,
        name: span.name.to_string(),
        kind: span_kind(&span.span_kind),
        start_time_unix_nano: unix_nanos(span.start_time),
        end_time_unix_nano: unix_nanos(span.end_time),
        attributes: attributes(&span.attributes),
        events: span
            .events
            .iter()
            .map(|event| EventRecord {
                name: event.name.to_string(),
                time_unix_nano: unix_nanos(event.timestamp),
                attributes: attributes(&event.attributes),
            })
            .collect(),
        status: StatusRecord { code, message },
    }
}

const fn span_kind(kind: &SpanKind) -> &'static str {
    match kind {
        SpanKind::Internal => "internal",
        SpanKind::Server => "server",
        SpanKind::Client => "client",
        SpanKind::Producer => "producer",
        SpanKind::Consumer => "consumer",
    }
}

fn unix_nanos(time: SystemTime) -> u128 {
    time.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_nanos())
}

fn attributes(attributes: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect()
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.to_string()),
    }
}
