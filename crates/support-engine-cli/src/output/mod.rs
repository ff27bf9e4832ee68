pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `result` object of an envelope, or the value itself.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// First field holding an array of objects (matches, rows, candidates).
pub(crate) fn record_list(map: &Map<String, Value>) -> Option<(&str, &[Value])> {
    map.iter().find_map(|(key, val)| match val {
        Value::Array(items) if items.first().is_some_and(Value::is_object) => {
            Some((key.as_str(), items.as_slice()))
        }
        _ => None,
    })
}

/// Column headers for a list of records: every key that appears in any
/// record, in first-seen order.
pub(crate) fn record_headers(records: &[Value]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for record in records.iter().filter_map(Value::as_object) {
        for key in record.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }
    headers
}

/// Plain-text rendering of a JSON value for table and CSV cells.
pub(crate) fn cell_text(value: &Value, null_text: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => null_text.to_string(),
        Value::Array(arr) if arr.iter().all(|v| !v.is_object() && !v.is_array()) => arr
            .iter()
            .map(|v| cell_text(v, null_text))
            .collect::<Vec<_>>()
            .join("; "),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
