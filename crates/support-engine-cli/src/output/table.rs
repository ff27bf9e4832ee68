use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{cell_text, record_headers, record_list};

/// Format output as tables: scalar result fields as Field/Value rows, then
/// any list of records (matches, schedule rows) as its own table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => print_result(result, map),
            _ => print_fields(map),
        },
        Value::Array(arr) => print_records(arr),
        _ => println!("{}", value),
    }
}

fn print_result(result: &Map<String, Value>, envelope: &Map<String, Value>) {
    let mut scalars = Map::new();
    for (key, val) in result {
        match val {
            // Nested summaries (program, rates, calculation) flatten into the field table
            Value::Object(inner) => {
                for (k, v) in inner {
                    scalars.insert(format!("{key}.{k}"), v.clone());
                }
            }
            Value::Array(items) if items.first().is_some_and(Value::is_object) => {}
            _ => {
                scalars.insert(key.clone(), val.clone());
            }
        }
    }
    if !scalars.is_empty() {
        print_fields(&scalars);
    }

    if let Some((name, records)) = record_list(result) {
        println!("\n{}:", name);
        print_records(records);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_fields(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.clone(), cell_text(val, "null")]);
    }
    println!("{}", Table::from(builder));
}

fn print_records(arr: &[Value]) {
    if !arr.first().is_some_and(Value::is_object) {
        if arr.is_empty() {
            println!("(empty)");
        }
        for item in arr {
            println!("{}", cell_text(item, "null"));
        }
        return;
    }

    let headers = record_headers(arr);
    let mut builder = Builder::default();
    builder.push_record(headers.clone());

    for item in arr.iter().filter_map(Value::as_object) {
        let row: Vec<String> = headers
            .iter()
            .map(|h| item.get(h).map(|v| cell_text(v, "")).unwrap_or_default())
            .collect();
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));
}
