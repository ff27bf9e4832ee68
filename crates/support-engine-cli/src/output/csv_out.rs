use serde_json::Value;
use std::io;

use super::{cell_text, record_headers, record_list, result_of};

type StdoutWriter<'a> = csv::Writer<io::StdoutLock<'a>>;

/// Write output as CSV to stdout. Lists of records (matches, schedule rows,
/// candidates) become one row per record; anything else becomes field,value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let written = match result_of(value) {
        Value::Object(result) => match record_list(result) {
            Some((_, records)) => write_records(&mut wtr, records),
            None => write_fields(&mut wtr, result),
        },
        Value::Array(arr) => write_records(&mut wtr, arr),
        other => wtr.write_record([cell_text(other, "")]),
    };

    if let Err(e) = written.and_then(|_| wtr.flush().map_err(csv::Error::from)) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_fields(
    wtr: &mut StdoutWriter<'_>,
    map: &serde_json::Map<String, Value>,
) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in map {
        wtr.write_record([key.clone(), cell_text(val, "")])?;
    }
    Ok(())
}

fn write_records(wtr: &mut StdoutWriter<'_>, arr: &[Value]) -> csv::Result<()> {
    if !arr.first().is_some_and(Value::is_object) {
        for item in arr {
            wtr.write_record([cell_text(item, "")])?;
        }
        return Ok(());
    }

    let headers = record_headers(arr);
    wtr.write_record(&headers)?;

    for item in arr.iter().filter_map(Value::as_object) {
        let row: Vec<String> = headers
            .iter()
            .map(|h| item.get(h).map(|v| cell_text(v, "")).unwrap_or_default())
            .collect();
        wtr.write_record(&row)?;
    }
    Ok(())
}
