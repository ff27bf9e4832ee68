use serde_json::Value;

use super::result_of;

/// Headline fields, in priority order.
const PRIORITY_KEYS: [&str; 5] = [
    "monthly_savings",
    "total_savings",
    "effective_rate",
    "monthly_payment_after",
    "score",
];

/// Print just the key answer from the output: one `score title` line per
/// match for rankings, otherwise the first headline field found.
pub fn print_minimal(value: &Value) {
    let result = result_of(value);

    if let Some(Value::Array(matches)) = result.get("matches") {
        for m in matches {
            println!(
                "{}\t{}",
                m.get("score").map(format_minimal).unwrap_or_default(),
                m.get("title").map(format_minimal).unwrap_or_default()
            );
        }
        return;
    }

    // Program-bound output nests the numbers one level down
    let result = result.get("calculation").unwrap_or(result);
    let result = result.get("summary").unwrap_or(result);

    if let Value::Object(map) = result {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                println!("{}", format_minimal(val));
                return;
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
