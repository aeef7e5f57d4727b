use serde::{Deserialize, Serialize};
use simpleflake::{global, SimpleflakeId};

#[derive(Debug, Serialize, Deserialize)]
struct Order {
    id: SimpleflakeId,
    #[serde(with = "simpleflake::json::as_decimal_string")]
    customer_id: u64,
}

fn main() {
    let order = Order {
        id: global::generate().unwrap(),
        customer_id: u64::MAX,
    };

    // IDs travel as strings so JavaScript clients do not round them
    let json = serde_json::to_string_pretty(&order).unwrap();
    println!("Serialized:\n{json}");

    // Producers that emit bare numbers are still accepted
    let legacy = r#"{"id": 103557365767, "customer_id": "42"}"#;
    let parsed: Order = serde_json::from_str(legacy).unwrap();
    println!("\nParsed legacy payload: {parsed:?}");

    match SimpleflakeId::from_json(&serde_json::json!(true)) {
        Ok(id) => println!("Unexpected ID {id}"),
        Err(e) => println!("Rejected boolean: {e}"),
    }
}
