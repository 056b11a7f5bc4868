use docnum::core::*;
use serde_json::Value;

fn main() {
    // Body of a `GET /documents?fields=number` response; rows without a
    // number come back as null.
    let body = r#"[
        {"number": "IV-2025-0007"},
        {"number": null},
        {"number": 12},
        {"number": " IV-2025-0011 "},
        {"number": "QT-2025-0400"}
    ]"#;

    let rows: Vec<Value> = serde_json::from_str(body).expect("valid JSON");
    let numbers: Vec<&Value> = rows.iter().filter_map(|row| row.get("number")).collect();

    let allocator = DocumentNumberAllocator::builder()
        .fixed_year(2025)
        .build()
        .expect("2025 is a four-digit year");
    let next = allocator.allocate_next(DocumentType::Invoice, numbers);
    println!("next invoice number: {next}");
    println!("as JSON: {}", serde_json::to_string(&next).expect("serializable"));
}
