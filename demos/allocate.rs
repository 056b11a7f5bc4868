use docnum::core::*;

fn main() {
    // What the document listing query might return: several types and
    // years mixed together, plus the odd broken row.
    let listing = vec![
        Some("QT-2025-0050".to_string()),
        Some("IV-2025-0001".to_string()),
        Some("IV-2025-0003".to_string()),
        Some("IV-2024-0099".to_string()),
        Some("TAX-2024-0010".to_string()),
        Some("garbage".to_string()),
        None,
    ];

    let allocator = DocumentNumberAllocator::builder()
        .fixed_year(2025)
        .build()
        .expect("2025 is a four-digit year");

    println!("=== Next numbers for {} ===", allocator.current_year());
    for t in DocumentType::ALL {
        println!("  {:<12} {}", t, allocator.allocate_next(t, &listing));
    }

    // Optimistic display while the form is open
    let shown = allocator.allocate_placeholder(DocumentType::Invoice);
    println!("\n=== Placeholder ===");
    println!("  shown: {shown}");

    // The server answers with the number it actually stored
    let stored = shown.confirm(allocator.allocate_next(DocumentType::Invoice, &listing));
    println!("  stored: {stored}");

    // Batch import: one counter, several numbers
    println!("\n=== Batch ===");
    let mut seq = allocator.sequence(DocumentType::Receipt, &listing);
    for _ in 0..3 {
        println!("  {}", seq.next_number());
    }

    println!("\n=== Parse errors ===");
    for input in ["IV-2025", "DOC-2025-0001", "iv-2025-0001"] {
        if let Err(e) = DocumentNumber::parse(input) {
            println!("  {e}");
        }
    }
}
