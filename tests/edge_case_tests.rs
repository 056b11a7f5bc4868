//! Edge cases around untrusted listings: blanks, nulls, junk, huge values.

use std::borrow::Cow;
use std::sync::Arc;
use std::thread;

use docnum::core::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Route the crate's trace output to the test harness.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}

fn y2025() -> Year {
    Year::new(2025).unwrap()
}

fn next(doc_type: DocumentType, existing: &[&str]) -> String {
    allocate_next_in_year(doc_type, y2025(), existing).to_string()
}

// ---------------------------------------------------------------------------
// Malformed entries
// ---------------------------------------------------------------------------

#[test]
fn blank_and_garbage_entries_are_ignored() {
    init_tracing();
    assert_eq!(
        next(
            DocumentType::Invoice,
            &["", "   ", "garbage", "IV-2025-0002", "\t", "IV-2025-"]
        ),
        "IV-2025-0003"
    );
}

#[test]
fn missing_entries_are_ignored() {
    let existing: Vec<Option<String>> = vec![
        None,
        Some("IV-2025-0010".into()),
        None,
        Some(String::new()),
    ];
    let n = allocate_next_in_year(DocumentType::Invoice, y2025(), &existing);
    assert_eq!(n.to_string(), "IV-2025-0011");
}

#[test]
fn only_junk_gives_first_number() {
    assert_eq!(
        next(DocumentType::Receipt, &["null", "undefined", "RC", "RC-", "0001"]),
        "RC-2025-0001"
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(
        next(DocumentType::Quotation, &["  QT-2025-0041  ", "\nQT-2025-0040\r\n"]),
        "QT-2025-0042"
    );
}

#[test]
fn inner_whitespace_is_not_a_match() {
    assert_eq!(
        next(DocumentType::Quotation, &["QT -2025-0041", "QT-2025- 0040"]),
        "QT-2025-0001"
    );
}

#[test]
fn embedded_numbers_do_not_match() {
    // Anchored at both ends
    assert_eq!(
        next(
            DocumentType::Invoice,
            &["XIV-2025-0090", "IV-2025-0090-A", "copy of IV-2025-0090"]
        ),
        "IV-2025-0001"
    );
}

#[test]
fn prefix_is_case_sensitive() {
    assert_eq!(next(DocumentType::Invoice, &["iv-2025-0004"]), "IV-2025-0001");
}

#[test]
fn tax_prefix_does_not_match_other_types() {
    assert_eq!(next(DocumentType::Invoice, &["TAX-2025-0004"]), "IV-2025-0001");
    assert_eq!(next(DocumentType::TaxInvoice, &["TAX-2025-0004"]), "TAX-2025-0005");
}

#[test]
fn non_ascii_digits_do_not_match() {
    assert_eq!(next(DocumentType::Invoice, &["IV-2025-٠٠٠٩"]), "IV-2025-0001");
}

#[test]
fn cow_entries() {
    let existing = vec![Cow::Borrowed("RC-2025-0003"), Cow::Owned("RC-2025-0004".to_string())];
    let n = allocate_next_in_year(DocumentType::Receipt, y2025(), existing);
    assert_eq!(n.to_string(), "RC-2025-0005");
}

// ---------------------------------------------------------------------------
// Width
// ---------------------------------------------------------------------------

#[test]
fn unpadded_entries_count() {
    assert_eq!(next(DocumentType::Invoice, &["IV-2025-12"]), "IV-2025-0013");
}

#[test]
fn widens_at_ten_thousand() {
    assert_eq!(next(DocumentType::Invoice, &["IV-2025-9999"]), "IV-2025-10000");
    assert_eq!(next(DocumentType::Invoice, &["IV-2025-10000"]), "IV-2025-10001");
    assert_eq!(
        next(DocumentType::Invoice, &["IV-2025-123456789"]),
        "IV-2025-123456790"
    );
}

#[test]
fn sequences_beyond_64_bits_still_count() {
    init_tracing();
    assert_eq!(
        next(DocumentType::Invoice, &["IV-2025-18446744073709551616"]),
        "IV-2025-18446744073709551617"
    );
    assert_eq!(
        next(DocumentType::Invoice, &["IV-2025-18446744073709551615"]),
        "IV-2025-18446744073709551616"
    );
    assert_eq!(
        next(
            DocumentType::Invoice,
            &["IV-2025-340282366920938463463374607431768211456", "IV-2025-0002"]
        ),
        "IV-2025-340282366920938463463374607431768211457"
    );
}

#[test]
fn long_runs_of_nines_carry() {
    assert_eq!(
        next(DocumentType::Receipt, &["RC-2025-99999999999999999999", "RC-2025-0001"]),
        "RC-2025-100000000000000000000"
    );
}

#[test]
fn leading_zeros_beyond_width() {
    assert_eq!(next(DocumentType::Receipt, &["RC-2025-000000041"]), "RC-2025-0042");
}

// ---------------------------------------------------------------------------
// JSON listings
// ---------------------------------------------------------------------------

#[cfg(feature = "json")]
#[test]
fn json_listing_skips_non_strings() {
    use serde_json::json;

    let listing = json!([
        "IV-2025-0001",
        null,
        7,
        {"number": "IV-2025-0900"},
        ["IV-2025-0800"],
        true,
        "IV-2025-0006",
        ""
    ]);
    let entries = listing.as_array().unwrap();
    let n = allocate_next_in_year(DocumentType::Invoice, y2025(), entries);
    assert_eq!(n.to_string(), "IV-2025-0007");
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn shared_allocator_across_threads() {
    let allocator = DocumentNumberAllocator::builder()
        .fixed_year(2025)
        .build()
        .unwrap();
    let listing: Arc<Vec<String>> = Arc::new((1..=250).map(|i| format!("IV-2025-{i:04}")).collect());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let listing = Arc::clone(&listing);
            thread::spawn(move || allocator.allocate_next(DocumentType::Invoice, listing.iter()))
        })
        .collect();

    // Same snapshot, same proposal: uniqueness is the store's job
    for handle in handles {
        assert_eq!(handle.join().unwrap().to_string(), "IV-2025-0251");
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

#[test]
fn next_numbers_for_mixed_listing() {
    let existing = [
        "QT-2025-0050",
        "IV-2025-0001",
        "IV-2025-0003",
        "IV-2024-0099",
        "RC-2025-9999",
        "TAX-2024-0010",
        "garbage",
    ];
    let lines: Vec<String> = DocumentType::ALL
        .into_iter()
        .map(|t| format!("{t}: {}", allocate_next_in_year(t, y2025(), existing)))
        .collect();

    insta::assert_snapshot!(lines.join("\n"), @r"
    quotation: QT-2025-0051
    invoice: IV-2025-0004
    receipt: RC-2025-10000
    tax_invoice: TAX-2025-0001
    ");
}
