//! # docnum
//!
//! Sequential document numbering for a small billing application:
//! quotations, invoices, receipts and tax invoices, each numbered per year.
//!
//! The allocator proposes the next number from a snapshot of numbers already
//! issued. It is a pure computation; the document store remains the source of
//! truth and must enforce uniqueness when the document is saved.
//!
//! ## Quick Start
//!
//! ```rust
//! use docnum::*;
//!
//! let issued = ["IV-2025-0001", "IV-2025-0003", "QT-2025-0050"];
//! let year = Year::new(2025)?;
//! let next = allocate_next_in_year(DocumentType::Invoice, year, issued);
//! assert_eq!(next.to_string(), "IV-2025-0004");
//!
//! // Provisional number for the form, replaced once the server answers
//! let shown = allocate_placeholder(DocumentType::Receipt);
//! assert!(shown.to_string().starts_with("RC-"));
//! assert!(shown.to_string().ends_with("-0001"));
//! # Ok::<(), NumberingError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document types, numbers, allocation, sequences |
//! | `json` | Accept `serde_json::Value` listings (non-strings are skipped) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
