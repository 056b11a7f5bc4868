//! Entries of an existing-number listing.
//!
//! Listings come from an external query and are not trusted: entries may be
//! missing, empty, or not strings at all. [`NumberCandidate`] lets the
//! allocator accept any such listing and look only at the entries that carry
//! text.

use std::borrow::Cow;

use super::types::DocumentNumber;

/// An entry that may or may not hold a document number string.
pub trait NumberCandidate {
    /// The text to match, or `None` when the entry is not a string.
    fn candidate(&self) -> Option<&str>;
}

impl NumberCandidate for str {
    fn candidate(&self) -> Option<&str> {
        Some(self)
    }
}

impl NumberCandidate for String {
    fn candidate(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl NumberCandidate for Cow<'_, str> {
    fn candidate(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: NumberCandidate + ?Sized> NumberCandidate for &T {
    fn candidate(&self) -> Option<&str> {
        (**self).candidate()
    }
}

impl<T: NumberCandidate> NumberCandidate for Option<T> {
    fn candidate(&self) -> Option<&str> {
        self.as_ref().and_then(NumberCandidate::candidate)
    }
}

#[cfg(feature = "json")]
impl NumberCandidate for serde_json::Value {
    fn candidate(&self) -> Option<&str> {
        self.as_str()
    }
}

/// Extract a typed number from a candidate, if it parses.
pub(crate) fn parse_candidate<C: NumberCandidate + ?Sized>(entry: &C) -> Option<DocumentNumber> {
    let text = entry.candidate()?.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse::<DocumentNumber>() {
        Ok(number) => Some(number),
        Err(err) => {
            tracing::trace!(entry = text, %err, "ignoring malformed document number");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_candidates() {
        assert_eq!("IV-2025-0001".candidate(), Some("IV-2025-0001"));
        assert_eq!(String::from("x").candidate(), Some("x"));
        assert_eq!(Cow::Borrowed("y").candidate(), Some("y"));
    }

    #[test]
    fn none_is_not_a_candidate() {
        let missing: Option<&str> = None;
        assert_eq!(missing.candidate(), None);
        assert_eq!(Some("RC-2025-0002").candidate(), Some("RC-2025-0002"));
    }

    #[test]
    fn parse_skips_blank_and_garbage() {
        assert!(parse_candidate("").is_none());
        assert!(parse_candidate("   ").is_none());
        assert!(parse_candidate("garbage").is_none());
        assert!(parse_candidate(&None::<String>).is_none());
        assert_eq!(
            parse_candidate(" IV-2025-0003 ").and_then(|n| n.sequence().to_u64()),
            Some(3)
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_only_strings_count() {
        use serde_json::json;

        assert_eq!(json!("QT-2025-0001").candidate(), Some("QT-2025-0001"));
        assert_eq!(json!(null).candidate(), None);
        assert_eq!(json!(42).candidate(), None);
        assert_eq!(json!(["IV-2025-0001"]).candidate(), None);
        assert_eq!(json!({"number": "IV-2025-0001"}).candidate(), None);
    }
}
