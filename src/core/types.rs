use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::NumberingError;

/// Minimum number of digits in the sequence part; larger values widen.
pub const SEQUENCE_WIDTH: usize = 4;

/// Prefix used for document kinds outside [`DocumentType`].
pub const FALLBACK_PREFIX: &str = "DOC";

/// Highest year that still fits the four-digit year field.
pub const MAX_YEAR: i32 = 9999;

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(QT|IV|RC|TAX)-([0-9]{4})-([0-9]+)$").expect("document number pattern is valid")
});

/// Kind of billing document. Each kind is numbered independently per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// QT: Quotation (offer sent before the sale).
    Quotation,
    /// IV: Invoice.
    Invoice,
    /// RC: Receipt for a payment received.
    Receipt,
    /// TAX: Tax invoice.
    TaxInvoice,
}

impl DocumentType {
    /// Every document type, in prefix-table order.
    pub const ALL: [Self; 4] = [
        Self::Quotation,
        Self::Invoice,
        Self::Receipt,
        Self::TaxInvoice,
    ];

    /// Prefix written in front of every number of this type.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Quotation => "QT",
            Self::Invoice => "IV",
            Self::Receipt => "RC",
            Self::TaxInvoice => "TAX",
        }
    }

    /// Reverse lookup of [`prefix`](Self::prefix).
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "QT" => Some(Self::Quotation),
            "IV" => Some(Self::Invoice),
            "RC" => Some(Self::Receipt),
            "TAX" => Some(Self::TaxInvoice),
            _ => None,
        }
    }

    /// Snake-case name as used by the document API (`"tax_invoice"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quotation => "quotation",
            Self::Invoice => "invoice",
            Self::Receipt => "receipt",
            Self::TaxInvoice => "tax_invoice",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = NumberingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| NumberingError::UnknownDocumentType(s.to_string()))
    }
}

/// Prefix for a document kind given by name, falling back to `"DOC"`.
///
/// For callers still holding an untyped kind string, e.g. straight from a
/// request body.
pub fn prefix_for_kind(kind: &str) -> &'static str {
    kind.parse::<DocumentType>()
        .map_or(FALLBACK_PREFIX, |t| t.prefix())
}

/// A calendar year that fits the four-digit year field (`0000`..=`9999`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u16);

impl Year {
    /// Reject years that cannot be written as exactly four digits.
    pub fn new(year: i32) -> Result<Self, NumberingError> {
        if (0..=MAX_YEAR).contains(&year) {
            Ok(Self(year as u16))
        } else {
            Err(NumberingError::InvalidYear(year))
        }
    }

    /// Year read from a clock, pinned into the four-digit range.
    pub(crate) fn from_clock(year: i32) -> Self {
        Self(year.clamp(0, MAX_YEAR) as u16)
    }

    pub fn get(self) -> i32 {
        i32::from(self.0)
    }
}

impl TryFrom<i32> for Year {
    type Error = NumberingError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        Self::new(year)
    }
}

impl PartialEq<i32> for Year {
    fn eq(&self, other: &i32) -> bool {
        self.get() == *other
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// The sequence part of a document number, of any length.
///
/// Stored as decimal digits without leading zeros, so listings holding
/// sequences beyond 64 bits still order and increment correctly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(String);

impl Sequence {
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// First sequence of every series.
    pub fn one() -> Self {
        Self("1".to_string())
    }

    /// Build from ASCII decimal digits; leading zeros are dropped.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            Some(Self::zero())
        } else {
            Some(Self(significant.to_string()))
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// Digits without padding.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value, if it fits in 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// The next value. Never overflows; `9999` becomes `10000`.
    pub fn successor(&self) -> Self {
        let mut digits = self.0.clone().into_bytes();
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
        Self(digits.into_iter().map(char::from).collect())
    }
}

impl From<u64> for Sequence {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<NonZeroU64> for Sequence {
    fn from(value: NonZeroU64) -> Self {
        Self(value.get().to_string())
    }
}

impl FromStr for Sequence {
    type Err = NumberingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_digits(s).ok_or_else(|| NumberingError::parse(s, "expected decimal digits"))
    }
}

impl Ord for Sequence {
    fn cmp(&self, other: &Self) -> Ordering {
        // No leading zeros: more digits means a larger value
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Sequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<u64> for Sequence {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>width$}", self.0, width = SEQUENCE_WIDTH)
    }
}

/// A document number such as `IV-2025-0004`.
///
/// Text form is `<PREFIX>-<YYYY>-<SEQ>` with the sequence zero-padded to
/// [`SEQUENCE_WIDTH`] digits. Serializes as that string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DocumentNumber {
    doc_type: DocumentType,
    year: Year,
    sequence: Sequence,
}

impl DocumentNumber {
    pub fn new(doc_type: DocumentType, year: Year, sequence: impl Into<Sequence>) -> Self {
        Self {
            doc_type,
            year,
            sequence: sequence.into(),
        }
    }

    /// Parse a number, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, NumberingError> {
        input.parse()
    }

    pub fn doc_type(&self) -> DocumentType {
        self.doc_type
    }

    pub fn prefix(&self) -> &'static str {
        self.doc_type.prefix()
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Whether this number belongs to the `(doc_type, year)` series.
    pub fn is_in_series(&self, doc_type: DocumentType, year: Year) -> bool {
        self.doc_type == doc_type && self.year == year
    }

    /// The next number in the same series.
    pub fn successor(&self) -> Self {
        Self::new(self.doc_type, self.year, self.sequence.successor())
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.doc_type.prefix(), self.year, self.sequence)
    }
}

impl FromStr for DocumentNumber {
    type Err = NumberingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(NumberingError::parse(s, "empty input"));
        }

        let caps = NUMBER_PATTERN
            .captures(trimmed)
            .ok_or_else(|| NumberingError::parse(s, "expected PREFIX-YYYY-SEQ"))?;

        let doc_type = DocumentType::from_prefix(&caps[1])
            .ok_or_else(|| NumberingError::parse(s, "unknown prefix"))?;
        let year = caps[2]
            .parse::<i32>()
            .ok()
            .and_then(|y| Year::new(y).ok())
            .ok_or_else(|| NumberingError::parse(s, "invalid year"))?;
        let sequence = Sequence::from_digits(&caps[3])
            .ok_or_else(|| NumberingError::parse(s, "invalid sequence"))?;

        Ok(Self::new(doc_type, year, sequence))
    }
}

impl TryFrom<String> for DocumentNumber {
    type Error = NumberingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DocumentNumber> for String {
    fn from(number: DocumentNumber) -> Self {
        number.to_string()
    }
}
