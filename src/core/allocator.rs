use chrono::{Datelike, Local, Utc};

use super::candidate::{NumberCandidate, parse_candidate};
use super::error::NumberingError;
use super::sequence::DocumentNumberSequence;
use super::types::{DocumentNumber, DocumentType, Sequence, Year};

/// Where the allocator reads the numbering year from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearSource {
    /// Calendar year of the local system clock.
    #[default]
    Local,
    /// Calendar year in UTC.
    Utc,
    /// Always this year (fiscal-year numbering, tests).
    Fixed(Year),
}

impl YearSource {
    /// Read the year now.
    pub fn year(&self) -> Year {
        match self {
            Self::Local => Year::from_clock(Local::now().year()),
            Self::Utc => Year::from_clock(Utc::now().year()),
            Self::Fixed(year) => *year,
        }
    }
}

/// Highest sequence among `existing` entries in the `(doc_type, year)` series.
///
/// Entries of other types or years, malformed text, blank strings and
/// non-string entries are skipped. Sequences of any length are compared by
/// value.
pub fn highest_sequence<I>(doc_type: DocumentType, year: Year, existing: I) -> Option<Sequence>
where
    I: IntoIterator,
    I::Item: NumberCandidate,
{
    existing
        .into_iter()
        .filter_map(|entry| parse_candidate(&entry))
        .filter(|number| number.is_in_series(doc_type, year))
        .map(|number| number.sequence().clone())
        .max()
}

/// Next free number of `doc_type` in `year`, given already issued numbers.
///
/// The sequence is one past the highest matching entry, or 1 when nothing
/// matches. Never fails.
///
/// ```
/// use docnum::{DocumentType, Year, allocate_next_in_year};
///
/// let next = allocate_next_in_year(
///     DocumentType::Invoice,
///     Year::new(2025).unwrap(),
///     ["IV-2025-0001", "IV-2025-0003", "QT-2025-0050"],
/// );
/// assert_eq!(next.to_string(), "IV-2025-0004");
/// ```
pub fn allocate_next_in_year<I>(doc_type: DocumentType, year: Year, existing: I) -> DocumentNumber
where
    I: IntoIterator,
    I::Item: NumberCandidate,
{
    let highest = highest_sequence(doc_type, year, existing);
    let next = highest.as_ref().map_or_else(Sequence::one, Sequence::successor);
    let number = DocumentNumber::new(doc_type, year, next);
    tracing::debug!(
        %doc_type,
        %year,
        highest = highest.as_ref().map(Sequence::as_str),
        %number,
        "allocated next document number"
    );
    number
}

/// Next free number of `doc_type` in the current local calendar year.
///
/// Only a proposal computed from a snapshot: two callers working from the
/// same listing get the same number. The document store has the final say.
pub fn allocate_next<I>(doc_type: DocumentType, existing: I) -> DocumentNumber
where
    I: IntoIterator,
    I::Item: NumberCandidate,
{
    allocate_next_in_year(doc_type, YearSource::Local.year(), existing)
}

/// Placeholder number for display before the server has assigned one.
///
/// Always sequence 1 of the current local year.
pub fn allocate_placeholder(doc_type: DocumentType) -> ProvisionalNumber {
    ProvisionalNumber::first_of(doc_type, YearSource::Local.year())
}

/// A number shown to the user before the server confirmed it.
///
/// Not a [`DocumentNumber`]: the only way to get one for persisting is
/// [`confirm`](Self::confirm) with the number the server assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "a provisional number has to be confirmed before it is stored"]
pub struct ProvisionalNumber(DocumentNumber);

impl ProvisionalNumber {
    fn first_of(doc_type: DocumentType, year: Year) -> Self {
        Self(DocumentNumber::new(doc_type, year, Sequence::one()))
    }

    pub fn doc_type(&self) -> DocumentType {
        self.0.doc_type()
    }

    pub fn year(&self) -> Year {
        self.0.year()
    }

    /// Swap in the number the document store assigned.
    pub fn confirm(self, confirmed: DocumentNumber) -> DocumentNumber {
        if confirmed.doc_type() != self.0.doc_type() {
            tracing::warn!(
                provisional = %self.0,
                %confirmed,
                "confirmed number has a different document type"
            );
        } else if confirmed != self.0 {
            tracing::debug!(provisional = %self.0, %confirmed, "placeholder superseded");
        }
        confirmed
    }
}

impl std::fmt::Display for ProvisionalNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Allocator bound to a [`YearSource`].
///
/// Holds no state besides its configuration, so one instance can be shared
/// freely between threads.
///
/// ```
/// use docnum::{DocumentNumberAllocator, DocumentType};
///
/// let allocator = DocumentNumberAllocator::builder()
///     .fixed_year(2025)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     allocator.allocate_next(DocumentType::Receipt, Vec::<String>::new()).to_string(),
///     "RC-2025-0001"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentNumberAllocator {
    year_source: YearSource,
}

impl DocumentNumberAllocator {
    pub fn builder() -> AllocatorBuilder {
        AllocatorBuilder::new()
    }

    pub fn year_source(&self) -> YearSource {
        self.year_source
    }

    /// The year numbers are allocated in right now.
    pub fn current_year(&self) -> Year {
        self.year_source.year()
    }

    /// See [`allocate_next_in_year`].
    pub fn allocate_next<I>(&self, doc_type: DocumentType, existing: I) -> DocumentNumber
    where
        I: IntoIterator,
        I::Item: NumberCandidate,
    {
        allocate_next_in_year(doc_type, self.current_year(), existing)
    }

    /// See [`allocate_placeholder`].
    pub fn allocate_placeholder(&self, doc_type: DocumentType) -> ProvisionalNumber {
        ProvisionalNumber::first_of(doc_type, self.current_year())
    }

    /// A counter for the current year, continuing after `existing`.
    pub fn sequence<I>(&self, doc_type: DocumentType, existing: I) -> DocumentNumberSequence
    where
        I: IntoIterator,
        I::Item: NumberCandidate,
    {
        DocumentNumberSequence::from_existing(doc_type, self.current_year(), existing)
    }
}

/// Builder for [`DocumentNumberAllocator`].
#[derive(Debug, Clone, Default)]
pub struct AllocatorBuilder {
    year_source: YearSource,
    fixed_year: Option<i32>,
}

impl AllocatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year_source(mut self, source: YearSource) -> Self {
        self.year_source = source;
        self.fixed_year = None;
        self
    }

    /// Number in this year regardless of the clock. Checked by `build()`.
    pub fn fixed_year(mut self, year: i32) -> Self {
        self.fixed_year = Some(year);
        self
    }

    pub fn build(self) -> Result<DocumentNumberAllocator, NumberingError> {
        let year_source = match self.fixed_year {
            Some(year) => YearSource::Fixed(Year::new(year)?),
            None => self.year_source,
        };
        Ok(DocumentNumberAllocator { year_source })
    }
}
