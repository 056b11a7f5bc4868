use std::num::NonZeroU64;

use chrono::{Datelike, NaiveDate};

use super::allocator::highest_sequence;
use super::candidate::NumberCandidate;
use super::error::NumberingError;
use super::types::{DocumentNumber, DocumentType, Sequence, Year};

/// Sequential number counter for one document type and year.
///
/// Issues `QT-2025-0001`, `QT-2025-0002`, ... without gaps and without
/// repeats. Use it when one caller hands out several numbers from the same
/// listing, e.g. a batch import. Numbers the document store assigned on its
/// own can be fed back with [`observe`](Self::observe) so the counter never
/// reissues them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNumberSequence {
    doc_type: DocumentType,
    year: Year,
    next_number: Sequence,
}

impl DocumentNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(doc_type: DocumentType, year: Year) -> Self {
        Self::continuing(doc_type, year, Sequence::one())
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(doc_type: DocumentType, year: Year, next_number: NonZeroU64) -> Self {
        Self::continuing(doc_type, year, next_number.into())
    }

    /// Create a sequence continuing after the highest matching entry.
    pub fn from_existing<I>(doc_type: DocumentType, year: Year, existing: I) -> Self
    where
        I: IntoIterator,
        I::Item: NumberCandidate,
    {
        let next = highest_sequence(doc_type, year, existing)
            .map_or_else(Sequence::one, |max| max.successor());
        Self::continuing(doc_type, year, next)
    }

    fn continuing(doc_type: DocumentType, year: Year, next_number: Sequence) -> Self {
        Self {
            doc_type,
            year,
            next_number,
        }
    }

    /// Generate the next number.
    pub fn next_number(&mut self) -> DocumentNumber {
        let number = self.peek();
        self.next_number = self.next_number.successor();
        number
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> DocumentNumber {
        DocumentNumber::new(self.doc_type, self.year, self.next_number.clone())
    }

    pub fn doc_type(&self) -> DocumentType {
        self.doc_type
    }

    /// Get the current year of the sequence.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Get the next sequence that will be issued (without prefix/formatting).
    pub fn next_raw(&self) -> &Sequence {
        &self.next_number
    }

    /// Skip past a number issued elsewhere in this series.
    ///
    /// Returns true if the counter moved. Numbers of other series and
    /// numbers already behind the counter are ignored.
    pub fn observe(&mut self, number: &DocumentNumber) -> bool {
        if !number.is_in_series(self.doc_type, self.year) || *number.sequence() < self.next_number {
            return false;
        }
        self.next_number = number.sequence().successor();
        tracing::debug!(%number, next = self.next_number.as_str(), "sequence advanced past observed number");
        true
    }

    /// Advance to a new year, resetting the counter to 1.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), NumberingError> {
        if new_year <= self.year.get() {
            return Err(NumberingError::YearNotAdvancing {
                current: self.year.get(),
                requested: new_year,
            });
        }
        self.year = Year::new(new_year)?;
        self.next_number = Sequence::one();
        Ok(())
    }

    /// Auto-advance year if the given date is in a new year.
    /// Returns true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        self.advance_year(date.year()).is_ok()
    }
}
