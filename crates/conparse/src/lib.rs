//! Multiformat contact parsing.
//!
//! Parses contact-card text data (vCard 2.1/3.0/4.0) into a structured,
//! queryable in-memory representation, with a fallback path for
//! comma-separated-value input.
//!
//! Input is an ordered sequence of already-decoded UTF-8 text lines;
//! encoding detection and line splitting are the caller's concern.
//!
//! ## Usage
//!
//! ```rust
//! use conparse::{Document, parse_lines};
//!
//! let lines = ["BEGIN:VCARD", "VERSION:4.0", "FN:Jane Doe", "END:VCARD"];
//! let document = parse_lines(lines, false).unwrap();
//!
//! let Document::VCard(card) = document else {
//!     panic!("expected a vCard");
//! };
//! assert!(card.is_valid());
//! ```

pub mod csv;
pub mod error;
pub mod vcard;

pub use csv::CsvDocument;
pub use error::{
    ConparseError, ConparseResult, LineError, LookupError, ValidationError, VersionError,
};
pub use vcard::{VCard, VCardEntry, VCardParameter, VCardTag, VCardVersion};

/// The kind of a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A vCard contact document.
    VCard,
    /// A comma-separated-value fallback document.
    Csv,
}

/// A parsed contact document.
///
/// Exactly two kinds exist, so the document is a closed variant rather
/// than an open type hierarchy.
#[derive(Debug, Clone)]
pub enum Document {
    /// A parsed and validated vCard.
    VCard(VCard),
    /// The CSV fallback stub.
    Csv(CsvDocument),
}

impl Document {
    /// Returns the kind of the document.
    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::VCard(_) => DocumentKind::VCard,
            Self::Csv(_) => DocumentKind::Csv,
        }
    }

    /// Returns whether the document is of the given kind.
    #[must_use]
    pub fn is_kind(&self, kind: DocumentKind) -> bool {
        self.kind() == kind
    }

    /// Returns the vCard, if this is one.
    #[must_use]
    pub fn as_vcard(&self) -> Option<&VCard> {
        match self {
            Self::VCard(card) => Some(card),
            Self::Csv(_) => None,
        }
    }

    /// Returns the CSV stub, if this is one.
    #[must_use]
    pub fn as_csv(&self) -> Option<&CsvDocument> {
        match self {
            Self::VCard(_) => None,
            Self::Csv(doc) => Some(doc),
        }
    }

    /// Returns the number of parsed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::VCard(card) => card.len(),
            Self::Csv(doc) => doc.len(),
        }
    }

    /// Returns whether the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether the document passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::VCard(card) => card.is_valid(),
            Self::Csv(doc) => doc.is_valid(),
        }
    }
}

/// Parses decoded text lines into a document.
///
/// Dispatches on the first line: an exact `BEGIN:VCARD` prefix selects the
/// vCard parser; anything else falls back to the CSV stub.
///
/// ## Errors
/// Returns [`LineError::EmptyInput`] for an empty line sequence, or any
/// error of [`VCard::parse`] when the input is a vCard.
#[tracing::instrument(skip(lines))]
pub fn parse_lines<I, S>(lines: I, strict: bool) -> ConparseResult<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();

    let Some(first) = lines.first() else {
        return Err(LineError::EmptyInput.into());
    };

    if first.as_ref().starts_with("BEGIN:VCARD") {
        tracing::debug!("dispatching to vCard parser");
        Ok(Document::VCard(VCard::parse(lines, strict)?))
    } else {
        tracing::debug!("dispatching to CSV fallback");
        Ok(Document::Csv(CsvDocument::new(lines, strict)))
    }
}
