//! CSV fallback document.
//!
//! Input whose first line is not `BEGIN:VCARD` lands here. Dialect parsing
//! is out of scope: the stub walks a fixed delimiter list, splits each line
//! and discards the rows. It exists so the dispatch function has a concrete
//! second document kind to return.

/// Delimiters tried when scanning fallback input.
const CSV_DELIMITERS: &[char] = &[',', ';', '\t'];

/// A comma-separated-value fallback document.
///
/// Never valid and never queryable; retained rows are discarded at
/// construction.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    lines: Vec<String>,
    strict: bool,
}

impl CsvDocument {
    /// Builds the stub document, scanning and discarding rows.
    #[must_use]
    pub fn new<I, S>(lines: I, strict: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines.into_iter().map(|l| l.as_ref().to_string()).collect();

        for delimiter in CSV_DELIMITERS {
            for line in &lines {
                let row: Vec<&str> = line.split(*delimiter).collect();
                tracing::trace!(?delimiter, fields = row.len(), "discarding CSV row");
            }
        }

        Self { lines, strict }
    }

    /// Returns the raw input lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns whether strict mode was requested.
    #[must_use]
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// CSV documents are never validated.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        false
    }

    /// The stub exposes no parsed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        0
    }

    /// Always true; see [`CsvDocument::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        true
    }
}
