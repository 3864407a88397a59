//! vCard document: builds entries from a line sequence and exposes them.

use crate::error::{ConparseResult, LookupError};
use crate::vcard::entry::VCardEntry;
use crate::vcard::lexer::tokenize_line;
use crate::vcard::validate::validate;
use crate::vcard::version::{VCardVersion, detect_version};

/// A parsed, validated vCard document.
///
/// Owns every entry, tag and parameter reachable from it. Immutable once
/// constructed; construction fails on the first malformed line, version or
/// validation problem.
#[derive(Debug, Clone)]
pub struct VCard {
    entries: Vec<VCardEntry>,
    version: VCardVersion,
    strict: bool,
    valid: bool,
}

impl VCard {
    /// Parses a sequence of decoded text lines into a validated document.
    ///
    /// Each line is tokenized into a tag and added to the working entry;
    /// a tag named `END` finalizes the entry and begins a new one. Lines
    /// after the last `END` belong to an entry that is never finalized and
    /// are dropped (logged as a warning).
    ///
    /// ## Errors
    /// Returns a [`LineError`](crate::error::LineError) for a malformed
    /// line, a [`VersionError`](crate::error::VersionError) when the
    /// version cannot be determined, or a
    /// [`ValidationError`](crate::error::ValidationError) when a validation
    /// rule is violated.
    #[tracing::instrument(skip(lines))]
    pub fn parse<I, S>(lines: I, strict: bool) -> ConparseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut entry = VCardEntry::new();

        for line in lines {
            let tag = tokenize_line(line.as_ref())?;
            let is_end = tag.name == "END";
            entry.add(tag);

            if is_end {
                entries.push(std::mem::take(&mut entry));
            }
        }

        if !entry.is_empty() {
            tracing::warn!(
                tags = entry.tag_names().count(),
                "input ended inside an unterminated entry; its tags are dropped"
            );
        }

        tracing::debug!(entries = entries.len(), "vCard entries built");

        let version = detect_version(&entries)?;
        validate(&entries, version, strict)?;

        tracing::debug!(%version, strict, "vCard document validated");

        Ok(Self {
            entries,
            version,
            strict,
            valid: true,
        })
    }

    /// Returns all entries in document order.
    #[must_use]
    pub fn entries(&self) -> &[VCardEntry] {
        &self.entries
    }

    /// Returns the detected vCard version.
    #[must_use]
    pub fn version(&self) -> VCardVersion {
        self.version
    }

    /// Returns whether strict validation was applied.
    #[must_use]
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Returns whether the document passed validation.
    ///
    /// Always true for a document obtained from [`VCard::parse`], which
    /// aborts on validation failure.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the entries containing a tag with the given name at the
    /// top level.
    #[must_use]
    pub fn entries_with_tag(&self, name: &str) -> Vec<&VCardEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.get(name).is_ok())
            .collect()
    }

    /// Like [`VCard::entries_with_tag`], but also accepts entries where
    /// the tag exists only under a group.
    #[must_use]
    pub fn entries_with_tag_or_group(&self, name: &str) -> Vec<&VCardEntry> {
        self.entries
            .iter()
            .filter(|entry| {
                matches!(
                    entry.get(name),
                    Ok(_) | Err(LookupError::FoundInGroup { .. })
                )
            })
            .collect()
    }

    /// Returns the number of entries containing a BEGIN tag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries_with_tag("BEGIN").len()
    }

    /// Returns whether the document has no BEGIN-carrying entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
