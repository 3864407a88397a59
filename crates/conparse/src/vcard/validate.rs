//! Structural and version-specific validation of built documents.

use crate::error::ValidationError;
use crate::vcard::entry::VCardEntry;
use crate::vcard::version::{VCardVersion, is_vendor_extension};

/// Validates a built, version-tagged document.
///
/// Rules run in order and fail fast:
/// 1. entry counts for BEGIN and END tags must match;
/// 2. in strict mode, every entry must carry the version's required tags
///    and contain only standard or `X-` vendor tags;
/// 3. for vCard 4.0, VERSION must immediately follow BEGIN in every entry.
///
/// ## Errors
/// Returns the [`ValidationError`] of the first violated rule.
pub(crate) fn validate(
    entries: &[VCardEntry],
    version: VCardVersion,
    strict: bool,
) -> Result<(), ValidationError> {
    let begins = entries.iter().filter(|e| e.has_tag("BEGIN")).count();
    let ends = entries.iter().filter(|e| e.has_tag("END")).count();
    if begins != ends {
        return Err(ValidationError::UnmatchedBeginEnd);
    }

    if strict {
        for entry in entries {
            if !version.required_tags().iter().all(|tag| entry.has_tag(tag)) {
                return Err(ValidationError::MissingRequiredTags);
            }

            for name in entry.tag_names() {
                if version.standard_tags().contains(&name) || is_vendor_extension(name) {
                    continue;
                }
                return Err(ValidationError::UnknownTag(name.to_string()));
            }
        }
    }

    if version == VCardVersion::V4_0 {
        for entry in entries {
            let placed = match (entry.get_tag_index("BEGIN"), entry.get_tag_index("VERSION")) {
                (Ok(begin_idx), Ok(version_idx)) => begin_idx + 1 == version_idx,
                _ => false,
            };
            if !placed {
                return Err(ValidationError::VersionMisplaced);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcard::tag::VCardTag;

    fn entry_with(pairs: &[(&str, &str)]) -> VCardEntry {
        let mut entry = VCardEntry::new();
        for (name, value) in pairs {
            entry.add(VCardTag::new(None, name, None, value));
        }
        entry
    }

    fn minimal_v4_entry() -> VCardEntry {
        entry_with(&[
            ("BEGIN", "VCARD"),
            ("VERSION", "4.0"),
            ("FN", "Jane Doe"),
            ("END", "VCARD"),
        ])
    }

    #[test]
    fn balanced_lenient_document_passes() {
        let entries = vec![minimal_v4_entry()];
        assert!(validate(&entries, VCardVersion::V4_0, false).is_ok());
    }

    #[test]
    fn unbalanced_begin_end() {
        let entries = vec![
            minimal_v4_entry(),
            entry_with(&[("BEGIN", "VCARD"), ("VERSION", "4.0"), ("FN", "J")]),
        ];
        assert_eq!(
            validate(&entries, VCardVersion::V4_0, false).unwrap_err(),
            ValidationError::UnmatchedBeginEnd
        );
    }

    #[test]
    fn strict_missing_required_tags() {
        let entries = vec![entry_with(&[
            ("BEGIN", "VCARD"),
            ("VERSION", "4.0"),
            ("END", "VCARD"),
        ])];
        assert_eq!(
            validate(&entries, VCardVersion::V4_0, true).unwrap_err(),
            ValidationError::MissingRequiredTags
        );
    }

    #[test]
    fn strict_unknown_tag() {
        let entries = vec![entry_with(&[
            ("BEGIN", "VCARD"),
            ("VERSION", "4.0"),
            ("FN", "Jane Doe"),
            ("NOTATAG", "x"),
            ("END", "VCARD"),
        ])];
        assert_eq!(
            validate(&entries, VCardVersion::V4_0, true).unwrap_err(),
            ValidationError::UnknownTag("NOTATAG".into())
        );
    }

    #[test]
    fn strict_accepts_vendor_extensions() {
        let entries = vec![entry_with(&[
            ("BEGIN", "VCARD"),
            ("VERSION", "4.0"),
            ("FN", "Jane Doe"),
            ("X-CUSTOM", "x"),
            ("END", "VCARD"),
        ])];
        assert!(validate(&entries, VCardVersion::V4_0, true).is_ok());
    }

    #[test]
    fn v4_version_must_follow_begin() {
        let entries = vec![entry_with(&[
            ("BEGIN", "VCARD"),
            ("FN", "Jane Doe"),
            ("VERSION", "4.0"),
            ("END", "VCARD"),
        ])];
        assert_eq!(
            validate(&entries, VCardVersion::V4_0, false).unwrap_err(),
            ValidationError::VersionMisplaced
        );
    }

    #[test]
    fn v3_placement_not_enforced() {
        let entries = vec![entry_with(&[
            ("BEGIN", "VCARD"),
            ("FN", "Jane Doe"),
            ("N", "Doe;Jane"),
            ("VERSION", "3.0"),
            ("END", "VCARD"),
        ])];
        assert!(validate(&entries, VCardVersion::V3_0, true).is_ok());
    }

    #[test]
    fn v4_entry_without_version_tag_is_misplaced() {
        let entries = vec![
            minimal_v4_entry(),
            entry_with(&[("BEGIN", "VCARD"), ("FN", "J"), ("END", "VCARD")]),
        ];
        assert_eq!(
            validate(&entries, VCardVersion::V4_0, false).unwrap_err(),
            ValidationError::VersionMisplaced
        );
    }
}
