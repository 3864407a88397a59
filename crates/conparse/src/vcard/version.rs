//! vCard version detection and per-version tag sets.

use std::fmt;

use crate::error::VersionError;
use crate::vcard::entry::VCardEntry;

/// A recognized vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VCardVersion {
    /// vCard 2.1 (versit specification).
    V2_1,
    /// vCard 3.0 (RFC 2426).
    V3_0,
    /// vCard 4.0 (RFC 6350).
    V4_0,
}

impl VCardVersion {
    /// Parses a VERSION tag value.
    ///
    /// ## Errors
    /// Returns [`VersionError::Unknown`] for anything but the three
    /// recognized literals.
    pub fn parse(value: &str) -> Result<Self, VersionError> {
        match value {
            "2.1" => Ok(Self::V2_1),
            "3.0" => Ok(Self::V3_0),
            "4.0" => Ok(Self::V4_0),
            other => Err(VersionError::Unknown(other.to_string())),
        }
    }

    /// Tags every entry must carry in strict mode.
    #[must_use]
    pub fn required_tags(self) -> &'static [&'static str] {
        match self {
            Self::V2_1 => &["BEGIN", "END", "VERSION", "N"],
            Self::V3_0 => &["BEGIN", "END", "VERSION", "N", "FN"],
            Self::V4_0 => &["BEGIN", "END", "VERSION", "FN"],
        }
    }

    /// The standard tag set of the version.
    #[must_use]
    pub fn standard_tags(self) -> &'static [&'static str] {
        match self {
            Self::V2_1 => V2_1_TAGS,
            Self::V3_0 => V3_0_TAGS,
            Self::V4_0 => V4_0_TAGS,
        }
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2_1 => write!(f, "2.1"),
            Self::V3_0 => write!(f, "3.0"),
            Self::V4_0 => write!(f, "4.0"),
        }
    }
}

/// Returns whether a tag name is a vendor extension (`X-` prefix).
#[must_use]
pub fn is_vendor_extension(name: &str) -> bool {
    name.len() > 2 && name.starts_with("X-")
}

/// Detects the document version from its entries.
///
/// The first entry carrying a VERSION tag decides; its first VERSION value
/// is parsed.
///
/// ## Errors
/// Returns [`VersionError::CannotDetermine`] when no entry has a VERSION
/// tag, or [`VersionError::Unknown`] for an unrecognized value.
pub fn detect_version(entries: &[VCardEntry]) -> Result<VCardVersion, VersionError> {
    let tagged = entries
        .iter()
        .find(|entry| entry.has_tag("VERSION"))
        .ok_or(VersionError::CannotDetermine)?;

    // has_tag guarantees the lookup succeeds.
    let value = match tagged.get_single("VERSION") {
        Ok(tag) => tag.value(),
        Err(_) => return Err(VersionError::CannotDetermine),
    };

    VCardVersion::parse(value)
}

/// vCard 2.1 property names.
static V2_1_TAGS: &[&str] = &[
    "BEGIN", "END", "VERSION", "N", "FN", "PHOTO", "BDAY", "ADR", "LABEL", "TEL", "EMAIL",
    "MAILER", "TZ", "GEO", "TITLE", "ROLE", "LOGO", "AGENT", "ORG", "NOTE", "REV", "SOUND",
    "URL", "UID", "KEY",
];

/// vCard 3.0 property names (RFC 2426, plus RFC 2425 profile tags).
static V3_0_TAGS: &[&str] = &[
    "BEGIN", "END", "VERSION", "NAME", "PROFILE", "SOURCE", "N", "FN", "NICKNAME", "PHOTO",
    "BDAY", "ADR", "LABEL", "TEL", "EMAIL", "MAILER", "TZ", "GEO", "TITLE", "ROLE", "LOGO",
    "AGENT", "ORG", "CATEGORIES", "NOTE", "PRODID", "REV", "SORT-STRING", "SOUND", "UID",
    "URL", "CLASS", "KEY",
];

/// vCard 4.0 property names (RFC 6350).
static V4_0_TAGS: &[&str] = &[
    "BEGIN", "END", "VERSION", "SOURCE", "KIND", "XML", "FN", "N", "NICKNAME", "PHOTO", "BDAY",
    "ANNIVERSARY", "GENDER", "ADR", "TEL", "EMAIL", "IMPP", "LANG", "TZ", "GEO", "TITLE",
    "ROLE", "LOGO", "ORG", "MEMBER", "RELATED", "CATEGORIES", "NOTE", "PRODID", "REV", "SOUND",
    "UID", "CLIENTPIDMAP", "URL", "KEY", "FBURL", "CALADRURI", "CALURI",
];

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

    #[test]
    fn parse_recognized_literals() {
        assert_eq!(VCardVersion::parse("2.1").unwrap(), VCardVersion::V2_1);
        assert_eq!(VCardVersion::parse("3.0").unwrap(), VCardVersion::V3_0);
        assert_eq!(VCardVersion::parse("4.0").unwrap(), VCardVersion::V4_0);
    }

    #[test]
    fn parse_unknown_literal() {
        assert_eq!(
            VCardVersion::parse("5.0").unwrap_err(),
            VersionError::Unknown("5.0".into())
        );
    }

    #[test]
    fn detect_from_first_tagged_entry() {
        let entries = vec![
            entry_with(&[("BEGIN", "VCARD"), ("VERSION", "3.0"), ("END", "VCARD")]),
            entry_with(&[("BEGIN", "VCARD"), ("VERSION", "4.0"), ("END", "VCARD")]),
        ];
        assert_eq!(detect_version(&entries).unwrap(), VCardVersion::V3_0);
    }

    #[test]
    fn detect_skips_untagged_entries() {
        let entries = vec![
            entry_with(&[("BEGIN", "VCARD"), ("END", "VCARD")]),
            entry_with(&[("BEGIN", "VCARD"), ("VERSION", "2.1"), ("END", "VCARD")]),
        ];
        assert_eq!(detect_version(&entries).unwrap(), VCardVersion::V2_1);
    }

    #[test]
    fn detect_without_version_tag() {
        let entries = vec![entry_with(&[("BEGIN", "VCARD"), ("END", "VCARD")])];
        assert_eq!(
            detect_version(&entries).unwrap_err(),
            VersionError::CannotDetermine
        );
    }

    #[test]
    fn vendor_extension_prefix() {
        assert!(is_vendor_extension("X-CUSTOM"));
        assert!(!is_vendor_extension("X-"));
        assert!(!is_vendor_extension("NOTATAG"));
    }

    #[test]
    fn required_tags_are_standard() {
        for version in [VCardVersion::V2_1, VCardVersion::V3_0, VCardVersion::V4_0] {
            for tag in version.required_tags() {
                assert!(version.standard_tags().contains(tag), "{version}: {tag}");
            }
        }
    }
}
