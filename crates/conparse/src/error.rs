//! Error taxonomy for contact parsing.
//!
//! Each parsing layer has its own error enum so callers can pattern-match
//! on the exact failure instead of inspecting message strings. The
//! [`ConparseError`] umbrella wraps all of them for the document-level API.

use thiserror::Error;

/// Result type for the document-level parsing API.
pub type ConparseResult<T> = std::result::Result<T, ConparseError>;

/// Errors raised while splitting raw input into tags and parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line does not match `[group.]NAME[;PARAMS]:VALUE`.
    #[error("malformed content line: {0}")]
    MalformedLine(String),

    /// A parameter segment lacks a `=` separator.
    #[error("malformed parameter segment: {0}")]
    MalformedParameter(String),

    /// The input contained no lines at all.
    #[error("empty input")]
    EmptyInput,
}

/// Errors raised by lookups on entries and tags.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The tag does not exist anywhere in the entry.
    #[error("tag {name} not found")]
    TagNotFound {
        /// Requested tag name.
        name: String,
    },

    /// The requested group does not exist in the entry.
    #[error("group {group} not found")]
    GroupNotFound {
        /// Requested group name.
        group: String,
    },

    /// The group exists but does not contain the tag.
    #[error("tag {name} not found in group {group}")]
    TagNotFoundInGroup {
        /// Requested tag name.
        name: String,
        /// Group that was searched.
        group: String,
    },

    /// The tag is absent at the top level but present under a group.
    ///
    /// Distinct from [`LookupError::TagNotFound`] so callers can branch
    /// between "truly absent" and "scoped to a group".
    #[error("tag {name} found in group {group}")]
    FoundInGroup {
        /// Requested tag name.
        name: String,
        /// Group the tag was found under.
        group: String,
    },

    /// The tag carries no parameter with the requested name.
    #[error("parameter {name} of tag {tag} not found")]
    ParameterNotFound {
        /// Requested parameter name.
        name: String,
        /// Name of the tag that was searched.
        tag: String,
    },
}

/// Errors raised by vCard version detection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// No entry carries a VERSION tag.
    #[error("cannot determine vCard version")]
    CannotDetermine,

    /// A VERSION tag exists but its value is not 2.1, 3.0 or 4.0.
    #[error("unknown vCard version {0}")]
    Unknown(String),
}

/// Errors raised by document validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Entry counts for BEGIN and END tags differ.
    #[error("unmatched BEGIN/END tags")]
    UnmatchedBeginEnd,

    /// Strict mode: an entry is missing one of the version's required tags.
    #[error("vCard does not contain required tags")]
    MissingRequiredTags,

    /// Strict mode: a tag is neither standard for the version nor an
    /// `X-` vendor extension.
    #[error("vCard contains unknown tag {0}")]
    UnknownTag(String),

    /// vCard 4.0: VERSION is not placed immediately after BEGIN.
    #[error("VERSION tag should be placed immediately after BEGIN tag")]
    VersionMisplaced,
}

/// Umbrella error for document construction and queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConparseError {
    #[error(transparent)]
    Line(#[from] LineError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
