//! vCard parsing (versions 2.1, 3.0 and 4.0).
//!
//! Parses a sequence of decoded text lines into a queryable document of
//! BEGIN…END entries.
//!
//! ## Usage
//!
//! ```rust
//! use conparse::vcard::VCard;
//!
//! let lines = ["BEGIN:VCARD", "VERSION:4.0", "FN:Jane Doe", "END:VCARD"];
//! let card = VCard::parse(lines, false).unwrap();
//!
//! assert_eq!(card.entries().len(), 1);
//! let entry = &card.entries()[0];
//! assert_eq!(entry.get_single("FN").unwrap().value(), "Jane Doe");
//! ```
//!
//! ## Submodules
//!
//! - [`lexer`] - Content line tokenization
//! - [`tag`] - Tag and parameter types
//! - [`entry`] - Per-entry ordered tag collections
//! - [`version`] - Version detection and per-version tag sets
//! - [`document`] - Document builder and queries

pub mod document;
pub mod entry;
pub mod lexer;
pub mod tag;
mod validate;
pub mod version;

pub use document::VCard;
pub use entry::{TagMap, VCardEntry};
pub use lexer::tokenize_line;
pub use tag::{VCardParameter, VCardTag};
pub use version::{VCardVersion, detect_version, is_vendor_extension};
