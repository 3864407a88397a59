//! vCard tag and parameter types.

use crate::error::{LineError, LookupError};

/// A single `name=value` parameter of a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name as it appeared on the line.
    pub name: String,
    /// Parameter value.
    pub value: String,
}

impl VCardParameter {
    /// Creates a new parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One content line of a vCard entry.
///
/// Produced by [`tokenize_line`](crate::vcard::tokenize_line) and immutable
/// thereafter. The parameter string is kept raw; parameters are derived on
/// demand via [`VCardTag::params`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardTag {
    /// Optional group prefix (e.g. "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Tag name, normalized to uppercase.
    pub name: String,
    /// Raw parameter string between the first `;` and the value separator.
    pub raw_params: Option<String>,
    /// Tag value with CR/LF stripped.
    pub value: String,
}

impl VCardTag {
    /// Creates a tag, uppercasing the name and stripping line terminators
    /// from the value.
    #[must_use]
    pub fn new(
        group: Option<String>,
        name: &str,
        raw_params: Option<String>,
        value: &str,
    ) -> Self {
        Self {
            group,
            name: name.to_ascii_uppercase(),
            raw_params,
            value: value.replace(['\r', '\n'], ""),
        }
    }

    /// Returns the tag value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parses the raw parameter string into ordered parameters.
    ///
    /// ## Errors
    /// Returns [`LineError::MalformedParameter`] if a segment lacks `=`
    /// or has an empty name.
    pub fn params(&self) -> Result<Vec<VCardParameter>, LineError> {
        let Some(raw) = self.raw_params.as_deref() else {
            return Ok(Vec::new());
        };

        let mut params = Vec::new();
        for segment in raw.split(';') {
            let Some((name, value)) = segment.split_once('=') else {
                return Err(LineError::MalformedParameter(segment.to_string()));
            };
            if name.is_empty() {
                return Err(LineError::MalformedParameter(segment.to_string()));
            }
            params.push(VCardParameter::new(name, value));
        }

        Ok(params)
    }

    /// Returns the first parameter matching `name` case-insensitively.
    ///
    /// ## Errors
    /// Returns [`LookupError::ParameterNotFound`] if no parameter matches,
    /// or [`LineError::MalformedParameter`] if the parameter string cannot
    /// be parsed at all.
    pub fn param(&self, name: &str) -> crate::error::ConparseResult<VCardParameter> {
        let params = self.params()?;
        params
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                LookupError::ParameterNotFound {
                    name: name.to_ascii_uppercase(),
                    tag: self.name.clone(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConparseError;

    fn tag_with_params(raw: &str) -> VCardTag {
        VCardTag::new(None, "TEL", Some(raw.to_string()), "555-1234")
    }

    #[test]
    fn name_uppercased_and_value_stripped() {
        let tag = VCardTag::new(None, "fn", None, "Jane Doe\r\n");
        assert_eq!(tag.name, "FN");
        assert_eq!(tag.value(), "Jane Doe");
    }

    #[test]
    fn params_empty_when_absent() {
        let tag = VCardTag::new(None, "FN", None, "Jane Doe");
        assert_eq!(tag.params().unwrap(), Vec::new());
    }

    #[test]
    fn params_preserve_order() {
        let tag = tag_with_params("TYPE=CELL;PREF=1");
        let params = tag.params().unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0], VCardParameter::new("TYPE", "CELL"));
        assert_eq!(params[1], VCardParameter::new("PREF", "1"));
    }

    #[test]
    fn param_lookup_case_insensitive() {
        let tag = tag_with_params("TYPE=CELL");
        let param = tag.param("type").unwrap();
        assert_eq!(param.value, "CELL");
    }

    #[test]
    fn param_lookup_missing() {
        let tag = tag_with_params("TYPE=CELL");
        let err = tag.param("PREF").unwrap_err();
        assert!(matches!(
            err,
            ConparseError::Lookup(crate::error::LookupError::ParameterNotFound { .. })
        ));
    }

    #[test]
    fn params_segment_without_equals() {
        let tag = tag_with_params("TYPE");
        assert_eq!(
            tag.params().unwrap_err(),
            crate::error::LineError::MalformedParameter("TYPE".into())
        );
    }

    #[test]
    fn param_value_may_be_empty() {
        let tag = tag_with_params("TYPE=");
        let params = tag.params().unwrap();
        assert_eq!(params[0].value, "");
    }
}
