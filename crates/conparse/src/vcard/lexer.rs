//! vCard content line tokenizer.
//!
//! Splits one decoded text line of the form `[group.]NAME[;PARAMS]:VALUE`
//! into a [`VCardTag`]. Folding is not handled here; the input contract is
//! one logical line per call.

use crate::error::LineError;
use crate::vcard::tag::VCardTag;

/// Tokenizes a single content line into a tag.
///
/// `group` and `NAME` match `[A-Za-z0-9_-]+`. When a `;` introduces a
/// parameter string, the value starts after the final `:` of the line;
/// otherwise it starts after the first `:`. The name is uppercased and the
/// value is stripped of CR/LF.
///
/// ## Errors
/// Returns [`LineError::MalformedLine`] when the line does not match the
/// grammar.
pub fn tokenize_line(line: &str) -> Result<VCardTag, LineError> {
    let malformed = || LineError::MalformedLine(line.to_string());

    let (group, rest) = parse_group(line);

    // Locate the name/params boundary before deciding which colon ends them.
    let first_colon = rest.find(':').ok_or_else(malformed)?;
    let semi = rest.find(';').filter(|&p| p < first_colon);

    let (name, raw_params, value) = if let Some(semi_pos) = semi {
        // A parameter string is present; it extends to the final colon.
        let last_colon = rest.rfind(':').ok_or_else(malformed)?;
        if last_colon < semi_pos {
            return Err(malformed());
        }
        (
            &rest[..semi_pos],
            Some(rest[semi_pos + 1..last_colon].to_string()),
            &rest[last_colon + 1..],
        )
    } else {
        (&rest[..first_colon], None, &rest[first_colon + 1..])
    };

    if !is_valid_name(name) {
        return Err(malformed());
    }

    Ok(VCardTag::new(
        group.map(String::from),
        name,
        raw_params,
        value,
    ))
}

/// Splits an optional group prefix off the line.
///
/// A dot prefix only counts as a group when it is non-empty and made of
/// name characters; otherwise the whole line is left untouched.
fn parse_group(line: &str) -> (Option<&str>, &str) {
    if let Some(dot_pos) = line.find('.') {
        let candidate = &line[..dot_pos];
        if is_valid_name(candidate) {
            return (Some(candidate), &line[dot_pos + 1..]);
        }
    }
    (None, line)
}

fn is_valid_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
