//! Mapping between language tags and wire content types.

use super::find_language;

const JSON_LANGUAGE: &str = "json";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Derive the content type sent with a paste of `language`.
///
/// Unknown tags are not rejected; they map to `text/<tag>` like any other.
pub fn language_to_content_type(language: &str) -> String {
    if language == JSON_LANGUAGE {
        JSON_CONTENT_TYPE.to_string()
    } else {
        format!("text/{}", language)
    }
}

/// Split a content type into `(type, subtype)`, dropping any parameters.
///
/// Case is preserved; callers decide which half to fold.
///
/// # Returns
/// `None` when there is no `/` or either half is empty.
pub fn parse_content_type(content_type: &str) -> Option<(&str, &str)> {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    let (kind, subtype) = essence.split_once('/')?;
    let (kind, subtype) = (kind.trim(), subtype.trim());
    if kind.is_empty() || subtype.is_empty() {
        return None;
    }
    Some((kind, subtype))
}

/// Recover a language tag from a response content type.
///
/// The top-level type must be exactly `application` or `text`; the subtype is
/// always compared case-insensitively.
///
/// # Returns
/// The matching tag, or `None` when the caller should fall back to plain.
pub fn content_type_to_language(content_type: &str) -> Option<&'static str> {
    let (kind, subtype) = parse_content_type(content_type)?;
    let subtype = subtype.to_ascii_lowercase();
    match kind {
        "application" if subtype == JSON_LANGUAGE => Some(JSON_LANGUAGE),
        "text" => find_language(&subtype),
        _ => None,
    }
}
