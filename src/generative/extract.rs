//! Pull a JSON object out of free-form model output.
//!
//! Responses often wrap the payload in prose or code fences and sprinkle in
//! JavaScript-style comments and trailing commas. Cleaning takes the span from
//! the first `{` to the last `}` and then strips those three things. Comment
//! stripping is textual, so a `//` inside a string value is cut as well.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::DecodeError;

lazy_static! {
    static ref OBJECT_REGEX: Regex = Regex::new(r"\{[\s\S]*\}").unwrap();
    static ref LINE_COMMENT_REGEX: Regex = Regex::new(r"(?m)//.*$").unwrap();
    static ref BLOCK_COMMENT_REGEX: Regex = Regex::new(r"/\*[\s\S]*?\*/").unwrap();
    static ref TRAILING_COMMA_REGEX: Regex = Regex::new(r",(\s*[}\]])").unwrap();
}

/// Outermost `{ ... }` substring of `text`, if any
pub fn find_object(text: &str) -> Option<&str> {
    OBJECT_REGEX.find(text).map(|m| m.as_str())
}

/// Extract and clean the JSON payload of a response
pub fn clean_payload(text: &str) -> Result<String, DecodeError> {
    let object = find_object(text).ok_or(DecodeError::NoPayload)?;
    let without_lines = LINE_COMMENT_REGEX.replace_all(object, "");
    let without_blocks = BLOCK_COMMENT_REGEX.replace_all(&without_lines, "");
    let cleaned = TRAILING_COMMA_REGEX.replace_all(&without_blocks, "$1");
    Ok(cleaned.into_owned())
}
