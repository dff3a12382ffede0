//! Alexa endpoint identifiers.
//!
//! Alexa rejects endpoint ids (and friendly names) containing a handful of
//! punctuation characters, and dots are reserved. The host's `domain.object_id`
//! identifiers are mapped to a safe form here.

/// Characters Alexa does not accept in endpoint ids, names or descriptions.
pub const FORBIDDEN_CHARACTERS: [char; 17] = [
    '}', '{', '\\', '/', '|', '"', '(', ')', '[', ']', '+', '~', '!', '>', '<', '*', '%',
];

fn is_forbidden(c: char) -> bool {
    FORBIDDEN_CHARACTERS.contains(&c)
}

/// Remove every forbidden character from `text`, leaving everything else
/// (dots included) untouched.
#[must_use]
pub fn strip_forbidden(text: &str) -> String {
    text.chars().filter(|c| !is_forbidden(*c)).collect()
}

/// Return the Alexa endpoint id for a host entity id.
///
/// Dots become `#`, then forbidden characters are dropped.
#[must_use]
pub fn sanitize(entity_id: &str) -> String {
    entity_id
        .chars()
        .map(|c| if c == '.' { '#' } else { c })
        .filter(|c| !is_forbidden(*c))
        .collect()
}
