use crate::keys::structs::bulk_key_mapping::BulkKeyMapping;
use std::borrow::Cow;
use std::fmt::Write;

/// Replacement for a space. Shared with existing fleets, do not change.
pub const SPACE_SENTINEL: &str = "@+~";

const ESCAPE_PREFIX: &str = "@+";
const ESCAPE_SUFFIX: char = '~';

pub fn is_disallowed(c: char) -> bool {
    c.is_whitespace() || c.is_control()
}

pub fn needs_normalization(key: &str) -> bool {
    key.chars().any(is_disallowed)
}

/// Spaces become `@+~`, any other whitespace or control character becomes
/// `@+XX~` with its code point in lowercase hex. Clean keys are borrowed back.
pub fn normalize(key: &str) -> Cow<'_, str> {
    if !needs_normalization(key) {
        return Cow::Borrowed(key);
    }
    let mut normalized = String::with_capacity(key.len() + 8);
    for c in key.chars() {
        match c {
            ' ' => normalized.push_str(SPACE_SENTINEL),
            c if is_disallowed(c) => {
                let _ = write!(normalized, "{}{:02x}{}", ESCAPE_PREFIX, u32::from(c), ESCAPE_SUFFIX);
            }
            c => normalized.push(c),
        }
    }
    Cow::Owned(normalized)
}

/// Inverse of [`normalize`]. Sequences that `normalize` cannot produce are kept verbatim.
pub fn denormalize(key: &str) -> Cow<'_, str> {
    if !key.contains(ESCAPE_PREFIX) {
        return Cow::Borrowed(key);
    }
    let mut original = String::with_capacity(key.len());
    let mut rest = key;
    while let Some(position) = rest.find(ESCAPE_PREFIX) {
        original.push_str(&rest[..position]);
        let after = &rest[position + ESCAPE_PREFIX.len()..];
        match decode_escape(after) {
            Some((c, consumed)) => {
                original.push(c);
                rest = &after[consumed..];
            }
            None => {
                original.push_str(ESCAPE_PREFIX);
                rest = after;
            }
        }
    }
    original.push_str(rest);
    Cow::Owned(original)
}

fn decode_escape(after: &str) -> Option<(char, usize)> {
    if after.starts_with(ESCAPE_SUFFIX) {
        return Some((' ', ESCAPE_SUFFIX.len_utf8()));
    }
    let end = after.find(ESCAPE_SUFFIX)?;
    let digits = &after[..end];
    if !(2..=6).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let c = u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)?;
    (c != ' ' && is_disallowed(c)).then_some((c, end + ESCAPE_SUFFIX.len_utf8()))
}

/// Builds a mapping only when at least one key of the batch changes.
pub fn reform_bulk<S: AsRef<str>>(keys: &[S]) -> Option<BulkKeyMapping> {
    let mut mapping: Option<BulkKeyMapping> = None;
    for key in keys {
        let key = key.as_ref();
        if let Cow::Owned(normalized) = normalize(key) {
            mapping
                .get_or_insert_with(BulkKeyMapping::default)
                .insert(key.to_string(), normalized);
        }
    }
    mapping
}
