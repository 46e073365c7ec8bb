//! Display-name derivation for tag identifiers

/// Turn a tag identifier into badge text
///
/// Takes the segment after the last `/` or `:` and title-cases it, so
/// `minecraft:mineable/axe` becomes `Axe`. A trailing separator keeps the
/// whole identifier.
pub fn derive_display_name(tag_id: &str) -> String {
    let split = match (tag_id.rfind('/'), tag_id.rfind(':')) {
        (Some(slash), Some(colon)) => Some(slash.max(colon)),
        (slash, colon) => slash.or(colon),
    };
    let path = match split {
        // Both separators are single-byte, so idx + 1 is a char boundary
        Some(idx) if idx + 1 < tag_id.len() => &tag_id[idx + 1..],
        _ => tag_id,
    };
    to_title_case(path)
}

/// Title-case `input`, treating `_` and `-` as word breaks that become spaces
pub fn to_title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = true;
    for c in input.chars() {
        if c == '_' || c == '-' {
            result.push(' ');
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}
