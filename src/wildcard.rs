//! `*` glob matching for tag patterns
//!
//! A `*` stands for any run of characters (including none) and the pattern
//! must cover the whole tag. Every other character is literal, so dots and
//! regex metacharacters in rule keys never change the meaning of a pattern.

pub const WILDCARD: char = '*';

/// Whether `pattern` contains a wildcard at all
pub fn is_pattern(pattern: &str) -> bool {
    pattern.contains(WILDCARD)
}

/// Match `tag` against `pattern`, anchored at both ends
pub fn matches(pattern: &str, tag: &str) -> bool {
    let mut segments = pattern.split(WILDCARD);
    // split always yields at least one segment
    let prefix = segments.next().unwrap_or_default();
    let Some(mut rest) = tag.strip_prefix(prefix) else {
        return false;
    };

    let mut middle: Vec<&str> = segments.collect();
    let Some(suffix) = middle.pop() else {
        // no wildcard: plain equality
        return rest.is_empty();
    };
    if rest.len() < suffix.len() || !rest.ends_with(suffix) {
        return false;
    }
    rest = &rest[..rest.len() - suffix.len()];

    for segment in middle {
        match rest.find(segment) {
            Some(idx) => rest = &rest[idx + segment.len()..],
            None => return false,
        }
    }
    true
}
