//! Icon identifier derivation

/// Derive an exported identifier from a set prefix and an archive path
///
/// The file's base name is stripped of its extension (unless the only dot
/// leads the name), split on hyphens, each segment's first character is
/// upper-cased, and the segments are concatenated behind the prefix:
/// `("feather", "video-off.svg")` becomes `featherVideoOff`.
pub fn icon_identifier(prefix: &str, path: &str) -> String {
    let base = path.rsplit('/').next().unwrap_or(path);
    let stem = match base.rfind('.') {
        Some(pos) if pos > 0 => &base[..pos],
        _ => base,
    };

    let mut identifier = String::from(prefix);
    for segment in stem.split('-') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            identifier.extend(first.to_uppercase());
            identifier.push_str(chars.as_str());
        }
    }
    identifier
}

/// Convert a camelCase identifier to SCREAMING_SNAKE_CASE for Rust constants
pub fn const_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    for (i, c) in identifier.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(c.to_uppercase());
    }
    out
}
