//! Pure string transforms shared by the catalog builder and the router:
//! extension stripping, identifier and display-name sanitization, and
//! canonicalization of public serving paths.

/// The fixed URL prefix under which all asset paths are served.
pub const PUBLIC_PREFIX: &str = "/backgroundimages";

/// Returns `value` without its trailing `.ext`, but only if the last dot
/// occurs after the last path separator. A dot inside a directory name is not
/// an extension.
pub fn strip_extension(value: &str) -> &str {
    let last_sep = value.rfind(['/', '\\']);
    match value.rfind('.') {
        Some(dot) if last_sep.map_or(true, |sep| dot > sep) => &value[..dot],
        _ => value,
    }
}

/// Reduces `value` to `[A-Za-z0-9_]`: every run of other characters becomes a
/// single underscore, underscore runs collapse, leading and trailing
/// underscores are trimmed.
pub fn sanitize_id(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

/// Turns `value` into a display name: path-separator runs become `" - "`,
/// characters outside alphanumerics, underscore, hyphen and whitespace become
/// spaces, whitespace runs collapse to one space, the result is trimmed.
pub fn sanitize_name(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_sep = false;
    for c in value.chars() {
        if c == '/' || c == '\\' {
            if !prev_sep {
                out.push_str(" - ");
            }
            prev_sep = true;
            continue;
        }
        prev_sep = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace() {
            out.push(c);
        } else {
            out.push(' ');
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a serving path: backslashes become forward slashes, a single
/// leading slash is ensured, duplicate slashes collapse. Empty input stays
/// empty.
pub fn normalize_serving_path(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let replaced = trimmed.replace('\\', "/");
    let mut out = String::with_capacity(replaced.len() + 1);
    if !replaced.starts_with('/') {
        out.push('/');
    }
    let mut prev_slash = false;
    for c in replaced.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    out
}

/// Canonicalizes a path under [`PUBLIC_PREFIX`]: empty input yields the bare
/// prefix, paths already below the prefix pass through unchanged, anything
/// else is joined under it.
pub fn ensure_public_path(value: &str) -> String {
    let normalized = normalize_serving_path(value);
    if normalized.is_empty() {
        return PUBLIC_PREFIX.to_string();
    }
    match normalized.strip_prefix(PUBLIC_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => normalized,
        _ => format!("{}{}", PUBLIC_PREFIX, normalized),
    }
}

/// Last `/`- or `\`-separated component of a path string.
pub fn basename(value: &str) -> &str {
    value.rsplit(['/', '\\']).next().unwrap_or(value)
}
