//! Route prefix handling and path matching
//!
//! Configured item paths are relative to an optional application-wide
//! route prefix. Matching strips the prefix from the browser path;
//! navigation targets get it re-added, so the two operations round-trip.

use regex::Regex;

use crate::config::NavigationItem;

fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Remove `prefix` from the front of `pathname`.
///
/// Both sides are normalized to begin with `/` before comparison. When
/// the prefix matches, the remainder is returned (an empty remainder
/// maps to `"/"`). When it does not, `pathname` comes back unchanged —
/// the caller must treat that as "prefix does not apply here".
pub fn strip_route_prefix(pathname: &str, prefix: Option<&str>) -> String {
    let Some(prefix) = prefix.filter(|p| !p.is_empty()) else {
        return pathname.to_string();
    };

    let normalized_prefix = ensure_leading_slash(prefix);
    let normalized_pathname = ensure_leading_slash(pathname);

    match normalized_pathname.strip_prefix(normalized_prefix.as_str()) {
        Some("") => "/".to_string(),
        Some(stripped) if stripped.starts_with('/') => stripped.to_string(),
        Some(stripped) => format!("/{stripped}"),
        None => pathname.to_string(),
    }
}

/// Prepend `prefix` to `path`, the inverse of [`strip_route_prefix`].
///
/// No-ops when either side is empty. A trailing slash on the prefix is
/// collapsed before concatenation; `path == "/"` maps to the bare
/// prefix and `prefix == "/"` returns the path unchanged.
pub fn add_route_prefix(path: &str, prefix: Option<&str>) -> String {
    let Some(prefix) = prefix.filter(|p| !p.is_empty()) else {
        return path.to_string();
    };
    if path.is_empty() {
        return path.to_string();
    }

    let mut normalized_prefix = ensure_leading_slash(prefix);
    let normalized_path = ensure_leading_slash(path);

    if normalized_path == "/" {
        return normalized_prefix;
    }
    if normalized_prefix == "/" {
        return normalized_path;
    }
    if normalized_prefix.ends_with('/') {
        normalized_prefix.pop();
    }

    format!("{normalized_prefix}{normalized_path}")
}

/// Compile a route pattern to an anchored matcher.
///
/// `:name` segments become single-path-segment wildcards (`[^/]+`) and
/// `*` becomes a greedy wildcard. Compilation is deterministic; callers
/// that match the same pattern repeatedly may cache the result.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    let mut body = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek().is_some_and(|next| next.is_alphanumeric() || *next == '_') => {
                while chars
                    .peek()
                    .is_some_and(|next| next.is_alphanumeric() || *next == '_')
                {
                    chars.next();
                }
                body.push_str("[^/]+");
            }
            '*' => body.push_str(".*"),
            other => body.push(other),
        }
    }

    Regex::new(&format!("^{body}$"))
}

/// Match `pathname` (query string ignored) against a route pattern.
///
/// A pattern that fails to compile matches nothing; configuration
/// validation reports such patterns up front.
pub fn match_path_pattern(pathname: &str, pattern: &str) -> bool {
    let clean = pathname.split('?').next().unwrap_or(pathname);

    match compile_pattern(pattern) {
        Ok(matcher) => matcher.is_match(clean),
        Err(error) => {
            tracing::warn!(pattern, %error, "skipping path pattern that does not compile");
            false
        }
    }
}

/// Whether `pathname` selects `item`: an exact `path` match, a
/// `path_pattern` match, or a strict descendant of `path`.
pub fn matches_navigation_item(pathname: &str, item: &NavigationItem) -> bool {
    if let Some(path) = &item.path {
        if pathname == path {
            return true;
        }
    }

    if let Some(pattern) = &item.path_pattern {
        if match_path_pattern(pathname, pattern) {
            return true;
        }
    }

    if let Some(path) = &item.path {
        if pathname.starts_with(&format!("{path}/")) {
            return true;
        }
    }

    false
}
