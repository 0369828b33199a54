//! Relative URL resolution.

use url::Url;

/// True when `candidate` carries a network location: a non-empty authority
/// introduced by `//`, after an optional scheme.
///
/// `http:foo.png` has a scheme but no authority, so it is still relative.
pub fn has_network_location(candidate: &str) -> bool {
    let rest = match candidate.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => candidate,
    };

    rest.strip_prefix("//")
        .is_some_and(|authority| !authority.is_empty() && !authority.starts_with(['/', '?', '#']))
}

fn is_scheme(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Resolve `candidate` against the page URL `base`.
///
/// URLs that already have a network location come back unchanged. Anything
/// else is joined onto `base`. When `base` is empty or not an absolute URL
/// there is nothing to join onto and `candidate` is returned as is.
///
/// ```rust
/// use mediascan_core::resolve_url;
///
/// assert_eq!(resolve_url("http://x.test/dir/", "a.png"), "http://x.test/dir/a.png");
/// assert_eq!(resolve_url("http://x.test/dir/", "https://cdn.test/b.png"), "https://cdn.test/b.png");
/// assert_eq!(resolve_url("", "a.png"), "a.png");
/// ```
pub fn resolve_url(base: &str, candidate: &str) -> String {
    if has_network_location(candidate) {
        return candidate.to_string();
    }

    let Ok(base_url) = Url::parse(base.trim()) else {
        return candidate.to_string();
    };

    match base_url.join(candidate) {
        Ok(joined) => joined.into(),
        Err(_) => candidate.to_string(),
    }
}
