// Address bar input handling. Pure string logic: no DNS lookups, no
// reachability checks. The surface decides whether the result loads.

/// Turns free-form address bar input into an address to load.
///
/// - blank input yields `None`
/// - explicit `http://` / `https://` addresses pass through unchanged
/// - input with a space, or without any `.`, becomes a search query against
///   `search_endpoint`
/// - anything else without a scheme gets `https://` prepended
pub fn normalize_input(raw: &str, search_endpoint: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if has_web_scheme(trimmed) {
        return Some(trimmed.to_string());
    }

    if trimmed.contains(' ') || !trimmed.contains('.') {
        return Some(search_url(trimmed, search_endpoint));
    }

    if !trimmed.contains("://") {
        return Some(format!("https://{}", trimmed));
    }

    Some(trimmed.to_string())
}

/// Builds the search-query form of `query`.
pub fn search_url(query: &str, search_endpoint: &str) -> String {
    format!("{}{}", search_endpoint, urlencoding::encode(query))
}

fn has_web_scheme(input: &str) -> bool {
    let lower = input.get(..8).unwrap_or(input).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Short label for an address, used as a title until the page reports one.
pub fn display_host(url: &str) -> String {
    let rest = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    host.trim_start_matches("www.").to_string()
}
