/// Strip surrounding whitespace and one layer of matching quotes.
///
/// Deploy tooling frequently writes `KEY="value"` verbatim into the environment.
pub fn normalize_env_value(raw: &str) -> String {
    let trimmed = raw.trim();

    if let Some(inner) = trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        return inner.trim().to_string();
    }
    if let Some(inner) = trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
        return inner.trim().to_string();
    }

    trimmed.to_string()
}

/// Look up `key` through `lookup`, returning `None` for unset or blank values.
pub fn env_string<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| normalize_env_value(&v))
        .filter(|s| !s.is_empty())
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
