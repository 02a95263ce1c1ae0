//! Cache key construction.

/// Build a deterministic cache key from a request path and its parameters.
///
/// The key is the normalized path, followed by `?` and the parameters sorted by
/// name then value, so insertion order never matters. Keys always begin with
/// the path, which is what makes prefix invalidation work.
pub fn cache_key<K, V>(path: &str, params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut key = normalize_path(path);
    if params.is_empty() {
        return key;
    }

    let mut sorted: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_ref(), v.as_ref()))
        .collect();
    sorted.sort_unstable();

    let query = sorted
        .into_iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    key.push('?');
    key.push_str(&query);
    key
}

/// Leading slash, no trailing slash.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    format!("/{}", trimmed)
}
