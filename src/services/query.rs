use crate::error::AppError;

/// Joins `path` and the form-encoded `pairs` the way the browser's
/// `URLSearchParams` would: `path?` followed by `k=v&...`.
pub fn endpoint(path: &str, pairs: &[(&str, String)]) -> Result<String, AppError> {
    let query = serde_urlencoded::to_string(pairs)?;
    Ok(format!("{}?{}", path, query))
}

/// Appends the page cursor, which paginated endpoints always receive.
pub fn paginated(
    mut pairs: Vec<(&'static str, String)>,
    page: u32,
    size: u32,
) -> Vec<(&'static str, String)> {
    pairs.push(("page", page.to_string()));
    pairs.push(("size", size.to_string()));
    pairs
}
