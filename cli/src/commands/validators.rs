use crate::client::draft::parse_file_spec;
use crate::client::http_method::HttpMethod;

pub fn validate_method(method: &str) -> Result<String, String> {
    match HttpMethod::parse(method) {
        Some(parsed) => Ok(parsed.as_str().to_string()),
        None => Err(format!(
            "Unsupported HTTP method: {method} (expected one of GET, POST, PUT, DELETE, PATCH, HEAD, OPTIONS)"
        )),
    }
}

pub fn validate_file_spec(spec: &str) -> Result<String, String> {
    parse_file_spec(spec)
        .map(|_| spec.to_string())
        .map_err(|e| e.to_string())
}

pub fn validate_query(query: &str) -> Result<String, String> {
    if query.trim().is_empty() {
        return Err("Search query must be a non-empty string.".to_string());
    }
    Ok(query.to_string())
}
