use crate::protocol::ClientError;

/// Serializes a base path plus string key/value pairs into a path with a
/// properly escaped query string.
pub fn build_path(path: &str, params: &[(&str, String)]) -> Result<String, ClientError> {
    if params.is_empty() {
        return Ok(path.to_string());
    }
    let query = serde_urlencoded::to_string(params)
        .map_err(|e| ClientError::InvalidRequest(format!("failed to encode query: {}", e)))?;
    Ok(format!("{}?{}", path, query))
}

/// JSON-encodes a structured value destined for a string-valued query or
/// body parameter.
pub fn encode_json<T: serde::Serialize>(value: &T) -> Result<String, ClientError> {
    serde_json::to_string(value)
        .map_err(|e| ClientError::InvalidRequest(format!("failed to encode value: {}", e)))
}
