#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server rejected the request. `message` is the server-supplied
    /// error payload when one was present, a generic fallback otherwise.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an `Api` error from a failed response, preferring the server's
    /// `message` field over the caller-supplied fallback.
    pub async fn from_response(resp: reqwest::Response, fallback: &str) -> Self {
        let status = resp.status().as_u16();
        let message = match resp.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("message")
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| fallback.to_string()),
            Err(_) => fallback.to_string(),
        };
        ApiError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message() {
        let err = ApiError::Api {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}
