//! Backend location.

/// Used when `GREENWAVE_API_URL` was not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Compile-time configuration. Read at build time so the same value works in
    /// the wasm bundle, which has no process environment.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("GREENWAVE_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("http://signals.local:9000//");
        assert_eq!(config.base_url, "http://signals.local:9000");
        assert_eq!(config.endpoint("/evaluate/5"), "http://signals.local:9000/evaluate/5");
        assert_eq!(config.endpoint("evaluate"), "http://signals.local:9000/evaluate");
    }
}
