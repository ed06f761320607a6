//! Backend Configuration
//!
//! The page talks to one REST backend; its base URL is fixed at build time
//! through the `BACKEND_URL` environment variable.

use url::Url;

use crate::error::FetchError;

pub const DEFAULT_BACKEND_URL: &str = "https://course-js.javascript.ru/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: Url,
}

impl BackendConfig {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
        })
    }

    /// Base URL from the build environment, or the default backend
    pub fn from_env() -> Result<Self, FetchError> {
        Self::new(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
    }

    /// Resolve `path` relative to the base URL (WHATWG rules: a base without a
    /// trailing slash has its last segment replaced).
    pub fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        Ok(self.base_url.join(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_resolves_under_base() {
        let config = BackendConfig::new("https://shop.example/").unwrap();
        let url = config.endpoint("api/rest/categories").unwrap();
        assert_eq!(url.as_str(), "https://shop.example/api/rest/categories");
    }

    #[test]
    fn test_endpoint_keeps_base_directory() {
        let config = BackendConfig::new("https://shop.example/admin/").unwrap();
        let url = config.endpoint("api/rest/subcategories").unwrap();
        assert_eq!(url.as_str(), "https://shop.example/admin/api/rest/subcategories");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = BackendConfig::new("not a url").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_env_is_valid() {
        assert!(BackendConfig::from_env().is_ok());
    }
}
