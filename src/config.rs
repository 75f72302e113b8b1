//! API Configuration
//!
//! Where the content API lives and how asset URLs resolve against it.

/// Default content API endpoint (local Strapi instance)
pub const DEFAULT_API_URL: &str = "http://localhost:1337";

/// Content API endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `http://localhost:1337`
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build-time override via `CAR_RENTAL_API_URL`, falling back to the local endpoint
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CAR_RENTAL_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path such as `/api/cars?populate=*`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Resolve an asset URL returned by the API.
    ///
    /// Uploads come back as relative paths (`/uploads/x.jpg`) and need the
    /// base prefix; absolute URLs from external upload providers pass through.
    pub fn asset_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//") {
            url.to_string()
        } else {
            self.api_url(url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
