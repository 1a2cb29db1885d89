/// The environment variable naming the backend base URL.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Used when neither the runtime nor the build environment names a backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// The backend URL captured when the app was compiled.
pub const BUILD_BACKEND_URL: Option<&str> = std::option_env!("BACKEND_URL");

/// Where the product backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    backend_url: String,
}

impl ApiConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into();
        Self {
            backend_url: backend_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the backend from the runtime environment (native targets only),
    /// then the build environment, then [`DEFAULT_BACKEND_URL`].
    pub fn from_env() -> Self {
        Self::resolve(runtime_backend_url(), BUILD_BACKEND_URL)
    }

    fn resolve(runtime: Option<String>, build: Option<&str>) -> Self {
        let chosen = runtime
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                build
                    .filter(|url| !url.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Self::new(chosen)
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_backend_url() -> Option<String> {
    std::env::var(BACKEND_URL_ENV).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_backend_url() -> Option<String> {
    None
}
