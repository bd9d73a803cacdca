/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string. `None` keeps the platform default, which
    /// the remote chat sites expect.
    pub user_agent: Option<String>,
    /// Initial zoom factor.
    pub zoom: f64,
}

impl ViewConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            devtools: cfg!(debug_assertions),
            user_agent: None,
            zoom: 1.0,
        }
    }
}
