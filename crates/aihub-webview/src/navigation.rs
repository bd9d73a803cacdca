//! Which URLs a view may navigate to in place.
//!
//! Anything refused here is not dropped: the handler reports it as
//! `ExternalNavigation` and the app opens it in the system browser.

use wry::http::Uri;

// =============================================================================
// SHELL PREFIXES
// =============================================================================

/// Bundled shell content, always allowed in the shell view.
pub const SHELL_PREFIXES: &[&str] = &[
    "aihub://",
    // On Windows, WebView2 rewrites custom protocols: aihub://localhost/… → http://aihub.localhost/…
    "http://aihub.localhost/",
    "about:blank",
];

/// `scheme://authority` of an absolute http(s) URL, lowercased.
pub fn origin_of(url: &str) -> Option<String> {
    let uri: Uri = url.trim().parse().ok()?;
    let scheme = uri.scheme_str()?.to_ascii_lowercase();
    if scheme != "http" && scheme != "https" {
        return None;
    }
    let authority = uri.authority()?.as_str().to_ascii_lowercase();
    Some(format!("{scheme}://{authority}"))
}

// =============================================================================
// POLICY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// The shell page plus the sites it embeds in slots.
    Shell { embedded_origins: Vec<String> },
    /// A service window stays on the origin it was opened with.
    Service { origin: Option<String> },
}

impl NavigationPolicy {
    pub fn shell<'a>(embedded_urls: impl IntoIterator<Item = &'a str>) -> Self {
        let mut embedded_origins: Vec<String> =
            embedded_urls.into_iter().filter_map(origin_of).collect();
        embedded_origins.sort();
        embedded_origins.dedup();
        Self::Shell { embedded_origins }
    }

    pub fn service(initial_url: &str) -> Self {
        Self::Service {
            origin: origin_of(initial_url),
        }
    }

    pub fn allows(&self, url: &str) -> bool {
        match self {
            Self::Shell { embedded_origins } => {
                SHELL_PREFIXES.iter().any(|p| url.starts_with(p))
                    || origin_of(url).is_some_and(|o| embedded_origins.contains(&o))
            }
            Self::Service { origin } => {
                url == "about:blank"
                    || origin
                        .as_deref()
                        .is_some_and(|own| origin_of(url).as_deref() == Some(own))
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
