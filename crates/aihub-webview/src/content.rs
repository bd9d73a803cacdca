//! Local content serving via custom protocol.
//!
//! Registers an `aihub://` custom protocol so the shell view can load its
//! bundled HTML/JS/CSS without a local HTTP server.

use std::borrow::Cow;
use std::collections::HashMap;

/// Serves the shell's assets from memory. Entries are compiled into the
/// binary and registered at startup; anything else is a miss.
#[derive(Debug, Default)]
pub struct ContentProvider {
    entries: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    /// An empty provider.
    pub fn embedded() -> Self {
        Self::default()
    }

    /// Register an asset under `path`.
    pub fn add_asset(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.entries
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    ///
    /// Lookup is by exact key, so `..` segments and absolute paths can
    /// never reach the filesystem.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');
        let clean = if clean.is_empty() { "index.html" } else { clean };

        self.entries
            .get(clean)
            .map(|(mime, data)| (Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())))
    }
}
