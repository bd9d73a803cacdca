//! Static catalog of known services.

use aihub_common::ServiceId;
use aihub_config::schema::ServiceConfig;
use serde::Serialize;

/// Immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub url: String,
    pub description: String,
    /// Expected to render inside an embedding slot.
    pub embeddable: bool,
    /// Always opened in a separate window.
    pub forces_external_window: bool,
}

impl Service {
    fn builtin(id: &str, name: &str, url: &str, description: &str, embeddable: bool) -> Self {
        Self {
            id: ServiceId::from(id),
            name: name.into(),
            url: url.into(),
            description: description.into(),
            embeddable,
            forces_external_window: !embeddable,
        }
    }

    /// Whether activating this service must go through a window rather
    /// than an embedding slot.
    pub fn requires_window(&self) -> bool {
        self.forces_external_window || !self.embeddable
    }
}

impl From<&ServiceConfig> for Service {
    fn from(c: &ServiceConfig) -> Self {
        Self {
            id: ServiceId::from(c.id.as_str()),
            name: c.name.clone(),
            url: c.url.clone(),
            description: c.description.clone(),
            embeddable: c.embeddable,
            forces_external_window: c.forces_external_window,
        }
    }
}

/// Read-only, ordered list of services. The first entry is the fallback
/// shown in slots with no explicit assignment, so a registry is never empty.
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    services: Vec<Service>,
}

impl ServiceRegistry {
    /// The catalog shipped with the app.
    pub fn builtin() -> Self {
        Self {
            services: vec![
                Service::builtin("kimi", "Kimi", "https://www.kimi.com/", "Assistant", true),
                Service::builtin(
                    "chatgpt-web",
                    "ChatGPT Web",
                    "https://chat.openai.com/",
                    "OpenAI ChatGPT",
                    false,
                ),
                Service::builtin(
                    "claude-web",
                    "Claude Web",
                    "https://claude.ai/",
                    "Anthropic Claude",
                    false,
                ),
                Service::builtin(
                    "perplexity",
                    "Perplexity",
                    "https://www.perplexity.ai/",
                    "AI search engine",
                    true,
                ),
                Service::builtin(
                    "deepseek",
                    "DeepSeek",
                    "https://chat.deepseek.com/sign_in",
                    "Deep reasoning",
                    false,
                ),
                Service::builtin(
                    "gemini",
                    "Gemini",
                    "https://gemini.google.com/app?hl=zh",
                    "Google AI",
                    false,
                ),
                Service::builtin("grok", "Grok", "https://grok.com/", "xAI assistant", false),
            ],
        }
    }

    /// Build from `[[services]]`, falling back to the built-in catalog when
    /// the list is empty. Later duplicates of an id are dropped.
    pub fn from_config(entries: &[ServiceConfig]) -> Self {
        if entries.is_empty() {
            return Self::builtin();
        }
        let mut services: Vec<Service> = Vec::with_capacity(entries.len());
        for entry in entries {
            if services.iter().any(|s| s.id.as_str() == entry.id) {
                tracing::warn!(service = %entry.id, "duplicate service id in config, ignoring");
                continue;
            }
            services.push(Service::from(entry));
        }
        Self { services }
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The service shown in slots that were never assigned.
    pub fn fallback(&self) -> &Service {
        &self.services[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
