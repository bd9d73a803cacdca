use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a catalog service (`"kimi"`, `"claude-web"`, ...).
///
/// All per-service state (zoom, embed failures, native windows) is keyed on
/// this, never on slot position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ServiceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for ServiceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle of a native window owned by the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowHandleId(pub u64);

impl fmt::Display for WindowHandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// How many embedding slots are visible side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Single,
    #[default]
    Double,
    Triple,
    Quad,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 4] = [
        LayoutMode::Single,
        LayoutMode::Double,
        LayoutMode::Triple,
        LayoutMode::Quad,
    ];

    /// Number of slots this mode shows.
    pub fn capacity(self) -> usize {
        match self {
            LayoutMode::Single => 1,
            LayoutMode::Double => 2,
            LayoutMode::Triple => 3,
            LayoutMode::Quad => 4,
        }
    }

    /// Grid columns used by the shell page. Quad is a 2x2 grid.
    pub fn columns(self) -> usize {
        match self {
            LayoutMode::Single => 1,
            LayoutMode::Double => 2,
            LayoutMode::Triple => 3,
            LayoutMode::Quad => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutMode::Single => "single",
            LayoutMode::Double => "double",
            LayoutMode::Triple => "triple",
            LayoutMode::Quad => "quad",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "1" => Ok(LayoutMode::Single),
            "double" | "2" => Ok(LayoutMode::Double),
            "triple" | "3" => Ok(LayoutMode::Triple),
            "quad" | "4" => Ok(LayoutMode::Quad),
            other => Err(format!(
                "unknown layout mode '{other}' (expected single, double, triple or quad)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn service_id_display_and_borrow() {
        let id = ServiceId::from("kimi");
        assert_eq!(id.to_string(), "kimi");
        assert_eq!(id.as_str(), "kimi");

        let mut map = HashMap::new();
        map.insert(id.clone(), 1.5);
        assert_eq!(map.get("kimi"), Some(&1.5));
    }

    #[test]
    fn service_id_serializes_as_plain_string() {
        let id = ServiceId::from("claude-web");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"claude-web\"");
        let back: ServiceId = serde_json::from_str("\"claude-web\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn window_handle_display() {
        assert_eq!(WindowHandleId(7).to_string(), "window-7");
    }

    #[test]
    fn layout_capacities() {
        assert_eq!(LayoutMode::Single.capacity(), 1);
        assert_eq!(LayoutMode::Double.capacity(), 2);
        assert_eq!(LayoutMode::Triple.capacity(), 3);
        assert_eq!(LayoutMode::Quad.capacity(), 4);
    }

    #[test]
    fn quad_is_two_columns() {
        assert_eq!(LayoutMode::Quad.columns(), 2);
        assert_eq!(LayoutMode::Triple.columns(), 3);
    }

    #[test]
    fn default_layout_is_double() {
        assert_eq!(LayoutMode::default(), LayoutMode::Double);
    }

    #[test]
    fn layout_mode_parses_names_and_counts() {
        assert_eq!("single".parse::<LayoutMode>(), Ok(LayoutMode::Single));
        assert_eq!("Quad".parse::<LayoutMode>(), Ok(LayoutMode::Quad));
        assert_eq!("3".parse::<LayoutMode>(), Ok(LayoutMode::Triple));
        assert!("five".parse::<LayoutMode>().is_err());
    }

    #[test]
    fn layout_mode_serde_lowercase() {
        let json = serde_json::to_string(&LayoutMode::Triple).unwrap();
        assert_eq!(json, "\"triple\"");
        let back: LayoutMode = serde_json::from_str("\"single\"").unwrap();
        assert_eq!(back, LayoutMode::Single);
    }
}
