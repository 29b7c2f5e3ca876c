use serde::{Deserialize, Serialize};

use crate::enums::maturity_level::MaturityLevel;

/// Key of the view the application boots into, and the target of the
/// placeholder view's shortcut.
pub const DEFAULT_VIEW_KEY: &str = "home";

/// Government entities covered by the observatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityCode {
    Mtls,
    Tga,
    Gaca,
    Mawani,
    Sar,
    Rga,
    Spl,
}

impl EntityCode {
    /// Key used in navigation and deep links.
    pub fn code(&self) -> &'static str {
        match self {
            EntityCode::Mtls => "mtls",
            EntityCode::Tga => "tga",
            EntityCode::Gaca => "gaca",
            EntityCode::Mawani => "mawani",
            EntityCode::Sar => "sar",
            EntityCode::Rga => "rga",
            EntityCode::Spl => "spl",
        }
    }

    /// All entities, in sidebar order.
    pub fn all() -> [EntityCode; 7] {
        [
            EntityCode::Mtls,
            EntityCode::Tga,
            EntityCode::Gaca,
            EntityCode::Mawani,
            EntityCode::Sar,
            EntityCode::Rga,
            EntityCode::Spl,
        ]
    }

    /// Parse from the navigation key.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "mtls" => Some(EntityCode::Mtls),
            "tga" => Some(EntityCode::Tga),
            "gaca" => Some(EntityCode::Gaca),
            "mawani" => Some(EntityCode::Mawani),
            "sar" => Some(EntityCode::Sar),
            "rga" => Some(EntityCode::Rga),
            "spl" => Some(EntityCode::Spl),
            _ => None,
        }
    }
}

/// Resolved form of the application-wide Selection key.
///
/// Writes to the selection store are permissive: any string is stored as-is.
/// This union is the single validation boundary, applied when the registry
/// renders. `Unknown` is an explicit variant so unrecognized keys fall
/// through to the placeholder view instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKey {
    Home,
    Entity(EntityCode),
    Maturity(MaturityLevel),
    Unknown,
}

impl ViewKey {
    /// Resolve a raw Selection key. Total over all strings: every input maps
    /// to a view, never fails.
    pub fn resolve(raw: &str) -> ViewKey {
        if raw == DEFAULT_VIEW_KEY {
            return ViewKey::Home;
        }
        if let Some(entity) = EntityCode::from_code(raw) {
            return ViewKey::Entity(entity);
        }
        if let Some(level) = MaturityLevel::from_code(raw) {
            return ViewKey::Maturity(level);
        }
        ViewKey::Unknown
    }

    /// Canonical key string. `Unknown` has no canonical key.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            ViewKey::Home => Some(DEFAULT_VIEW_KEY),
            ViewKey::Entity(entity) => Some(entity.code()),
            ViewKey::Maturity(level) => Some(level.code()),
            ViewKey::Unknown => None,
        }
    }

    /// The closed set of known keys: home, one per entity, one per maturity
    /// category.
    pub fn known() -> Vec<ViewKey> {
        let mut keys = vec![ViewKey::Home];
        keys.extend(EntityCode::all().into_iter().map(ViewKey::Entity));
        keys.extend(MaturityLevel::all().into_iter().map(ViewKey::Maturity));
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_keys_is_bijective() {
        let known = ViewKey::known();
        assert_eq!(known.len(), 12);

        let codes: Vec<&str> = known.iter().map(|k| k.code().unwrap()).collect();
        for (i, code) in codes.iter().copied().enumerate() {
            // Every canonical code resolves back to its own key...
            assert_eq!(ViewKey::resolve(code), known[i]);
            // ...and no two known keys share a code.
            assert_eq!(codes.iter().filter(|&&c| c == code).count(), 1);
        }
    }

    #[test]
    fn test_resolve_unknown_falls_through() {
        assert_eq!(ViewKey::resolve("unknown-entity"), ViewKey::Unknown);
        assert_eq!(ViewKey::resolve(""), ViewKey::Unknown);
        assert_eq!(ViewKey::resolve("MTLS"), ViewKey::Unknown);
        assert_eq!(ViewKey::resolve("home "), ViewKey::Unknown);
    }

    #[test]
    fn test_default_key_is_known() {
        assert_eq!(ViewKey::resolve(DEFAULT_VIEW_KEY), ViewKey::Home);
    }

    #[test]
    fn test_serde_round_trip() {
        for key in ViewKey::known() {
            let json = serde_json::to_string(&key).unwrap();
            let back: ViewKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }
    }
}
