//! View labels - single source of truth for view display names.
//!
//! Entity and maturity names come from the contracts metadata constants.
//! Fallback: empty string, so callers supply their own placeholder.

use contracts::domain::entity::entity_info;
use contracts::enums::view_key::ViewKey;

/// Returns the readable display name for the given raw view key.
pub fn view_label_for_key(key: &str) -> &'static str {
    match ViewKey::resolve(key) {
        ViewKey::Home => "Transport & Logistics Ecosystem",
        ViewKey::Entity(code) => entity_info(code).name,
        ViewKey::Maturity(level) => level.title(),
        ViewKey::Unknown => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_have_labels() {
        for key in ViewKey::known() {
            assert!(!view_label_for_key(key.code().unwrap()).is_empty());
        }
    }

    #[test]
    fn test_unknown_keys_fall_back_to_empty() {
        assert_eq!(view_label_for_key("unknown-entity"), "");
        assert_eq!(view_label_for_key(""), "");
    }

    #[test]
    fn test_entity_label_is_the_directory_name() {
        assert_eq!(
            view_label_for_key("mawani"),
            "MAWANI (Saudi Ports Authority)"
        );
    }
}
