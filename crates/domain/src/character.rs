//! Character - the server-owned fighter record as the client sees it.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;
use crate::stats::{StatBlock, StatKind, StatValue};

/// A point-in-time snapshot of a character fetched from the backend.
///
/// The client never reconciles this with later server-side changes; whatever
/// it submits last wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    /// Server-relative path to the stored image (e.g. `/uploads/thor.png`)
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(flatten)]
    pub stats: StatBlock,
}

impl Character {
    pub fn stat(&self, kind: StatKind) -> StatValue {
        self.stats.get(kind)
    }

    /// Avatar fallback text: first two characters of the name, upper-cased.
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }

    /// The image path, if the backend reported a non-empty one.
    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref().filter(|p| !p.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn thor_json() -> serde_json::Value {
        json!({
            "id": 1,
            "name": "Thor",
            "imagePath": "/uploads/thor.png",
            "strength": 80,
            "speed": 60,
            "durability": 90,
            "power": 95,
            "combat": 85
        })
    }

    #[test]
    fn test_deserialize_flat_wire_shape() {
        let character: Character = serde_json::from_value(thor_json()).unwrap();

        assert_eq!(character.id, CharacterId::new(1));
        assert_eq!(character.name, "Thor");
        assert_eq!(character.image_path(), Some("/uploads/thor.png"));
        assert_eq!(character.stat(StatKind::Power).get(), 95);
        assert_eq!(character.stat(StatKind::Combat).get(), 85);
    }

    #[test]
    fn test_missing_or_null_image_path() {
        let mut value = thor_json();
        value["imagePath"] = serde_json::Value::Null;
        let character: Character = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(character.image_path(), None);

        value.as_object_mut().unwrap().remove("imagePath");
        let character: Character = serde_json::from_value(value).unwrap();
        assert_eq!(character.image_path(), None);
    }

    #[test]
    fn test_out_of_range_stat_is_rejected() {
        let mut value = thor_json();
        value["speed"] = json!(130);
        assert!(serde_json::from_value::<Character>(value).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut value = thor_json();
        value["createdAt"] = json!("2024-01-01T00:00:00Z");
        assert!(serde_json::from_value::<Character>(value).is_ok());
    }

    #[test]
    fn test_serializes_back_to_flat_camel_case() {
        let character: Character = serde_json::from_value(thor_json()).unwrap();
        let value = serde_json::to_value(&character).unwrap();
        assert_eq!(value, thor_json());
    }

    #[test]
    fn test_initials() {
        let mut character: Character = serde_json::from_value(thor_json()).unwrap();
        assert_eq!(character.initials(), "TH");

        character.name = "é".to_string();
        assert_eq!(character.initials(), "É");
    }
}
