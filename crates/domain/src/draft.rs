//! DraftCharacter - client-only edit state for a character.

use crate::character::Character;
use crate::error::DomainError;
use crate::image::ImagePayload;
use crate::stats::{StatBlock, StatKind, StatValue};

/// The not-yet-persisted state of a character being created or edited.
///
/// Every setter is a plain local mutation. Nothing here talks to the backend,
/// and nothing is validated unless [`DraftCharacter::validate`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftCharacter {
    pub name: String,
    pub stats: StatBlock,
    /// Image picked locally, replaced wholesale on every new selection
    pub image: Option<ImagePayload>,
    /// Image already stored server-side (edit flow preview only)
    pub existing_image_path: Option<String>,
}

impl DraftCharacter {
    /// Hydrate a draft from a fetched character (edit flow).
    pub fn from_character(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            stats: character.stats,
            image: None,
            existing_image_path: character.image_path().map(str::to_string),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Slider input: the raw value is pinned into `[0, 100]`.
    pub fn set_stat(&mut self, kind: StatKind, raw: i64) {
        self.stats.set(kind, StatValue::clamped(raw));
    }

    /// Replaces any previous local selection.
    pub fn select_image(&mut self, image: ImagePayload) {
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    pub fn has_pending_image(&self) -> bool {
        self.image.is_some()
    }

    /// Opt-in strict checks. Stats are already bounded by construction, so
    /// only the name can fail.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CharacterId;

    fn thor() -> Character {
        Character {
            id: CharacterId::new(3),
            name: "Thor".to_string(),
            image_path: Some("/uploads/thor.png".to_string()),
            stats: StatBlock::default()
                .with(StatKind::Strength, StatValue::clamped(80))
                .with(StatKind::Combat, StatValue::clamped(85)),
        }
    }

    #[test]
    fn test_empty_draft() {
        let draft = DraftCharacter::default();
        assert!(draft.name.is_empty());
        assert!(draft.stats.iter().all(|(_, v)| v.get() == 0));
        assert!(!draft.has_pending_image());
    }

    #[test]
    fn test_hydrate_from_character() {
        let draft = DraftCharacter::from_character(&thor());
        assert_eq!(draft.name, "Thor");
        assert_eq!(draft.stats.get(StatKind::Strength).get(), 80);
        assert_eq!(draft.existing_image_path.as_deref(), Some("/uploads/thor.png"));
        assert!(draft.image.is_none());
    }

    #[test]
    fn test_set_stat_clamps() {
        let mut draft = DraftCharacter::default();
        draft.set_stat(StatKind::Speed, 150);
        draft.set_stat(StatKind::Power, -20);
        assert_eq!(draft.stats.speed.get(), 100);
        assert_eq!(draft.stats.power.get(), 0);
    }

    #[test]
    fn test_select_image_replaces_previous() {
        let mut draft = DraftCharacter::default();
        draft.select_image(ImagePayload::bytes(vec![1, 2, 3]));
        draft.select_image(ImagePayload::data_uri("data:image/png;base64,AAAA"));

        assert_eq!(
            draft.image,
            Some(ImagePayload::data_uri("data:image/png;base64,AAAA"))
        );

        draft.clear_image();
        assert!(!draft.has_pending_image());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut draft = DraftCharacter::default();
        draft.set_name("   ");
        assert!(matches!(draft.validate(), Err(DomainError::Validation(_))));

        draft.set_name("Thor");
        assert!(draft.validate().is_ok());
    }
}
