//! Character Service - Application service for character management
//!
//! Lists, finds, creates, updates, and deletes characters through the
//! backend REST surface. Every failure (network, status, body) collapses into
//! [`ServiceError::RequestFailed`], except a character missing from an
//! otherwise successful listing, which is [`ServiceError::NotFound`].

use arena_client_ports::outbound::AuthContext;
use arena_domain::{Character, CharacterId, DraftCharacter};

use super::endpoints;
use crate::application::api::Api;
use crate::application::payload;
use crate::application::ServiceError;

/// Character service for managing characters
#[derive(Clone)]
pub struct CharacterService {
    api: Api,
}

impl CharacterService {
    /// Whether `update_character` sends a newly picked image.
    ///
    /// The edit endpoint only takes name and stats, so the form shows a
    /// notice instead of silently dropping the selection.
    pub const SUPPORTS_IMAGE_UPDATE: bool = false;

    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Fetch every character, in server order.
    pub async fn list_characters(&self) -> Result<Vec<Character>, ServiceError> {
        let characters: Vec<Character> = self.api.get(endpoints::LIST).await?;
        tracing::debug!(count = characters.len(), "Fetched character list");
        Ok(characters)
    }

    /// Locate one character by id.
    ///
    /// There is no single-item endpoint, so this fetches the full list and
    /// searches it.
    pub async fn find_character(&self, id: CharacterId) -> Result<Character, ServiceError> {
        self.list_characters()
            .await?
            .into_iter()
            .find(|character| character.id == id)
            .ok_or_else(|| {
                tracing::warn!(%id, "Character missing from listing");
                ServiceError::not_found(id)
            })
    }

    /// Create a character from a draft, attaching the image when one was picked.
    ///
    /// Only requests made with an authenticated context carry `Authorization`.
    pub async fn create_character(
        &self,
        auth: &AuthContext,
        draft: &DraftCharacter,
    ) -> Result<Character, ServiceError> {
        let form = payload::create_form(draft)?;
        let character: Character = self
            .api
            .post_multipart(endpoints::CREATE, form, auth)
            .await?;
        tracing::info!(id = %character.id, name = %character.name, "Character created");
        Ok(character)
    }

    /// Overwrite name and stats of an existing character.
    pub async fn update_character(
        &self,
        id: CharacterId,
        draft: &DraftCharacter,
    ) -> Result<(), ServiceError> {
        if draft.has_pending_image() && !Self::SUPPORTS_IMAGE_UPDATE {
            tracing::debug!(%id, "Pending image not sent with update");
        }
        let form = payload::update_form(draft);
        self.api
            .post_multipart_no_response(&endpoints::edit(id), form, &AuthContext::anonymous())
            .await?;
        tracing::info!(%id, "Character updated");
        Ok(())
    }

    /// Delete a character. Deleting an id the server no longer knows fails.
    pub async fn delete_character(&self, id: CharacterId) -> Result<(), ServiceError> {
        self.api.delete(&endpoints::delete(id)).await?;
        tracing::info!(%id, "Character deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arena_client_ports::outbound::{ApiError, MockRawApiPort, RawApiPort};
    use arena_domain::{BearerToken, ImagePayload, StatKind};
    use mockall::predicate::*;
    use serde_json::json;

    fn service_with(mock: MockRawApiPort) -> CharacterService {
        let raw: Arc<dyn RawApiPort> = Arc::new(mock);
        CharacterService::new(Api::new(raw))
    }

    fn listing_json() -> serde_json::Value {
        json!([
            {"id": 1, "name": "Thor", "imagePath": "/uploads/thor.png",
             "strength": 80, "speed": 60, "durability": 90, "power": 95, "combat": 85},
            {"id": 2, "name": "Loki", "imagePath": null,
             "strength": 40, "speed": 70, "durability": 50, "power": 90, "combat": 60}
        ])
    }

    fn thor_draft() -> DraftCharacter {
        let mut draft = DraftCharacter::default();
        draft.set_name("Thor");
        draft.set_stat(StatKind::Strength, 80);
        draft.set_stat(StatKind::Speed, 60);
        draft.set_stat(StatKind::Durability, 90);
        draft.set_stat(StatKind::Power, 95);
        draft.set_stat(StatKind::Combat, 85);
        draft
    }

    #[tokio::test]
    async fn test_list_characters_decodes_server_order() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .with(eq("/api/get"))
            .times(1)
            .returning(|_| Ok(listing_json()));

        let characters = service_with(mock).list_characters().await.unwrap();

        let names: Vec<_> = characters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Thor", "Loki"]);
        assert_eq!(characters[1].image_path(), None);
    }

    #[tokio::test]
    async fn test_list_characters_empty_array() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().returning(|_| Ok(json!([])));

        let characters = service_with(mock).list_characters().await.unwrap();
        assert!(characters.is_empty());
    }

    #[tokio::test]
    async fn test_list_characters_non_ok_is_request_failed() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().returning(|_| {
            Err(ApiError::HttpError {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let err = service_with(mock).list_characters().await.unwrap_err();
        assert!(matches!(err, ServiceError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_list_characters_malformed_body_is_request_failed() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .returning(|_| Ok(json!({"characters": []})));

        let err = service_with(mock).list_characters().await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::RequestFailed(ApiError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_find_character_by_id() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().returning(|_| Ok(listing_json()));
        let service = service_with(mock);

        let loki = service.find_character(CharacterId::new(2)).await.unwrap();
        assert_eq!(loki.name, "Loki");
    }

    #[tokio::test]
    async fn test_find_character_absent_is_not_found() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().returning(|_| Ok(listing_json()));

        let err = service_with(mock)
            .find_character(CharacterId::new(99))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::not_found(CharacterId::new(99)));
    }

    #[tokio::test]
    async fn test_create_character_sends_authenticated_multipart() {
        let token = BearerToken::new("abc").unwrap();
        let auth = AuthContext::bearer(token);

        let mut mock = MockRawApiPort::new();
        mock.expect_post_multipart()
            .withf(|path, form, auth| {
                path == "/api/create"
                    && form.text_value("name") == Some("Thor")
                    && form.text_value("power") == Some("95")
                    && !form.has_files()
                    && auth.authorization_header().as_deref() == Some("Bearer abc")
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(json!({"id": 7, "name": "Thor", "imagePath": null,
                    "strength": 80, "speed": 60, "durability": 90, "power": 95, "combat": 85}))
            });

        let created = service_with(mock)
            .create_character(&auth, &thor_draft())
            .await
            .unwrap();
        assert_eq!(created.id, CharacterId::new(7));
    }

    #[tokio::test]
    async fn test_create_character_with_bad_image_never_sends() {
        let mut mock = MockRawApiPort::new();
        mock.expect_post_multipart().times(0);

        let mut draft = thor_draft();
        draft.select_image(ImagePayload::data_uri("not-a-data-uri"));

        let err = service_with(mock)
            .create_character(&AuthContext::anonymous(), &draft)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::RequestFailed(ApiError::InvalidPayload(_))
        ));
    }

    #[tokio::test]
    async fn test_update_character_posts_to_edit_path_without_image() {
        let mut mock = MockRawApiPort::new();
        mock.expect_post_multipart()
            .withf(|path, form, auth| {
                path == "/api/edit/3"
                    && form.parts().len() == 6
                    && !form.has_files()
                    && !auth.is_authenticated()
            })
            .times(1)
            .returning(|_, _, _| Ok(serde_json::Value::Null));

        let mut draft = thor_draft();
        draft.select_image(ImagePayload::bytes(vec![0xFF, 0xD8, 0xFF]));

        service_with(mock)
            .update_character(CharacterId::new(3), &draft)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_character_path() {
        let mut mock = MockRawApiPort::new();
        mock.expect_delete()
            .with(eq("/api/2"))
            .times(1)
            .returning(|_| Ok(()));

        service_with(mock)
            .delete_character(CharacterId::new(2))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_unknown_id_fails() {
        let mut mock = MockRawApiPort::new();
        mock.expect_delete().returning(|_| {
            Err(ApiError::HttpError {
                status: 404,
                message: "Not Found".to_string(),
            })
        });

        let err = service_with(mock)
            .delete_character(CharacterId::new(2))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::RequestFailed(e) if e.is_not_found()));
    }
}
