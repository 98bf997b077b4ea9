//! Service providers for the presentation layer
//!
//! The runner builds one [`UiServices`] bundle and provides it as Dioxus
//! context. Components reach services through the `use_*` hooks below and
//! never touch adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use arena_client_app::application::api::Api;
use arena_client_app::application::services::{AuthService, CharacterService, SessionService};
use arena_client_app::application::RequestScope;
use arena_client_ports::config::ClientConfig;
use arena_client_ports::outbound::{RawApiPort, StorageProvider};

/// Everything the pages need, provided once by the composition root
#[derive(Clone)]
pub struct UiServices {
    pub character: CharacterService,
    pub auth: AuthService,
    pub session: SessionService<Arc<dyn StorageProvider>>,
    pub config: ClientConfig,
}

impl UiServices {
    pub fn new(
        raw_api: Arc<dyn RawApiPort>,
        storage: Arc<dyn StorageProvider>,
        config: ClientConfig,
    ) -> Self {
        let api = Api::new(raw_api);
        Self {
            character: CharacterService::new(api.clone()),
            auth: AuthService::new(api),
            session: SessionService::new(storage),
            config,
        }
    }
}

/// Hook to access the CharacterService from context
pub fn use_character_service() -> CharacterService {
    use_context::<UiServices>().character
}

/// Hook to access the AuthService from context
pub fn use_auth_service() -> AuthService {
    use_context::<UiServices>().auth
}

/// Hook to access the SessionService from context
pub fn use_session_service() -> SessionService<Arc<dyn StorageProvider>> {
    use_context::<UiServices>().session
}

pub fn use_client_config() -> ClientConfig {
    use_context::<UiServices>().config
}

/// A request scope owned by the calling component.
///
/// Cancelled when the component unmounts, so late responses are dropped.
pub fn use_request_scope() -> RequestScope {
    let scope = use_hook(RequestScope::new);
    let on_drop = scope.clone();
    use_drop(move || on_drop.cancel());
    scope
}
