//! Character creation page

use dioxus::prelude::*;

use arena_client_app::application::controllers::{CharacterFormController, CharacterFormState};

use crate::presentation::components::CharacterForm;
use crate::presentation::services::{
    use_character_service, use_client_config, use_request_scope, use_session_service,
};
use crate::presentation::state::SignalStore;
use crate::routes::Route;

#[component]
pub fn CreationView() -> Element {
    let navigator = use_navigator();
    let strict = use_client_config().strict_validation;
    let session = use_session_service();
    let scope = use_request_scope();
    let service = use_character_service();
    let controller = use_hook(move || {
        CharacterFormController::new(service, scope).with_strict_validation(strict)
    });
    let state = use_signal(CharacterFormState::create);
    let signed_in = session.has_token();

    let on_submit = move |_: ()| {
        let controller = controller.clone();
        // The token is read at submit time; nothing here writes it.
        let auth = session.auth_context();
        spawn(async move {
            match controller.submit(&auth, &mut SignalStore(state)).await {
                Ok(Some(next)) => {
                    navigator.push(Route::from(next));
                }
                Ok(None) => {}
                Err(rejection) => {
                    tracing::debug!(?rejection, "Create submit ignored");
                }
            }
        });
    };

    rsx! {
        div {
            class: "creation-view",
            style: "padding: 1.5rem;",

            h1 { "New character" }

            if !signed_in {
                p {
                    class: "auth-hint",
                    style: "color: #7a5b00;",
                    "You are not signed in; the server may refuse to create characters."
                }
            }

            CharacterForm {
                state,
                on_submit,
            }
        }
    }
}
