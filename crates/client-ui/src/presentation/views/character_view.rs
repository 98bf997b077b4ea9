//! Edit view: the character form next to a radar chart of its stats

use dioxus::prelude::*;

use arena_client_app::application::controllers::{
    CharacterFormController, CharacterFormState, FormPhase,
};
use arena_domain::CharacterId;

use crate::presentation::components::{CharacterForm, RadarChart};
use crate::presentation::services::{
    use_character_service, use_client_config, use_request_scope, use_session_service,
};
use crate::presentation::state::SignalStore;
use crate::routes::Route;

#[component]
pub fn CharacterView(id: CharacterId) -> Element {
    let navigator = use_navigator();
    let strict = use_client_config().strict_validation;
    let session = use_session_service();
    let scope = use_request_scope();
    let service = use_character_service();
    let controller = use_hook(move || {
        CharacterFormController::new(service, scope).with_strict_validation(strict)
    });
    let state = use_signal(move || CharacterFormState::edit(id));

    // Hydrate from the listing on mount
    {
        let controller = controller.clone();
        use_effect(move || {
            let controller = controller.clone();
            spawn(async move {
                controller.hydrate(&mut SignalStore(state)).await;
            });
        });
    }

    let on_submit = move |_: ()| {
        let controller = controller.clone();
        let auth = session.auth_context();
        spawn(async move {
            match controller.submit(&auth, &mut SignalStore(state)).await {
                Ok(Some(next)) => {
                    navigator.push(Route::from(next));
                }
                Ok(None) => {}
                Err(rejection) => {
                    tracing::debug!(%id, ?rejection, "Edit submit ignored");
                }
            }
        });
    };

    let form = state.read();
    let title = if form.draft.name.is_empty() {
        format!("Character #{}", id)
    } else {
        form.draft.name.clone()
    };
    let load_error = form.error.clone().unwrap_or_default();

    rsx! {
        div {
            class: "character-view",
            style: "padding: 1.5rem;",

            h1 { "{title}" }

            match form.phase {
                FormPhase::Loading => rsx! {
                    p { class: "view-loading", "Loading character..." }
                },
                FormPhase::LoadFailed => rsx! {
                    div {
                        class: "view-error",
                        role: "alert",
                        style: "padding: 0.5rem 0.75rem; background: #fdecea; color: #a12622; border-radius: 6px;",
                        "{load_error}"
                    }
                    Link { to: Route::CharactersRoute {}, "Back to the characters" }
                },
                _ => rsx! {
                    div {
                        class: "character-view-body",
                        style: "display: flex; flex-wrap: wrap; gap: 2rem; align-items: flex-start;",

                        CharacterForm {
                            state,
                            on_submit,
                        }
                        RadarChart {
                            stats: form.draft.stats,
                        }
                    }
                },
            }
        }
    }
}
