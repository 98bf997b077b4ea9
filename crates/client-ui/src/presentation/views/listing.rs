//! Character listing page

use dioxus::prelude::*;

use arena_client_app::application::controllers::{
    ListingContent, ListingController, ListingState,
};
use arena_domain::CharacterId;

use crate::presentation::components::CharacterCard;
use crate::presentation::services::{use_character_service, use_client_config, use_request_scope};
use crate::presentation::state::SignalStore;
use crate::routes::Route;

#[component]
pub fn ListingView() -> Element {
    let navigator = use_navigator();
    let config = use_client_config();
    let scope = use_request_scope();
    let service = use_character_service();
    let controller = use_hook(move || ListingController::new(service, scope));
    let state = use_signal(ListingState::default);

    // Load on mount
    {
        let controller = controller.clone();
        use_effect(move || {
            let controller = controller.clone();
            spawn(async move {
                controller.load(&mut SignalStore(state)).await;
            });
        });
    }

    let on_delete = {
        let controller = controller.clone();
        move |id: CharacterId| {
            let controller = controller.clone();
            spawn(async move {
                controller.remove(id, &mut SignalStore(state)).await;
            });
        }
    };

    let on_edit = {
        let controller = controller.clone();
        move |id: CharacterId| {
            navigator.push(Route::from(controller.edit(id)));
        }
    };

    let listing = state.read();
    let load_error = listing.load_error.clone().unwrap_or_default();

    rsx! {
        div {
            class: "listing-view",
            style: "padding: 1.5rem;",

            h1 { "Characters" }

            if let Some(ref error) = listing.action_error {
                div {
                    class: "listing-error",
                    role: "alert",
                    style: "padding: 0.5rem 0.75rem; background: #fdecea; color: #a12622; border-radius: 6px; margin-bottom: 1rem;",
                    "{error}"
                }
            }

            match listing.content() {
                ListingContent::LoadFailed => rsx! {
                    p {
                        class: "listing-load-error",
                        role: "alert",
                        style: "color: #a12622;",
                        "{load_error}"
                    }
                },
                ListingContent::Loading => rsx! {
                    p { class: "listing-loading", "Loading characters..." }
                },
                ListingContent::Empty => rsx! {
                    div {
                        class: "listing-empty",
                        p { "No characters yet." }
                        Link { to: Route::CreationRoute {}, "Create the first one" }
                    }
                },
                ListingContent::Roster => rsx! {
                    div {
                        class: "character-grid",
                        style: "display: flex; flex-wrap: wrap; gap: 1rem;",

                        for character in listing.characters.iter() {
                            CharacterCard {
                                key: "{character.id}",
                                character: character.clone(),
                                image_url: character.image_path().and_then(|p| config.asset_url(p)),
                                on_edit: on_edit.clone(),
                                on_delete: on_delete.clone(),
                            }
                        }
                    }
                },
            }
        }
    }
}
