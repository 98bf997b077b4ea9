//! Routes for the Arena Roster client
//!
//! Every page renders inside [`ShellLayout`], which puts the navbar on top
//! of the matched route.

use dioxus::prelude::*;

use arena_client_app::application::controllers::Navigation;
use arena_domain::CharacterId;

use crate::presentation::components::Navbar;
use crate::presentation::views::{
    CharacterView, CreationView, ListingView, NotFoundView, RegistrationView,
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ShellLayout)]
        #[route("/")]
        HomeRoute {},
        #[route("/personnages")]
        CharactersRoute {},
        #[route("/creation")]
        CreationRoute {},
        #[route("/inscription")]
        RegistrationRoute {},
        #[route("/view/:id")]
        CharacterViewRoute { id: CharacterId },
    #[end_layout]
    #[route("/:..segments")]
    NotFoundRoute { segments: Vec<String> },
}

impl From<Navigation> for Route {
    fn from(navigation: Navigation) -> Self {
        match navigation {
            Navigation::Listing => Route::CharactersRoute {},
            Navigation::Create => Route::CreationRoute {},
            Navigation::Edit(id) => Route::CharacterViewRoute { id },
        }
    }
}

/// Navbar plus the matched page
#[component]
fn ShellLayout() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

/// Home shows the listing
#[component]
fn HomeRoute() -> Element {
    rsx! {
        ListingView {}
    }
}

#[component]
fn CharactersRoute() -> Element {
    rsx! {
        ListingView {}
    }
}

#[component]
fn CreationRoute() -> Element {
    rsx! {
        CreationView {}
    }
}

#[component]
fn RegistrationRoute() -> Element {
    rsx! {
        RegistrationView {}
    }
}

/// Keyed on the id so moving between characters remounts the page
#[component]
fn CharacterViewRoute(id: CharacterId) -> Element {
    rsx! {
        CharacterView {
            key: "{id}",
            id,
        }
    }
}

#[component]
fn NotFoundRoute(segments: Vec<String>) -> Element {
    rsx! {
        NotFoundView { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_maps_to_routes() {
        assert_eq!(Route::from(Navigation::Listing), Route::CharactersRoute {});
        assert_eq!(Route::from(Navigation::Create), Route::CreationRoute {});
        assert_eq!(
            Route::from(Navigation::Edit(CharacterId::new(7))),
            Route::CharacterViewRoute {
                id: CharacterId::new(7)
            }
        );
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::CharactersRoute {}.to_string(), "/personnages");
        assert_eq!(Route::CreationRoute {}.to_string(), "/creation");
        assert_eq!(Route::RegistrationRoute {}.to_string(), "/inscription");
        assert_eq!(
            Route::CharacterViewRoute {
                id: CharacterId::new(3)
            }
            .to_string(),
            "/view/3"
        );
    }

    #[test]
    fn test_paths_parse_to_routes() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::HomeRoute {}));
        assert_eq!(
            "/view/12".parse::<Route>().ok(),
            Some(Route::CharacterViewRoute {
                id: CharacterId::new(12)
            })
        );
        assert!(matches!(
            "/nowhere/else".parse::<Route>(),
            Ok(Route::NotFoundRoute { .. })
        ));
    }
}
