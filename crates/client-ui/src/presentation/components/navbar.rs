//! Top navigation bar

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            class: "navbar",
            style: "display: flex; align-items: center; gap: 1.5rem; padding: 0.75rem 1.5rem; background: #1f2330; color: white;",

            Link {
                to: Route::HomeRoute {},
                class: "navbar-brand",
                style: "font-weight: bold; font-size: 1.2rem; color: white; text-decoration: none;",
                "Arena Roster"
            }

            div {
                class: "navbar-links",
                style: "display: flex; gap: 1rem; margin-left: auto;",

                NavLink { to: Route::CharactersRoute {}, label: "Characters" }
                NavLink { to: Route::CreationRoute {}, label: "Create" }
                NavLink { to: Route::RegistrationRoute {}, label: "Register" }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "navbar-link",
            active_class: "active",
            style: "color: #cfd3e0; text-decoration: none;",
            "{label}"
        }
    }
}
