//! Catch-all page

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "not-found-view",
            style: "padding: 1.5rem;",

            h1 { "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::CharactersRoute {}, "Back to the characters" }
        }
    }
}
