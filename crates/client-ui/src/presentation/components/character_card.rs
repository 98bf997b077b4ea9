//! Listing card: avatar, name, stat bars and row actions

use dioxus::prelude::*;

use arena_domain::{Character, CharacterId, StatKind};

use crate::presentation::utils::StatStyle;

/// Props for the CharacterCard component
#[derive(Props, Clone, PartialEq)]
pub struct CharacterCardProps {
    pub character: Character,
    /// Absolute image URL, if the character has one
    #[props(default)]
    pub image_url: Option<String>,
    pub on_edit: EventHandler<CharacterId>,
    pub on_delete: EventHandler<CharacterId>,
}

#[component]
pub fn CharacterCard(props: CharacterCardProps) -> Element {
    let id = props.character.id;
    let name = props.character.name.clone();
    let initials = props.character.initials();

    rsx! {
        div {
            class: "character-card",
            style: "border: 1px solid #d8dbe5; border-radius: 10px; padding: 1rem; width: 260px; background: white;",

            div {
                class: "flex items-center",
                style: "display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.75rem;",

                if let Some(ref url) = props.image_url {
                    img {
                        class: "avatar",
                        src: "{url}",
                        alt: "{name}",
                        style: "width: 56px; height: 56px; border-radius: 50%; object-fit: cover;",
                    }
                } else {
                    div {
                        class: "avatar avatar-initials",
                        style: "width: 56px; height: 56px; border-radius: 50%; background: #3b4260; color: white; display: flex; align-items: center; justify-content: center; font-weight: bold;",
                        "{initials}"
                    }
                }
                h3 {
                    style: "margin: 0;",
                    "{name}"
                }
            }

            for kind in StatKind::ALL {
                StatBar {
                    key: "{kind}",
                    kind,
                    value: props.character.stat(kind).get(),
                }
            }

            div {
                class: "card-actions",
                style: "display: flex; gap: 0.5rem; margin-top: 0.75rem;",

                button {
                    class: "btn btn-edit",
                    onclick: move |_| props.on_edit.call(id),
                    "Edit"
                }
                button {
                    class: "btn btn-delete",
                    style: "color: #c0392b;",
                    onclick: move |_| props.on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}

/// A single stat rendered as a progress bar `value%` wide
#[component]
fn StatBar(kind: StatKind, value: u8) -> Element {
    let label = kind.display_name();
    let color = kind.accent_color();

    rsx! {
        div {
            class: "stat-bar",
            style: "margin: 0.25rem 0; font-size: 0.85rem;",

            div {
                style: "display: flex; justify-content: space-between;",
                span { "{label}" }
                span { "{value}" }
            }
            div {
                class: "stat-bar-track",
                style: "height: 6px; background: #eceef4; border-radius: 3px; overflow: hidden;",
                div {
                    class: "stat-bar-fill",
                    style: "height: 100%; width: {value}%; background: {color};",
                }
            }
        }
    }
}
