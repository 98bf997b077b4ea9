//! Character form - shared by the creation page and the edit view

use dioxus::prelude::*;

use arena_client_app::application::controllers::{CharacterFormState, FormMode, FormPhase};
use arena_client_app::application::payload::preview_uri;
use arena_domain::{ImagePayload, StatKind};

use super::stat_slider::StatSlider;
use crate::presentation::services::use_client_config;

/// Props for the CharacterForm component
#[derive(Props, Clone, PartialEq)]
pub struct CharacterFormProps {
    /// Page-owned form state; field edits are written straight into it
    pub state: Signal<CharacterFormState>,
    pub on_submit: EventHandler<()>,
}

#[component]
pub fn CharacterForm(props: CharacterFormProps) -> Element {
    let config = use_client_config();
    let mut state = props.state;
    let form = state.read().clone();

    let editable = form.is_editable();
    let submitting = form.is_submitting();
    let is_new = form.mode == FormMode::Create;

    let preview = match (&form.draft.image, form.draft.existing_image_path.as_deref()) {
        (Some(image), _) => Some(preview_uri(image)),
        (None, Some(path)) => config.asset_url(path),
        (None, None) => None,
    };
    let has_pending_image = form.draft.has_pending_image();

    let submit_label = match (submitting, is_new) {
        (true, _) => "Saving...",
        (false, true) => "Create",
        (false, false) => "Save changes",
    };

    rsx! {
        div {
            class: "character-form",
            style: "display: flex; flex-direction: column; gap: 0.75rem; max-width: 480px;",

            if let Some(ref error) = form.error {
                div {
                    class: "form-error",
                    role: "alert",
                    style: "padding: 0.5rem 0.75rem; background: #fdecea; color: #a12622; border-radius: 6px;",
                    "{error}"
                }
            }

            if let Some(notice) = form.notice.map(|n| n.message()) {
                div {
                    class: "form-notice",
                    style: "padding: 0.5rem 0.75rem; background: #fff6dd; color: #7a5b00; border-radius: 6px;",
                    "{notice}"
                }
            }

            if form.phase == FormPhase::Success {
                div {
                    class: "form-success",
                    style: "color: #1e7e34;",
                    "Saved."
                }
            }

            label {
                r#for: "character-name",
                "Name"
            }
            input {
                id: "character-name",
                name: "name",
                r#type: "text",
                required: true,
                value: "{form.draft.name}",
                disabled: !editable,
                oninput: move |e| {
                    state.write().set_name(e.value());
                },
            }

            for kind in StatKind::ALL {
                StatSlider {
                    key: "{kind}",
                    kind,
                    value: form.draft.stats.get(kind),
                    disabled: !editable,
                    on_change: move |raw: i64| {
                        state.write().set_stat(kind, raw);
                    },
                }
            }

            div {
                class: "image-picker",
                style: "display: flex; align-items: center; gap: 0.75rem;",

                if let Some(ref src) = preview {
                    img {
                        class: "image-preview",
                        src: "{src}",
                        alt: "Character image",
                        style: "width: 96px; height: 96px; object-fit: cover; border-radius: 8px;",
                    }
                }

                input {
                    r#type: "file",
                    accept: "image/*",
                    disabled: !editable,
                    onchange: move |evt: FormEvent| async move {
                        let Some(file) = evt.files().into_iter().next() else {
                            return;
                        };
                        match file.read_bytes().await {
                            Ok(bytes) => {
                                state.write().select_image(ImagePayload::bytes(bytes.to_vec()));
                            }
                            Err(e) => {
                                tracing::warn!("Failed to read selected image: {}", e);
                            }
                        }
                    },
                }

                if has_pending_image {
                    button {
                        class: "btn btn-clear-image",
                        disabled: !editable,
                        onclick: move |_| {
                            state.write().clear_image();
                        },
                        "Remove image"
                    }
                }
            }

            button {
                class: "btn btn-primary",
                disabled: !editable,
                onclick: move |_| props.on_submit.call(()),
                "{submit_label}"
            }
        }
    }
}
