//! Registration page

use dioxus::prelude::*;

use arena_client_app::application::controllers::{
    RegistrationController, RegistrationPhase, RegistrationState,
};

use crate::presentation::services::{use_auth_service, use_request_scope};
use crate::presentation::state::SignalStore;
use crate::routes::Route;

#[component]
pub fn RegistrationView() -> Element {
    let navigator = use_navigator();
    let scope = use_request_scope();
    let service = use_auth_service();
    let controller = use_hook(move || RegistrationController::new(service, scope));
    let mut state = use_signal(RegistrationState::default);

    let on_submit = move |_: MouseEvent| {
        let controller = controller.clone();
        spawn(async move {
            match controller.submit(&mut SignalStore(state)).await {
                Ok((_, Some(next))) => {
                    navigator.push(Route::from(next));
                }
                Ok((_, None)) => {}
                Err(rejection) => {
                    tracing::debug!(?rejection, "Registration submit ignored");
                }
            }
        });
    };

    let form = state.read();
    let submitting = form.phase == RegistrationPhase::Submitting;

    rsx! {
        div {
            class: "registration-view",
            style: "padding: 1.5rem; max-width: 360px;",

            h1 { "Register" }

            if let Some(ref error) = form.error {
                div {
                    class: "form-error",
                    role: "alert",
                    style: "padding: 0.5rem 0.75rem; background: #fdecea; color: #a12622; border-radius: 6px; margin-bottom: 0.75rem;",
                    "{error}"
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 0.5rem;",

                label { r#for: "register-email", "Email" }
                input {
                    id: "register-email",
                    r#type: "email",
                    required: true,
                    value: "{form.email}",
                    disabled: submitting,
                    oninput: move |e| state.write().email = e.value(),
                }

                label { r#for: "register-password", "Password" }
                input {
                    id: "register-password",
                    r#type: "password",
                    required: true,
                    value: "{form.password}",
                    disabled: submitting,
                    oninput: move |e| state.write().password = e.value(),
                }

                button {
                    class: "btn btn-primary",
                    disabled: submitting,
                    onclick: on_submit,
                    if submitting { "Registering..." } else { "Register" }
                }
            }
        }
    }
}
