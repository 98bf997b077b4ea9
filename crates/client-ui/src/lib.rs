use dioxus::prelude::*;

pub mod presentation;
pub mod routes;

pub use routes::Route;

use arena_client_ports::config::ShellKind;
use presentation::services::use_client_config;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by `arena-client-runner`.
    let shell = use_client_config().shell;

    match shell {
        ShellKind::Desktop => rsx! {
            DesktopShell {
                Router::<routes::Route> {}
            }
        },
        ShellKind::Mobile => rsx! {
            MobileShell {
                Router::<routes::Route> {}
            }
        },
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell-desktop",
            style: "width: 100vw; min-height: 100vh; font-family: sans-serif;",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell-mobile",
            style: "width: 100vw; min-height: 100vh; font-family: sans-serif; font-size: 15px;",
            {children}
        }
    }
}
