//! Arena Roster client composition root.
//!
//! `main.rs` builds the adapters; [`run`] hands them to Dioxus as context.

use std::sync::Arc;

use anyhow::Context;

use arena_client_adapters::infrastructure::{client_config_from, ConfigSource};
use arena_client_ports::config::ClientConfig;
use arena_client_ports::outbound::{RawApiPort, StorageProvider};
use arena_client_ui::presentation::services::UiServices;

pub struct RunnerDeps {
    pub raw_api: Arc<dyn RawApiPort>,
    pub storage: Arc<dyn StorageProvider>,
    pub config: ClientConfig,
}

/// Resolve configuration before anything is wired. Any invalid value stops startup.
pub fn startup_config(source: &impl ConfigSource) -> anyhow::Result<ClientConfig> {
    client_config_from(source).context("loading client configuration")
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps {
        raw_api,
        storage,
        config,
    } = deps;

    dioxus::LaunchBuilder::new()
        .with_context(UiServices::new(raw_api, storage, config))
        .launch(arena_client_ui::app);
}
