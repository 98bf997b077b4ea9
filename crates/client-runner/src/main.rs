//! Arena Roster client binary
//!
//! The UI lives in `arena-client-ui`.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arena_client_adapters::infrastructure::storage::platform_storage;
use arena_client_adapters::infrastructure::{bearer_token_from, ApiAdapter, EnvSource};
use arena_client_app::application::services::SessionService;
#[cfg(target_arch = "wasm32")]
use arena_client_ports::config::ClientConfig;
use arena_client_ports::outbound::RawApiPort;

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env is fine; real environment variables still apply.
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "arena_client=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Arena Roster");

    let config = arena_client_runner::startup_config(&EnvSource).inspect_err(|e| {
        tracing::error!("Invalid configuration: {:#}", e);
    })?;

    #[cfg(target_arch = "wasm32")]
    let config = {
        // On web, pick a shell based on screen size.
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(1024.0);

        let shell = if width < 768.0 {
            arena_client_ports::config::ShellKind::Mobile
        } else {
            arena_client_ports::config::ShellKind::Desktop
        };
        ClientConfig { shell, ..config }
    };

    let storage = platform_storage(config.storage_dir.as_deref());

    // Stand-in for the external login flow
    if let Some(token) = bearer_token_from(&EnvSource) {
        SessionService::new(storage.clone()).store_token(&token);
        tracing::info!("Seeded bearer token from environment");
    }

    tracing::info!(api = %config.api_base_url, "Using character backend");
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(&config.api_base_url));

    arena_client_runner::run(arena_client_runner::RunnerDeps {
        raw_api,
        storage,
        config,
    });
    Ok(())
}
