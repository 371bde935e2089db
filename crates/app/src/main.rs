use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod notify;
mod routes;
mod shell;

use auth::AuthState;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

/// How often expired sessions are swept from the in-memory store.
#[cfg(feature = "server")]
const SESSION_SWEEP_INTERVAL: std::time::Duration = std::time::Duration::from_secs(15 * 60);

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
            loop {
                interval.tick().await;
                let purged = server::auth::session::store().purge_expired();
                if purged > 0 {
                    tracing::info!(purged, "expired sessions purged");
                }
            }
        });

        let mut router = dioxus::server::router(App).merge(server::openapi::api_router());

        if flags.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        Ok(server::openapi::with_service_layers(router))
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "auth-guard-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
