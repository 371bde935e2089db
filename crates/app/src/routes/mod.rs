pub mod analytics;
pub mod behavior_analysis;
pub mod dashboard;
pub mod login;
pub mod not_found;
mod placeholder;
pub mod security_events;
pub mod settings;
pub mod users;

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::shell::DashboardShell;

use analytics::Analytics;
use behavior_analysis::BehaviorAnalysis;
use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use security_events::SecurityEvents;
use settings::Settings;
use users::Users;

/// Application routes. Paths match the navigation table in `shared_types`.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(DashboardShell)]
    #[route("/")]
    Dashboard {},
    #[route("/security-events")]
    SecurityEvents {},
    #[route("/behavior-analysis")]
    BehaviorAnalysis {},
    #[route("/analytics")]
    Analytics {},
    #[route("/users")]
    Users {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Redirects to /login unless the server reports a session.
///
/// `use_server_future` with `?` suspends during SSR until the session check
/// resolves, so hydration sees the same answer the server rendered.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
    }
}
