use dioxus::prelude::*;
use shared_types::{AppError, BRAND_NAME};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::auth::use_auth;
use crate::routes::Route;

/// Sign-in form. Only the account name is checked against the directory.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        match server::api::login(username()).await {
            Ok(user) => {
                tracing::debug!(username = %user.username, "signed in");
                auth.set_user(user);
                navigator().push(Route::Dashboard {});
            }
            Err(e) => {
                error_msg.set(Some(AppError::friendly_message(&e.to_string())));
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "{BRAND_NAME}" }
                    CardDescription { "Sign in with your account name" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }
                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            id: "username",
                            label: "Username",
                            placeholder: "admin1",
                            value: username(),
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit sd-button",
                            "data-style": "primary",
                            "data-size": "default",
                            disabled: loading() || username().trim().is_empty(),
                            if loading() { "Signing in..." } else { "Sign in" }
                        }
                    }
                }
            }
        }
    }
}
