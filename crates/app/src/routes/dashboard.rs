use dioxus::prelude::*;

use super::placeholder::PagePlaceholder;
use crate::auth::use_auth;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let greeting = match auth.current_user.read().as_ref() {
        Some(user) => format!("Signed in as {}.", user.username),
        None => "Overview of your environment.".to_string(),
    };

    rsx! {
        PagePlaceholder { title: "Dashboard", description: greeting,
            p { class: "page-empty", "No widgets have been configured yet." }
        }
    }
}
