use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "sd-avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "sd-avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Circle showing a user's initials. There is no profile image source, so
/// the fallback is always what renders.
#[component]
pub fn InitialsAvatar(initials: String) -> Element {
    rsx! {
        Avatar {
            AvatarFallback { "{initials}" }
        }
    }
}
