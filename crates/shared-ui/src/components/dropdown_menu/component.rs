use dioxus::prelude::*;
use dioxus_primitives::dropdown_menu as prim;

#[component]
pub fn DropdownMenu(mut props: prim::DropdownMenuProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "sd-dropdown-menu", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DropdownMenu { ..props }
    }
}

#[component]
pub fn DropdownMenuTrigger(mut props: prim::DropdownMenuTriggerProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "sd-dropdown-menu-trigger",
        None,
        false,
    ));

    rsx! {
        prim::DropdownMenuTrigger { ..props }
    }
}

#[component]
pub fn DropdownMenuContent(mut props: prim::DropdownMenuContentProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "sd-dropdown-menu-content",
        None,
        false,
    ));

    rsx! {
        prim::DropdownMenuContent { ..props }
    }
}

#[component]
pub fn DropdownMenuItem<T: Clone + PartialEq + 'static>(
    mut props: prim::DropdownMenuItemProps<T>,
) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "sd-dropdown-menu-item",
        None,
        false,
    ));

    rsx! {
        prim::DropdownMenuItem { ..props }
    }
}

/// Non-interactive heading at the top of a menu.
#[component]
pub fn DropdownMenuLabel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sd-dropdown-menu-label", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn DropdownMenuSeparator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        div {
            class: "sd-dropdown-menu-separator",
            role: "separator",
            ..attributes,
        }
    }
}
