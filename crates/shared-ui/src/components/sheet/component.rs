use dioxus::prelude::*;

/// Which edge of the screen the sheet slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    #[default]
    Left,
    Right,
}

impl SheetSide {
    fn class(&self) -> &'static str {
        match self {
            SheetSide::Left => "left",
            SheetSide::Right => "right",
        }
    }
}

/// A sliding panel over a dimmed backdrop. Nothing renders while closed.
///
/// Clicking the backdrop only closes the sheet when `dismiss_on_backdrop`
/// is set; otherwise the panel must provide its own close control.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: SheetSide,
    #[props(default = false)] dismiss_on_backdrop: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "sd-sheet-panel", None, false),
        Attribute::new("data-side", side.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sd-sheet-overlay",
            "data-open": "true",
            onclick: move |_| {
                if dismiss_on_backdrop {
                    on_close.call(());
                }
            },
            div {
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),
                ..merged,
                {children}
            }
        }
    }
}

/// Header row of a Sheet.
#[component]
pub fn SheetHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sd-sheet-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Close button for a Sheet.
#[component]
pub fn SheetClose(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        button {
            class: "sd-sheet-close",
            r#type: "button",
            "aria-label": "Close menu",
            onclick: move |_| on_close.call(()),
            {children}
        }
    }
}
