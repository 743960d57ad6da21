//! Copies the URL of the current view, which encodes filters, search and page.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_editor_icons::MdInsertLink};

#[component]
pub fn CopyLinkButton() -> Element {
    let mut copied = use_signal(|| false);
    let do_copy_link = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(url) = window.location().href() else {
            tracing::error!("Could not read the current location");
            return;
        };
        let _promise = window.navigator().clipboard().write_text(&url);
        tracing::info!("Link copied to clipboard: {}", url);
        copied.set(true);
    };
    let label = if copied() { "Link copied" } else { "Copy link" };

    rsx! {
        button {
            class: "x-hover-shadow-background",
            style: "
                display: inline-flex;
                align-items: center;
                gap: 6px;
                padding: 8px 12px;
                border: 1px solid #CBD5E1;
                border-radius: 8px;
                background: white;
                font-size: 14px;
                cursor: pointer;
            ",
            onclick: do_copy_link,
            onmouseleave: move |_| copied.set(false),
            Icon { icon: MdInsertLink, style: "width: 18px; height: 18px;" }
            "{label}"
        }
    }
}
