//! Removable chips for the active search and filters.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use crate::pages::directory_page::DirectoryViewControl;

#[component]
pub fn ActiveFilterChips() -> Element {
    let control = use_context::<DirectoryViewControl>();
    let view = control.view;
    let search_text = use_memo(move || view.read().search_text.clone());
    let active_filters = use_memo(move || {
        view.read().active_filters().map(|(attribute, value)| (attribute, value.to_string())).collect::<Vec<_>>()
    });

    if search_text.read().is_empty() && active_filters.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "margin-top: 16px; display: flex; flex-wrap: wrap; gap: 8px;",
            if !search_text.read().is_empty() {
                FilterChip {
                    text: format!("Search: \"{}\"", search_text.read()),
                    background: "#DBEAFE",
                    color: "#1E40AF",
                    on_remove: move |_| {
                        let next = view.peek().with_search("");
                        control.set_view.call(next);
                    },
                }
            }
            for (attribute, value) in active_filters() {
                FilterChip {
                    key: "{attribute}",
                    text: format!("{}: {}", attribute.display_name(), value),
                    background: "#E0E7FF",
                    color: "#3730A3",
                    on_remove: move |_| {
                        let next = view.peek().without_filter(attribute);
                        control.set_view.call(next);
                    },
                }
            }
        }
    }
}

#[component]
fn FilterChip(text: String, background: String, color: String, on_remove: Callback<()>) -> Element {
    rsx! {
        span {
            style: "
                display: inline-flex;
                align-items: center;
                gap: 4px;
                padding: 4px 12px;
                border-radius: 9999px;
                font-size: 14px;
                font-weight: 500;
                background: {background};
                color: {color};
            ",
            "{text}"
            button {
                class: "x-chip-remove",
                style: "
                    margin-left: 4px;
                    border: none;
                    background: transparent;
                    border-radius: 9999px;
                    padding: 2px;
                    display: flex;
                    cursor: pointer;
                    color: {color};
                ",
                onclick: move |_| on_remove(()),
                Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
            }
        }
    }
}
