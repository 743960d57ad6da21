//! Page buttons for the result table.

use common::{
    directory_const::{MARGIN_PAGES_DISPLAYED, PAGE_RANGE_DISPLAYED},
    pagination::{PageItem, page_items},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

/// Emits the zero-based index of the page the user picked.
///
/// `selected_page` is zero-based as well. Renders nothing when there are no pages.
#[component]
pub fn PaginationControls(selected_page: ReadSignal<u64>, total_pages: ReadSignal<u64>, on_page_selected: Callback<u64>) -> Element {
    let selected = use_memo(move || (*selected_page.read()).min(total_pages().saturating_sub(1)));
    let items = use_memo(move || page_items(total_pages(), selected(), PAGE_RANGE_DISPLAYED, MARGIN_PAGES_DISPLAYED));
    let can_go_to_previous_page = use_memo(move || selected() > 0);
    let can_go_to_next_page = use_memo(move || selected() + 1 < total_pages());

    if total_pages() == 0 {
        return rsx! {};
    }

    rsx! {
        nav {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 8px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| on_page_selected(selected().saturating_sub(1)),
            }
            for (position, item) in items().into_iter().enumerate() {
                {match item {
                    PageItem::Page(index) => rsx! {
                        PageNumberButton {
                            key: "page-{index}",
                            index,
                            is_selected: index == selected(),
                            onclick: move |_| on_page_selected(index),
                        }
                    },
                    PageItem::Break => rsx! {
                        span {
                            key: "break-{position}",
                            style: "width: 40px; height: 40px; display: flex; align-items: center; justify-content: center; color: #6B7280;",
                            "..."
                        }
                    },
                }}
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| on_page_selected(selected() + 1),
            }
        }
    }
}

#[component]
fn PageNumberButton(index: u64, is_selected: bool, onclick: Callback<()>) -> Element {
    let (background, color) = if is_selected { ("#2563EB", "white") } else { ("white", "#111827") };
    rsx! {
        button {
            class: "x-page-button",
            style: "
                width: 40px;
                height: 40px;
                border-radius: 8px;
                border: 1px solid #94A3B8;
                font-size: 14px;
                cursor: pointer;
                background: {background};
                color: {color};
            ",
            onclick: move |_| onclick(()),
            "{index + 1}"
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 40px;
                height: 40px;
                background: white;
                border-radius: 8px;
                border: 1px solid #94A3B8;
                display: flex;
                align-items: center;
                justify-content: center;
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 18px; height: 18px; color: {btn_color};" }
        }
    }
}
