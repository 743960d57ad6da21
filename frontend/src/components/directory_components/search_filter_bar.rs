//! Search box and filter selects.

use std::time::Duration;

use common::{directory_const::SEARCH_DEBOUNCE_MS, filter_config::FilterOption};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::{hooks::use_debounce::use_debounce, pages::directory_page::DirectoryViewControl};

#[component]
pub fn SearchFilterBar(filter_options: ReadSignal<Vec<FilterOption>>, search_label: ReadSignal<String>) -> Element {
    let control = use_context::<DirectoryViewControl>();
    let view = control.view;

    let committed_search = use_memo(move || view.read().search_text.clone());
    let mut search_input = use_signal(|| committed_search.peek().clone());
    // back/forward navigation and "clear" change the committed text under us
    use_effect(move || {
        let committed = committed_search();
        if *search_input.peek() != committed {
            search_input.set(committed);
        }
    });

    let typed_search: ReadSignal<String> = search_input.into();
    let debounced_search = use_debounce(typed_search, Duration::from_millis(SEARCH_DEBOUNCE_MS));
    use_effect(move || {
        let settled = debounced_search.read().clone();
        if settled != *committed_search.peek() {
            let next = view.peek().with_search(settled);
            control.replace_view.call(next);
        }
    });

    rsx! {
        div {
            id: "x-search-filter-bar",
            style: "
                display: flex;
                flex-wrap: wrap;
                gap: 16px;
                align-items: center;
                margin-bottom: 16px;
                padding: 8px 12px;
                background-color: white;
            ",
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    border: 1px solid #64748B;
                    border-radius: 6px;
                    padding: 8px 12px;
                    width: 260px;
                ",
                Icon { icon: MdSearch, style: "width: 18px; height: 18px; color: #6B7280; flex-shrink: 0;" }
                input {
                    r#type: "text",
                    class: "x-search-input",
                    placeholder: "{search_label}",
                    style: "
                        flex: 1;
                        min-width: 0;
                        border: none;
                        outline: none;
                        background: transparent;
                        font-size: 14px;
                        color: #1F2937;
                    ",
                    value: "{search_input}",
                    oninput: move |event: Event<FormData>| search_input.set(event.value()),
                }
            }
            for filter in filter_options.read().iter().cloned() {
                FilterSelect { key: "{filter.attribute}", filter }
            }
        }
    }
}

#[component]
fn FilterSelect(filter: ReadSignal<FilterOption>) -> Element {
    let control = use_context::<DirectoryViewControl>();
    let view = control.view;
    let attribute = use_memo(move || filter.read().attribute);
    let selected = use_memo(move || view.read().filter_value(attribute()).to_string());

    rsx! {
        div {
            style: "display: flex; align-items: center;",
            label {
                style: "margin-right: 8px; font-weight: 500;",
                "{filter.read().label}:"
            }
            select {
                class: "x-filter-select",
                style: "
                    border: 1px solid #64748B;
                    border-radius: 6px;
                    padding: 4px 8px;
                    min-width: 120px;
                    background: white;
                ",
                value: "{selected}",
                onchange: move |event: Event<FormData>| {
                    let next = view.peek().with_filter(attribute(), event.value());
                    control.set_view.call(next);
                },
                option { value: "", selected: selected().is_empty(), "All" }
                for value in filter.read().options.iter().cloned() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: selected() == value,
                        "{value}"
                    }
                }
            }
        }
    }
}
