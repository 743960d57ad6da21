use common::{
    directory_const::PAGE_SIZE,
    directory_query::QueryResult,
    directory_view::DirectoryView,
    filter_config::default_filter_options,
};
use dioxus::{logger::tracing, prelude::*};

use crate::{
    app::CompanyCollection,
    components::{
        directory_components::{
            active_filter_chips::ActiveFilterChips, company_table::CompanyTable, copy_link_button::CopyLinkButton,
            pagination_controls::PaginationControls, results_summary::ResultsSummary, search_filter_bar::SearchFilterBar,
        },
        error_boundary::ComponentErrorDisplay,
        loading_indicator::LoadingIndicator,
    },
    data_definitions::url_state::UrlState,
    routes::Route,
};

/// Directory page
#[component]
pub fn DirectoryPage(view: UrlState<DirectoryView>) -> Element {
    rsx! {
        Title { "Company Directory" }
        DirectoryPageRootComponent { view: view.0.clone() }
    }
}

/// Read access to the view in the URL, plus the only ways to change it.
///
/// `set_view` adds a history entry; `replace_view` rewrites the current one.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct DirectoryViewControl {
    pub view: ReadSignal<DirectoryView>,
    pub set_view: Callback<DirectoryView>,
    pub replace_view: Callback<DirectoryView>,
}

#[component]
fn DirectoryPageRootComponent(view: ReadSignal<DirectoryView>) -> Element {
    let control = use_context_provider(move || DirectoryViewControl {
        view,
        set_view: Callback::new(move |next: DirectoryView| {
            if *view.peek() == next {
                return;
            }
            navigator().push(Route::directory_page(next));
        }),
        replace_view: Callback::new(move |next: DirectoryView| {
            if *view.peek() == next {
                return;
            }
            navigator().replace(Route::directory_page(next));
        }),
    });

    let has_active_filters = use_memo(move || view.read().has_active_filters());
    let filter_options = use_signal(default_filter_options);

    rsx! {
        div {
            id: "x-directory-page-root-component",
            style: "
                min-height: 100vh;
                padding: 24px;
                box-sizing: border-box;
                background: linear-gradient(135deg, #F8FAFC 0%, #EFF6FF 50%, #EEF2FF 100%);
            ",
            div {
                style: "margin-bottom: 32px;",
                h1 {
                    style: "font-size: 36px; font-weight: 700; color: #111827; margin: 0px 0px 8px 0px;",
                    "Company Directory"
                }
                p {
                    style: "color: #4B5563; margin: 0px;",
                    "Browse and filter through our comprehensive company database"
                }
            }

            div {
                id: "x-directory-filter-card",
                class: "x-card",
                style: "padding: 24px; margin-bottom: 24px;",
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                    h2 {
                        style: "font-size: 18px; font-weight: 600; color: #111827; margin: 0px;",
                        "Filters & Search"
                    }
                    if has_active_filters() {
                        button {
                            class: "x-clear-filters-button",
                            onclick: move |_| {
                                tracing::info!("Clearing all filters");
                                control.set_view.call(DirectoryView::cleared());
                            },
                            "Clear All Filters"
                        }
                    }
                }
                SearchFilterBar { filter_options, search_label: "Search company".to_string() }
                ActiveFilterChips {}
            }

            div {
                id: "x-directory-results-card",
                class: "x-card",
                style: "overflow: hidden;",
                DirectoryResults {}
            }
        }
    }
}

#[component]
fn DirectoryResults() -> Element {
    let control = use_context::<DirectoryViewControl>();
    let view = control.view;
    let collection = use_context::<CompanyCollection>();

    let query_result = use_memo(move || {
        let companies = collection.companies.read();
        let companies: &[_] = match &*companies {
            Some(Ok(companies)) => companies.as_slice(),
            // a failed load leaves the directory empty
            Some(Err(_)) => &[],
            None => return None,
        };
        let result: QueryResult = view.read().to_query(PAGE_SIZE).run(companies);
        Some((result, companies.len()))
    });

    // a page past the end (stale link, narrowed results) moves to the last page
    use_effect(move || {
        let Some((result, _)) = query_result() else { return };
        let clamped = view.peek().clamped(result.total_pages);
        if let Some(clamped) = clamped {
            tracing::info!("Page {} is out of range, moving to page {}", view.peek().page, clamped.page);
            control.replace_view.call(clamped);
        }
    });

    let Some((result, loaded_records)) = query_result() else {
        return rsx! { LoadingIndicator {} };
    };
    let load_error = match &*collection.companies.read() {
        Some(Err(e)) => Some(format!("{:#?}", e)),
        _ => None,
    };
    let page = view.read().page;
    let showing_range = result.showing_range(page, PAGE_SIZE);
    let empty_state = result.empty_state(loaded_records);
    let selected_page = view.read().selected_page_index();
    let total = result.total;
    let total_pages = result.total_pages;

    rsx! {
        CompanyTable { records: result.page_records.clone(), empty_state }
        if let Some(error_txt) = load_error {
            ComponentErrorDisplay { title: "Could not load companies".to_string(), error_txt }
        }
        if !result.page_records.is_empty() {
            div {
                id: "x-directory-results-footer",
                style: "
                    padding: 16px 24px;
                    background: #F9FAFB;
                    border-top: 1px solid #E5E7EB;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 16px;
                ",
                ResultsSummary { showing_range, total }
                div {
                    style: "display: flex; align-items: center; gap: 16px;",
                    PaginationControls {
                        selected_page,
                        total_pages,
                        on_page_selected: move |index: u64| {
                            tracing::info!("Page {} selected", index + 1);
                            let next = view.peek().with_selected_page(index);
                            control.set_view.call(next);
                        },
                    }
                    CopyLinkButton {}
                }
            }
        }
    }
}
