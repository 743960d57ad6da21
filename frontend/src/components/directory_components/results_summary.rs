use dioxus::prelude::*;

/// "Showing A to B of T entries".
#[component]
pub fn ResultsSummary(showing_range: ReadSignal<Option<(u64, u64)>>, total: ReadSignal<u64>) -> Element {
    let Some((first, last)) = *showing_range.read() else {
        return rsx! {};
    };
    rsx! {
        div {
            style: "font-size: 14px; color: #4B5563;",
            "Showing "
            span { style: "font-weight: 700; color: #111827;", "{first}" }
            " to "
            span { style: "font-weight: 700; color: #111827;", "{last}" }
            " of "
            span { style: "font-weight: 700; color: #111827;", "{total}" }
            " entries"
        }
    }
}
