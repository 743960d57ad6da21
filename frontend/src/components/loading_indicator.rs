use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "
                padding: 80px 0px;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
            ",
            div { class: "x-spinner" }
            p {
                style: "font-size: 18px; font-weight: 600; color: #4B5563;",
                "Loading companies..."
            }
        }
    }
}
