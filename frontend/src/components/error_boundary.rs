//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                rsx! {
                    h1 {
                        style: "color:#B91C1C; font-size: 40px; border: 1px solid #FCA5A5; padding: 10px; border-radius: 8px; margin: 15px;",
                        "Something went wrong",
                    }
                    p {
                        style: "color:#7F1D1D; font-size: 20px; padding: 10px; margin: 15px;",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color:#4F46E5; font-size: 20px; border: 1px solid #4F46E5; padding: 10px; border-radius: 8px; margin: 15px;",
                        "Back to the directory"
                    }
                    pre {
                        style: "color:black; border: 1px solid #FCA5A5; padding: 10px; border-radius: 8px; margin: 15px; text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

/// Details panel for a failure that is already handled, such as a failed load.
#[component]
pub fn ComponentErrorDisplay(title: ReadSignal<String>, error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                padding: 16px;
            ",
            div {
                style: "color:#B91C1C; font-size: 16px; font-weight: 600;",
                "{title}",
            }
            pre {
                style: "color:#7F1D1D; background: #FEF2F2; border: 1px solid #FECACA; padding: 10px; border-radius: 8px; text-wrap: auto; max-width: 640px; max-height: 200px; overflow-y: auto; font-size: 13px;",
                "{error_txt}"
            }
            {children}
        }
    }
}
