use common::company::Company;
use dioxus::{logger::tracing, prelude::*};

use crate::api::company_api::list_companies;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// The collection, loaded once for the whole session.
#[derive(Clone, Copy)]
pub struct CompanyCollection {
    pub companies: ReadSignal<Option<Result<Vec<Company>, ServerFnError>>>,
}

#[component]
pub fn App() -> Element {
    let companies = use_resource(move || async move {
        let loaded = list_companies().await;
        match &loaded {
            Ok(companies) => tracing::info!("Company collection loaded: {} records", companies.len()),
            Err(e) => tracing::error!("Failed to load company collection: {e:#?}"),
        }
        loaded
    });
    use_context_provider(move || CompanyCollection { companies: companies.into() });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
