//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus::server::axum;

        // raw collection for outside consumers; the app itself uses the server function
        Ok(dioxus::server::router(App)
            .route(common::directory_const::COMPANIES_JSON_PATH, axum::routing::get(backend::server_extra::companies_json::companies_json)))
    });
}
