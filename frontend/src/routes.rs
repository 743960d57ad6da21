use common::directory_view::DirectoryView;
use dioxus::prelude::*;

use crate::data_definitions::url_state::UrlState;
use crate::pages::directory_page::DirectoryPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::directory_page(DirectoryView::default()))]
    #[route("/companies/:view")]
    DirectoryPage { view: UrlState<DirectoryView> },
}

impl Route {
    pub fn directory_page(view: DirectoryView) -> Self {
        Self::DirectoryPage { view: UrlState::from(view) }
    }
}
