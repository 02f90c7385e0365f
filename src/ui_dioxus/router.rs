use dioxus::prelude::*;

use crate::domain::country::Country;
use crate::ui_dioxus::views::{CountriesView, DetailsView};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/:name")]
    Details { name: String },
}

impl Route {
    pub fn details(country: &Country) -> Self {
        Route::Details {
            name: country.common_name().to_string(),
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { CountriesView {} }
}

#[component]
fn Details(name: String) -> Element {
    rsx! { DetailsView { name } }
}
