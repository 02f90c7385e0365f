use dioxus::prelude::*;
use tracing::debug;

use crate::domain::country::{details_path_for, Country};
use crate::ui_dioxus::router::Route;

#[component]
pub fn CountryCard(country: Country) -> Element {
    let continent = country.primary_continent().unwrap_or_default().to_string();
    let name = country.name.common.clone();

    rsx! {
        article {
            class: "country-card",

            div {
                class: "country-heading",

                img {
                    class: "country-flag",
                    src: "{country.flags.png}",
                    alt: "flags",
                }

                h1 { "{country.name.common}" }
            }

            div {
                class: "country-continent",

                h1 { class: "continent-label", "Continent:" }
                p { "{continent}" }
            }

            Link {
                class: "see-details",
                to: Route::details(&country),
                onclick: move |_| debug!(path = %details_path_for(&name), "Opening country details"),
                "See details"
            }
        }
    }
}
