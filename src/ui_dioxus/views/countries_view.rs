use dioxus::prelude::*;
use std::sync::Arc;

use crate::domain::catalog::CatalogState;
use crate::domain::country::Country;
use crate::services::CountryService;
use crate::ui_dioxus::components::{CountryCard, SearchBar};

/// The searchable, incrementally revealed list of countries.
#[component]
pub fn CountriesView() -> Element {
    let service = use_context::<Arc<CountryService>>();

    let mut countries = use_signal(Vec::<Country>::new);
    let mut catalog = use_signal(CatalogState::new);

    // One fetch per view construction; the service itself never asks twice.
    use_hook(move || {
        spawn(async move {
            let dataset = service.initialize().await;
            countries.set(dataset);
        })
    });

    let view = use_memo(move || catalog.read().view(&countries.read()));

    let current = view.read().clone();
    let search_term = catalog.read().search_term().to_string();

    rsx! {
        main {
            class: "countries",

            SearchBar {
                value: search_term,
                on_input: move |term: String| catalog.write().set_search_term(term),
                on_search: move |_| catalog.write().search(),
            }

            section {
                class: "country-list",

                for (index, country) in current.countries.into_iter().enumerate() {
                    CountryCard {
                        key: "{index}",
                        country,
                    }
                }

                if current.can_load_more {
                    button {
                        r#type: "button",
                        class: "btn-primary load-more",
                        onclick: move |_| catalog.write().load_more(),
                        "Load More"
                    }
                }
            }
        }
    }
}
