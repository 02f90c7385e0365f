use dioxus::prelude::*;

use crate::ui_dioxus::router::Route;

// Placeholder target for country links; the details page itself lives elsewhere.
#[component]
pub fn DetailsView(name: String) -> Element {
    rsx! {
        main {
            class: "country-details",

            h1 { "{name}" }

            Link {
                class: "see-details",
                to: Route::Home {},
                "Back to countries"
            }
        }
    }
}
