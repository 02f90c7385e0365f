use dioxus::prelude::*;

use crate::ui_dioxus::router::Route;

/// Root component. Expects an `Arc<CountryService>` in context.
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
