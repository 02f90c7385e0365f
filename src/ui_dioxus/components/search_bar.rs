use dioxus::prelude::*;

/// Keyword input plus the "Search" button.
///
/// `on_input` fires on every change of the text field; `on_search` only when
/// the button is pressed.
#[component]
pub fn SearchBar(
    value: String,
    on_input: EventHandler<String>,
    on_search: EventHandler<()>,
) -> Element {
    rsx! {
        header {
            class: "search-header",

            div {
                class: "search-field",

                span { "Keyword" }

                input {
                    r#type: "text",
                    name: "search",
                    id: "search",
                    placeholder: "Search by keywords",
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
            }

            button {
                r#type: "button",
                class: "btn-primary",
                onclick: move |_| on_search.call(()),
                "Search"
            }
        }
    }
}
