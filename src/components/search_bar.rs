use crate::components::Icon;
use dioxus::prelude::*;

/// Text input bound to the browser's query; every keystroke goes straight through.
#[component]
pub fn SearchBar(search_text: Signal<String>) -> Element {
    let mut search_text = search_text;

    rsx! {
        div { class: "w-full bg-gray-800/50 backdrop-blur-sm border border-gray-700/50 px-4 py-3 rounded-full max-w-3xl mx-auto shadow-lg",
            div { class: "relative flex items-center",
                Icon {
                    name: "search".to_string(),
                    class: "absolute left-2 h-5 w-5 text-gray-400".to_string(),
                }
                input {
                    r#type: "text",
                    class: "w-full bg-transparent py-2 sm:pr-10 pl-10 text-base text-gray-200 placeholder-gray-400 outline-none",
                    placeholder: "Search for songs...",
                    value: "{search_text}",
                    oninput: move |e| search_text.set(e.value()),
                }
            }
        }
    }
}
