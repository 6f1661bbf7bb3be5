//! Loading components

use dioxus::prelude::*;

/// Bouncing-dots indicator shown while a search is in flight.
#[component]
pub fn SearchingIndicator() -> Element {
    rsx! {
        div {
            class: "text-center py-12",
            div {
                class: "inline-flex space-x-2 mb-4",
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "text-gray-500", "Searching..." }
        }
    }
}
