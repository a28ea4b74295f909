//! Loading and empty-state placeholders

use dioxus::prelude::*;

/// Centered loading indicator used while a fetch is in flight
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-12",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-blue-800 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-blue-800 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-blue-800 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "Loading..." }
        }
    }
}

#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "text-center py-12 text-gray-500", "{message}" }
    }
}
