//! Listing card component

use dioxus::prelude::*;
use listings_client::{resolve_against, Listing, ListingId};

use crate::config::config;
use crate::contact::format_price;
use crate::routes::Route;

/// Props for ListingCard
#[derive(Props, Clone, PartialEq)]
pub struct ListingCardProps {
    pub listing: Listing,
    pub on_delete: EventHandler<ListingId>,
}

/// Dashboard card for a single listing
#[component]
pub fn ListingCard(props: ListingCardProps) -> Element {
    let listing = &props.listing;
    let id = listing.id;
    let on_delete = props.on_delete;
    let price = format_price(listing.price);
    let image = listing
        .image_url
        .as_deref()
        .map(|path| resolve_against(&config().api_base_url, path));

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white overflow-hidden hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            Link {
                to: Route::ProductInfo { id },
                class: "block",
                div {
                    class: "h-40 bg-gray-100 flex items-center justify-center",
                    if let Some(src) = image {
                        img {
                            src: "{src}",
                            alt: "{listing.title}",
                            class: "h-full w-full object-cover"
                        }
                    } else {
                        span { class: "text-gray-400 text-sm", "No image" }
                    }
                }
            }

            div {
                class: "p-4 flex flex-col flex-grow",
                h3 {
                    class: "text-lg font-semibold text-gray-900 mb-1 line-clamp-2",
                    "{listing.title}"
                }
                p { class: "text-xl font-bold text-blue-800 mb-2", "{price}" }

                // Category + Region
                div {
                    class: "flex flex-wrap items-center gap-2 mb-3",
                    span {
                        class: "inline-block bg-blue-100 text-blue-800 text-xs px-2.5 py-1 rounded-full",
                        "{listing.category}"
                    }
                    if let Some(region) = listing.region {
                        span {
                            class: "inline-block bg-green-100 text-green-800 text-xs px-2.5 py-1 rounded-full",
                            "{region}"
                        }
                    }
                }

                if let Some(description) = &listing.description {
                    p { class: "text-gray-700 text-sm mb-4 line-clamp-3 flex-grow", "{description}" }
                }

                div {
                    class: "mt-auto pt-3 border-t border-gray-200/60 flex justify-end",
                    button {
                        class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                        onclick: move |_| on_delete.call(id),
                        "Delete"
                    }
                }
            }
        }
    }
}
