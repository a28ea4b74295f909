//! Product detail pages
//!
//! Both routes share one fetcher; they differ only in which capabilities
//! are layered on top of the listing.

use dioxus::prelude::*;
use listings_client::{resolve_against, ListingId};

use crate::components::LoadingSpinner;
use crate::config::{api_client, config};
use crate::contact::{format_price, perform};
use crate::routes::Route;
use crate::state::{fetch_listing, fetch_seller, DetailCapabilities, DetailModel, DetailState, RequestTracker};

/// Full detail page with seller panel and contact button
#[component]
pub fn ProductInfo(id: ListingId) -> Element {
    rsx! {
        ProductDetail { id, capabilities: DetailCapabilities::FULL }
    }
}

/// Listing-only detail page
#[component]
pub fn ProductInfoPage(id: ListingId) -> Element {
    rsx! {
        ProductDetail { id, capabilities: DetailCapabilities::BASIC }
    }
}

#[component]
fn ProductDetail(id: ListingId, capabilities: DetailCapabilities) -> Element {
    let mut model = use_signal(DetailModel::default);
    let tracker = use_hook(RequestTracker::new);

    use_drop({
        let tracker = tracker.clone();
        move || tracker.cancel()
    });

    // Reload whenever the route id changes
    use_effect(use_reactive!(|(id, capabilities)| {
        let token = tracker.begin();
        model.write().begin(id);

        spawn(async move {
            let api = api_client();
            let state = fetch_listing(&api, id).await;
            let Some(user_id) = model.write().finish(&token, state) else {
                return;
            };

            if capabilities.needs_seller() {
                // The loading indicator is already down; the seller only fills in
                // the panel when it arrives
                spawn(async move {
                    if let Some(seller) = fetch_seller(&api, user_id).await {
                        model.write().attach_seller(&token, seller);
                    }
                });
            }
        });
    }));

    let snapshot = model.read().clone();

    let body = match snapshot.state() {
        DetailState::Loading => rsx! { LoadingSpinner {} },
        DetailState::Error(err) => rsx! {
            div { class: "text-xl text-red-600 text-center py-24", "{err}" }
        },
        DetailState::Empty => rsx! {
            div { class: "text-xl text-center py-24", "Product not found" }
        },
        DetailState::Loaded(listing) => {
            let price = format_price(listing.price);
            let image = listing
                .image_url
                .as_deref()
                .map(|path| resolve_against(&config().api_base_url, path));

            rsx! {
                div {
                    class: "bg-white rounded-lg shadow-lg overflow-hidden",
                    div {
                        class: "grid md:grid-cols-2 gap-8 p-8",

                        // Product Image
                        div {
                            class: "flex items-center justify-center bg-gray-100 rounded-lg p-8",
                            if let Some(src) = image {
                                img {
                                    src: "{src}",
                                    alt: "{listing.title}",
                                    class: "max-w-full h-auto object-cover rounded-lg"
                                }
                            } else {
                                div { class: "text-gray-400", "No image" }
                            }
                        }

                        // Product Details
                        div {
                            class: "flex flex-col justify-center",
                            h1 { class: "text-4xl font-bold text-gray-900 mb-4", "{listing.title}" }
                            div { class: "text-3xl font-bold text-blue-600 mb-6", "{price}" }

                            div {
                                class: "mb-4 flex flex-wrap gap-2",
                                span {
                                    class: "inline-block bg-blue-100 text-blue-800 text-sm px-3 py-1 rounded-full",
                                    "{listing.category}"
                                }
                                if let Some(region) = listing.region {
                                    span {
                                        class: "inline-block bg-green-100 text-green-800 text-sm px-3 py-1 rounded-full",
                                        "{region}"
                                    }
                                }
                            }

                            if let Some(description) = &listing.description {
                                div { class: "text-gray-700 mb-6", p { "{description}" } }
                            }

                            if capabilities.seller_panel {
                                if let Some(seller) = snapshot.seller() {
                                    div {
                                        class: "mb-4 p-3 bg-gray-50 rounded-lg",
                                        p {
                                            class: "text-sm text-gray-600",
                                            "Seller: "
                                            span { class: "font-medium", "{seller.name}" }
                                        }
                                    }
                                }
                            }

                            if capabilities.contact {
                                button {
                                    class: "bg-blue-600 hover:bg-blue-700 text-white font-semibold py-3 px-8 rounded-lg transition",
                                    onclick: move |_| {
                                        if let Some(action) = model.read().contact() {
                                            perform(&action);
                                        }
                                    },
                                    "Contact Seller"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 py-8 px-4",
            aria_busy: "{snapshot.is_loading()}",
            div {
                class: "max-w-6xl mx-auto",
                Link {
                    to: Route::Dashboard {},
                    class: "mb-4 inline-block bg-white hover:bg-gray-100 text-gray-800 font-semibold py-2 px-4 rounded-lg shadow",
                    "\u{2190} Back to Dashboard"
                }
                {body}
            }
        }
    }
}
