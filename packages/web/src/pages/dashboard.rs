//! Dashboard page component

use dioxus::prelude::*;
use listings_client::{Category, Region};

use crate::components::{facet_at, facet_buttons, EmptyState, FacetBar, ListingCard, LoadingSpinner};
use crate::config::api_client;
use crate::state::{load_listings, DashboardState, LoadingGuard, RequestTracker};

/// Dashboard - all listings with category and location filters
#[component]
pub fn Dashboard() -> Element {
    let mut dashboard = use_signal(DashboardState::default);
    let mut loading = use_signal(|| true);
    let tracker = use_hook(RequestTracker::new);

    use_drop({
        let tracker = tracker.clone();
        move || tracker.cancel()
    });

    // Fetch listings once per mount
    use_effect(move || {
        let token = tracker.begin();
        spawn(async move {
            let _loading = LoadingGuard::new(move |value| {
                if let Ok(mut flag) = loading.try_write() {
                    *flag = value;
                }
            });

            let listings = load_listings(&api_client()).await;
            if token.is_current() {
                dashboard.write().replace_listings(listings);
            }
        });
    });

    let visible = use_memo(move || dashboard.read().visible());

    let total = dashboard.read().listings().len();
    let selection = dashboard.read().selection();
    let (category_labels, category_index) = facet_buttons(selection.category);
    let (location_labels, location_index) = facet_buttons(selection.location);

    rsx! {
        div {
            class: "min-h-screen bg-blue-50",
            div {
                class: "max-w-7xl mx-auto px-4 py-6",

                div {
                    class: "flex justify-between items-center mb-6",
                    h2 { class: "text-2xl font-bold", "Browse Listings" }
                    if !loading() {
                        span { class: "text-sm text-gray-500", "{visible.read().len()} of {total} listings" }
                    }
                }

                // Category Filters
                div {
                    class: "mb-6",
                    FacetBar {
                        labels: category_labels,
                        selected: category_index,
                        on_select: move |index| dashboard.write().select_category(facet_at::<Category>(index)),
                    }
                }

                // Location Filters
                div {
                    class: "mb-4",
                    h3 { class: "text-sm font-semibold text-gray-700 mb-2", "Filter by Location:" }
                    FacetBar {
                        labels: location_labels,
                        selected: location_index,
                        active_class: "bg-yellow-500 text-blue-900 font-semibold",
                        on_select: move |index| dashboard.write().select_location(facet_at::<Region>(index)),
                    }
                }

                // Listings
                if loading() {
                    LoadingSpinner {}
                } else if visible.read().is_empty() {
                    EmptyState { message: "No listings found".to_string() }
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4",
                        for listing in visible() {
                            ListingCard {
                                key: "{listing.id}",
                                listing: listing.clone(),
                                on_delete: move |id| {
                                    if dashboard.write().remove_listing(id) {
                                        tracing::info!(listing_id = id, "Removed listing from dashboard");
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
