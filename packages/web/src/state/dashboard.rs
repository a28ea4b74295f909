//! Dashboard listing state

use listings_client::{Category, Listing, ListingId, ListingsApi, Region};

use super::facets::{visible, Facet, FacetSelection};

/// Fetch the full listing collection.
///
/// Failures are logged and collapse to an empty collection; the dashboard
/// renders its "no listings" state instead of an error.
pub async fn load_listings<A>(api: &A) -> Vec<Listing>
where
    A: ListingsApi + ?Sized,
{
    match api.list_listings().await {
        Ok(listings) => {
            tracing::debug!(count = listings.len(), "Loaded dashboard listings");
            listings
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load listings");
            Vec::new()
        }
    }
}

/// Listings fetched for the current dashboard mount plus the facet
/// selection applied to them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    listings: Vec<Listing>,
    selection: FacetSelection,
}

impl DashboardState {
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn selection(&self) -> FacetSelection {
        self.selection
    }

    pub fn replace_listings(&mut self, listings: Vec<Listing>) {
        self.listings = listings;
    }

    /// Drop a listing from local state only. Returns whether it was present.
    pub fn remove_listing(&mut self, id: ListingId) -> bool {
        let before = self.listings.len();
        self.listings.retain(|listing| listing.id != id);
        before != self.listings.len()
    }

    pub fn select_category(&mut self, category: Facet<Category>) {
        self.selection.category = category;
    }

    pub fn select_location(&mut self, location: Facet<Region>) {
        self.selection.location = location;
    }

    pub fn visible(&self) -> Vec<Listing> {
        visible(&self.listings, &self.selection)
    }
}
