//! Product detail state machine
//!
//! `Loading` moves to exactly one of `Error`, `Empty` or `Loaded` once the
//! primary listing request settles. The seller lookup runs afterwards and
//! never changes the state, only the optional seller slot.

use listings_client::{Listing, ListingId, ListingsApi, ListingsError, Seller, UserId};

use super::request::RequestToken;
use crate::contact::{contact_action, ContactAction};

/// Primary-resource failures shown in place of the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DetailError {
    #[error("Product not found")]
    NotFound,

    #[error("Cannot connect to server")]
    Unreachable,
}

impl From<&ListingsError> for DetailError {
    fn from(err: &ListingsError) -> Self {
        match err {
            ListingsError::Status { .. } => DetailError::NotFound,
            ListingsError::Network(_) | ListingsError::Decode(_) => DetailError::Unreachable,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Error(DetailError),
    /// The store answered successfully but without a listing body
    Empty,
    Loaded(Listing),
}

impl DetailState {
    pub fn listing(&self) -> Option<&Listing> {
        match self {
            DetailState::Loaded(listing) => Some(listing),
            _ => None,
        }
    }
}

/// Optional parts of the detail view layered on the shared fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailCapabilities {
    /// Show the seller's name under the description
    pub seller_panel: bool,
    /// Offer the mail-compose contact button
    pub contact: bool,
}

impl DetailCapabilities {
    pub const FULL: Self = Self {
        seller_panel: true,
        contact: true,
    };

    pub const BASIC: Self = Self {
        seller_panel: false,
        contact: false,
    };

    pub fn needs_seller(&self) -> bool {
        self.seller_panel || self.contact
    }
}

/// Fetch the primary listing and map the outcome to a terminal state.
pub async fn fetch_listing<A>(api: &A, id: ListingId) -> DetailState
where
    A: ListingsApi + ?Sized,
{
    match api.get_listing(id).await {
        Ok(Some(listing)) => DetailState::Loaded(listing),
        Ok(None) => {
            tracing::warn!(listing_id = id, "Listing store returned an empty body");
            DetailState::Empty
        }
        Err(e) => {
            let err = DetailError::from(&e);
            match err {
                DetailError::NotFound => {
                    tracing::warn!(listing_id = id, error = %e, "Listing not found")
                }
                DetailError::Unreachable => {
                    tracing::error!(listing_id = id, error = %e, "Listing request failed")
                }
            }
            DetailState::Error(err)
        }
    }
}

/// Fetch the seller that owns a listing. Failures are logged and dropped.
pub async fn fetch_seller<A>(api: &A, user_id: UserId) -> Option<Seller>
where
    A: ListingsApi + ?Sized,
{
    match api.get_user(user_id).await {
        Ok(seller) => Some(seller),
        Err(e) => {
            tracing::warn!(user_id, error = %e, "Could not fetch seller info");
            None
        }
    }
}

/// Everything the detail view renders for one listing id.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailModel {
    id: Option<ListingId>,
    state: DetailState,
    seller: Option<Seller>,
    loading: bool,
}

impl Default for DetailModel {
    fn default() -> Self {
        Self {
            id: None,
            state: DetailState::Loading,
            seller: None,
            loading: true,
        }
    }
}

impl DetailModel {
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn seller(&self) -> Option<&Seller> {
        self.seller.as_ref()
    }

    /// True until the primary request for the current id settles.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Reset for a (new) listing id.
    pub fn begin(&mut self, id: ListingId) {
        self.id = Some(id);
        self.state = DetailState::Loading;
        self.seller = None;
        self.loading = true;
    }

    /// Apply the primary outcome. Returns the seller to look up next, or
    /// `None` when there is nothing to look up or the token is stale.
    pub fn finish(&mut self, token: &RequestToken, state: DetailState) -> Option<UserId> {
        if !token.is_current() {
            tracing::debug!(listing_id = ?self.id, "Discarding stale listing response");
            return None;
        }
        let owner = state.listing().map(|listing| listing.user_id);
        self.state = state;
        self.loading = false;
        owner
    }

    /// Attach the seller if it still belongs to the listing on screen.
    pub fn attach_seller(&mut self, token: &RequestToken, seller: Seller) {
        if !token.is_current() {
            tracing::debug!(user_id = seller.id, "Discarding stale seller response");
            return;
        }
        match self.state.listing() {
            Some(listing) if listing.user_id == seller.id => self.seller = Some(seller),
            _ => tracing::warn!(user_id = seller.id, "Seller does not own the current listing"),
        }
    }

    /// Contact action for the loaded listing, if any.
    pub fn contact(&self) -> Option<ContactAction> {
        self.state
            .listing()
            .map(|listing| contact_action(listing, self.seller.as_ref()))
    }
}
