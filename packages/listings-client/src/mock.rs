//! Mock listing store for testing.
//!
//! Provides a configurable in-memory implementation of [`ListingsApi`].

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{ListingsError, Result};
use crate::types::{Listing, ListingId, Seller, UserId};
use crate::ListingsApi;

/// Canned outcome for one endpoint.
#[derive(Debug, Clone)]
enum Canned<T> {
    Found(T),
    Status(u16),
    Unreachable,
}

impl<T: Clone> Canned<T> {
    fn resolve(&self) -> Result<T> {
        match self {
            Canned::Found(value) => Ok(value.clone()),
            Canned::Status(status) => Err(ListingsError::Status {
                status: *status,
                message: String::new(),
            }),
            Canned::Unreachable => Err(ListingsError::Network("connection refused".into())),
        }
    }
}

/// Mock listing store.
///
/// Unknown listing and user ids answer 404. The listing collection is built
/// from the listings added so far, in insertion order.
///
/// # Example
///
/// ```rust,ignore
/// use listings_client::MockListingsApi;
///
/// let mock = MockListingsApi::new().with_listing(desk).with_user(seller);
/// mock.fail_user(9, 500);
/// ```
#[derive(Default, Clone)]
pub struct MockListingsApi {
    collection: Arc<RwLock<Option<Canned<Vec<Listing>>>>>,
    order: Arc<RwLock<Vec<ListingId>>>,
    listings: Arc<RwLock<HashMap<ListingId, Canned<Option<Listing>>>>>,
    users: Arc<RwLock<HashMap<UserId, Canned<Seller>>>>,
    /// Request paths in call order, e.g. `/listings/5`
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockListingsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listing served by both the collection and the item endpoint.
    pub fn add_listing(&self, listing: Listing) {
        let id = listing.id;
        let mut order = self.order.write().unwrap();
        if !order.contains(&id) {
            order.push(id);
        }
        self.listings
            .write()
            .unwrap()
            .insert(id, Canned::Found(Some(listing)));
    }

    pub fn add_user(&self, seller: Seller) {
        self.users
            .write()
            .unwrap()
            .insert(seller.id, Canned::Found(seller));
    }

    pub fn with_listing(self, listing: Listing) -> Self {
        self.add_listing(listing);
        self
    }

    pub fn with_listings(self, listings: Vec<Listing>) -> Self {
        for listing in listings {
            self.add_listing(listing);
        }
        self
    }

    pub fn with_user(self, seller: Seller) -> Self {
        self.add_user(seller);
        self
    }

    /// Make `GET /listings` answer with the given status.
    pub fn fail_collection(&self, status: u16) {
        *self.collection.write().unwrap() = Some(Canned::Status(status));
    }

    /// Make `GET /listings/{id}` answer with the given status.
    pub fn fail_listing(&self, id: ListingId, status: u16) {
        self.listings
            .write()
            .unwrap()
            .insert(id, Canned::Status(status));
    }

    /// Make `GET /listings/{id}` answer `200 null`.
    pub fn empty_listing(&self, id: ListingId) {
        self.listings.write().unwrap().insert(id, Canned::Found(None));
    }

    /// Make `GET /users/{id}` answer with the given status.
    pub fn fail_user(&self, id: UserId, status: u16) {
        self.users.write().unwrap().insert(id, Canned::Status(status));
    }

    /// Make every endpoint fail at the transport level.
    pub fn go_offline(&self) {
        *self.collection.write().unwrap() = Some(Canned::Unreachable);
        for canned in self.listings.write().unwrap().values_mut() {
            *canned = Canned::Unreachable;
        }
        for canned in self.users.write().unwrap().values_mut() {
            *canned = Canned::Unreachable;
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Number of recorded calls whose path starts with `prefix`.
    pub fn calls_to(&self, prefix: &str) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|path| path.starts_with(prefix))
            .count()
    }

    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }

    fn record(&self, path: String) {
        self.calls.write().unwrap().push(path);
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ListingsApi for MockListingsApi {
    async fn list_listings(&self) -> Result<Vec<Listing>> {
        self.record("/listings".into());

        if let Some(canned) = self.collection.read().unwrap().as_ref() {
            return canned.resolve();
        }

        let listings = self.listings.read().unwrap();
        Ok(self
            .order
            .read()
            .unwrap()
            .iter()
            .filter_map(|id| match listings.get(id) {
                Some(Canned::Found(Some(listing))) => Some(listing.clone()),
                _ => None,
            })
            .collect())
    }

    async fn get_listing(&self, id: ListingId) -> Result<Option<Listing>> {
        self.record(format!("/listings/{}", id));

        match self.listings.read().unwrap().get(&id) {
            Some(canned) => canned.resolve(),
            None => Canned::<Option<Listing>>::Status(404).resolve(),
        }
    }

    async fn get_user(&self, id: UserId) -> Result<Seller> {
        self.record(format!("/users/{}", id));

        match self.users.read().unwrap().get(&id) {
            Some(canned) => canned.resolve(),
            None => Canned::<Seller>::Status(404).resolve(),
        }
    }
}
