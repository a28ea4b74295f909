//! REST client for the campus marketplace listing store.
//!
//! A minimal, read-only client for the three endpoints the marketplace views
//! consume: the listing collection, a single listing, and the user record
//! that owns a listing.
//!
//! # Example
//!
//! ```rust,ignore
//! use listings_client::{ListingsApi, ListingsClient};
//!
//! let client = ListingsClient::new("http://localhost:8000");
//!
//! let listings = client.list_listings().await?;
//! for listing in &listings {
//!     println!("{} (${:.2})", listing.title, listing.price);
//! }
//! ```
//!
//! View code should depend on the [`ListingsApi`] trait rather than the
//! concrete client so it can be driven by `MockListingsApi` in tests
//! (enable the `testing` feature).

pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod mock;
pub mod types;

pub use error::{ListingsError, Result};
#[cfg(any(test, feature = "testing"))]
pub use mock::MockListingsApi;
pub use types::{Category, Listing, ListingId, Region, Seller, UserId};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Fallback base URL when no configuration is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Read operations against the listing store.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait ListingsApi {
    /// `GET /listings`
    async fn list_listings(&self) -> Result<Vec<Listing>>;

    /// `GET /listings/{id}`. A `null` body yields `Ok(None)`.
    async fn get_listing(&self, id: ListingId) -> Result<Option<Listing>>;

    /// `GET /users/{id}`
    async fn get_user(&self, id: UserId) -> Result<Seller>;
}

/// HTTP implementation of [`ListingsApi`].
#[derive(Clone)]
pub struct ListingsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ListingsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing reqwest client (connection pool, custom headers).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a relative image reference (e.g. `/uploads/desk.jpg`) against
    /// the base URL. Absolute URLs are returned unchanged.
    pub fn image_url(&self, path: &str) -> String {
        resolve_against(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ListingsError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ListingsError::Network(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ListingsError::Decode(e.to_string()))
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl ListingsApi for ListingsClient {
    async fn list_listings(&self) -> Result<Vec<Listing>> {
        let listings: Vec<Listing> = self.get_json("/listings").await?;
        tracing::debug!(count = listings.len(), "Fetched listings");
        Ok(listings)
    }

    async fn get_listing(&self, id: ListingId) -> Result<Option<Listing>> {
        self.get_json(&format!("/listings/{}", id)).await
    }

    async fn get_user(&self, id: UserId) -> Result<Seller> {
        self.get_json(&format!("/users/{}", id)).await
    }
}

/// Join a base URL and a relative reference the way the listing store
/// serves uploads: `{base}{path}`, tolerating a missing leading slash.
pub fn resolve_against(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let client = ListingsClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn image_paths_resolve_against_base_url() {
        let client = ListingsClient::new("http://api.test");
        assert_eq!(
            client.image_url("/uploads/desk.jpg"),
            "http://api.test/uploads/desk.jpg"
        );
        assert_eq!(
            client.image_url("uploads/desk.jpg"),
            "http://api.test/uploads/desk.jpg"
        );
        assert_eq!(
            client.image_url("https://cdn.test/desk.jpg"),
            "https://cdn.test/desk.jpg"
        );
    }

    #[test]
    fn only_404_counts_as_not_found() {
        let missing = ListingsError::Status {
            status: 404,
            message: String::new(),
        };
        let broken = ListingsError::Status {
            status: 500,
            message: String::new(),
        };
        assert!(missing.is_not_found());
        assert!(!broken.is_not_found());
        assert_eq!(broken.status(), Some(500));
        assert_eq!(ListingsError::Network("refused".into()).status(), None);
    }
}
