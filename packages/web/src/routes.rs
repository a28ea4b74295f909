//! Route definitions for the application

use dioxus::prelude::*;
use listings_client::ListingId;

use crate::pages::{Dashboard, ProductInfo, ProductInfoPage};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[route("/dashboard")]
    Dashboard {},

    #[route("/listings/:id")]
    ProductInfo { id: ListingId },

    #[route("/product/:id")]
    ProductInfoPage { id: ListingId },
}
