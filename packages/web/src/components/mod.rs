//! Reusable UI components

mod facet_bar;
mod listing_card;
mod loading;

pub use facet_bar::*;
pub use listing_card::*;
pub use loading::*;
