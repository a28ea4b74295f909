//! View state for the dashboard and detail pages
//!
//! Everything here is plain Rust; pages hold these types in signals and
//! drive the async loaders from spawned tasks.

mod dashboard;
mod detail;
mod facets;
mod request;

pub use dashboard::*;
pub use detail::*;
pub use facets::*;
pub use request::*;
