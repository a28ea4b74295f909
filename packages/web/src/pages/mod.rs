//! Page components, one per route

mod dashboard;
mod product;

pub use dashboard::*;
pub use product::*;
