//! Query translation and the round trip to the search service.

mod client;
mod query;

pub use client::*;
pub use query::*;
