//! Reusable UI components

mod filters;
mod loading;
mod provider_card;

pub use filters::*;
pub use loading::*;
pub use provider_card::*;
