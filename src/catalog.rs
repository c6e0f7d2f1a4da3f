//! Client-side narrowing of the product listing.
//!
//! Everything here is pure: the catalog component owns a [`CatalogState`] and
//! recomputes the visible page from it on every render.

mod filter;
pub use filter::*;
mod page;
pub use page::*;
mod sort;
pub use sort::*;
mod state;
pub use state::*;
mod summary;
pub use summary::*;
