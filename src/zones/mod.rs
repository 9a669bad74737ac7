//! Card and token containers.
//!
//! Each container wraps a plain `Vec` and exposes only the moves the
//! game allows:
//!
//! - `Deck`: hidden draw pile
//! - `Marketplace`: five face-up cards with slot-preserving swaps
//! - `TokenStack` / `TokenSupply`: scoring tokens

pub mod deck;
pub mod market;
pub mod supply;

pub use deck::Deck;
pub use market::Marketplace;
pub use supply::{SupplyCounts, TokenStack, TokenSupply};
