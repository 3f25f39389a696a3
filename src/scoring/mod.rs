//! Scoring engine: aggregate score and tier classification.
//!
//! Pure functions over an [`Assessment`](crate::core::Assessment) snapshot.

pub mod aggregate;
pub mod tiers;

pub use aggregate::{compute_aggregate, round_to_tenth};
pub use tiers::{color_key_for, tier_for, ColorKey, Tier};
