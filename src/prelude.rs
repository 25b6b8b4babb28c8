//! Prelude module for julian_date crate.
//!
//! Re-exports the derive_more macros used by the day-count types.

pub use derive_more::{From, Into};
