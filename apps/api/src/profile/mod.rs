//! Behavioral profile derivation: DISC score → personality type → content,
//! strengths and personalized narrative.
//!
//! Everything here except `handlers` is synchronous and pure over read-only data.

pub mod catalog;
pub mod classifier;
pub mod disc;
pub mod handlers;
pub mod legacy;
pub mod personalizer;
pub mod strengths;
pub mod view;
