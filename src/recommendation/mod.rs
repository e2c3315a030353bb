//! # Recommendation Module
//!
//! Builds a prompt from listening history, sends it to a
//! [`CompletionModel`](crate::claude::CompletionModel) and turns the reply
//! into [`RecommendedSong`](crate::types::RecommendedSong)s.
//!
//! - [`prompt`] - the fixed instruction template and song list rendering
//! - [`response`] - fence stripping, strict parsing and link enrichment
//! - [`RecommendationEngine`] - ties the two together around one model call

mod engine;
pub mod prompt;
pub mod response;

pub use engine::RecommendationEngine;
