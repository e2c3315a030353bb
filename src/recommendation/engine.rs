use std::sync::Arc;

use crate::{
    claude::CompletionModel,
    error::{Error, Result},
    recommendation::{prompt, response},
    types::{RecommendedSong, Track},
};

/// Asks a language model for songs in the spirit of a listening history.
///
/// A call goes prompt, model, parse, and either returns songs or fails with
/// a classified error. Nothing is retried or cached here; regenerating is the
/// caller's decision.
#[derive(Clone)]
pub struct RecommendationEngine {
    model: Arc<dyn CompletionModel>,
}

impl RecommendationEngine {
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Returns the model's suggestions for `tracks`, each with a Spotify
    /// search link.
    ///
    /// The songs come back exactly as the model listed them. The prompt asks
    /// for 10-15 entries that don't repeat the input, but neither is enforced
    /// here, so callers must not rely on the count.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] for an empty `tracks`, before any model call
    /// - whatever the model reports: [`Error::ModelAuth`],
    ///   [`Error::ModelRateLimit`] or [`Error::ModelInvocation`]
    /// - [`Error::MalformedAiResponse`] if the reply isn't the requested JSON
    pub async fn recommend(&self, tracks: &[Track]) -> Result<Vec<RecommendedSong>> {
        if tracks.is_empty() {
            return Err(Error::InvalidInput(
                "Please provide a list of songs".to_string(),
            ));
        }

        let prompt = prompt::build_prompt(tracks);
        let reply = self.model.complete(&prompt).await?;
        response::parse_recommendations(&reply)
    }
}
