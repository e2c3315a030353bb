//! # Claude Integration Module
//!
//! Talks to Anthropic's Messages API. The rest of the crate only sees the
//! [`CompletionModel`] trait: one prompt in, one block of text out, with
//! failures already sorted into auth, rate limit and everything else.
//!
//! ## Status mapping
//!
//! | Response                     | Error                          |
//! |------------------------------|--------------------------------|
//! | `401`, `403`                 | [`Error::ModelAuth`]           |
//! | `429`                        | [`Error::ModelRateLimit`]      |
//! | other non-2xx, network, I/O  | [`Error::ModelInvocation`]     |
//! | 2xx without a text block     | [`Error::ModelInvocation`]     |

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::{
    config::ClaudeConfig,
    error::{Error, Result},
};

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// A text-generation backend.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Sends `prompt` as a single user message and returns the reply text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ClaudeClient {
    config: ClaudeConfig,
    client: Client,
}

impl ClaudeClient {
    pub fn new(config: ClaudeConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn messages_url(&self) -> String {
        format!("{}/messages", self.config.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionModel for ClaudeClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let res = self
            .client
            .post(self.messages_url())
            .header(CONTENT_TYPE, "application/json")
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::ModelInvocation(format!("API request failed: {}", e)))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(classify_failure(status, body));
        }

        let response: MessagesResponse = res
            .json()
            .await
            .map_err(|e| Error::ModelInvocation(format!("Failed to parse response: {}", e)))?;

        response
            .content
            .into_iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| Error::ModelInvocation("response contained no text".to_string()))
    }
}

fn classify_failure(status: StatusCode, body: String) -> Error {
    let detail = format!("{} {}", status, body).trim_end().to_string();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::ModelAuth(detail),
        StatusCode::TOO_MANY_REQUESTS => Error::ModelRateLimit(detail),
        _ => Error::ModelInvocation(detail),
    }
}
