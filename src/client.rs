use log::{debug, trace, error};

use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::request::CompletionPayload;

/// Client for an OpenAI-compatible chat completion endpoint
#[derive(Debug, Clone)]
pub struct CompletionClient
{   api_url: String
  , api_key: String
  , http_client: reqwest::Client
}

impl CompletionClient
{   pub fn new(config: &GeneratorConfig) -> Self
    {   debug!("Creating CompletionClient for {}", config.api_url);
        CompletionClient
        {   api_url: config.api_url.clone()
          , api_key: config.api_key.clone()
          , http_client: reqwest::Client::new()
        }
    }

    /// Send one completion request and return the raw response body.
    ///
    /// The body is returned untouched; unwrapping the `choices`
    /// envelope is left to the caller.
    pub async fn call_completion_service(
      &self
    , payload: &CompletionPayload
    ) -> Result<String, Error>
    {   debug!(
          "Calling completion service with model: {}",
          payload.model
        );

        let body = serde_json::to_string(payload).map_err(|e| {
          error!("Payload serialization failed: {}", e);
          Error::Payload(e.to_string())
        })?;
        trace!("Completion request body: {}", body);

        let response = self.http_client
          .post(self.api_url.as_str())
          .header("Content-Type", "application/json")
          .header("Authorization", format!("Bearer {}", self.api_key))
          .body(body)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::Http(e.to_string())
          })?;

        let status = response.status();
        trace!("Completion response status: {}", status);

        let text = response.text().await.map_err(|e| {
          error!("Failed reading response body: {}", e);
          Error::Http(e.to_string())
        })?;

        if !status.is_success()
        {   error!("Completion service error {}: {}", status, text);
            return Err(Error::Api
            {   status: status.as_u16()
              , body: text
            });
        }

        trace!("Completion response body: {}", text);
        Ok(text)
    }
}
