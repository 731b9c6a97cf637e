//! Pull generated artifacts out of completion text

use regex::Regex;
use log::{debug, error};

use crate::error::Error;
use crate::request::CompletionResponse;

pub const NOT_FOUND: &str = "No test cases found";

/// Return the trimmed body of the first ```` ```<language> ```` fenced
/// block, or [`NOT_FOUND`].
pub fn extract_fenced_block(text: &str, language: &str) -> String
{   let pattern = format!(
      r"(?s){}\s*(.*?)\s*```",
      regex::escape(&format!("```{}", language))
    );
    let re = match Regex::new(&pattern)
    {   Ok(re) => re
      , Err(e) => {
          error!("Bad fence pattern for {}: {}", language, e);
          return NOT_FOUND.to_string();
        }
    };

    match re.captures(text).and_then(|c| c.get(1))
    {   Some(m) => {
          debug!("Found {} block ({} bytes)", language, m.len());
          m.as_str().trim().to_string()
        }
      , None => {
          debug!("No {} block in completion", language);
          NOT_FOUND.to_string()
        }
    }
}

/// Unwrap `choices[0].message.content` when the completion body is a
/// JSON envelope; any other text is passed through.
pub fn unwrap_completion_content(raw: &str) -> Result<String, Error>
{   if !raw.trim().starts_with('{')
    {   return Ok(raw.to_string());
    }
    let response: CompletionResponse = serde_json::from_str(raw)?;
    response.choices
      .into_iter()
      .next()
      .map(|c| c.message.content)
      .ok_or_else(|| {
        error!("No choices in completion response");
        Error::Parse("completion response contained no choices".to_string())
      })
}
