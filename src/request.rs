//! Wire types for the completion service and the HTTP boundary

use serde::{Deserialize, Serialize};

/// Sampling parameters are fixed; callers cannot override them.
pub const TEMPERATURE: f64 = 0.1;
pub const TOP_P: f64 = 0.2;
pub const MAX_TOKENS: u32 = 10000;

// ===== Completion service =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role
{   System
  , User
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: Role
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: Role::System
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: Role::User
          , content: content.into()
        }
    }
}

/// Body POSTed to the completion endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionPayload
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f64
  , pub top_p: f64
  , pub max_tokens: u32
}

impl CompletionPayload
{   pub fn new(
      model: impl Into<String>
    , messages: Vec<ChatMessage>
    ) -> Self
    {   CompletionPayload
        {   model: model.into()
          , messages
          , temperature: TEMPERATURE
          , top_p: TOP_P
          , max_tokens: MAX_TOKENS
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChoiceMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

/// Assistant reply; role is not constrained to [`Role`]
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage
{   #[serde(default)]
    pub role: Option<String>
  , pub content: String
}

// ===== HTTP boundary =====

/// Body of `POST /api/generateTestCases`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStoryRequest
{   #[serde(default)]
    pub user_story_details: Option<String>
  , #[serde(default)]
    pub acceptance_criteria_details: Option<String>
  , #[serde(default)]
    pub model_name: Option<String>
}

/// Body of `POST /api/generateTestCode`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTestRequest
{   #[serde(default)]
    pub api_details: Option<String>
  , #[serde(default)]
    pub test_types: Option<Vec<String>>
  , #[serde(default)]
    pub model_name: Option<String>
}
