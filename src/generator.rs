//! Generation pipeline: instruction line, prompt, completion call

use log::{debug, info};

use crate::client::CompletionClient;
use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::prompt;
use crate::request::CompletionPayload;
use crate::test_type::select_instruction_line;

pub struct TestCaseGenerator
{   client: CompletionClient
  , default_model: String
}

impl TestCaseGenerator
{   pub fn new(config: &GeneratorConfig) -> Self
    {   TestCaseGenerator
        {   client: CompletionClient::new(config)
          , default_model: config.model.clone()
        }
    }

    fn resolve_model<'a>(&'a self, model: Option<&'a str>) -> &'a str
    {   model.unwrap_or(self.default_model.as_str())
    }

    /// Ask for a Rest Assured test class covering `api_details`.
    ///
    /// Returns the raw completion body.
    pub async fn generate_test_code<S: AsRef<str>>(
      &self
    , api_details: &str
    , test_types: &[S]
    , model: Option<&str>
    ) -> Result<String, Error>
    {   let line = select_instruction_line(test_types);
        let messages = prompt::build_api_test_prompt(api_details, &line)?;
        let model = self.resolve_model(model);
        info!("Generating API test code with {}", model);

        let payload = CompletionPayload::new(model, messages);
        self.client.call_completion_service(&payload).await
    }

    /// Ask for CSV test cases covering a user story.
    ///
    /// Returns the raw completion body.
    pub async fn generate_test_cases_from_user_story(
      &self
    , story: &str
    , acceptance_criteria: &str
    , model: Option<&str>
    ) -> Result<String, Error>
    {   let messages
          = prompt::build_user_story_prompt(story, acceptance_criteria)?;
        let model = self.resolve_model(model);
        if model.is_empty()
        {   return Err(Error::Validation(
              prompt::NO_MODEL_NAME.to_string()
            ));
        }
        info!("Generating user story test cases with {}", model);
        debug!("Story is {} bytes", story.len());

        let payload = CompletionPayload::new(model, messages);
        self.client.call_completion_service(&payload).await
    }
}
