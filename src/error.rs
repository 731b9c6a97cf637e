use std::fmt;

/// Error type for the test generation pipeline.
/// Display text is what callers of the HTTP boundary see,
/// so the messages below are part of the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Required input missing; message is shown verbatim
    Validation(String)
  , /// Completion payload could not be serialized
    Payload(String)
  , /// Transport failure talking to the completion service
    Http(String)
  , /// Completion service answered with a non-success status
    Api
    {   status: u16
      , body: String
    }
  , /// Completion envelope could not be read
    Parse(String)
  , /// API key is missing
    MissingApiKey(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::Validation(msg) => {
              write!(f, "{}", msg)
            }
          , Error::Payload(cause) => {
              write!(f, "Error building JSON payload: {}", cause)
            }
          , Error::Http(cause) => {
              write!(f, "Error calling LLM API: {}", cause)
            }
          , Error::Api { status, body } => {
              write!(f,
                "Error calling LLM API: status {}: {}",
                status, body
              )
            }
          , Error::Parse(cause) => {
              write!(f, "Parse error: {}", cause)
            }
          , Error::MissingApiKey(what) => {
              write!(f, "Missing API key for: {}", what)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error
{   fn from(e: serde_json::Error) -> Self
    {   Error::Parse(e.to_string())
    }
}
