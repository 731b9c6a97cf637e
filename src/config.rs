//! Configuration for the completion service and the HTTP boundary

use serde::{Deserialize, Serialize};
use log::{debug, info};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Completion service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig
{   /// Full URL of the chat completion endpoint
    pub api_url: String
  , /// Bearer token sent with every request
    pub api_key: String
  , /// Model used when a request does not name one
    pub model: String
}

impl Default for GeneratorConfig
{   fn default() -> Self
    {   GeneratorConfig
        {   api_url: String::new()
          , api_key: String::new()
          , model: DEFAULT_MODEL.to_string()
        }
    }
}

impl GeneratorConfig
{   /// Check that the completion service is reachable in principle
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.api_url.is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "LLM_API_URL is not set".to_string()
            ));
        }
        if self.api_key.is_empty()
        {   return Err(crate::error::Error::MissingApiKey(
              self.api_url.clone()
            ));
        }
        Ok(())
    }
}

/// HTTP boundary configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig
{   pub bind: String
  , pub port: u16
  , /// Single allowed origin; any origin when unset
    pub cors_allowed_origin: Option<String>
}

impl Default for ServerConfig
{   fn default() -> Self
    {   ServerConfig
        {   bind: DEFAULT_BIND.to_string()
          , port: DEFAULT_PORT
          , cors_allowed_origin: None
        }
    }
}

/// Top level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig
{   pub generator: GeneratorConfig
  , pub server: ServerConfig
}

impl AppConfig
{   /// Load from an optional JSON file (`TESTGEN_CONFIG`) then
    /// overlay the process environment.
    pub fn load() -> Result<Self, crate::error::Error>
    {   let mut config = match std::env::var("TESTGEN_CONFIG")
        {   Ok(path) => AppConfig::from_file(&path)?
          , Err(_) => AppConfig::default()
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a JSON config file; missing sections take defaults
    pub fn from_file(path: &str)
      -> Result<Self, crate::error::Error>
    {   info!("Loading config from {}", path);
        let raw = std::fs::read_to_string(path).map_err(|e| {
          crate::error::Error::InvalidConfiguration(
            format!("{}: {}", path, e)
          )
        })?;
        serde_json::from_str(&raw).map_err(|e| {
          crate::error::Error::InvalidConfiguration(
            format!("{}: {}", path, e)
          )
        })
    }

    /// Overlay values from a key lookup, usually the environment
    pub fn apply_env<F>(&mut self, lookup: F)
      -> Result<(), crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   if let Some(url) = lookup("LLM_API_URL")
        {   debug!("LLM_API_URL from environment");
            self.generator.api_url = url;
        }
        if let Some(key) = lookup("LLM_API_KEY")
        {   debug!("LLM_API_KEY from environment");
            self.generator.api_key = key;
        }
        if let Some(model) = lookup("LLM_MODEL")
        {   debug!("LLM_MODEL from environment: {}", model);
            self.generator.model = model;
        }
        if let Some(bind) = lookup("TESTGEN_BIND")
        {   self.server.bind = bind;
        }
        if let Some(port) = lookup("TESTGEN_PORT")
        {   self.server.port = port.parse().map_err(|_| {
              crate::error::Error::InvalidConfiguration(
                format!("TESTGEN_PORT is not a port: {}", port)
              )
            })?;
        }
        if let Some(origin) = lookup("TESTGEN_CORS_ORIGIN")
        {   self.server.cors_allowed_origin = Some(origin);
        }
        Ok(())
    }
}
