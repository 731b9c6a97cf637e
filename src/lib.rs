//! testgen: turn API descriptions and user stories into test code
//! and CSV test cases through an LLM chat completion endpoint.
//!
//! Flow: test type selection, prompt assembly, one completion call,
//! then fenced block extraction at the HTTP boundary.

pub mod error;
pub mod config;
pub mod request;
pub mod test_type;
pub mod prompt;
pub mod client;
pub mod extract;
pub mod generator;
pub mod server;

pub use client::CompletionClient;
pub use config::{AppConfig, GeneratorConfig, ServerConfig};
pub use error::Error;
pub use extract::{extract_fenced_block, unwrap_completion_content};
pub use generator::TestCaseGenerator;
pub use test_type::{select_instruction_line, TestType};
