//! HTTP boundary

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use log::{error, info};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServerConfig;
use crate::error::Error;
use crate::extract::{extract_fenced_block, unwrap_completion_content};
use crate::generator::TestCaseGenerator;
use crate::request::{ApiTestRequest, UserStoryRequest};

pub type AppState = Arc<TestCaseGenerator>;

/// Any origin unless one is configured. Credentials are never allowed.
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, Error>
{   let layer = CorsLayer::new()
      .allow_methods(Any)
      .allow_headers(Any);
    match &config.cors_allowed_origin
    {   None => Ok(layer.allow_origin(Any))
      , Some(origin) => {
          let value = HeaderValue::from_str(origin).map_err(|e| {
            Error::InvalidConfiguration(
              format!("bad CORS origin {}: {}", origin, e)
            )
          })?;
          Ok(layer.allow_origin(value))
        }
    }
}

pub fn build_router(state: AppState, cors: CorsLayer) -> Router
{   Router::new()
      .route("/api/generateTestCases", post(generate_test_cases))
      .route("/api/generateTestCode", post(generate_test_code))
      .layer(cors)
      .with_state(state)
}

pub async fn serve(
  listener: TcpListener
, generator: TestCaseGenerator
, config: &ServerConfig
) -> Result<(), Box<dyn std::error::Error>>
{   let app = build_router(Arc::new(generator), cors_layer(config)?);
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Turn a pipeline result into the boundary response.
///
/// Business failures are 200s carrying the message; only an unreadable
/// completion envelope is a 500.
fn respond(
  result: Result<String, Error>
, language: &str
) -> (StatusCode, String)
{   let raw = match result
    {   Ok(raw) => raw
      , Err(e) => return (StatusCode::OK, e.to_string())
    };
    match unwrap_completion_content(&raw)
    {   Ok(content) => {
          (StatusCode::OK, extract_fenced_block(&content, language))
        }
      , Err(e) => {
          error!("Unreadable completion: {}", e);
          (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error generating test code: {}", e)
          )
        }
    }
}

async fn generate_test_cases(
  State(generator): State<AppState>
, Json(req): Json<UserStoryRequest>
) -> (StatusCode, String)
{   let result = generator
      .generate_test_cases_from_user_story(
        req.user_story_details.as_deref().unwrap_or_default(),
        req.acceptance_criteria_details.as_deref().unwrap_or_default(),
        req.model_name.as_deref(),
      )
      .await;
    respond(result, "csv")
}

async fn generate_test_code(
  State(generator): State<AppState>
, Json(req): Json<ApiTestRequest>
) -> (StatusCode, String)
{   let test_types = req.test_types.unwrap_or_default();
    let result = generator
      .generate_test_code(
        req.api_details.as_deref().unwrap_or_default(),
        &test_types,
        req.model_name.as_deref(),
      )
      .await;
    respond(result, "java")
}
