//! API Handlers
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::{info, warn};
use uigen_core::{Category, Framework, StylingSystem, UiGenError, UIGEN_VERSION};

use crate::tools::{self, GenerateArgs, ListArgs, ToolResult, GENERATE_COMPONENT, LIST_COMPONENTS};
use crate::AppState;

pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "version": UIGEN_VERSION })))
}

pub async fn list_tools() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(tools::descriptors()))
}

pub async fn generate_component(
    State(state): State<AppState>,
    payload: Result<Json<GenerateArgs>, JsonRejection>,
) -> (StatusCode, Json<ToolResult>) {
    let result = match payload {
        Ok(Json(args)) => run_generate(&state, &args).await,
        Err(rejection) => generation_failed(&state, &invalid_arguments(rejection)),
    };
    state.metrics.record_tool_call(GENERATE_COMPONENT, result.is_error);
    (StatusCode::OK, Json(result))
}

async fn run_generate(state: &AppState, args: &GenerateArgs) -> ToolResult {
    let overrides = parse_overrides(args);
    let outcome = match overrides {
        Ok((framework, styling)) => {
            state
                .generator
                .quick_generate_with(&args.description, framework, styling)
                .await
        }
        Err(e) => Err(e),
    };

    let rendered = outcome.and_then(|response| {
        info!(
            tool = GENERATE_COMPONENT,
            kind = %response.metadata.component_kind,
            variants = response.variants.len(),
            "tool call succeeded"
        );
        state.renderer.format_component_response(&response)
    });

    match rendered {
        Ok(text) => ToolResult::text(text),
        Err(e) => generation_failed(state, &e),
    }
}

fn generation_failed(state: &AppState, e: &UiGenError) -> ToolResult {
    warn!(tool = GENERATE_COMPONENT, error = %e, "tool call failed");
    let text = state
        .renderer
        .format_generation_error(e)
        .unwrap_or_else(|_| format!("Error generating component: {}", e));
    ToolResult::error(text)
}

fn invalid_arguments(rejection: JsonRejection) -> UiGenError {
    UiGenError::InvalidArguments(rejection.body_text())
}

fn parse_overrides(
    args: &GenerateArgs,
) -> Result<(Option<Framework>, Option<StylingSystem>), UiGenError> {
    let framework = args.framework.as_deref().map(str::parse::<Framework>).transpose()?;
    let styling = args.styling.as_deref().map(str::parse::<StylingSystem>).transpose()?;
    Ok((framework, styling))
}

pub async fn list_components(
    State(state): State<AppState>,
    payload: Result<Json<ListArgs>, JsonRejection>,
) -> (StatusCode, Json<ToolResult>) {
    let result = match payload {
        Ok(Json(args)) => run_list(&state, &args),
        Err(rejection) => listing_failed(&state, &invalid_arguments(rejection)),
    };
    state.metrics.record_tool_call(LIST_COMPONENTS, result.is_error);
    (StatusCode::OK, Json(result))
}

fn run_list(state: &AppState, args: &ListArgs) -> ToolResult {
    let rendered = args
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .and_then(|category| {
            let components = match category {
                Some(category) => state.generator.components_by_category(category),
                None => state.generator.all_components(),
            };
            state.renderer.format_component_list(&components)
        });

    match rendered {
        Ok(text) => ToolResult::text(text),
        Err(e) => listing_failed(state, &e),
    }
}

fn listing_failed(state: &AppState, e: &UiGenError) -> ToolResult {
    warn!(tool = LIST_COMPONENTS, error = %e, "tool call failed");
    let text = state
        .renderer
        .format_listing_error(e)
        .unwrap_or_else(|_| format!("Error listing components: {}", e));
    ToolResult::error(text)
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
