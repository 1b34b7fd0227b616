use crate::{
    AppState,
    types::{AnalyzeRequest, AnalyzeResponse, AppError, Result},
};
use axum::{Json, extract::State};
use std::time::Instant;

/// Maximum accepted query length, in characters.
pub const MAX_QUERY_CHARS: usize = 1000;

/// Run the full multi-expert analysis workflow for a query
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = AnalyzeResponse),
        (status = 422, description = "Invalid query"),
        (status = 500, description = "An analysis stage failed")
    ),
    tag = "analyze"
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    validate_query(&payload.query)?;

    let start = Instant::now();
    let results = state.workflow.run_full_workflow(&payload.query).await?;
    let duration = start.elapsed();

    Ok(Json(AnalyzeResponse {
        query: payload.query,
        results,
        duration_ms: duration.as_millis() as u64,
    }))
}

fn validate_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Query must not be empty".to_string(),
        ));
    }

    if query.chars().count() > MAX_QUERY_CHARS {
        return Err(AppError::InvalidInput(format!(
            "Query exceeds the {} character limit",
            MAX_QUERY_CHARS
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_rejected() {
        assert!(validate_query("").is_err());
        assert!(validate_query("   \n\t").is_err());
    }

    #[test]
    fn test_query_at_the_limit_is_accepted() {
        let query = "q".repeat(MAX_QUERY_CHARS);
        assert!(validate_query(&query).is_ok());
    }

    #[test]
    fn test_query_over_the_limit_is_rejected() {
        let query = "q".repeat(MAX_QUERY_CHARS + 1);
        let err = validate_query(&query).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // 1000 multibyte characters stay within the limit
        let query = "é".repeat(MAX_QUERY_CHARS);
        assert!(validate_query(&query).is_ok());
    }
}
