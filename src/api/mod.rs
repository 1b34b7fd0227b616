//! HTTP API handlers and routes
//!
//! This module provides the REST API layer, built on the Axum web
//! framework.
//!
//! # API Endpoints
//!
//! ## Analysis (`/api/analyze`)
//! - `POST /api/analyze` - Run the full multi-expert analysis workflow
//!
//! ## Health (`/health`)
//! - `GET /health` - Health check endpoint
//!
//! # Request Tracking
//!
//! Every request is assigned a UUID, logged at start and completion, and
//! answered with an `x-request-id` response header.
//!
//! # OpenAPI Documentation
//!
//! When the `swagger-ui` feature is enabled, interactive API documentation
//! is available at `/swagger-ui/`.

/// Request and response handlers for each endpoint.
pub mod handlers;
/// Request-id tagging and logging middleware.
pub mod middleware;
/// Router configuration and route definitions.
pub mod routes;

use crate::types::{AnalyzeRequest, AnalyzeResponse, ExpertReply, HealthResponse, WorkflowResults};

/// OpenAPI document for the service.
#[derive(utoipa::OpenApi)]
#[openapi(
    paths(handlers::analyze::analyze, handlers::health::health),
    components(schemas(
        AnalyzeRequest,
        AnalyzeResponse,
        ExpertReply,
        HealthResponse,
        WorkflowResults
    )),
    tags(
        (name = "analyze", description = "Multi-expert analysis workflow"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
