//! Table layout, validation and submission routes.

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tabula_core::batch::Batch;
use tabula_core::engine::{Evaluation, Status};
use tabula_core::layout::{TableLayout, TableSkeleton};
use tabula_core::validation::{IssueKind, ValidationIssue};
use tabula_shared::EngineConfig;
use tabula_shared::types::TableId;
use tracing::info;

use crate::AppState;
use crate::error::ApiError;

/// Creates the table routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tables/layout", get(get_layout))
        .route("/tables/validate", post(validate_tables))
        .route("/tables/submit", post(submit_tables))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Number of tables and rows the client currently shows.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LayoutParams {
    /// Number of tables, at least one.
    #[serde(default = "one")]
    pub tables: u32,
    /// Number of rows per table, at least one.
    #[serde(default = "one")]
    pub rows: u32,
}

const fn one() -> u32 {
    1
}

impl LayoutParams {
    fn to_layout(self, config: &EngineConfig) -> Result<TableLayout, ApiError> {
        let layout = TableLayout::new(self.tables, self.rows)?;
        layout.check_limits(config.max_tables, config.max_rows)?;
        Ok(layout)
    }
}

/// Request body for validation and submission.
#[derive(Debug, Deserialize)]
pub struct TablesRequest {
    /// Tables and rows to consider.
    pub layout: LayoutParams,
    /// Cells keyed by `table_<i>`, `row_<j>` and column label.
    pub tables: Batch,
}

/// Response for the layout endpoint.
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    /// Year of `row_1`.
    pub current_year: i32,
    /// Grid to draw.
    pub tables: Vec<TableSkeleton>,
}

/// A rule violation as shown to the user.
#[derive(Debug, Serialize)]
pub struct IssueResponse {
    /// Offending table.
    pub table_id: TableId,
    /// Violated rule.
    pub kind: IssueKind,
    /// Human-readable message.
    pub message: &'static str,
}

impl From<&ValidationIssue> for IssueResponse {
    fn from(issue: &ValidationIssue) -> Self {
        Self {
            table_id: issue.table_id,
            kind: issue.kind,
            message: issue.kind.message(),
        }
    }
}

/// Response for the validation endpoint.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    /// Overall verdict.
    pub status: Status,
    /// Every violation found.
    pub errors: Vec<IssueResponse>,
}

/// Response for the submission endpoint.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// Overall verdict.
    pub status: Status,
    /// `Valid` or `Invalid`.
    pub message: &'static str,
    /// Submitted cells with the computed columns filled in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<Batch>,
    /// Every violation found.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<IssueResponse>,
}

// ============================================================================
// Handlers
// ============================================================================

fn current_year() -> i32 {
    Utc::now().year()
}

fn issue_responses(issues: &[ValidationIssue]) -> Vec<IssueResponse> {
    issues.iter().map(IssueResponse::from).collect()
}

/// GET `/tables/layout` - Describes an empty grid for the current year.
async fn get_layout(
    State(state): State<AppState>,
    params: Result<Query<LayoutParams>, QueryRejection>,
) -> Result<Json<LayoutResponse>, ApiError> {
    let Query(params) = params?;
    let layout = params.to_layout(&state.config)?;
    let current_year = current_year();

    Ok(Json(LayoutResponse {
        current_year,
        tables: layout.skeleton(current_year, None),
    }))
}

/// POST `/tables/validate` - Checks the rules without computing figures.
async fn validate_tables(
    State(state): State<AppState>,
    payload: Result<Json<TablesRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let Json(request) = payload?;
    let layout = request.layout.to_layout(&state.config)?;

    let issues = state.engine.validate(&request.tables, &layout);
    let status = if issues.is_empty() {
        Status::Valid
    } else {
        Status::Invalid
    };
    info!(%status, issues = issues.len(), "Tables validated");

    Ok(Json(ValidateResponse {
        status,
        errors: issue_responses(&issues),
    }))
}

/// POST `/tables/submit` - Validates and, if every rule holds, computes the figures.
async fn submit_tables(
    State(state): State<AppState>,
    payload: Result<Json<TablesRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;
    let layout = request.layout.to_layout(&state.config)?;

    let evaluation = state.engine.evaluate(&request.tables, &layout);
    let status = evaluation.status();
    info!(%status, issues = evaluation.issues().len(), "Tables submitted");

    let response = match evaluation {
        Evaluation::Valid { data } => {
            let mut tables = request.tables;
            data.merge_into(&mut tables);
            (
                StatusCode::OK,
                Json(SubmitResponse {
                    status,
                    message: status.message(),
                    tables: Some(tables),
                    errors: Vec::new(),
                }),
            )
        }
        Evaluation::Invalid { issues } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(SubmitResponse {
                status,
                message: status.message(),
                tables: None,
                errors: issue_responses(&issues),
            }),
        ),
    };
    Ok(response.into_response())
}
