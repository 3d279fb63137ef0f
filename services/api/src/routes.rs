use crate::infra::{deserialize_optional_date, AppState, Ticket, TicketSink};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chow_triage::error::AppError;
use chow_triage::workflows::chow::{
    CaseEvaluation, CaseSubmission, ChecklistStage, TriageEngine,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateCaseRequest {
    pub(crate) case: CaseSubmission,
    /// Override the evaluation date, mainly for reproducible requests.
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateTicketRequest {
    pub(crate) case: CaseSubmission,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    /// When set, ticket only the named checklist stage instead of the
    /// full document.
    #[serde(default)]
    pub(crate) stage: Option<ChecklistStage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateTicketResponse {
    pub(crate) ticket_id: String,
    pub(crate) title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) stage: Option<ChecklistStage>,
}

pub fn with_chow_routes<S>(sink: Arc<S>) -> Router
where
    S: TicketSink + 'static,
{
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/chow/evaluate", post(evaluate_endpoint))
        .route("/api/v1/chow/ticket", post(ticket_endpoint::<S>))
        .with_state(sink)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(std::sync::atomic::Ordering::Acquire) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "starting" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn evaluate(case: CaseSubmission, today: Option<NaiveDate>) -> Result<CaseEvaluation, AppError> {
    let input = case.into_input()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    Ok(TriageEngine::new().evaluate(&input, today))
}

pub(crate) async fn evaluate_endpoint(
    Json(request): Json<EvaluateCaseRequest>,
) -> Result<Json<CaseEvaluation>, AppError> {
    let evaluation = evaluate(request.case, request.today)?;
    tracing::info!(
        risk = evaluation.risk.level.label(),
        alerts = evaluation.alerts.len(),
        "case evaluated"
    );
    Ok(Json(evaluation))
}

pub(crate) async fn ticket_endpoint<S>(
    State(sink): State<Arc<S>>,
    Json(request): Json<CreateTicketRequest>,
) -> Response
where
    S: TicketSink + 'static,
{
    let stage = request.stage;
    let evaluation = match evaluate(request.case, request.today) {
        Ok(evaluation) => evaluation,
        Err(err) => return err.into_response(),
    };

    let (title, body) = match stage {
        None => (
            format!("CHOW triage ({})", evaluation.scenario),
            evaluation.full_document.clone(),
        ),
        Some(stage) => {
            let document = evaluation
                .stage_documents
                .iter()
                .find(|document| document.stage == stage);
            match document {
                Some(document) => (
                    format!("CHOW {} checklist", document.stage_label),
                    document.body.clone(),
                ),
                None => {
                    return (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "error": "requested checklist stage has no content" })),
                    )
                        .into_response()
                }
            }
        }
    };

    let receipt = match sink.create(Ticket {
        title: title.clone(),
        body,
    }) {
        Ok(receipt) => receipt,
        Err(err) => {
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    };

    tracing::info!(ticket_id = %receipt.ticket_id, "ticket created");

    (
        StatusCode::CREATED,
        Json(CreateTicketResponse {
            ticket_id: receipt.ticket_id,
            title,
            stage,
        }),
    )
        .into_response()
}
