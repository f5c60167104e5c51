use axum::{extract::{DefaultBodyLimit, State}, http::StatusCode, routing::{get, post}, Json, Router};
use newsqa_core::{answer, Answer, Document, QaParams};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Engine parameters used for any field a request leaves out.
    pub params: QaParams,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { params: QaParams::default(), max_body_bytes: DEFAULT_MAX_BODY_BYTES }
    }
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub question: String,
    pub top_k: Option<i64>,
    pub chunk_size: Option<i64>,
    pub overlap: Option<i64>,
    pub min_score: Option<f64>,
}

impl AnswerRequest {
    /// Overlay the request's parameters on `defaults`, clamping degenerate values.
    pub fn params(&self, defaults: &QaParams) -> QaParams {
        let signed = |v: usize| i64::try_from(v).unwrap_or(i64::MAX);
        QaParams::from_signed(
            self.top_k.unwrap_or(signed(defaults.top_k)),
            self.chunk_size.unwrap_or(signed(defaults.chunk_size)),
            self.overlap.unwrap_or(signed(defaults.overlap)),
            self.min_score.unwrap_or(defaults.min_score),
        )
    }
}

#[derive(Serialize)]
pub struct AnswerResponse {
    #[serde(flatten)]
    pub answer: Answer,
    pub took_s: f64,
}

#[derive(Deserialize)]
pub struct ReportRequest {
    pub news_articles: Option<Vec<Document>>,
    pub question: Option<String>,
}

#[derive(Serialize)]
pub struct ReportResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa: Option<Answer>,
}

#[derive(Clone)]
pub struct AppState {
    pub params: QaParams,
}

pub fn build_app(config: ServerConfig) -> Router {
    let app_state = AppState { params: config.params };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/answer", post(answer_handler))
        .route("/report", post(report_handler))
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn answer_handler(
    State(state): State<AppState>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, (StatusCode, String)> {
    let start = std::time::Instant::now();
    let params = req.params(&state.params);
    let answer = run_engine(req.documents, req.question, params).await?;
    let took_s = start.elapsed().as_secs_f64();
    tracing::info!(citations = answer.citations.len(), took_s, "answered question");
    Ok(Json(AnswerResponse { answer, took_s }))
}

/// Report assembly: the engine runs only when a non-blank question is present.
pub async fn report_handler(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, (StatusCode, String)> {
    let articles = req.news_articles.unwrap_or_default();
    let question = req.question.filter(|q| !q.trim().is_empty());
    let Some(question) = question else {
        if articles.is_empty() {
            return Err((StatusCode::BAD_REQUEST, "Empty request: provide news_articles or question".into()));
        }
        return Ok(Json(ReportResponse { qa: None }));
    };
    let qa = run_engine(articles, question, state.params).await?;
    Ok(Json(ReportResponse { qa: Some(qa) }))
}

// The pipeline is CPU-bound; keep it off the async workers.
async fn run_engine(documents: Vec<Document>, question: String, params: QaParams) -> Result<Answer, (StatusCode, String)> {
    tokio::task::spawn_blocking(move || answer(&documents, &question, &params))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "answer task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "answer task failed".to_string())
        })
}
