//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::scoring::{self, Strategy};
use crate::store::SupabaseClient;

use super::types::*;

/// Number of suggestions returned by the suggest endpoint.
const SUGGESTION_LIMIT: usize = 3;

/// Shared application state.
pub struct AppState {
    /// Task store client, initialized once and reused across requests
    pub store: SupabaseClient,
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = SupabaseClient::from_config(&config);

    let state = Arc::new(AppState { store });

    let app = Router::new()
        .route("/analyze-tasks/", post(analyze_tasks))
        .route("/suggest-tasks/", get(suggest_tasks))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for SIGTERM/SIGINT.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install signal handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// Score and rank a submitted task list.
async fn analyze_tasks(
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let tasks = req.tasks.unwrap_or_default();
    if tasks.is_empty() {
        return Err(bad_request("Tasks list is required"));
    }

    let strategy = Strategy::parse(req.strategy.as_deref().unwrap_or("smart_balance"));
    let today = chrono::Local::now().date_naive();

    let ranked = scoring::rank_tasks(&tasks, strategy, today);

    tracing::debug!(
        "Analyzed {} tasks with {} strategy",
        ranked.len(),
        strategy.as_str()
    );

    Ok(Json(AnalyzeResponse {
        tasks: ranked,
        strategy: strategy.as_str().to_string(),
    }))
}

/// Top suggestions over the stored tasks.
async fn suggest_tasks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SuggestResponse>, (StatusCode, Json<ErrorResponse>)> {
    let tasks = state.store.list_tasks().await.map_err(|e| {
        tracing::error!("Task store unavailable: {}", e);
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: format!("Task store unavailable: {}", e),
            }),
        )
    })?;

    let today = chrono::Local::now().date_naive();
    Ok(Json(build_suggestions(&tasks, today)))
}

/// Rank the stored tasks under the default strategy and keep the top 3.
fn build_suggestions(tasks: &[scoring::RawTask], today: chrono::NaiveDate) -> SuggestResponse {
    if tasks.is_empty() {
        return SuggestResponse::no_tasks();
    }

    let mut ranked = scoring::rank_tasks(tasks, Strategy::SmartBalance, today);
    ranked.truncate(SUGGESTION_LIMIT);

    SuggestResponse::Ranked {
        suggestions: ranked,
        total_tasks: tasks.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::RawTask;

    fn test_today() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_rejects_empty_task_list() {
        let result = analyze_tasks(Json(AnalyzeRequest {
            tasks: Some(vec![]),
            strategy: None,
        }))
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Tasks list is required");
    }

    #[tokio::test]
    async fn test_analyze_rejects_null_task_list() {
        let result = analyze_tasks(Json(AnalyzeRequest {
            tasks: None,
            strategy: None,
        }))
        .await;

        let (status, Json(body)) = result.err().unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Tasks list is required");
    }

    #[test]
    fn test_build_suggestions_truncates_to_top_three() {
        let batch: Vec<RawTask> = (1..=5)
            .map(|i| RawTask {
                id: Some(format!("t{}", i)),
                importance: Some(i as f64 * 2.0),
                ..Default::default()
            })
            .collect();

        match build_suggestions(&batch, test_today()) {
            SuggestResponse::Ranked {
                suggestions,
                total_tasks,
            } => {
                assert_eq!(suggestions.len(), SUGGESTION_LIMIT);
                assert_eq!(total_tasks, 5);
                // Highest importance first
                assert_eq!(suggestions[0].task.id, "t5");
                assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));
            }
            SuggestResponse::Empty { .. } => panic!("expected ranked suggestions"),
        }
    }

    #[test]
    fn test_build_suggestions_keeps_short_batches_whole() {
        let batch = vec![RawTask::default(), RawTask::default()];

        match build_suggestions(&batch, test_today()) {
            SuggestResponse::Ranked {
                suggestions,
                total_tasks,
            } => {
                assert_eq!(suggestions.len(), 2);
                assert_eq!(total_tasks, 2);
            }
            SuggestResponse::Empty { .. } => panic!("expected ranked suggestions"),
        }
    }

    #[test]
    fn test_build_suggestions_empty_store() {
        let json = serde_json::to_value(build_suggestions(&[], test_today())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"suggestions": [], "message": "No tasks found"})
        );
    }

    #[tokio::test]
    async fn test_analyze_ranks_and_echoes_resolved_strategy() {
        let tasks = vec![
            RawTask {
                id: Some("low".to_string()),
                importance: Some(1.0),
                estimated_hours: Some(20.0),
                due_date: Some("2099-12-31".to_string()),
                ..Default::default()
            },
            RawTask {
                id: Some("high".to_string()),
                importance: Some(10.0),
                estimated_hours: Some(1.0),
                ..Default::default()
            },
        ];

        let Json(resp) = analyze_tasks(Json(AnalyzeRequest {
            tasks: Some(tasks),
            strategy: Some("not_a_strategy".to_string()),
        }))
        .await
        .unwrap();

        // Unrecognized strategy falls back to the default
        assert_eq!(resp.strategy, "smart_balance");
        assert_eq!(resp.tasks.len(), 2);
        assert_eq!(resp.tasks[0].task.id, "high");
        assert!(resp.tasks[0].score >= resp.tasks[1].score);
    }

    #[tokio::test]
    async fn test_analyze_defaults_strategy_to_smart_balance() {
        let Json(resp) = analyze_tasks(Json(AnalyzeRequest {
            tasks: Some(vec![RawTask::default()]),
            strategy: None,
        }))
        .await
        .unwrap();

        assert_eq!(resp.strategy, "smart_balance");
        assert_eq!(
            resp.tasks[0].explanation,
            "Score computed with smart_balance strategy."
        );
    }
}
