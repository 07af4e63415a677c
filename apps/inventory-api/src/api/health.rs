//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Ready when MongoDB answers a ping and the image bucket is reachable
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = state.config.mongodb.database();
    let bucket = state.config.s3.bucket.as_str();

    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "mongodb",
            Box::pin(async {
                let status = check_health_detailed(&state.mongo_client, database).await;
                if status.healthy {
                    Ok(())
                } else {
                    Err(status.message.unwrap_or_default())
                }
            }),
        ),
        (
            "s3",
            Box::pin(async {
                storage::check_bucket(&state.s3_client, bucket)
                    .await
                    .map_err(|e| e.to_string())
            }),
        ),
    ];

    run_health_checks(checks).await
}
