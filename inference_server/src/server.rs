use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use data_ingestion::raw_input::RawInput;
use log::{error, info};
use serde_json::{Map, Value, json};
use tokio::net::TcpListener;

use crate::engine::InferenceEngine;
use crate::error::InferenceError;
use crate::render::{PageContext, render_page};

/// Shared application state: the engine wraps the read-only model.
#[derive(Clone)]
pub struct AppState {
    engine: InferenceEngine,
}

/// GET / renders the empty form.
async fn home(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&PageContext {
        model_name: state.engine.model_name(),
        ..Default::default()
    }))
}

/// POST /predict renders the form again with a result or an error block.
async fn predict_form(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Html<String> {
    let input = RawInput::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let outcome = state.engine.run(&input);
    if let Err(e) = &outcome {
        error!("Prediction failed: {}", e);
    }
    let error = outcome.as_ref().err().map(ToString::to_string);

    Html(render_page(&PageContext {
        values: &pairs,
        result: outcome.as_ref().ok(),
        error: error.as_deref(),
        model_name: state.engine.model_name(),
    }))
}

/// POST /api/predict takes a JSON object of the same fields.
async fn predict_json(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<Response, ApiError> {
    let input = RawInput::from_json(&body);
    let prediction = state.engine.run(&input).map_err(|e| {
        error!("Prediction failed: {}", e);
        ApiError(e)
    })?;
    Ok(Json(prediction).into_response())
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "model": state.engine.model_name() }))
}

pub struct ApiError(InferenceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.0.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub fn router(engine: InferenceEngine) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/predict", post(predict_form))
        .route("/api/predict", post(predict_json))
        .route("/health", get(health))
        .with_state(AppState { engine })
}

pub struct Server {
    engine: InferenceEngine,
}

impl Server {
    pub fn init(engine: InferenceEngine) -> Self {
        Self { engine }
    }

    pub async fn run(&self, addr: SocketAddr) -> Result<()> {
        let listener = TcpListener::bind(addr).await?;
        info!("HTTP server running on {}", listener.local_addr()?);
        self.serve(listener).await
    }

    /// Serves on an already bound listener until Ctrl-C.
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        let app = router(self.engine.clone());
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, initiating graceful shutdown");
}
