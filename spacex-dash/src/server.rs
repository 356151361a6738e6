use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use spacex_dash_ui::js_bridge;
use spacex_launch::callbacks::{ControlState, Dependency, InputValue};
use spacex_launch::{CallbackError, Dashboard, Figure, Layout, PropId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Dashboard>,
    page: Arc<str>,
    scripts: Arc<str>,
}

impl AppState {
    /// Renders the page and bundles the scripts once; both are immutable
    /// for the lifetime of the process.
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        let page = spacex_dash_ui::render_page(
            dashboard.layout(),
            &dashboard.registry().dependencies(),
        );
        Self {
            dashboard,
            page: page.into(),
            scripts: js_bridge::chart_scripts().into(),
        }
    }
}

/// Body of `POST /_dash-update-component`.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateRequest {
    pub output: PropId,
    #[serde(default)]
    pub inputs: Vec<InputValue>,
}

/// Body of `POST /_dash-control-change`.
///
/// `inputs` carries the current value of every control. Without `changed`
/// every output is computed, as on page load; with it only the outputs
/// subscribed to that input are.
#[derive(Debug, Deserialize, Serialize)]
pub struct ChangeRequest {
    #[serde(default)]
    pub changed: Option<PropId>,
    #[serde(default)]
    pub inputs: Vec<InputValue>,
}

/// `{"response": {"<id>": {"<property>": <figure>}}}`
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub response: HashMap<String, HashMap<String, Figure>>,
}

impl UpdateResponse {
    fn single(output: PropId, figure: Figure) -> Self {
        let mut props = HashMap::new();
        props.insert(output.property, figure);
        let mut response = HashMap::new();
        response.insert(output.id, props);
        Self { response }
    }

    fn from_figures(figures: Vec<(PropId, Figure)>) -> Self {
        let mut response: HashMap<String, HashMap<String, Figure>> = HashMap::new();
        for (output, figure) in figures {
            response
                .entry(output.id)
                .or_default()
                .insert(output.property, figure);
        }
        Self { response }
    }
}

pub struct ApiError(CallbackError);

impl From<CallbackError> for ApiError {
    fn from(err: CallbackError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CallbackError::UnknownOutput(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };
        warn!("update rejected ({status}): {}", self.0);
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

pub fn build_router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(healthz_handler))
        .route("/_dash-layout", get(layout_handler))
        .route("/_dash-dependencies", get(dependencies_handler))
        .route(js_bridge::UPDATE_PATH, post(update_component_handler))
        .route(js_bridge::CHANGE_PATH, post(control_change_handler))
        .route(js_bridge::SCRIPT_PATH, get(scripts_handler))
        .with_state(AppState::new(dashboard))
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

async fn healthz_handler() -> &'static str {
    "ok"
}

async fn layout_handler(State(state): State<AppState>) -> Json<Layout> {
    Json(state.dashboard.layout().clone())
}

async fn dependencies_handler(State(state): State<AppState>) -> Json<Vec<Dependency>> {
    Json(state.dashboard.registry().dependencies())
}

async fn scripts_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        state.scripts.to_string(),
    )
}

async fn update_component_handler(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let figure = state.dashboard.invoke(&request.output, &request.inputs)?;
    log::debug!("updated {}", request.output);
    Ok(Json(UpdateResponse::single(request.output, figure)))
}

async fn control_change_handler(
    State(state): State<AppState>,
    Json(request): Json<ChangeRequest>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let mut controls = ControlState::from_inputs(&request.inputs);
    let figures = match request.changed {
        Some(changed) => {
            let value = controls
                .get(&changed)
                .cloned()
                .ok_or_else(|| CallbackError::MissingInput(changed.to_string()))?;
            log::debug!("{changed} changed");
            state.dashboard.apply_change(&mut controls, changed, value)?
        }
        None => state.dashboard.render_all(&controls)?,
    };
    Ok(Json(UpdateResponse::from_figures(figures)))
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, dashboard: Arc<Dashboard>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;
    info!("Dash is running on http://{addr}/");
    axum::serve(listener, build_router(dashboard))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
