// 🌐 HTTP API - classification and grouping over JSON
//
// GET  /api/health
// GET  /api/categories
// GET  /api/categories/:code
// POST /api/classify
// POST /api/orders/group

use crate::catalog::Catalog;
use crate::classifier::{ClassifiableItem, ClassificationResult};
use crate::config::Config;
use crate::entities::{category_name, Category};
use crate::grouping::{group_classified, OrderLine};
use crate::hints::{classify_all_with_hints, classify_with_hints, HintSource, MegawinHintSource};
use crate::observer::TracingObserver;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub hints: Option<Arc<dyn HintSource>>,
    pub hint_timeout: Duration,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            hints: None,
            hint_timeout: Duration::from_millis(crate::config::DEFAULT_HINT_TIMEOUT_MS),
        }
    }

    pub fn with_hints(mut self, source: Arc<dyn HintSource>, timeout: Duration) -> Self {
        self.hints = Some(source);
        self.hint_timeout = timeout;
        self
    }

    /// Build state from configuration: catalog overrides and optional order API
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog = match &config.catalog_overrides {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::with_defaults(),
        };

        let mut state = AppState::new(catalog);

        if let Some(url) = &config.megawin_api_url {
            let source = MegawinHintSource::new(url.clone(), config.megawin_api_key.clone(), config.hint_timeout)?;
            info!(url = %url, timeout_ms = config.hint_timeout.as_millis() as u64, "product lookups enabled");
            state = state.with_hints(Arc::new(source), config.hint_timeout);
        }

        Ok(state)
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn err(status: StatusCode, message: String) -> Response {
        let body = Self {
            success: false,
            data: (),
            error: Some(message),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Serialize)]
struct CategoryResponse {
    code: &'static str,
    name: &'static str,
    priority: usize,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            code: category.code(),
            name: category.name(),
            priority: category.priority(),
        }
    }
}

#[derive(Serialize)]
struct CategoryNameResponse {
    code: String,
    name: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClassifyResponse {
    #[serde(flatten)]
    result: ClassificationResult,
    category_name: &'static str,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/categories - Taxonomy in render order
async fn list_categories() -> impl IntoResponse {
    let categories: Vec<CategoryResponse> = Category::ALL.into_iter().map(Into::into).collect();
    Json(ApiResponse::ok(categories))
}

/// GET /api/categories/:code - Display name, fallback name for unknown codes
async fn get_category_name(Path(code): Path<String>) -> impl IntoResponse {
    let name = category_name(&code);
    Json(ApiResponse::ok(CategoryNameResponse { code, name }))
}

/// POST /api/classify - Classify one item
async fn classify_item(
    State(state): State<AppState>,
    Json(item): Json<ClassifiableItem>,
) -> impl IntoResponse {
    let result = classify_with_hints(
        &state.catalog,
        &item,
        state.hints.as_deref(),
        state.hint_timeout,
        &TracingObserver,
    )
    .await;

    let category_name = result.category_name();
    Json(ApiResponse::ok(ClassifyResponse { result, category_name }))
}

/// POST /api/orders/group - Group order lines by category
async fn group_lines(
    State(state): State<AppState>,
    Json(lines): Json<Vec<OrderLine>>,
) -> Response {
    let items: Vec<ClassifiableItem> = lines.iter().map(OrderLine::to_item).collect();
    let results = classify_all_with_hints(
        &state.catalog,
        &items,
        state.hints.as_deref(),
        state.hint_timeout,
        &TracingObserver,
    )
    .await;

    match group_classified(&lines, results) {
        Ok(order) => (StatusCode::OK, Json(ApiResponse::ok(order))).into_response(),
        Err(e) => {
            warn!("Rejected order: {}", e);
            ApiResponse::err(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/categories", get(list_categories))
        .route("/categories/:code", get(get_category_name))
        .route("/classify", post(classify_item))
        .route("/orders/group", post(group_lines))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
