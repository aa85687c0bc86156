use crate::auth::{self, Claims};
use crate::bulk;
use crate::catalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::filters::Criteria;
use crate::models::*;
use crate::query::{self, SearchOptions};
use crate::store::RecordStore;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared application state injected into handlers.
pub struct AppState {
    /// Read-only company and contact catalog.
    pub store: RecordStore,
    /// Application configuration.
    pub config: Config,
}

impl AppState {
    pub fn new(store: RecordStore, config: Config) -> Arc<Self> {
        Arc::new(Self { store, config })
    }
}

/// Parses a JSON body into `T`, keeping the raw value for echoing back.
fn parse_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(T, Value), AppError> {
    let Json(body) = payload?;
    let parsed = T::deserialize(&body)?;
    Ok((parsed, body))
}

/// Health check endpoint.
///
/// Returns the service status, version, and catalog sizes.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "zoominfo-mock-api",
            "version": env!("CARGO_PKG_VERSION"),
            "companies": state.store.companies().len(),
            "contacts": state.store.contacts().len(),
        })),
    )
}

/// POST /authenticate
///
/// Issues a bearer token for any complete credential set.
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let (request, _) = parse_body::<AuthRequest>(payload)?;
    tracing::info!(
        "POST /authenticate - username: {:?}",
        request.username.as_deref().unwrap_or("<none>")
    );

    let response = auth::issue_token(&state.config, &request, auth::unix_now())?;
    Ok(Json(response))
}

fn run_search<C>(
    claims: &Claims,
    records: &[C::Record],
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError>
where
    C: Criteria + DeserializeOwned + std::fmt::Debug,
{
    let (request, body) = parse_body::<SearchRequest<C>>(payload)?;
    let options = SearchOptions::resolve::<C>(&request.params)?;

    let result = query::search(records, &request.criteria, &options);
    tracing::info!(
        "Search for {} matched {} record(s), returning page {} of {} - criteria: {:?}",
        claims.username,
        result.pagination.total_results,
        result.pagination.current_page,
        result.pagination.total_pages,
        request.criteria
    );

    Ok(Json(SearchResponse {
        success: true,
        data: result.data,
        pagination: result.pagination,
        query: body,
    }))
}

/// POST /search/company
pub async fn search_companies(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    run_search::<CompanyCriteria>(&claims, state.store.companies(), payload)
}

/// POST /search/contact
pub async fn search_contacts(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    run_search::<ContactCriteria>(&claims, state.store.contacts(), payload)
}

/// POST /enrich/company
///
/// Resolves one company by id, name or website and returns its detail view,
/// optionally with the company's contacts attached.
pub async fn enrich_company(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EnrichResponse>, AppError> {
    let (request, _) = parse_body::<CompanyEnrichRequest>(payload)?;
    tracing::info!(
        "POST /enrich/company ({}) - id: {:?}, name: {:?}, website: {:?}",
        claims.username,
        request.company_id,
        request.company_name,
        request.website
    );

    let enriched = query::enrich_company(&state.store, &request)?;
    tracing::info!("Company enriched ({:?})", enriched.match_type);

    Ok(Json(EnrichResponse {
        success: true,
        data: enriched.data,
        match_type: enriched.match_type,
        credit_used: true,
    }))
}

/// POST /enrich/contact
pub async fn enrich_contact(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EnrichResponse>, AppError> {
    let (request, _) = parse_body::<ContactEnrichRequest>(payload)?;
    tracing::info!(
        "POST /enrich/contact ({}) - id: {:?}, email: {:?}",
        claims.username,
        request.contact_id,
        request.email
    );

    let enriched = query::enrich_contact(&state.store, &request)?;

    Ok(Json(EnrichResponse {
        success: true,
        data: enriched.data,
        match_type: enriched.match_type,
        credit_used: true,
    }))
}

/// POST /search/company/bulk
pub async fn submit_bulk_search(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BulkJobSubmitted>, AppError> {
    let (request, _) = parse_body::<BulkSearchRequest>(payload)?;
    let submitted = bulk::submit(&state.config, &request, chrono::Utc::now())?;
    tracing::info!(
        "Bulk job {} submitted by {} ({})",
        submitted.job_id,
        claims.username,
        submitted.job_name
    );
    Ok(Json(submitted))
}

/// GET /search/company/bulk/:jobId
pub async fn bulk_job_status(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> Json<BulkJobStatus> {
    tracing::info!("GET /search/company/bulk/{}", job_id);
    let total = state.store.companies().len() as u64;
    Json(bulk::status(&state.config, &job_id, total, chrono::Utc::now()))
}

/// GET /lookup/search/company
pub async fn company_search_fields() -> Json<SearchFieldsResponse> {
    Json(SearchFieldsResponse {
        success: true,
        search_fields: catalog::COMPANY_SEARCH_FIELDS,
    })
}

/// GET /lookup/search/contact
pub async fn contact_search_fields() -> Json<SearchFieldsResponse> {
    Json(SearchFieldsResponse {
        success: true,
        search_fields: catalog::CONTACT_SEARCH_FIELDS,
    })
}

/// GET /lookup/enrich/company
pub async fn company_output_fields() -> Json<OutputFieldsResponse> {
    Json(OutputFieldsResponse {
        success: true,
        output_fields: catalog::COMPANY_OUTPUT_FIELDS,
    })
}

/// GET /lookup/enrich/contact
pub async fn contact_output_fields() -> Json<OutputFieldsResponse> {
    Json(OutputFieldsResponse {
        success: true,
        output_fields: catalog::CONTACT_OUTPUT_FIELDS,
    })
}

/// GET /user/usage
pub async fn usage() -> Json<UsageResponse> {
    Json(UsageResponse {
        success: true,
        usage: catalog::usage_snapshot(),
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Serves the OpenAPI specification YAML file.
///
/// Reads `openapi.yml` from the working directory; a missing file yields 404.
pub async fn serve_openapi_spec() -> impl IntoResponse {
    match tokio::fs::read_to_string("openapi.yml").await {
        Ok(content) => (
            StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "text/yaml")],
            content,
        )
            .into_response(),
        Err(_) => AppError::RouteNotFound.into_response(),
    }
}

/// Serves the Swagger UI HTML page pointed at `/api-docs/openapi.yml`.
pub async fn serve_swagger_ui() -> impl IntoResponse {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ZoomInfo Mock API - Swagger UI</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        body { margin: 0; padding: 0; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/api-docs/openapi.yml",
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>
"#;
    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}
