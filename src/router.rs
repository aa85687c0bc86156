//! Router construction.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::auth::require_bearer;
use crate::handlers::{self, AppState};

/// Request bodies are small JSON documents; 1 MiB is generous.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Routes that require a bearer token
    let protected = Router::new()
        .route("/search/company", post(handlers::search_companies))
        .route("/search/contact", post(handlers::search_contacts))
        .route("/enrich/company", post(handlers::enrich_company))
        .route("/enrich/contact", post(handlers::enrich_contact))
        .route("/search/company/bulk", post(handlers::submit_bulk_search))
        .route("/search/company/bulk/:job_id", get(handlers::bulk_job_status))
        .route("/lookup/search/company", get(handlers::company_search_fields))
        .route("/lookup/search/contact", get(handlers::contact_search_fields))
        .route("/lookup/enrich/company", get(handlers::company_output_fields))
        .route("/lookup/enrich/contact", get(handlers::contact_output_fields))
        .route("/user/usage", get(handlers::usage))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    // Public routes
    let public = Router::new()
        .route("/health", get(handlers::health))
        .route("/authenticate", post(handlers::authenticate))
        .route("/docs", get(handlers::serve_swagger_ui))
        .route("/api-docs/openapi.yml", get(handlers::serve_openapi_spec));

    public
        .merge(protected)
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
                .layer(CorsLayer::permissive()),
        )
}
