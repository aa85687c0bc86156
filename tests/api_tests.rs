/// HTTP-level tests driving the full router in-process
/// Covers authentication, routing, error envelopes and every endpoint's response shape
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use zoominfo_mock_api::config::Config;
use zoominfo_mock_api::handlers::AppState;
use zoominfo_mock_api::router::build_router;
use zoominfo_mock_api::store::RecordStore;

fn app() -> Router {
    let store = RecordStore::builtin().expect("builtin catalog");
    build_router(AppState::new(store, Config::default()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        post(
            "/authenticate",
            None,
            json!({"username": "tester", "password": "pw"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["jwt"].as_str().unwrap().to_string()
}

#[cfg(test)]
mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_authenticate_returns_bearer_token() {
        let app = app();
        let (status, body) = send(
            &app,
            post(
                "/authenticate",
                None,
                json!({"username": "u", "clientId": "c", "privateKey": "k"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["expiresIn"], 3600);
        assert_eq!(body["tokenType"], "Bearer");
        assert!(body["jwt"].as_str().unwrap().split('.').count() == 3);
    }

    #[tokio::test]
    async fn test_authenticate_without_credentials() {
        let app = app();
        let (status, body) = send(&app, post("/authenticate", None, json!({"username": "u"}))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(body["errorCode"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let app = app();
        let (status, body) = send(&app, get("/user/usage", None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["errorCode"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_bad_token_is_token_expired() {
        let app = app();
        let (status, body) = send(&app, get("/user/usage", Some("garbage"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["errorCode"], "TOKEN_EXPIRED");
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_unauthorized() {
        let app = app();
        let request = Request::builder()
            .uri("/user/usage")
            .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["errorCode"], "UNAUTHORIZED");
    }
}

#[cfg(test)]
mod search_tests {
    use super::*;

    #[tokio::test]
    async fn test_company_search_by_name() {
        let app = app();
        let token = login(&app).await;
        let query = json!({"companyName": "Microsoft"});
        let (status, body) = send(&app, post("/search/company", Some(&token), query.clone())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["pagination"]["totalResults"], 1);
        assert_eq!(body["data"][0]["companyName"], "Microsoft Corporation");
        assert_eq!(body["query"], query);
        assert!(body.get("matchType").is_none());
    }

    #[tokio::test]
    async fn test_company_search_defaults_and_projection() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            post(
                "/search/company",
                Some(&token),
                json!({"pageSize": 3, "outputFields": ["companyName"]}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["pagination"],
            json!({
                "currentPage": 1,
                "pageSize": 3,
                "totalResults": 8,
                "totalPages": 3,
                "hasNextPage": true,
                "hasPreviousPage": false,
            })
        );
        assert_eq!(
            body["data"],
            json!([
                {"id": "400567890", "companyName": "Acme Corporation"},
                {"id": "100111222", "companyName": "Burger King Corporation"},
                {"id": "300333444", "companyName": "Company A"},
            ])
        );
    }

    #[tokio::test]
    async fn test_company_search_revenue_and_employees() {
        let app = app();
        let token = login(&app).await;
        let (_, body) = send(
            &app,
            post(
                "/search/company",
                Some(&token),
                json!({"revenueMin": 1000000000u64, "employeesMin": 5000, "pageSize": 50}),
            ),
        )
        .await;

        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 5);
        for company in data {
            assert!(company["revenue"].as_i64().unwrap() >= 1_000_000_000);
            assert!(company["employees"].as_i64().unwrap() >= 5000);
        }
    }

    #[tokio::test]
    async fn test_contact_search_sorted_desc() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            post(
                "/search/contact",
                Some(&token),
                json!({"managementLevel": "director", "sortOrder": "desc", "outputFields": ["fullName"]}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<_> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["fullName"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["Noah Nguyen", "Maria Lopez", "Evelyn Ross", "Ethan Garcia"]
        );
    }

    #[tokio::test]
    async fn test_search_page_past_end_is_empty_success() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            post("/search/contact", Some(&token), json!({"page": 9})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["pagination"]["hasPreviousPage"], true);
        assert_eq!(body["pagination"]["hasNextPage"], false);
    }

    #[tokio::test]
    async fn test_integral_float_bounds_are_accepted() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            post(
                "/search/company",
                Some(&token),
                json!({"revenueMin": 1e9, "employeesMin": 5000.0, "pageSize": 50.0}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["totalResults"], 5);
        assert_eq!(body["pagination"]["pageSize"], 50);
    }

    #[tokio::test]
    async fn test_invalid_page_size_is_bad_request() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            post("/search/company", Some(&token), json!({"pageSize": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorCode"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_wrongly_typed_field_is_bad_request() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            post("/search/company", Some(&token), json!({"revenueMin": "lots"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app();
        let token = login(&app).await;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/search/company")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errorCode"], "INVALID_REQUEST");
    }
}

#[cfg(test)]
mod enrich_tests {
    use super::*;

    #[tokio::test]
    async fn test_enrich_company_exact_name() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            post(
                "/enrich/company",
                Some(&token),
                json!({"companyName": "Salesforce Inc"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchType"], "full_match");
        assert_eq!(body["creditUsed"], true);
        assert_eq!(body["data"]["ticker"], "CRM");
    }

    #[tokio::test]
    async fn test_enrich_company_partial_name() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            post("/enrich/company", Some(&token), json!({"companyName": "micro"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchType"], "partial_match");
        assert_eq!(body["data"]["companyName"], "Microsoft Corporation");
    }

    #[tokio::test]
    async fn test_enrich_company_not_found() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            post(
                "/enrich/company",
                Some(&token),
                json!({"companyId": "does-not-exist"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Company not found",
                "errorCode": "COMPANY_NOT_FOUND",
                "matchType": "no_match",
            })
        );
    }

    #[tokio::test]
    async fn test_enrich_company_with_contacts() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            post(
                "/enrich/company",
                Some(&token),
                json!({
                    "companyId": "200222333",
                    "outputFields": ["companyName"],
                    "includeContacts": true,
                    "contactFields": ["jobTitle"],
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!({
                "id": "200222333",
                "companyName": "Walmart Inc",
                "contacts": [
                    {"id": "900222333", "jobTitle": "Senior Director, Supply Chain"},
                    {"id": "900222334", "jobTitle": "Head of Retail Analytics"},
                ],
            })
        );
    }

    #[tokio::test]
    async fn test_enrich_contact_by_email() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            post(
                "/enrich/contact",
                Some(&token),
                json!({"email": "James.Parker@burgerking.com", "outputFields": ["fullName", "companyId"]}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchType"], "full_match");
        assert_eq!(body["creditUsed"], true);
        assert_eq!(
            body["data"],
            json!({"id": "900111223", "fullName": "James Parker", "companyId": "100111222"})
        );
    }

    #[tokio::test]
    async fn test_enrich_contact_not_found() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(&app, post("/enrich/contact", Some(&token), json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorCode"], "CONTACT_NOT_FOUND");
        assert_eq!(body["matchType"], "no_match");
    }
}

#[cfg(test)]
mod bulk_and_lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_bulk_submit_then_poll_is_completed() {
        let app = app();
        let token = login(&app).await;
        let (status, submitted) = send(
            &app,
            post(
                "/search/company/bulk",
                Some(&token),
                json!({"jobName": "Q1 export", "searchCriteria": {"industry": "Retail"}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(submitted["status"], "processing");
        assert_eq!(submitted["jobName"], "Q1 export");
        assert_eq!(submitted["maxResults"], 10000);
        let job_id = submitted["jobId"].as_str().unwrap();
        assert!(job_id.starts_with("job_"));

        let (status, polled) = send(
            &app,
            get(&format!("/search/company/bulk/{}", job_id), Some(&token)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(polled["status"], "completed");
        assert_eq!(polled["jobId"], job_id);
        assert_eq!(polled["totalResults"], 8);
        assert_eq!(
            polled["downloadUrl"],
            format!("https://api.zoominfo.com/download/{}", job_id)
        );
    }

    #[tokio::test]
    async fn test_bulk_poll_accepts_any_job_id() {
        let app = app();
        let token = login(&app).await;
        let (status, polled) = send(&app, get("/search/company/bulk/never-submitted", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(polled["status"], "completed");
    }

    #[tokio::test]
    async fn test_lookup_catalogs() {
        let app = app();
        let token = login(&app).await;
        let cases = [
            ("/lookup/search/company", "searchFields", 17),
            ("/lookup/search/contact", "searchFields", 12),
            ("/lookup/enrich/company", "outputFields", 29),
            ("/lookup/enrich/contact", "outputFields", 21),
        ];
        for (uri, key, expected) in cases {
            let (status, body) = send(&app, get(uri, Some(&token))).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body[key].as_array().unwrap().len(), expected, "{}", uri);
        }

        let (_, body) = send(&app, get("/lookup/search/company", Some(&token))).await;
        assert_eq!(
            body["searchFields"][16],
            json!({"field": "technologies", "type": "array", "description": "Technologies used"})
        );
    }

    #[tokio::test]
    async fn test_usage_snapshot() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(&app, get("/user/usage", Some(&token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["usage"]["creditsUsed"], 1250);
        assert_eq!(body["usage"]["creditsTotal"], 10000);
        assert_eq!(body["usage"]["currentPeriodEnd"], "2025-01-31T23:59:59Z");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found_without_auth() {
        let app = app();
        let (status, body) = send(&app, get("/no/such/route", None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorCode"], "NOT_FOUND");
        assert_eq!(body["error"], "Endpoint not found");
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let app = app();
        let (status, body) = send(&app, get("/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["companies"], 8);
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let app = app();
        let payload = "x".repeat(2 * 1024 * 1024);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/authenticate")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, payload.len())
            .body(Body::from(payload))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_cors_headers_present() {
        let app = app();
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
