//! CORS fairing and preflight

use clp_infrastructure::config::ServerConfig;
use rocket::http::Status;

use crate::common::{client_with, local_client, local_service};

#[rocket::async_test]
async fn test_cors_headers_on_responses() {
    let client = local_client().await;
    let response = client.get("/api/health").dispatch().await;

    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    assert!(
        response
            .headers()
            .get_one("Access-Control-Allow-Methods")
            .unwrap()
            .contains("POST")
    );
}

#[rocket::async_test]
async fn test_preflight_answers_no_content() {
    let client = local_client().await;
    let response = client.options("/api/explain-code").dispatch().await;

    assert_eq!(response.status(), Status::NoContent);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
}

#[rocket::async_test]
async fn test_cors_disabled() {
    let server = ServerConfig {
        cors_enabled: false,
        ..ServerConfig::default()
    };
    let client = client_with(local_service(), server).await;
    let response = client.get("/api/health").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert!(
        response
            .headers()
            .get_one("Access-Control-Allow-Origin")
            .is_none()
    );
}
