//! `GET /api/health`

use std::sync::Arc;

use clp_infrastructure::config::ServerConfig;
use rocket::http::Status;

use crate::common::{BrokenService, client_with, json_body, local_client};

#[rocket::async_test]
async fn test_health_local_only() {
    let client = local_client().await;
    let response = client.get("/api/health").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    let json = json_body(response).await;
    assert_eq!(json["message"], "Code Learning Platform API is running!");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["remoteModel"], "disabled");
}

#[rocket::async_test]
async fn test_health_names_remote_provider() {
    let client = client_with(Arc::new(BrokenService), ServerConfig::default()).await;
    let json = json_body(client.get("/api/health").dispatch().await).await;
    assert_eq!(json["remoteModel"], "gemini");
}
