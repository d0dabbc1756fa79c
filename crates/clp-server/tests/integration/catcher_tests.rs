//! JSON catchers

use rocket::http::Status;

use crate::common::{json_body, local_client, post_json};

#[rocket::async_test]
async fn test_unknown_route() {
    let client = local_client().await;
    let response = client.get("/api/nope").dispatch().await;

    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(json_body(response).await["message"], "Route not found");
}

#[rocket::async_test]
async fn test_malformed_json() {
    let client = local_client().await;
    let response = post_json(&client, "/api/explain-code", "{not json").await;

    assert!([Status::BadRequest, Status::UnprocessableEntity].contains(&response.status()));
    assert_eq!(json_body(response).await["message"], "Invalid request body");
}

#[rocket::async_test]
async fn test_wrong_field_type() {
    let client = local_client().await;
    let response = post_json(&client, "/api/explain-code", r#"{"code":42,"language":"c"}"#).await;

    assert!([Status::BadRequest, Status::UnprocessableEntity].contains(&response.status()));
    assert_eq!(json_body(response).await["message"], "Invalid request body");
}

#[test]
fn test_builder_requires_service() {
    let err = clp_server::ServerBuilder::new().build().unwrap_err();
    assert!(err.to_string().contains("explanation service"));
}
