//! JSON error catchers
//!
//! Replace Rocket's HTML error pages so every response body is JSON.

use rocket::serde::json::Json;
use rocket::{Catcher, Request, catch, catchers};

use crate::constants::{MESSAGE_INTERNAL_ERROR, MESSAGE_INVALID_BODY, MESSAGE_ROUTE_NOT_FOUND};
use crate::models::ErrorResponse;

#[catch(404)]
fn not_found(_request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::message(MESSAGE_ROUTE_NOT_FOUND))
}

#[catch(400)]
fn bad_request(_request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::message(MESSAGE_INVALID_BODY))
}

#[catch(422)]
fn unprocessable(_request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::message(MESSAGE_INVALID_BODY))
}

#[catch(500)]
fn internal_error(_request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::message(MESSAGE_INTERNAL_ERROR))
}

/// All catchers, for registration at `/`
pub fn json_catchers() -> Vec<Catcher> {
    catchers![not_found, bad_request, unprocessable, internal_error]
}
