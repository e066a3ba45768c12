pub mod api;
pub mod site;

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use common::model::problem::{Problem, PROBLEM_CONTENT_TYPE};

/// Builds an `application/problem+json` response whose status matches the body.
pub fn problem_response(problem: &Problem) -> HttpResponse {
    let status =
        StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match serde_json::to_string(problem) {
        Ok(body) => HttpResponse::build(status)
            .content_type(PROBLEM_CONTENT_TYPE)
            .body(body),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
