use crate::services::problem_response;
use actix_web::{http::StatusCode, HttpResponse};
use common::model::problem::Problem;

const DETAILS: &str = "The packagename.com coffee pot was replaced with a tea kettle. \
This endpoint is maintained for compliance with the HTCPCP/1.0 standard as defined in \
RFC 2324.";

const RFC_2324: &str = "https://www.rfc-editor.org/rfc/rfc2324";

/// Handler for `GET /api/v1/coffee`.
pub async fn process() -> HttpResponse {
    let problem = Problem::new(StatusCode::IM_A_TEAPOT.as_u16(), DETAILS).with_see_also(RFC_2324);
    problem_response(&problem)
}
