//! Query string validation shared by every v1 endpoint.

use super::VALID_QUERY_PARAMS;
use crate::services::problem_response;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{web, Error};
use common::model::problem::Problem;
use log::warn;

/// Returns the query keys not listed in `VALID_QUERY_PARAMS`, each once, in
/// the order they first appear.
pub fn invalid_params(query_string: &str) -> Vec<String> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query_string)
        .map(web::Query::into_inner)
        .unwrap_or_default();

    let mut invalid: Vec<String> = Vec::new();
    for (key, _) in pairs {
        if !VALID_QUERY_PARAMS.contains(&key.as_str()) && !invalid.contains(&key) {
            invalid.push(key);
        }
    }
    invalid
}

/// Short-circuits with a `400` problem when the request carries unknown
/// query parameters; otherwise hands the request to the next service.
pub async fn reject_invalid_params<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    let invalid = invalid_params(req.query_string());
    if !invalid.is_empty() {
        warn!("Rejecting {} with invalid query parameters {:?}", req.path(), invalid);
        let problem =
            Problem::new(400, "Invalid query parameters.").with_invalid_parameters(invalid);
        return Ok(req.into_response(problem_response(&problem)).map_into_right_body());
    }

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_params() {
        assert!(invalid_params("").is_empty());
        assert!(invalid_params("q=Some%20Example").is_empty());
    }

    #[test]
    fn reports_unknown_keys_once_in_order() {
        assert_eq!(
            invalid_params("page=2&q=x&sort=name&page=3"),
            vec!["page".to_string(), "sort".to_string()]
        );
    }

    #[test]
    fn bare_keys_count_as_params() {
        assert_eq!(invalid_params("debug"), vec!["debug".to_string()]);
    }
}
