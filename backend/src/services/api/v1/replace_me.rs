//! # Example Listing Service
//!
//! Backend for `GET /api/v1/replace-me`, the endpoint read by the frontend
//! page populator.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` reads the optional `q` query parameter. When
//!     `q` is repeated the first value wins. Unknown parameters never get
//!     here; the scope middleware rejects them.
//! 2.  **Database Query**: the listing runs on the blocking pool through
//!     `tokio::task::spawn_blocking`, since `rusqlite` blocks.
//! 3.  **HTTP Response**: `200 OK` with a JSON array of `ExampleResource`
//!     (empty when nothing matches), or `503 Service Unavailable` with a
//!     problem body when the database cannot be read.

use crate::db::Database;
use crate::services::problem_response;
use actix_web::{web, HttpResponse};
use common::model::problem::Problem;
use log::error;

/// First value of `q`, the exact `name` to filter on.
fn name_filter(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value)
}

/// Handler for `GET /api/v1/replace-me`.
pub async fn process(
    query: web::Query<Vec<(String, String)>>,
    db: web::Data<Database>,
) -> HttpResponse {
    let name = name_filter(query.into_inner());
    let db = db.get_ref().clone();

    match tokio::task::spawn_blocking(move || db.examples(name.as_deref())).await {
        Ok(Ok(examples)) => HttpResponse::Ok().json(examples),
        Ok(Err(e)) => {
            error!("Error listing examples: {}", e);
            problem_response(&Problem::new(503, "The example resources are unavailable."))
        }
        Err(e) => {
            error!("Example listing task failed: {}", e);
            problem_response(&Problem::new(503, "The example resources are unavailable."))
        }
    }
}
