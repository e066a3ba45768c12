//! # API v1
//!
//! JSON endpoints mounted under `/api/v1`.
//!
//! ## Registered Routes:
//!
//! *   **`GET /replace-me`**:
//!     - **Handler**: `replace_me::process`
//!     - **Description**: Lists every `example` resource, optionally filtered by
//!       exact name with the `q` query parameter. This is the endpoint the
//!       frontend page populator reads.
//!
//! *   **`GET /coffee`**:
//!     - **Handler**: `coffee::process`
//!     - **Description**: Always answers `418 I'm a teapot` (HTCPCP, RFC 2324).
//!
//! ## Middleware
//!
//! Every response of the scope, including the ones produced by the middleware
//! itself, carries `Cache-Control: max-age=86400`. Requests with a query
//! parameter outside [`VALID_QUERY_PARAMS`] are rejected with a `400` problem
//! before any handler runs.

mod coffee;
mod query;
mod replace_me;

use actix_web::middleware::{from_fn, DefaultHeaders};
use actix_web::web::{get, scope, ServiceConfig};

/// The base path for all v1 endpoints.
pub const API_PATH: &str = "/api/v1";

/// Query parameters accepted anywhere under [`API_PATH`].
pub const VALID_QUERY_PARAMS: [&str; 1] = ["q"];

/// API resources change at most daily, so clients may cache them for 24 hours.
const CACHE_CONTROL: &str = "max-age=86400";

/// Registers the `/api/v1` scope with its middleware on `cfg`.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope(API_PATH)
            .route("/replace-me", get().to(replace_me::process))
            .route("/coffee", get().to(coffee::process))
            .wrap(from_fn(query::reject_invalid_params))
            .wrap(DefaultHeaders::new().add(("Cache-Control", CACHE_CONTROL))),
    );
}
