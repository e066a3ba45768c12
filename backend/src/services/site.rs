//! # Embedded Site
//!
//! Serves the pages in `backend/site` together with the wasm bundle trunk
//! writes to `frontend/dist`. `build.rs` merges both into `backend/static`,
//! which is compiled into the binary.

use crate::config::FrontendMode;
use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

const INDEX: &str = "index.html";

/// Finds the embedded file answering `path` (without its leading slash).
pub fn resolve(path: &str, mode: FrontendMode) -> Option<&'static File<'static>> {
    if path.is_empty() {
        return STATIC_DIR.get_file(INDEX);
    }
    if let Some(file) = STATIC_DIR.get_file(path) {
        return Some(file);
    }
    match mode {
        FrontendMode::Static => STATIC_DIR.get_file(format!("{}.html", path)),
        FrontendMode::Spa => STATIC_DIR.get_file(INDEX),
    }
}

/// Default service: every request no API scope claimed ends up here.
pub async fn serve_embedded(req: HttpRequest, mode: web::Data<FrontendMode>) -> HttpResponse {
    let path = req.path().trim_start_matches('/');

    match resolve(path, *mode.get_ref()) {
        Some(file) => {
            let mime = from_path(file.path()).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}
