mod config;
mod db;
mod services;
mod utils;

use crate::config::{AppConfig, INSTANCE_DIR};
use crate::db::Database;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Opens the configured database and prepares its schema, seeding it when
/// asked to.
fn open_database(config: &AppConfig, seed: bool) -> io::Result<Database> {
    let database = Database::connect(&config.db_uri, config.dev_mode).map_err(io::Error::other)?;
    if seed {
        database.seed().map_err(io::Error::other)?;
    } else {
        database.create_all(false).map_err(io::Error::other)?;
    }
    Ok(database)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::load(Path::new(INSTANCE_DIR)).map_err(io::Error::other)?;

    // `backend seed` seeds the configured database without serving it.
    if std::env::args().nth(1).as_deref() == Some("seed") {
        open_database(&config, true)?;
        return Ok(());
    }

    let database = open_database(&config, config.seed_db)?;
    let url = config.url();

    if config.dev_mode && config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Serving resources {:?}", db::resource_names());
    info!("Server running at {}", url);

    let frontend = config.frontend;
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(database.clone()))
            .app_data(web::Data::new(frontend))
            .configure(services::api::v1::configure_routes)
            .default_service(web::route().to(services::site::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
