pub mod config;
pub mod db;
pub mod handlers;
pub mod service;
pub mod models;
pub mod dto;
pub mod errors;

use actix_web::{HttpServer, App, web};
use config::Config;
use db::init_store;
use dotenv::dotenv;
use log::{error, info};
use service::log::{init_logger, LoggerMiddleware};

pub const MAX_ANNOUNCEMENT_LENGTH: usize = 500;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    init_logger();
    let config = Config::from_env().map_err(|e| {
        error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let store = web::Data::new(init_store());
    info!("Pickup Scheduler server running on http://{}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(LoggerMiddleware)
            .app_data(store.clone())
            .configure(handlers::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
