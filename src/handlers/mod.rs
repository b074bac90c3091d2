pub mod event;

use actix_web::{web, Either, HttpRequest};
use log::warn;

use crate::errors::MyError;

/// Request body sent either as JSON or as an urlencoded form.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

pub fn body_of<T>(body: JsonOrForm<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// Turns body extraction failures into the JSON error shape used everywhere else.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        warn!("rejected request body: {}", err);
        MyError::bad_request(format!("Invalid request body: {}", err)).into()
    })
}

pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req: &HttpRequest| {
        warn!("rejected form body: {}", err);
        MyError::bad_request(format!("Invalid request body: {}", err)).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(form_config())
        .service(web::scope("/api/events").configure(event::init_routes));
}
