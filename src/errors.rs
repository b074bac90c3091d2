use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::{Display, Error};
use serde::Serialize;

#[derive(Debug, Display, Error, PartialEq)]
pub enum MyError {
    #[display(fmt = "{}", _0)]
    BadClientData(#[error(ignore)] String),

    #[display(fmt = "{}", _0)]
    NotFound(#[error(ignore)] String),

    #[display(fmt = "{}", _0)]
    Forbidden(#[error(ignore)] String),
}

impl MyError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        MyError::BadClientData(msg.into())
    }

    pub fn event_not_found() -> Self {
        MyError::NotFound("Event not found".to_string())
    }

    pub fn not_organizer() -> Self {
        MyError::Forbidden("Unauthorized: Only the organizer can edit announcements".to_string())
    }
}

/// Body of every error response: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl error::ResponseError for MyError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(ErrorBody {
                error: self.to_string(),
            })
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            MyError::BadClientData(_) => StatusCode::BAD_REQUEST,
            MyError::NotFound(_) => StatusCode::NOT_FOUND,
            MyError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}
