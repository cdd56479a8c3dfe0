//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into plain-text-in-HTML responses with
//! a status chosen by error code.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Message sent in place of any server-side failure detail.
pub const STORE_FAILURE_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::MalformedBody | ErrorCode::InvalidGeometry | ErrorCode::InvalidRequest => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::StoreFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_message(error: &Error) -> &str {
    if error.code().is_client_error() {
        error.message()
    } else {
        STORE_FAILURE_MESSAGE
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .content_type(ContentType::html())
            .body(client_message(self).to_owned())
    }
}

#[cfg(test)]
mod tests;
