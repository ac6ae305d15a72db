use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use minijinja::Error as TemplateError;
use sqlx::error::Error as SqlError;
use std::{io::Error as IoError, num::ParseIntError};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::subscriber::SetGlobalDefaultError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    Int(#[from] ParseIntError),

    #[error("{0}")]
    Sql(#[from] SqlError),

    #[error("{0}")]
    TokioJoinError(#[from] JoinError),

    #[error("{0}")]
    Template(#[from] TemplateError),

    #[error("Tracing error: {0}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),

    #[error("Schema initialization failed: {0}")]
    SchemaInit(String),

    #[error("Name and message are required")]
    MissingFields,

    #[error("Error fetching messages")]
    FetchMessages(#[source] SqlError),

    #[error("Error saving message")]
    SaveMessage(#[source] SqlError),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingFields => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }
}
