use actix_web::{
    get,
    http::header::{self, ContentType},
    post, web, Either, HttpResponse, Responder,
};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
};

/// Listing cap: only this many of the newest messages are shown.
const LISTING_LIMIT: i64 = 50;

#[get("/")]
pub async fn index(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let messages = state
        .database
        .message
        .get_recent(LISTING_LIMIT)
        .await
        .map_err(Error::FetchMessages)?;

    let body = state.views.render_index(&messages)?;

    Ok(HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(body))
}

#[post("/message")]
pub async fn create(
    state: web::Data<AppState<State>>,
    payload: Either<web::Form<NewMessage>, web::Json<NewMessage>>,
) -> Result<HttpResponse, Error> {
    let payload = match payload {
        Either::Left(form) => form.into_inner(),
        Either::Right(json) => json.into_inner(),
    };

    let (name, message) = validate(payload)?;

    state
        .database
        .message
        .insert(name, message)
        .await
        .map_err(Error::SaveMessage)?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish())
}

#[derive(Debug, Deserialize)]
pub struct NewMessage {
    pub name: Option<String>,
    pub message: Option<String>,
}

fn validate(payload: NewMessage) -> Result<(String, String), Error> {
    let name = payload.name.filter(|value| !value.is_empty());
    let message = payload.message.filter(|value| !value.is_empty());

    match (name, message) {
        (Some(name), Some(message)) => Ok((name, message)),
        _ => Err(Error::MissingFields),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    fn payload(name: Option<&str>, message: Option<&str>) -> NewMessage {
        NewMessage {
            name: name.map(str::to_owned),
            message: message.map(str::to_owned),
        }
    }

    #[test]
    fn listing_is_capped_at_fifty() {
        assert_eq!(LISTING_LIMIT, 50);
    }

    #[test]
    fn accepts_non_empty_fields() {
        let (name, message) =
            validate(payload(Some("Alice"), Some("hi there"))).unwrap();
        assert_eq!(name, "Alice");
        assert_eq!(message, "hi there");
    }

    #[test]
    fn rejects_missing_or_empty_fields() {
        for bad in [
            payload(None, Some("hi")),
            payload(Some("Alice"), None),
            payload(Some(""), Some("hi")),
            payload(Some("Alice"), Some("")),
            payload(None, None),
        ] {
            let err = validate(bad).unwrap_err();
            assert!(matches!(err, Error::MissingFields));
            assert_eq!(
                actix_web::ResponseError::status_code(&err),
                StatusCode::BAD_REQUEST
            );
        }
    }
}
