use actix_web::{get, web, Responder};
use serde::Serialize;

use crate::error::Error;

/// Liveness probe. Deliberately does not touch the store.
#[get("/health")]
pub async fn index() -> Result<impl Responder, Error> {
    Ok(web::Json(Response { status: "healthy" }))
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn health_returns_fixed_payload_without_a_store() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "status": "healthy" }));
    }
}
