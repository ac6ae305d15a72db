use actix_web::{dev::Server, middleware, web, App, HttpServer};
use tracing::info;

use crate::{
    configuration::{AppState, State},
    controller::{guestbook, health},
    error::Error,
};

pub async fn server_task(app_state: &AppState<State>) -> Result<(), Error> {
    let app = app_state.clone();
    tokio::spawn(async move {
        let server = init_server(app)?;
        server.await?;
        Ok(())
    })
    .await?
}

fn init_server(app_state: AppState<State>) -> Result<Server, Error> {
    let host = app_state.config.server_host.to_owned();
    let port = app_state.config.port;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().limit(4096))
            .service(guestbook::index)
            .service(guestbook::create)
            .service(health::index)
    })
    .bind((host.as_str(), port))?
    .disable_signals()
    .run();

    info!("Server running on http://{}:{}", host, port);

    Ok(server)
}
