use tracing::{error, Level};

use guestbook::{
    configuration::{get_configuration, AppState, Config, State},
    error::Error,
    handler::schema_init,
    provider::DatabasePool,
    server,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let (config, database) = init().await?;

    let state = State::new(config, database)?;
    let app_state = AppState::new(state);

    let (_, _) = tokio::try_join!(
        schema_init::schema_init_task(app_state.clone()),
        server::server_task(&app_state),
    )?;

    Ok(())
}

async fn init() -> Result<(Config, DatabasePool), Error> {
    let config = get_configuration()?;
    let database = DatabasePool::new(&config).await?;
    Ok((config, database))
}
