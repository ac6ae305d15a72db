use crate::{
    configuration::Config,
    dao::{PoolOption, PoolType},
    error::Error,
    model::{Message, Table},
};

#[derive(Debug)]
pub struct DatabasePool {
    pub message: Table<Message>,
    pub pool: PoolType,
}

impl DatabasePool {
    pub async fn new(config: &Config) -> Result<DatabasePool, Error> {
        // Lazy connect so startup survives a store that is not up yet;
        // the schema init task keeps retrying until it is.
        let pool = PoolOption::new()
            .max_connections(10)
            .connect_lazy(config.database_url().as_str())?;

        Ok(DatabasePool {
            message: Table::new(pool.clone()),
            pool,
        })
    }
}
