pub use self::types::{PoolOption, PoolType, QueryResult};

mod message;
mod types;
