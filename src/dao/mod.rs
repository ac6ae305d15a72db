mod postgre;

pub use postgre::{PoolOption, PoolType, QueryResult};
