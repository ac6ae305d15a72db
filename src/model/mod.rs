mod models;
mod table;

pub use models::Message;
pub use table::Table;
