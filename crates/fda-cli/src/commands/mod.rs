pub mod dispatch;
pub mod fetch;
pub mod query;
pub mod schema;
