mod auth;
mod client;
mod errors;
mod query;
pub mod types;
pub use self::auth::{current_token, token_for_date};
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::FilterQuery;
