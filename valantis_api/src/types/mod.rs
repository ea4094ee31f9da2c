mod product;
mod response;

pub use self::product::{Product, ProductId};
pub use self::response::ApiResponse;
