use serde::{Deserialize, Serialize};

/// Opaque product identifier issued by the catalog service.
pub type ProductId = String;

/// A single catalog record as returned by the `get_items` action.
///
/// The wire field for the display name is `product`. `brand` is frequently
/// `null` or absent in service responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub product: String,
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
}
