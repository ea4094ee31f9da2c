//! Filter criteria for the `filter` action.

use serde_json::{Map, Number, Value};

/// Filter criteria for product id lookups.
///
/// Absent fields are omitted from the outgoing params entirely; the service
/// treats a present-but-empty field as a match on the empty value, so blank
/// strings are dropped as well. The name criterion maps to the wire key
/// `product`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterQuery {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub brand: Option<String>,
}

impl FilterQuery {
    /// Filters by product name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filters by exact price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Filters by brand name.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Serializes the present criteria into the params object for the
    /// `filter` action. Price is sent as a JSON number, never a string.
    pub fn to_params(&self) -> Value {
        let mut params = Map::new();
        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            params.insert("product".to_string(), Value::String(name.to_string()));
        }
        if let Some(price) = self.price.and_then(Number::from_f64) {
            params.insert("price".to_string(), Value::Number(price));
        }
        if let Some(brand) = self.brand.as_deref().filter(|s| !s.is_empty()) {
            params.insert("brand".to_string(), Value::String(brand.to_string()));
        }
        Value::Object(params)
    }
}
