//! Result-set deduplication.

use std::collections::HashSet;

use valantis_api::types::Product;

/// Collapses a product sequence to one record per id.
///
/// The service can return several records for the same id within a single
/// `get_items` response. The first occurrence wins; relative order of the
/// kept records is preserved.
pub fn dedupe(products: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::with_capacity(products.len());
    let mut unique = Vec::with_capacity(products.len());
    for product in products {
        if seen.insert(product.id.clone()) {
            unique.push(product);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            product: format!("Товар {}", id),
            price: 100.0,
            brand: None,
        }
    }

    #[test]
    fn keeps_first_occurrence_in_order() {
        let input = vec![product("1"), product("2"), product("1"), product("3")];
        let out = dedupe(input);
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn unique_input_is_unchanged() {
        let input = vec![product("a"), product("b")];
        assert_eq!(dedupe(input.clone()), input);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(dedupe(Vec::new()).is_empty());
    }

    #[test]
    fn all_duplicates_collapse_to_one() {
        let out = dedupe(vec![product("x"), product("x"), product("x")]);
        assert_eq!(out.len(), 1);
    }
}
