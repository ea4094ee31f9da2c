use serde_json::json;
use valantis_api::FilterQuery;

#[test]
fn default_query_sends_no_criteria() {
    assert_eq!(FilterQuery::default().to_params(), json!({}));
}

#[test]
fn name_maps_to_the_product_wire_key() {
    let params = FilterQuery::default().with_name("кольцо").to_params();
    assert_eq!(params, json!({ "product": "кольцо" }));
}

#[test]
fn price_is_sent_as_a_number() {
    let params = FilterQuery::default().with_price(10.0).to_params();
    assert!(params["price"].is_number());
    assert_eq!(params, json!({ "price": 10.0 }));
}

#[test]
fn blank_strings_are_omitted() {
    let params = FilterQuery::default()
        .with_name("")
        .with_price(10.0)
        .with_brand("")
        .to_params();
    assert_eq!(params, json!({ "price": 10.0 }));
}

#[test]
fn all_criteria_present() {
    let params = FilterQuery::default()
        .with_name("Серьги")
        .with_price(23000.5)
        .with_brand("Piaget")
        .to_params();
    assert_eq!(
        params,
        json!({ "product": "Серьги", "price": 23000.5, "brand": "Piaget" })
    );
}
