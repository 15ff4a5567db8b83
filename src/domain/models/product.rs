use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of products exposed in the `first_five_products` preview.
pub const PREVIEW_LIMIT: usize = 5;

/// One deduplicated upstream search result.
///
/// `id` is the only guaranteed field. Everything else is copied from the
/// upstream entry as-is; the upstream does not keep field types stable
/// across responses, display fields included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub title: Option<Value>,
    pub matched_terms: Option<Value>,
    pub is_slotted: Option<Value>,
    pub labels: Option<Value>,

    // Basic product info
    pub url: Option<Value>,
    pub image_url: Option<Value>,
    pub variation_id: Option<Value>,
    pub description: Option<Value>,
    pub product_blurb: Option<Value>,
    pub product_info: Option<Value>,

    // Pricing
    pub lowest_price: Option<Value>,
    pub highest_price: Option<Value>,
    pub sale_price_min: Option<Value>,
    pub sale_price_max: Option<Value>,
    pub regular_price_min: Option<Value>,
    pub regular_price_max: Option<Value>,
    pub product_price_type: Option<Value>,
    pub swatch_prices: Option<Value>,

    // Availability
    pub min_avl_now_pl: Option<Value>,

    // Imagery
    pub leader_sku: Option<Value>,
    pub leader_sku_image: Option<Value>,
    pub thumb_image: Option<Value>,
    pub thumb_image_parent: Option<Value>,
    pub image_override: Option<Value>,
    pub alt_images: Option<Value>,
    pub hover_images: Option<Value>,
    pub image_roll_overs: Option<Value>,

    // Variants and categorization
    pub swatches_display: Option<Value>,
    pub group_ids: Option<Value>,
    pub facets: Option<Value>,
    pub flags: Option<Value>,

    // Purchase info
    pub pip_type: Option<Value>,
    pub eligible_for_quick_buy: Option<Value>,
}

impl ProductRecord {
    /// Build a record from one `response.results[]` entry and its `data` object.
    ///
    /// The caller has already resolved and validated `id`.
    pub fn from_entry(id: String, entry: &Map<String, Value>, data: &Map<String, Value>) -> Self {
        Self {
            id,
            title: opaque(entry, "value"),
            matched_terms: opaque(entry, "matched_terms"),
            is_slotted: opaque(entry, "is_slotted"),
            labels: opaque(entry, "labels"),

            url: opaque(data, "url"),
            image_url: opaque(data, "image_url"),
            variation_id: opaque(data, "variation_id"),
            description: opaque(data, "description"),
            product_blurb: opaque(data, "productBlurb"),
            product_info: opaque(data, "prodinfo"),

            lowest_price: opaque(data, "lowestPrice"),
            highest_price: opaque(data, "highestPrice"),
            sale_price_min: opaque(data, "salePriceMin"),
            sale_price_max: opaque(data, "salePriceMax"),
            regular_price_min: opaque(data, "regularPriceMin"),
            regular_price_max: opaque(data, "regularPriceMax"),
            product_price_type: opaque(data, "productPriceType"),
            swatch_prices: opaque(data, "swatchPrices"),

            min_avl_now_pl: opaque(data, "minAvlNowPL"),

            leader_sku: opaque(data, "leaderSku"),
            leader_sku_image: opaque(data, "leaderSkuImage"),
            thumb_image: opaque(data, "thumb_image"),
            thumb_image_parent: opaque(data, "thumb_image_parent"),
            image_override: opaque(data, "imageOverride"),
            alt_images: opaque(data, "altImages"),
            hover_images: opaque(data, "hoverImages"),
            image_roll_overs: opaque(data, "imageRollOvers"),

            swatches_display: opaque(data, "swatchesDisplay"),
            group_ids: opaque(data, "group_ids"),
            facets: opaque(data, "facets"),
            flags: opaque(data, "flags"),

            pip_type: opaque(data, "pipType"),
            eligible_for_quick_buy: opaque(data, "eligibleForQuickBuy"),
        }
    }
}

/// Resolve an upstream identifier.
///
/// Only non-empty strings are ids. Numbers are not coerced, so `42` can never
/// collide with `"42"`; they count as missing along with null and containers.
pub fn product_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn opaque(source: &Map<String, Value>, key: &str) -> Option<Value> {
    source.get(key).filter(|v| !v.is_null()).cloned()
}

/// Aggregated result of one intent query: a bounded preview plus the full list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntentResults {
    pub first_five_products: Vec<ProductRecord>,
    pub all_products: Vec<ProductRecord>,
}

impl IntentResults {
    /// The preview is always derived from the full list, never tracked separately.
    pub fn from_products(all_products: Vec<ProductRecord>) -> Self {
        let preview_len = all_products.len().min(PREVIEW_LIMIT);
        Self {
            first_five_products: all_products[..preview_len].to_vec(),
            all_products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn record(id: &str) -> ProductRecord {
        ProductRecord::from_entry(id.to_string(), &Map::new(), &Map::new())
    }

    #[test]
    fn test_product_id_accepts_strings_only() {
        assert_eq!(product_id(Some(&json!("p1"))), Some("p1".to_string()));
        assert_eq!(product_id(Some(&json!("42"))), Some("42".to_string()));
        assert_eq!(product_id(Some(&json!(42))), None);
        assert_eq!(product_id(Some(&json!(4.5))), None);
    }

    #[test]
    fn test_product_id_rejects_falsy_values() {
        assert_eq!(product_id(None), None);
        assert_eq!(product_id(Some(&json!(null))), None);
        assert_eq!(product_id(Some(&json!(""))), None);
        assert_eq!(product_id(Some(&json!(0))), None);
        assert_eq!(product_id(Some(&json!(false))), None);
        assert_eq!(product_id(Some(&json!(["p1"]))), None);
    }

    #[test]
    fn test_from_entry_renames_upstream_fields() {
        let entry = as_map(json!({
            "value": "Small Drip Coffee Maker",
            "matched_terms": ["coffee", "maker"],
            "is_slotted": false,
        }));
        let data = as_map(json!({
            "id": "p1",
            "url": "/p/p1",
            "image_url": "https://img.example/p1.jpg",
            "lowestPrice": 19.99,
            "salePriceMin": "17.50",
            "minAvlNowPL": 3,
            "eligibleForQuickBuy": true,
        }));

        let product = ProductRecord::from_entry("p1".to_string(), &entry, &data);

        assert_eq!(product.title, Some(json!("Small Drip Coffee Maker")));
        assert_eq!(product.url, Some(json!("/p/p1")));
        assert_eq!(product.image_url, Some(json!("https://img.example/p1.jpg")));
        assert_eq!(product.matched_terms, Some(json!(["coffee", "maker"])));
        assert_eq!(product.is_slotted, Some(json!(false)));
        assert_eq!(product.lowest_price, Some(json!(19.99)));
        assert_eq!(product.sale_price_min, Some(json!("17.50")));
        assert_eq!(product.min_avl_now_pl, Some(json!(3)));
        assert_eq!(product.eligible_for_quick_buy, Some(json!(true)));
    }

    #[test]
    fn test_from_entry_keeps_display_fields_of_any_type() {
        let entry = as_map(json!({ "value": ["Mug", "Large"] }));
        let data = as_map(json!({
            "id": "p1",
            "url": 42,
            "image_url": { "src": "/a.jpg", "w": 200 },
        }));

        let product = ProductRecord::from_entry("p1".to_string(), &entry, &data);

        assert_eq!(product.title, Some(json!(["Mug", "Large"])));
        assert_eq!(product.url, Some(json!(42)));
        assert_eq!(product.image_url, Some(json!({ "src": "/a.jpg", "w": 200 })));
    }

    #[test]
    fn test_from_entry_marks_absent_fields_as_none() {
        let data = as_map(json!({ "id": "p1", "description": null }));

        let product = ProductRecord::from_entry("p1".to_string(), &Map::new(), &data);

        assert_eq!(product.title, None);
        assert_eq!(product.description, None);
        assert_eq!(product.facets, None);
        assert_eq!(product.is_slotted, None);
    }

    #[test]
    fn test_from_products_caps_preview() {
        let products: Vec<ProductRecord> = (1..=7).map(|i| record(&format!("p{}", i))).collect();

        let results = IntentResults::from_products(products.clone());

        assert_eq!(results.all_products, products);
        assert_eq!(results.first_five_products, products[..5].to_vec());
    }

    #[test]
    fn test_from_products_short_list_is_its_own_preview() {
        let products = vec![record("p1"), record("p2")];

        let results = IntentResults::from_products(products.clone());

        assert_eq!(results.first_five_products, products);
    }

    #[test]
    fn test_serialized_shape_uses_snake_case_and_nulls() {
        let data = as_map(json!({ "id": "p1", "leaderSkuImage": "sku.jpg" }));
        let product = ProductRecord::from_entry("p1".to_string(), &Map::new(), &data);

        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], json!("p1"));
        assert_eq!(value["leader_sku_image"], json!("sku.jpg"));
        assert_eq!(value["title"], Value::Null);
    }
}
