//! Product entity.
//!
//! The products table mixes naming styles: relational columns are
//! snake_case while the offer flag and the per-city stock columns were
//! created camelCase. The serde renames below follow the table, not the
//! Rust field names.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A product row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    pub image_url: Option<String>,
    #[serde(rename = "isOffer")]
    pub is_offer: Option<bool>,
    pub discount: Option<f64>,
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub stock: CityStock,
}

/// Per-warehouse stock counters, one column per city.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CityStock {
    #[serde(rename = "barcelonaStock", skip_serializing_if = "Option::is_none")]
    pub barcelona: Option<i64>,
    #[serde(rename = "madridStock", skip_serializing_if = "Option::is_none")]
    pub madrid: Option<i64>,
    #[serde(rename = "murciaStock", skip_serializing_if = "Option::is_none")]
    pub murcia: Option<i64>,
    #[serde(rename = "valenciaStock", skip_serializing_if = "Option::is_none")]
    pub valencia: Option<i64>,
    #[serde(rename = "sevillaStock", skip_serializing_if = "Option::is_none")]
    pub sevilla: Option<i64>,
    #[serde(rename = "sanSebastianStock", skip_serializing_if = "Option::is_none")]
    pub san_sebastian: Option<i64>,
    #[serde(rename = "bilbaoStock", skip_serializing_if = "Option::is_none")]
    pub bilbao: Option<i64>,
    #[serde(rename = "cordobaStock", skip_serializing_if = "Option::is_none")]
    pub cordoba: Option<i64>,
    #[serde(rename = "aCorunaStock", skip_serializing_if = "Option::is_none")]
    pub a_coruna: Option<i64>,
    #[serde(rename = "segoviaStock", skip_serializing_if = "Option::is_none")]
    pub segovia: Option<i64>,
}

/// Insert payload for a product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    pub category_id: i64,
    pub image_url: Option<String>,
    #[serde(rename = "isOffer")]
    pub is_offer: Option<bool>,
    pub discount: Option<f64>,
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub stock: CityStock,
}

/// Partial update payload; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "isOffer", skip_serializing_if = "Option::is_none")]
    pub is_offer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub stock: CityStock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_round_trips_store_column_names() {
        let row = serde_json::json!({
            "id": 1,
            "name": "RTX 4070",
            "price": 599.99,
            "category_id": 2,
            "image_url": null,
            "isOffer": true,
            "discount": 10.0,
            "rating": 4.5,
            "barcelonaStock": 3,
            "aCorunaStock": 0
        });

        let product: Product = serde_json::from_value(row).unwrap();
        assert_eq!(product.is_offer, Some(true));
        assert_eq!(product.stock.barcelona, Some(3));
        assert_eq!(product.stock.a_coruna, Some(0));
        assert_eq!(product.stock.madrid, None);

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["isOffer"], serde_json::json!(true));
        assert_eq!(back["barcelonaStock"], serde_json::json!(3));
        assert!(back.get("madridStock").is_none());
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let patch = ProductPatch::default();
        assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({}));
    }
}
