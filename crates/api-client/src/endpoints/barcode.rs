//! Barcode lookup endpoint
//!
//! The backend proxies OpenFoodFacts and returns per-100g values.

use crate::client::NutritionClient;
use crate::endpoints::food_entries::{FoodEntryInput, Micronutrients};
use crate::error::ApiResult;
use crate::path::ApiPath;
use serde::{Deserialize, Serialize};

/// Barcode API interface
#[derive(Debug, Clone)]
pub struct BarcodeApi {
    client: NutritionClient,
}

impl BarcodeApi {
    pub(crate) fn new(client: NutritionClient) -> Self {
        Self { client }
    }

    /// Look up a product. Unknown codes fail with a 404 "Product not found".
    ///
    /// GET /api/barcode/<code>
    pub async fn lookup(&self, code: &str) -> ApiResult<BarcodeProduct> {
        self.client.get(&lookup_path(code)).await
    }
}

fn lookup_path(code: &str) -> String {
    ApiPath::new("/api/barcode").segment_encoded(code).build()
}

/// Product facts, per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarcodeProduct {
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub barcode: String,
    pub serving_size: Option<String>,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub fat_g: f64,
    #[serde(default)]
    pub fiber_g: f64,
    #[serde(default)]
    pub sugar_g: f64,
    #[serde(default)]
    pub sodium_mg: f64,
    pub image_url: Option<String>,
    #[serde(default)]
    pub micronutrients: Micronutrients,
}

impl BarcodeProduct {
    /// Turn the scanned product into an entry for a daily log
    #[must_use]
    pub fn to_entry(&self, daily_log_id: i64) -> FoodEntryInput {
        let mut entry = FoodEntryInput::new(daily_log_id, self.name.clone(), self.calories)
            .with_macros(self.protein_g, self.carbs_g, self.fat_g);
        entry.fiber_g = Some(self.fiber_g);
        entry.sugar_g = Some(self.sugar_g);
        entry.barcode = Some(self.barcode.clone());
        entry.serving_size = self.serving_size.clone();
        entry.micronutrients = Some(self.micronutrients.clone());
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_path() {
        assert_eq!(lookup_path("5449000000996"), "/api/barcode/5449000000996");
    }

    #[test]
    fn test_product_to_entry() {
        let json = r#"{
            "name": "Oat Drink",
            "brand": "Oatly",
            "barcode": "7394376616037",
            "serving_size": "250 ml",
            "calories": 46,
            "protein_g": 1,
            "carbs_g": 6.7,
            "fat_g": 1.5,
            "fiber_g": 0.8,
            "sugar_g": 4,
            "sodium_mg": 40,
            "image_url": "",
            "micronutrients": {"calcium_mg": 120}
        }"#;

        let product: BarcodeProduct = serde_json::from_str(json).unwrap();
        let entry = product.to_entry(9);

        assert_eq!(entry.daily_log_id, 9);
        assert_eq!(entry.name, "Oat Drink");
        assert_eq!(entry.barcode.as_deref(), Some("7394376616037"));
        assert_eq!(entry.micronutrients.unwrap().calcium_mg, 120.0);
    }
}
