//! Product response models

use crate::domain::Product;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForListDto {
    pub product_id: Uuid,
    pub name: String,
    pub price: f64,
}

impl From<Product> for ProductForListDto {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}
