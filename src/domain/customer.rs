//! Customer entity

use super::sale::Sale;
use crate::core::Entity;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub sales: Vec<Sale>,
}

impl Customer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            address: String::new(),
            phone_number: phone_number.into(),
            sales: Vec::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Record a sale of `product` to this customer
    pub fn with_sale(mut self, product: &super::Product, quantity: u32) -> Self {
        self.sales.push(Sale::new(
            self.id,
            product.id,
            product.name.clone(),
            quantity,
            product.price,
        ));
        self
    }

    /// "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Customer {
    fn resource_name() -> &'static str {
        "customers"
    }

    fn resource_name_singular() -> &'static str {
        "customer"
    }

    fn id(&self) -> Uuid {
        self.id
    }
}
