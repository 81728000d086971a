//! Sale of a product to a customer

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One sale line
///
/// `total_price` is derived: it is recomputed whenever the quantity or the
/// unit price changes, so it always equals `quantity * unit_price`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sale {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub customer_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    quantity: u32,
    unit_price: f64,
    total_price: f64,
}

impl Sale {
    pub fn new(
        customer_id: Uuid,
        product_id: Uuid,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            customer_id,
            product_id,
            product_name: product_name.into(),
            quantity,
            unit_price,
            total_price: f64::from(quantity) * unit_price,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total_price = f64::from(self.quantity) * self.unit_price;
    }

    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
        self.total_price = f64::from(self.quantity) * self.unit_price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_price_follows_quantity_and_unit_price() {
        let mut sale = Sale::new(Uuid::new_v4(), Uuid::new_v4(), "Laptop", 2, 10.0);
        assert_eq!(sale.total_price(), 20.0);

        sale.set_quantity(3);
        assert_eq!(sale.total_price(), 30.0);

        sale.set_unit_price(2.5);
        assert_eq!(sale.total_price(), 7.5);

        sale.set_quantity(0);
        assert_eq!(sale.total_price(), 0.0);
    }
}
