//! Shared test data: five customers, two products and a few sales.
//!
//! Customers are stored in this order:
//! Jane Smith, Phil Boyce, Paul Richardson, Will Showman, Lara Renze.

#![allow(dead_code)]

use crud::prelude::*;

pub struct Fixture {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
}

impl Fixture {
    pub fn new() -> Self {
        let laptop = Product::new("Laptop", 999.0);
        let speaker = Product::new("Speaker", 49.5);

        let customers = vec![
            Customer::new("Jane", "Smith", "jane.smith@example.com", "1234567890")
                .with_address("12 High Street")
                .with_sale(&laptop, 1),
            Customer::new("Phil", "Boyce", "phil.boyce@example.com", "9876543210")
                .with_sale(&speaker, 2),
            Customer::new("Paul", "Richardson", "paul.richardson@example.com", "5555555555"),
            Customer::new("Will", "Showman", "will.showman@example.com", "4444444444")
                .with_sale(&laptop, 1)
                .with_sale(&speaker, 4),
            Customer::new("Lara", "Renze", "lara.renze@example.com", "3333333333"),
        ];

        Self {
            customers,
            products: vec![laptop, speaker],
        }
    }

    pub fn unit_of_work(&self) -> UnitOfWork {
        UnitOfWork::in_memory(self.customers.clone(), self.products.clone())
    }

    pub fn services(&self) -> Services {
        self.services_with(PagingConfig::default())
    }

    pub fn services_with(&self, paging: PagingConfig) -> Services {
        Services::new(self.unit_of_work(), paging)
    }

    pub fn product(&self, name: &str) -> &Product {
        self.products.iter().find(|p| p.name == name).unwrap()
    }

    pub fn customer(&self, first_name: &str) -> &Customer {
        self.customers
            .iter()
            .find(|c| c.first_name == first_name)
            .unwrap()
    }
}

pub fn last_names(customers: &[CustomerForListDto]) -> Vec<&str> {
    customers.iter().map(|c| c.last_name.as_str()).collect()
}
