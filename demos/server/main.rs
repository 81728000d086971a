//! Customers and products API with seeded in-memory data
//!
//! Run with an optional configuration file:
//!
//! ```text
//! cargo run --example server -- demos/server/config.yaml
//! ```
//!
//! Then try:
//! - GET http://127.0.0.1:3000/customers?pageSize=2
//! - GET http://127.0.0.1:3000/customers?searchText=Jane
//! - GET http://127.0.0.1:3000/customers?sortBy=name&isAscending=false
//! - GET http://127.0.0.1:3000/products
//! - DELETE http://127.0.0.1:3000/customers/{id}

use crud::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_yaml_file(path)?,
        None => AppConfig::default(),
    };

    init_tracing(&config.logging);

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

    tracing::info!(
        customers = customers.len(),
        products = 2,
        "seeded in-memory storage"
    );

    ServerBuilder::new()
        .with_config(config)
        .with_unit_of_work(UnitOfWork::in_memory(customers, vec![laptop, speaker]))
        .serve()
        .await
}
