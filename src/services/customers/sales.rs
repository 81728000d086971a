//! Sale lines shared by customer creation and update

use crate::core::{CrudError, CrudResult, Entity, EntityError};
use crate::domain::{Product, Sale};
use crate::storage::UnitOfWork;
use std::collections::HashMap;
use uuid::Uuid;

/// The stored product a sale refers to
pub(super) async fn find_product(
    unit_of_work: &UnitOfWork,
    product_id: Uuid,
) -> CrudResult<Product> {
    unit_of_work
        .products()
        .get_product(&product_id)
        .await?
        .ok_or_else(|| {
            CrudError::from(EntityError::NotFound {
                entity_type: Product::resource_name_singular().to_string(),
                id: product_id,
            })
        })
}

/// A requested sale with its product resolved
pub(super) struct SaleLine {
    pub sale_id: Option<Uuid>,
    pub product: Product,
    pub quantity: u32,
    pub unit_price: f64,
}

/// The sales of a customer after an update
///
/// Lines naming a stored sale change it in place and keep its date. Lines
/// without an id become new sales. Stored sales no line names are dropped.
/// The result follows the order of `lines`.
pub(super) fn reconcile_sales(
    customer_id: Uuid,
    stored: Vec<Sale>,
    lines: Vec<SaleLine>,
) -> CrudResult<Vec<Sale>> {
    let mut stored: HashMap<Uuid, Sale> = stored.into_iter().map(|sale| (sale.id, sale)).collect();

    lines
        .into_iter()
        .map(|line| match line.sale_id {
            Some(id) => {
                let mut sale = stored.remove(&id).ok_or_else(|| {
                    CrudError::from(EntityError::NotFound {
                        entity_type: "sale".to_string(),
                        id,
                    })
                })?;
                sale.product_id = line.product.id;
                sale.product_name = line.product.name;
                sale.set_quantity(line.quantity);
                sale.set_unit_price(line.unit_price);
                Ok(sale)
            }
            None => Ok(Sale::new(
                customer_id,
                line.product.id,
                line.product.name,
                line.quantity,
                line.unit_price,
            )),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(sale_id: Option<Uuid>, product: &Product, quantity: u32) -> SaleLine {
        SaleLine {
            sale_id,
            product: product.clone(),
            quantity,
            unit_price: product.price,
        }
    }

    #[test]
    fn test_reconcile_updates_adds_and_drops() {
        let laptop = Product::new("Laptop", 999.0);
        let speaker = Product::new("Speaker", 49.5);
        let customer_id = Uuid::new_v4();
        let kept = Sale::new(customer_id, laptop.id, "Laptop", 1, 999.0);
        let dropped = Sale::new(customer_id, speaker.id, "Speaker", 2, 49.5);

        let sales = reconcile_sales(
            customer_id,
            vec![kept.clone(), dropped.clone()],
            vec![line(None, &speaker, 4), line(Some(kept.id), &laptop, 3)],
        )
        .unwrap();

        assert_eq!(sales.len(), 2);
        assert_ne!(sales[0].id, dropped.id);
        assert_eq!(sales[0].customer_id, customer_id);
        assert_eq!(sales[0].product_name, "Speaker");
        assert_eq!(sales[0].total_price(), 198.0);

        assert_eq!(sales[1].id, kept.id);
        assert_eq!(sales[1].date, kept.date);
        assert_eq!(sales[1].quantity(), 3);
        assert_eq!(sales[1].total_price(), 2997.0);
    }

    #[test]
    fn test_reconcile_rejects_unknown_sale_id() {
        let laptop = Product::new("Laptop", 999.0);

        let err = reconcile_sales(
            Uuid::new_v4(),
            Vec::new(),
            vec![line(Some(Uuid::new_v4()), &laptop, 1)],
        )
        .unwrap_err();

        assert!(matches!(err, CrudError::Entity(EntityError::NotFound { .. })));
    }

    #[test]
    fn test_reconcile_with_no_lines_drops_everything() {
        let customer_id = Uuid::new_v4();
        let stored = vec![Sale::new(customer_id, Uuid::new_v4(), "Laptop", 1, 999.0)];

        assert!(reconcile_sales(customer_id, stored, Vec::new()).unwrap().is_empty());
    }
}
