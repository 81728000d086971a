//! Customer request and response models

use crate::domain::{Customer, Sale};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A sale as shown in the customer listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleForListDto {
    pub product_name: String,
}

impl From<&Sale> for SaleForListDto {
    fn from(sale: &Sale) -> Self {
        Self {
            product_name: sale.product_name.clone(),
        }
    }
}

/// A customer row of the customer listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForListDto {
    pub customer_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub sales: Vec<SaleForListDto>,
}

impl From<Customer> for CustomerForListDto {
    fn from(customer: Customer) -> Self {
        Self {
            sales: customer.sales.iter().map(SaleForListDto::from).collect(),
            customer_id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            address: customer.address,
        }
    }
}

/// A sale with its pricing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleForDetailDto {
    pub sale_id: Uuid,
    pub date: DateTime<Utc>,
    pub customer_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

impl From<&Sale> for SaleForDetailDto {
    fn from(sale: &Sale) -> Self {
        Self {
            sale_id: sale.id,
            date: sale.date,
            customer_id: sale.customer_id,
            product_id: sale.product_id,
            product_name: sale.product_name.clone(),
            quantity: sale.quantity(),
            unit_price: sale.unit_price(),
            total_price: sale.total_price(),
        }
    }
}

/// A single customer with contact details and every sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForDetailDto {
    pub customer_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub sales: Vec<SaleForDetailDto>,
}

impl From<Customer> for CustomerForDetailDto {
    fn from(customer: Customer) -> Self {
        Self {
            sales: customer.sales.iter().map(SaleForDetailDto::from).collect(),
            customer_id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            address: customer.address,
            phone_number: customer.phone_number,
        }
    }
}

fn validate_product_id(product_id: &Uuid) -> Result<(), validator::ValidationError> {
    if product_id.is_nil() {
        let mut error = validator::ValidationError::new("required");
        error.message = Some("Product ID is required.".into());
        return Err(error);
    }
    Ok(())
}

/// A sale to record with a new customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaleForCreateDto {
    #[validate(custom(function = "validate_product_id"))]
    pub product_id: Uuid,

    #[validate(range(min = 1, message = "Quantity must be greater than zero."))]
    pub quantity: u32,

    #[validate(range(exclusive_min = 0.0, message = "Unit price must be greater than zero."))]
    pub unit_price: f64,
}

/// Body of a customer creation
///
/// `sales` must be present, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForCreateDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,

    #[validate(
        length(min = 1, message = "must not be empty"),
        email(message = "must be a valid email address")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub phone_number: String,

    #[serde(default)]
    #[validate(required(message = "must not be null"), nested)]
    pub sales: Option<Vec<SaleForCreateDto>>,
}

/// A sale of a customer update
///
/// With a `saleId` the stored sale is changed; without one a new sale is
/// recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaleForUpdateDto {
    #[serde(default)]
    pub sale_id: Option<Uuid>,

    #[validate(custom(function = "validate_product_id"))]
    pub product_id: Uuid,

    #[validate(range(min = 1, message = "Quantity must be greater than zero."))]
    pub quantity: u32,

    #[validate(range(exclusive_min = 0.0, message = "Unit price must be greater than zero."))]
    pub unit_price: f64,
}

/// Body of a customer update
///
/// `sales` is the complete new list: stored sales it does not mention are
/// removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForUpdateDto {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,

    #[validate(
        length(min = 1, message = "must not be empty"),
        email(message = "must be a valid email address")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub phone_number: String,

    #[serde(default)]
    #[validate(required(message = "must not be null"), nested)]
    pub sales: Option<Vec<SaleForUpdateDto>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ValidationError;
    use crate::domain::Product;

    #[test]
    fn test_list_dto_keeps_product_names_only() {
        let speaker = Product::new("Speaker", 49.5);
        let customer = Customer::new("Jane", "Smith", "jane.smith@example.com", "1234567890")
            .with_sale(&speaker, 2);

        let dto = CustomerForListDto::from(customer.clone());
        assert_eq!(dto.customer_id, customer.id);
        assert_eq!(dto.sales, vec![SaleForListDto { product_name: "Speaker".to_string() }]);

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["sales"][0]["productName"], "Speaker");
    }

    fn failed_fields(errors: validator::ValidationErrors) -> Vec<(String, String)> {
        match ValidationError::from(errors) {
            ValidationError::FieldErrors(fields) => fields
                .into_iter()
                .map(|f| (f.field, f.message))
                .collect(),
            other => panic!("expected field errors, got {}", other),
        }
    }

    fn names(fields: &[(String, String)]) -> Vec<&str> {
        fields.iter().map(|(field, _)| field.as_str()).collect()
    }

    fn creation() -> CustomerForCreateDto {
        CustomerForCreateDto {
            first_name: "Ada".to_string(),
            last_name: "Byron".to_string(),
            email: "ada.byron@example.com".to_string(),
            address: "1 Analytical Row".to_string(),
            phone_number: "0123456789".to_string(),
            sales: Some(vec![SaleForCreateDto {
                product_id: Uuid::new_v4(),
                quantity: 1,
                unit_price: 10.0,
            }]),
        }
    }

    #[test]
    fn test_valid_creation_passes() {
        assert!(creation().validate().is_ok());
    }

    #[test]
    fn test_creation_rejects_blank_fields_and_bad_email() {
        let dto = CustomerForCreateDto {
            first_name: String::new(),
            email: "not-an-email".to_string(),
            phone_number: String::new(),
            ..creation()
        };

        let fields = failed_fields(dto.validate().unwrap_err());
        assert_eq!(names(&fields), vec!["email", "first_name", "phone_number"]);
    }

    #[test]
    fn test_creation_requires_sales_list() {
        let dto = CustomerForCreateDto {
            sales: None,
            ..creation()
        };
        let fields = failed_fields(dto.validate().unwrap_err());
        assert_eq!(fields, vec![("sales".to_string(), "must not be null".to_string())]);

        let dto = CustomerForCreateDto {
            sales: Some(Vec::new()),
            ..creation()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_sale_rules() {
        let sale = SaleForCreateDto {
            product_id: Uuid::nil(),
            quantity: 0,
            unit_price: 0.0,
        };

        let fields = failed_fields(sale.validate().unwrap_err());
        assert_eq!(
            fields,
            vec![
                ("product_id".to_string(), "Product ID is required.".to_string()),
                ("quantity".to_string(), "Quantity must be greater than zero.".to_string()),
                ("unit_price".to_string(), "Unit price must be greater than zero.".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_sale_errors_carry_their_index() {
        let dto = CustomerForCreateDto {
            sales: Some(vec![
                SaleForCreateDto {
                    product_id: Uuid::new_v4(),
                    quantity: 1,
                    unit_price: 1.0,
                },
                SaleForCreateDto {
                    product_id: Uuid::new_v4(),
                    quantity: 0,
                    unit_price: 1.0,
                },
            ]),
            ..creation()
        };

        let fields = failed_fields(dto.validate().unwrap_err());
        assert_eq!(names(&fields), vec!["sales[1].quantity"]);
    }

    #[test]
    fn test_update_body_without_sale_id() {
        let dto: CustomerForUpdateDto = serde_json::from_value(serde_json::json!({
            "firstName": "Ada",
            "lastName": "Byron",
            "email": "ada.byron@example.com",
            "address": "1 Analytical Row",
            "phoneNumber": "0123456789",
            "sales": [{ "productId": Uuid::new_v4(), "quantity": 2, "unitPrice": 5.0 }]
        }))
        .unwrap();

        let sales = dto.sales.as_ref().unwrap();
        assert_eq!(sales[0].sale_id, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_detail_dto_carries_pricing() {
        let laptop = Product::new("Laptop", 999.0);
        let customer = Customer::new("Phil", "Boyce", "phil.boyce@example.com", "9876543210")
            .with_sale(&laptop, 3);

        let dto = CustomerForDetailDto::from(customer);
        assert_eq!(dto.phone_number, "9876543210");
        assert_eq!(dto.sales[0].quantity, 3);
        assert_eq!(dto.sales[0].unit_price, 999.0);
        assert_eq!(dto.sales[0].total_price, 2997.0);
        assert_eq!(dto.sales[0].product_id, laptop.id);
    }
}
