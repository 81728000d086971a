//! Customer filter and sort rules

use crate::core::{BoolExpression, FieldValue, ObjectExpression, Specification, SpecificationRule};
use crate::domain::Customer;
use std::sync::Arc;

/// Matches customers whose "first last" name contains the search text
///
/// The match is case-sensitive. A missing or empty search text matches every
/// customer.
#[derive(Debug, Clone, Default)]
pub struct CustomerByNameSpecification {
    search_text: Option<String>,
}

impl CustomerByNameSpecification {
    pub fn new(search_text: Option<String>) -> Self {
        Self { search_text }
    }
}

impl SpecificationRule<Customer> for CustomerByNameSpecification {
    fn to_bool_expression(&self) -> BoolExpression<Customer> {
        let needle = self.search_text.clone().unwrap_or_default();
        Arc::new(move |customer: &Customer| customer.full_name().contains(needle.as_str()))
    }
}

impl From<CustomerByNameSpecification> for Specification<Customer> {
    fn from(rule: CustomerByNameSpecification) -> Self {
        Specification::new(rule)
    }
}

/// Sorts customers by last name
#[derive(Debug, Clone, Copy, Default)]
pub struct SortCustomerByLastNameSpecification;

impl SpecificationRule<Customer> for SortCustomerByLastNameSpecification {
    fn to_object_expression(&self) -> ObjectExpression<Customer> {
        Arc::new(|customer: &Customer| FieldValue::from(customer.last_name.as_str()))
    }
}

impl From<SortCustomerByLastNameSpecification> for Specification<Customer> {
    fn from(rule: SortCustomerByLastNameSpecification) -> Self {
        Specification::new(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Customer {
        Customer::new("Jane", "Smith", "jane.smith@example.com", "1234567890")
    }

    #[test]
    fn test_by_name_matches_full_name_substring() {
        let spec: Specification<Customer> =
            CustomerByNameSpecification::new(Some("e Sm".to_string())).into();
        assert!(spec.is_satisfied_by(&jane()));

        let spec: Specification<Customer> =
            CustomerByNameSpecification::new(Some("Phil".to_string())).into();
        assert!(!spec.is_satisfied_by(&jane()));
    }

    #[test]
    fn test_by_name_is_case_sensitive() {
        let spec: Specification<Customer> =
            CustomerByNameSpecification::new(Some("jane".to_string())).into();
        assert!(!spec.is_satisfied_by(&jane()));
    }

    #[test]
    fn test_missing_or_empty_search_matches_everyone() {
        for search_text in [None, Some(String::new())] {
            let spec: Specification<Customer> =
                CustomerByNameSpecification::new(search_text).into();
            assert!(spec.is_satisfied_by(&jane()));
        }
    }

    #[test]
    fn test_sort_key_is_last_name() {
        let spec: Specification<Customer> = SortCustomerByLastNameSpecification.into();
        assert_eq!((spec.to_object_expression())(&jane()), FieldValue::from("Smith"));
    }
}
