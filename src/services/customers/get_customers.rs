//! Paged customer listing

use super::models::CustomerForListDto;
use super::specifications::{CustomerByNameSpecification, SortCustomerByLastNameSpecification};
use crate::config::PagingConfig;
use crate::core::{
    CollectionResource, CrudResult, CustomerResourceParameter, SortDirection, Specification,
};
use crate::domain::Customer;
use crate::storage::UnitOfWork;
use validator::Validate;

/// Lists customers filtered by name, sorted and paged
#[derive(Clone)]
pub struct GetCustomers {
    unit_of_work: UnitOfWork,
    paging: PagingConfig,
}

impl GetCustomers {
    pub fn new(unit_of_work: UnitOfWork, paging: PagingConfig) -> Self {
        Self {
            unit_of_work,
            paging,
        }
    }

    /// Run the listing
    ///
    /// Page sizes above the configured maximum are capped; a page size of
    /// zero is a validation error.
    pub async fn execute(
        &self,
        parameter: CustomerResourceParameter,
    ) -> CrudResult<CollectionResource<CustomerForListDto>> {
        parameter.validate()?;

        let paging = parameter.paging(self.paging.default_page_size);
        paging.validate()?;
        let page_size = self.paging.clamp_page_size(paging.page_size);

        let specification = create_specification(&parameter);

        tracing::debug!(
            current_page = paging.current_page,
            page_size,
            sort_by = %parameter.sort_by,
            search_text = parameter.search_text.as_deref().unwrap_or_default(),
            "listing customers"
        );

        let customers = self
            .unit_of_work
            .customers()
            .get_customers_with_pagination(&specification, paging.current_page, page_size)
            .await?;

        Ok(CollectionResource {
            pagination: customers.metadata(),
            results: customers.into_iter().map(CustomerForListDto::from).collect(),
        })
    }
}

/// Name filter plus last-name ordering
///
/// Only `name` (any case) honors `is_ascending`; every other sort field falls
/// back to ascending last name.
pub fn create_specification(parameter: &CustomerResourceParameter) -> Specification<Customer> {
    let specification = Specification::<Customer>::all().and(
        CustomerByNameSpecification::new(parameter.search_text.clone()).into(),
    );

    let direction = match parameter.sort_by.to_lowercase().as_str() {
        "name" => SortDirection::from_ascending(parameter.is_ascending),
        _ => SortDirection::Ascending,
    };

    specification.sort_by(SortCustomerByLastNameSpecification.into(), direction)
}
