//! Applies specifications to queryable sources

use crate::core::queryable::{OrderedQueryable, Queryable};
use crate::core::specification::Specification;

/// Turns a [`Specification`] into filter and ordering stages on a query
///
/// The result is still deferred; nothing runs until the caller materializes
/// it (for example through
/// [`PagedList::create_async`](crate::core::paged_list::PagedList::create_async)).
pub struct SpecificationEvaluator;

impl SpecificationEvaluator {
    /// Filter `query` by the specification's predicate and order it by its
    /// sort directives
    ///
    /// The first directive becomes the primary ordering, every following one
    /// a tie-breaker in attachment order. Without directives no ordering stage
    /// is added at all.
    pub fn get_query<T, Q>(query: Q, specification: &Specification<T>) -> Q
    where
        T: 'static,
        Q: Queryable<T>,
    {
        let query = query.filter(specification.to_bool_expression());

        let mut sorts = specification.sorts().iter();
        let Some(primary) = sorts.next() else {
            tracing::debug!("specification has no sort directives, keeping source order");
            return query;
        };

        tracing::debug!(
            sort_keys = specification.sorts().len(),
            "applying specification ordering"
        );

        sorts
            .fold(
                query.order_by(primary.key(), primary.direction()),
                |ordered, directive| ordered.then_by(directive.key(), directive.direction()),
            )
            .as_queryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::queryable::InMemoryQuery;
    use crate::core::specification::{BoolExpression, ObjectExpression, SortDirection};

    #[derive(Debug, Default)]
    struct Recorder {
        filters: usize,
        calls: Vec<String>,
    }

    struct OrderedRecorder(Recorder);

    impl Queryable<u8> for Recorder {
        type Ordered = OrderedRecorder;

        fn filter(mut self, _predicate: BoolExpression<u8>) -> Self {
            self.filters += 1;
            self
        }

        fn order_by(
            mut self,
            _key: ObjectExpression<u8>,
            direction: SortDirection,
        ) -> OrderedRecorder {
            self.calls.push(format!("order_by:{:?}", direction));
            OrderedRecorder(self)
        }
    }

    impl OrderedQueryable<u8> for OrderedRecorder {
        type Unordered = Recorder;

        fn then_by(mut self, _key: ObjectExpression<u8>, direction: SortDirection) -> Self {
            self.0.calls.push(format!("then_by:{:?}", direction));
            self
        }

        fn as_queryable(self) -> Recorder {
            self.0
        }
    }

    #[test]
    fn test_no_sorts_means_no_ordering_call() {
        let query = SpecificationEvaluator::get_query(Recorder::default(), &Specification::all());
        assert_eq!(query.filters, 1);
        assert!(query.calls.is_empty());
    }

    #[test]
    fn test_first_sort_is_primary_rest_are_tie_breakers() {
        let spec = Specification::<u8>::all()
            .sort_descending(Specification::keyed_by(|n: &u8| *n as i64))
            .sort_ascending(Specification::keyed_by(|n: &u8| *n as i64))
            .sort_descending(Specification::keyed_by(|n: &u8| *n as i64));

        let query = SpecificationEvaluator::get_query(Recorder::default(), &spec);
        assert_eq!(
            query.calls,
            vec!["order_by:Descending", "then_by:Ascending", "then_by:Descending"]
        );
    }

    #[test]
    fn test_filters_and_orders_in_memory() {
        let spec = Specification::<u8>::matching(|n| n % 3 != 0)
            .sort_ascending(Specification::keyed_by(|n: &u8| (*n % 2) as i64))
            .sort_descending(Specification::keyed_by(|n: &u8| *n as i64));

        let query = SpecificationEvaluator::get_query(InMemoryQuery::new((1..=9).collect()), &spec);
        assert_eq!(query.execute(), vec![8, 4, 2, 7, 5, 1]);
    }
}
