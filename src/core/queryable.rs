//! Queryable sources for filtering and sorting
//!
//! The evaluator never touches data directly: it composes filter and ordering
//! stages onto a [`Queryable`], and a [`QueryExecutor`] runs the composed
//! query once the caller asks for results. [`InMemoryQuery`] is the
//! in-process implementation backing the repositories.

use crate::core::field::FieldValue;
use crate::core::specification::{BoolExpression, ObjectExpression, SortDirection, SortDirective};
use anyhow::Result;
use async_trait::async_trait;
use std::cmp::Ordering;
use std::fmt;

/// A not-yet-executed query that accepts filter and ordering stages
pub trait Queryable<T>: Sized {
    /// The query once a primary ordering has been applied
    type Ordered: OrderedQueryable<T, Unordered = Self>;

    /// Keep only entities matching `predicate`
    fn filter(self, predicate: BoolExpression<T>) -> Self;

    /// Order by `key`, replacing any previous ordering
    fn order_by(self, key: ObjectExpression<T>, direction: SortDirection) -> Self::Ordered;
}

/// A query with a primary ordering that accepts tie-breakers
pub trait OrderedQueryable<T>: Sized {
    type Unordered;

    /// Break ties of the previous keys by `key`
    fn then_by(self, key: ObjectExpression<T>, direction: SortDirection) -> Self;

    /// Back to a plain queryable, keeping the ordering
    fn as_queryable(self) -> Self::Unordered;
}

/// Runs a composed query against its data source
#[async_trait]
pub trait QueryExecutor<T>: Send + Sized {
    /// Materialize every matching entity in query order
    async fn to_list(self) -> Result<Vec<T>>;
}

/// Deferred query over an in-memory snapshot
///
/// Stages are recorded and only run by [`execute`](Self::execute),
/// [`count`](Self::count) or [`QueryExecutor::to_list`]. Ordering is a stable
/// multi-key sort: entities with equal keys keep their source order.
pub struct InMemoryQuery<T> {
    source: Vec<T>,
    filters: Vec<BoolExpression<T>>,
    ordering: Vec<SortDirective<T>>,
}

/// [`InMemoryQuery`] after `order_by`
pub struct OrderedInMemoryQuery<T>(InMemoryQuery<T>);

impl<T> InMemoryQuery<T> {
    /// Create a query over `source`
    pub fn new(source: Vec<T>) -> Self {
        Self {
            source,
            filters: Vec::new(),
            ordering: Vec::new(),
        }
    }

    /// Number of entities matching the recorded filters
    pub fn count(&self) -> usize {
        self.source
            .iter()
            .filter(|entity| self.matches(entity))
            .count()
    }

    /// Run the query
    pub fn execute(self) -> Vec<T> {
        let InMemoryQuery {
            source,
            filters,
            ordering,
        } = self;

        let matching = source
            .into_iter()
            .filter(|entity| filters.iter().all(|predicate| predicate(entity)));

        if ordering.is_empty() {
            return matching.collect();
        }

        let mut keyed: Vec<(Vec<FieldValue>, T)> = matching
            .map(|entity| {
                let keys = ordering.iter().map(|d| d.extract(&entity)).collect();
                (keys, entity)
            })
            .collect();

        keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, &ordering));
        keyed.into_iter().map(|(_, entity)| entity).collect()
    }

    fn matches(&self, entity: &T) -> bool {
        self.filters.iter().all(|predicate| predicate(entity))
    }
}

fn compare_keys<T>(a: &[FieldValue], b: &[FieldValue], ordering: &[SortDirective<T>]) -> Ordering {
    for ((left, right), directive) in a.iter().zip(b).zip(ordering) {
        let ord = match directive.direction() {
            SortDirection::Ascending => left.cmp(right),
            SortDirection::Descending => right.cmp(left),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

impl<T> Queryable<T> for InMemoryQuery<T> {
    type Ordered = OrderedInMemoryQuery<T>;

    fn filter(mut self, predicate: BoolExpression<T>) -> Self {
        self.filters.push(predicate);
        self
    }

    fn order_by(mut self, key: ObjectExpression<T>, direction: SortDirection) -> Self::Ordered {
        self.ordering.clear();
        self.ordering.push(SortDirective::new(key, direction));
        OrderedInMemoryQuery(self)
    }
}

impl<T> OrderedQueryable<T> for OrderedInMemoryQuery<T> {
    type Unordered = InMemoryQuery<T>;

    fn then_by(mut self, key: ObjectExpression<T>, direction: SortDirection) -> Self {
        self.0.ordering.push(SortDirective::new(key, direction));
        self
    }

    fn as_queryable(self) -> InMemoryQuery<T> {
        self.0
    }
}

#[async_trait]
impl<T: Send + 'static> QueryExecutor<T> for InMemoryQuery<T> {
    async fn to_list(self) -> Result<Vec<T>> {
        Ok(self.execute())
    }
}

impl<T> From<Vec<T>> for InMemoryQuery<T> {
    fn from(source: Vec<T>) -> Self {
        Self::new(source)
    }
}

impl<T: Clone> Clone for InMemoryQuery<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            filters: self.filters.clone(),
            ordering: self.ordering.clone(),
        }
    }
}

impl<T> fmt::Debug for InMemoryQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryQuery")
            .field("source_len", &self.source.len())
            .field("filters", &self.filters.len())
            .field("ordering", &self.ordering)
            .finish()
    }
}
