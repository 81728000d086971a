//! Composable filter and sort specifications
//!
//! A [`Specification`] bundles a deferred predicate over an entity with an
//! ordered list of [`SortDirective`]s. Specifications are built fluently from
//! [`Specification::all`], combined with [`and`](Specification::and),
//! [`or`](Specification::or) and [`not`](Specification::not), and handed to the
//! [`SpecificationEvaluator`](crate::core::evaluator::SpecificationEvaluator)
//! which applies them to a queryable source.
//!
//! Nothing is evaluated while composing: combinators only build a small
//! expression tree, and [`to_bool_expression`](Specification::to_bool_expression)
//! turns it into one closure that calls every leaf with the same entity.
//!
//! # Example
//!
//! ```rust
//! use crud::core::specification::Specification;
//!
//! let even = Specification::<u32>::matching(|n| n % 2 == 0);
//! let small = Specification::<u32>::matching(|n| *n < 10);
//!
//! let spec = Specification::all()
//!     .and(even)
//!     .and(small.not())
//!     .sort_descending(Specification::keyed_by(|n: &u32| *n));
//!
//! assert!(spec.is_satisfied_by(&12));
//! assert!(!spec.is_satisfied_by(&4));
//! assert_eq!(spec.sorts().len(), 1);
//! ```
//!
//! Operands are owned values, a missing operand does not type-check:
//!
//! ```compile_fail
//! use crud::core::specification::Specification;
//!
//! let spec = Specification::<u32>::all().and(None);
//! ```

use crate::core::field::FieldValue;
use std::fmt;
use std::sync::Arc;

/// Deferred predicate over an entity
pub type BoolExpression<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Deferred sort-key extractor over an entity
pub type ObjectExpression<T> = Arc<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// A concrete filter or sort rule
///
/// Implementors override the capability they provide. The defaults describe a
/// rule that matches everything and has no distinguishing sort key.
///
/// ```rust
/// use crud::core::field::FieldValue;
/// use crud::core::specification::{BoolExpression, ObjectExpression, SpecificationRule};
/// use std::sync::Arc;
///
/// struct LongerThan(usize);
///
/// impl SpecificationRule<String> for LongerThan {
///     fn to_bool_expression(&self) -> BoolExpression<String> {
///         let min = self.0;
///         Arc::new(move |s: &String| s.len() > min)
///     }
/// }
///
/// struct ByLength;
///
/// impl SpecificationRule<String> for ByLength {
///     fn to_object_expression(&self) -> ObjectExpression<String> {
///         Arc::new(|s: &String| FieldValue::from(s.len() as i64))
///     }
/// }
/// ```
pub trait SpecificationRule<T>: Send + Sync {
    /// Predicate this rule filters by
    fn to_bool_expression(&self) -> BoolExpression<T>
    where
        T: 'static,
    {
        Arc::new(|_: &T| true)
    }

    /// Key this rule sorts by
    fn to_object_expression(&self) -> ObjectExpression<T>
    where
        T: 'static,
    {
        Arc::new(|_: &T| FieldValue::Null)
    }
}

/// Direction of a single sort directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// One sort key attached to a specification
pub struct SortDirective<T> {
    key: ObjectExpression<T>,
    direction: SortDirection,
}

impl<T> SortDirective<T> {
    pub fn new(key: ObjectExpression<T>, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Key extractor of this directive
    pub fn key(&self) -> ObjectExpression<T> {
        Arc::clone(&self.key)
    }

    /// Extract this directive's key from one entity
    pub fn extract(&self, entity: &T) -> FieldValue {
        (self.key)(entity)
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_ascending(&self) -> bool {
        self.direction.is_ascending()
    }
}

impl<T> Clone for SortDirective<T> {
    fn clone(&self) -> Self {
        Self {
            key: Arc::clone(&self.key),
            direction: self.direction,
        }
    }
}

impl<T> fmt::Debug for SortDirective<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortDirective")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

enum Expr<T> {
    Identity,
    Rule(Arc<dyn SpecificationRule<T>>),
    And(Arc<Expr<T>>, Arc<Expr<T>>),
    Or(Arc<Expr<T>>, Arc<Expr<T>>),
    Not(Arc<Expr<T>>),
}

impl<T: 'static> Expr<T> {
    fn to_bool_expression(&self) -> BoolExpression<T> {
        match self {
            Expr::Identity => Arc::new(|_: &T| true),
            Expr::Rule(rule) => rule.to_bool_expression(),
            Expr::And(left, right) => {
                let left = left.to_bool_expression();
                let right = right.to_bool_expression();
                Arc::new(move |entity: &T| left(entity) && right(entity))
            }
            Expr::Or(left, right) => {
                let left = left.to_bool_expression();
                let right = right.to_bool_expression();
                Arc::new(move |entity: &T| left(entity) || right(entity))
            }
            Expr::Not(inner) => {
                let inner = inner.to_bool_expression();
                Arc::new(move |entity: &T| !inner(entity))
            }
        }
    }

    fn to_object_expression(&self) -> ObjectExpression<T> {
        match self {
            Expr::Rule(rule) => rule.to_object_expression(),
            _ => Arc::new(|_: &T| FieldValue::Null),
        }
    }
}

impl<T> Clone for Expr<T> {
    fn clone(&self) -> Self {
        match self {
            Expr::Identity => Expr::Identity,
            Expr::Rule(rule) => Expr::Rule(Arc::clone(rule)),
            Expr::And(left, right) => Expr::And(Arc::clone(left), Arc::clone(right)),
            Expr::Or(left, right) => Expr::Or(Arc::clone(left), Arc::clone(right)),
            Expr::Not(inner) => Expr::Not(Arc::clone(inner)),
        }
    }
}

impl<T> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identity => write!(f, "All"),
            Expr::Rule(_) => write!(f, "Rule"),
            Expr::And(left, right) => write!(f, "And({:?}, {:?})", left, right),
            Expr::Or(left, right) => write!(f, "Or({:?}, {:?})", left, right),
            Expr::Not(inner) => write!(f, "Not({:?})", inner),
        }
    }
}

/// Filter and sort criteria for entities of type `T`
pub struct Specification<T> {
    expr: Expr<T>,
    sorts: Vec<SortDirective<T>>,
}

impl<T: 'static> Specification<T> {
    /// The identity specification: matches everything, requests no ordering
    ///
    /// Allocation-free; every call yields an equivalent constant.
    pub const fn all() -> Self {
        Self {
            expr: Expr::Identity,
            sorts: Vec::new(),
        }
    }

    /// Wrap a concrete rule
    pub fn new<R>(rule: R) -> Self
    where
        R: SpecificationRule<T> + 'static,
    {
        Self {
            expr: Expr::Rule(Arc::new(rule)),
            sorts: Vec::new(),
        }
    }

    /// Specification filtering by a plain predicate
    pub fn matching<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(PredicateRule(Arc::new(predicate)))
    }

    /// Specification sorting by a plain key extractor
    pub fn keyed_by<F, K>(key: F) -> Self
    where
        F: Fn(&T) -> K + Send + Sync + 'static,
        K: Into<FieldValue>,
    {
        Self::new(KeyRule(Arc::new(move |entity: &T| key(entity).into())))
    }

    /// Whether this is the identity specification
    ///
    /// Only the predicate counts, attached sort directives do not.
    pub fn is_identity(&self) -> bool {
        matches!(self.expr, Expr::Identity)
    }

    /// Both specifications must match
    ///
    /// Returns the other operand unchanged when one side is the identity.
    /// Sort directives of both operands are kept, left operand's first.
    pub fn and(self, other: Specification<T>) -> Self {
        if self.is_identity() {
            return other.with_leading_sorts(self.sorts);
        }
        if other.is_identity() {
            return self.with_trailing_sorts(other.sorts);
        }

        let mut sorts = self.sorts;
        sorts.extend(other.sorts);
        Self {
            expr: Expr::And(Arc::new(self.expr), Arc::new(other.expr)),
            sorts,
        }
    }

    /// Either specification must match
    ///
    /// The identity absorbs: if either side is [`all`](Self::all) the result
    /// is the identity and the other operand's predicate is dropped.
    pub fn or(self, other: Specification<T>) -> Self {
        let mut sorts = self.sorts;
        sorts.extend(other.sorts);

        let expr = if matches!(self.expr, Expr::Identity) || matches!(other.expr, Expr::Identity)
        {
            Expr::Identity
        } else {
            Expr::Or(Arc::new(self.expr), Arc::new(other.expr))
        };

        Self { expr, sorts }
    }

    /// Negation of this specification
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self {
            expr: Expr::Not(Arc::new(self.expr)),
            sorts: self.sorts,
        }
    }

    /// Append an ascending sort directive keyed by `key`
    pub fn sort_ascending(self, key: Specification<T>) -> Self {
        self.push_sort(key, SortDirection::Ascending)
    }

    /// Append a descending sort directive keyed by `key`
    pub fn sort_descending(self, key: Specification<T>) -> Self {
        self.push_sort(key, SortDirection::Descending)
    }

    /// Append a sort directive in the given direction
    pub fn sort_by(self, key: Specification<T>, direction: SortDirection) -> Self {
        self.push_sort(key, direction)
    }

    /// Sort directives in attachment order, primary key first
    pub fn sorts(&self) -> &[SortDirective<T>] {
        &self.sorts
    }

    /// The composed predicate
    pub fn to_bool_expression(&self) -> BoolExpression<T> {
        self.expr.to_bool_expression()
    }

    /// The sort key this specification extracts
    ///
    /// Only rule-backed specifications carry a key; composites yield `Null`.
    pub fn to_object_expression(&self) -> ObjectExpression<T> {
        self.expr.to_object_expression()
    }

    /// Evaluate the predicate against one entity
    pub fn is_satisfied_by(&self, entity: &T) -> bool {
        (self.to_bool_expression())(entity)
    }

    fn push_sort(mut self, key: Specification<T>, direction: SortDirection) -> Self {
        self.sorts
            .push(SortDirective::new(key.to_object_expression(), direction));
        self
    }

    fn with_leading_sorts(mut self, mut leading: Vec<SortDirective<T>>) -> Self {
        leading.append(&mut self.sorts);
        self.sorts = leading;
        self
    }

    fn with_trailing_sorts(mut self, trailing: Vec<SortDirective<T>>) -> Self {
        self.sorts.extend(trailing);
        self
    }
}

impl<T: 'static> Default for Specification<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            expr: self.expr.clone(),
            sorts: self.sorts.clone(),
        }
    }
}

impl<T> fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("expr", &self.expr)
            .field("sorts", &self.sorts)
            .finish()
    }
}

impl<T: 'static> std::ops::BitAnd for Specification<T> {
    type Output = Specification<T>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl<T: 'static> std::ops::BitOr for Specification<T> {
    type Output = Specification<T>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl<T: 'static> std::ops::Not for Specification<T> {
    type Output = Specification<T>;

    fn not(self) -> Self::Output {
        Specification::not(self)
    }
}

struct PredicateRule<T>(BoolExpression<T>);

impl<T> SpecificationRule<T> for PredicateRule<T> {
    fn to_bool_expression(&self) -> BoolExpression<T>
    where
        T: 'static,
    {
        Arc::clone(&self.0)
    }
}

struct KeyRule<T>(ObjectExpression<T>);

impl<T> SpecificationRule<T> for KeyRule<T> {
    fn to_object_expression(&self) -> ObjectExpression<T>
    where
        T: 'static,
    {
        Arc::clone(&self.0)
    }
}
