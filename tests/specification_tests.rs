//! Integration tests for the specification algebra and its evaluation.

use crud::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: &'static str,
    age: i64,
}

fn people() -> Vec<Person> {
    vec![
        Person { name: "Smith", age: 41 },
        Person { name: "Boyce", age: 29 },
        Person { name: "Richardson", age: 35 },
        Person { name: "Showman", age: 29 },
        Person { name: "Renze", age: 52 },
    ]
}

fn adult() -> Specification<Person> {
    Specification::matching(|p: &Person| p.age >= 30)
}

fn starts_with_s() -> Specification<Person> {
    Specification::matching(|p: &Person| p.name.starts_with('S'))
}

fn by_name() -> Specification<Person> {
    Specification::keyed_by(|p: &Person| p.name)
}

fn by_age() -> Specification<Person> {
    Specification::keyed_by(|p: &Person| p.age)
}

fn names(people: &[Person]) -> Vec<&'static str> {
    people.iter().map(|p| p.name).collect()
}

fn run(specification: &Specification<Person>) -> Vec<Person> {
    SpecificationEvaluator::get_query(InMemoryQuery::new(people()), specification).execute()
}

#[test]
fn test_identity_is_neutral_for_and() {
    for spec in [adult(), starts_with_s(), adult().not()] {
        let left = Specification::all().and(spec.clone());
        let right = spec.clone().and(Specification::all());

        for person in people() {
            assert_eq!(left.is_satisfied_by(&person), spec.is_satisfied_by(&person));
            assert_eq!(right.is_satisfied_by(&person), spec.is_satisfied_by(&person));
        }
    }
}

#[test]
fn test_identity_absorbs_or() {
    let left = Specification::all().or(adult());
    let right = adult().or(Specification::all());

    assert!(left.is_identity());
    assert!(right.is_identity());
    assert_eq!(run(&left).len(), 5);
    assert_eq!(run(&right).len(), 5);
}

#[test]
fn test_double_negation() {
    let spec = adult().and(starts_with_s());
    let twice = spec.clone().not().not();

    for person in people() {
        assert_eq!(twice.is_satisfied_by(&person), spec.is_satisfied_by(&person));
    }
}

#[test]
fn test_combinators_evaluate_both_sides() {
    assert_eq!(names(&run(&adult().and(starts_with_s()))), vec!["Smith"]);
    assert_eq!(
        names(&run(&adult().or(starts_with_s()))),
        vec!["Smith", "Richardson", "Showman", "Renze"]
    );
    assert_eq!(names(&run(&!adult())), vec!["Boyce", "Showman"]);
    assert_eq!(names(&run(&(adult() & !starts_with_s()))), vec!["Richardson", "Renze"]);
}

#[test]
fn test_sort_ascending_and_descending() {
    let ascending = run(&Specification::all().sort_ascending(by_name()));
    assert_eq!(ascending.first().unwrap().name, "Boyce");
    assert_eq!(ascending.last().unwrap().name, "Smith");

    let descending = run(&Specification::all().sort_descending(by_name()));
    let mut reversed = names(&ascending);
    reversed.reverse();
    assert_eq!(names(&descending), reversed);
}

#[test]
fn test_secondary_sort_breaks_ties() {
    let spec = Specification::all()
        .sort_ascending(by_age())
        .sort_descending(by_name());

    assert_eq!(
        names(&run(&spec)),
        vec!["Showman", "Boyce", "Richardson", "Smith", "Renze"]
    );
}

#[test]
fn test_equal_keys_keep_source_order() {
    let spec = Specification::all().sort_ascending(by_age());
    let sorted = names(&run(&spec));

    assert_eq!(&sorted[..2], &["Boyce", "Showman"]);
}

#[test]
fn test_no_sort_keeps_source_order() {
    assert_eq!(names(&run(&adult())), vec!["Smith", "Richardson", "Renze"]);
}

#[test]
fn test_sorts_survive_combination() {
    let spec = Specification::all()
        .sort_ascending(by_age())
        .and(adult().sort_descending(by_name()));

    assert_eq!(spec.sorts().len(), 2);
    assert!(spec.sorts()[0].is_ascending());
    assert!(!spec.sorts()[1].is_ascending());
    assert_eq!(names(&run(&spec)), vec!["Richardson", "Smith", "Renze"]);
}

#[test]
fn test_customer_name_search() {
    let customers = vec![
        Customer::new("Jane", "Smith", "jane.smith@example.com", "1234567890"),
        Customer::new("Phil", "Boyce", "phil.boyce@example.com", "9876543210"),
        Customer::new("Paul", "Richardson", "paul.richardson@example.com", "5555555555"),
    ];
    let search = |text: Option<&str>| {
        let spec = Specification::<Customer>::all()
            .and(CustomerByNameSpecification::new(text.map(str::to_string)).into());
        let query = SpecificationEvaluator::get_query(InMemoryQuery::new(customers.clone()), &spec);
        query.count()
    };

    assert_eq!(search(None), 3);
    assert_eq!(search(Some("")), 3);
    assert_eq!(search(Some("P")), 2);
    assert_eq!(search(Some("l B")), 1);
    assert_eq!(search(Some("smith")), 0);
}

#[tokio::test]
async fn test_specification_is_shareable_across_tasks() {
    let spec = std::sync::Arc::new(adult().sort_ascending(by_name()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let spec = spec.clone();
            tokio::spawn(async move { names(&run(&spec)) })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), vec!["Renze", "Richardson", "Smith"]);
    }
}
