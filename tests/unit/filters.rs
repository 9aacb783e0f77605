//! Filter predicates against the built-in records

use pretty_assertions::assert_eq;
use quantika::analysis::join_movements;
use quantika::filters::{categories, filter_by_quality, filter_movements, ProductFilter, Selector};
use quantika::models::{MovementType, QualityStatus};
use quantika::store::seed;
use test_log::test;

#[test]
fn test_filters_preserve_order_and_are_subsets() {
    let products = seed::products();
    let filter = ProductFilter {
        search: "sódio".to_string(),
        category: Selector::All,
    };

    let names: Vec<&str> = filter.apply(&products).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Hidróxido de Sódio", "Hipoclorito de Sódio", "Carbonato de Sódio"]
    );
}

#[test]
fn test_search_and_category_both_apply() {
    let products = seed::products();
    let filter = ProductFilter {
        search: "sódio".to_string(),
        category: Selector::Only("Bases".to_string()),
    };

    let ids: Vec<i64> = filter.apply(&products).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 8]);
}

#[test]
fn test_unknown_category_matches_nothing() {
    let products = seed::products();
    let filter = ProductFilter {
        search: String::new(),
        category: Selector::Only("Gases".to_string()),
    };
    assert!(filter.apply(&products).is_empty());
}

#[test]
fn test_quality_and_movement_selectors_on_seed() {
    let products = seed::products();
    let rejected: Vec<i64> = filter_by_quality(&products, &Selector::Only(QualityStatus::Rejected))
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(rejected, vec![6, 7]);

    let joined = join_movements(&seed::movements(), &products);
    let outbound: Vec<i64> = filter_movements(&joined, &Selector::Only(MovementType::Outbound))
        .iter()
        .map(|m| m.movement.id)
        .collect();
    assert_eq!(outbound, vec![2, 4]);
    assert_eq!(filter_movements(&joined, &Selector::All).len(), 4);
}

#[test]
fn test_seed_categories() {
    assert_eq!(
        categories(&seed::products()),
        vec!["Ácidos", "Bases", "Oxidantes", "Sanitizantes", "Solventes"]
    );
}
