mod common;

use common::{catalog_of, product, rated, sample_catalog};
use storefront_core::catalog::Product;
use storefront_core::filter::{
    availability, filter, FilterCriteria, PriceRange, RatingPolicy,
};

fn ids(products: &[std::sync::Arc<Product>]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

fn abc_catalog() -> storefront_core::catalog::ProductCatalog {
    catalog_of(vec![
        Product {
            id: "A".into(),
            price: Some(1000),
            stars: Some(4),
            visible: true,
            ..Product::default()
        },
        Product {
            id: "B".into(),
            price: Some(5000),
            stars: Some(2),
            visible: true,
            ..Product::default()
        },
        Product {
            id: "C".into(),
            price: Some(2000),
            stars: Some(4),
            visible: false,
            ..Product::default()
        },
    ])
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[test]
fn test_unlisted_products_never_returned() {
    let catalog = sample_catalog();
    let criteria_set = [
        FilterCriteria::default(),
        FilterCriteria {
            category: "Saree".into(),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            query: "saree".into(),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            category: "Dupatta".into(),
            ..FilterCriteria::default()
        },
    ];
    for criteria in &criteria_set {
        for p in filter(&catalog, criteria) {
            assert!(p.visible && !p.deleted, "unlisted {} in result", p.id);
        }
    }
}

#[test]
fn test_filter_preserves_catalog_order() {
    let catalog = sample_catalog();
    let result = filter(&catalog, &FilterCriteria::default());
    assert_eq!(ids(&result), vec!["DS-101", "102", "DS-105"]);
}

#[test]
fn test_filter_is_idempotent() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        query: "silk".into(),
        ..FilterCriteria::default()
    };
    let first = filter(&catalog, &criteria);
    let second = filter(&catalog, &criteria);
    assert_eq!(ids(&first), ids(&second));
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

#[test]
fn test_exact_rating_price_and_visibility_scenario() {
    let criteria = FilterCriteria {
        price: PriceRange::new(0, 3000),
        rating: 4,
        rating_policy: RatingPolicy::Exact,
        ..FilterCriteria::default()
    };
    let result = filter(&abc_catalog(), &criteria);
    assert_eq!(ids(&result), vec!["A"]);
}

#[test]
fn test_category_matches_fabric_substring() {
    let catalog = catalog_of(vec![
        Product {
            fabric: Some("Pure Silk".into()),
            ..product("a", "Saree", 100)
        },
        product("b", "Silk", 100),
        product("c", "Kurta", 100),
    ]);
    let criteria = FilterCriteria {
        category: "Silk".into(),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter(&catalog, &criteria)), vec!["a", "b"]);
}

#[test]
fn test_search_is_case_insensitive_and_trimmed() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        query: "  KANJIVARAM ".into(),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter(&catalog, &criteria)), vec!["DS-101"]);
}

#[test]
fn test_search_matches_id() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        query: "ds-105".into(),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter(&catalog, &criteria)), vec!["DS-105"]);
}

#[test]
fn test_price_bounds_inclusive_on_effective_price() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        price: PriceRange::new(1800, 9999),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter(&catalog, &criteria)), vec!["DS-101", "102"]);
}

#[test]
fn test_missing_price_counts_as_zero() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        price: PriceRange::new(0, 0),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter(&catalog, &criteria)), vec!["DS-105"]);
}

#[test]
fn test_rating_zero_is_unconstrained() {
    let catalog = catalog_of(vec![rated("a", 1), rated("b", 5), product("c", "Saree", 1)]);
    assert_eq!(filter(&catalog, &FilterCriteria::default()).len(), 3);
}

#[test]
fn test_rating_at_least_policy() {
    let catalog = catalog_of(vec![rated("a", 3), rated("b", 4), rated("c", 5)]);
    let criteria = FilterCriteria {
        rating: 4,
        ..FilterCriteria::with_policy(RatingPolicy::AtLeast)
    };
    assert_eq!(ids(&filter(&catalog, &criteria)), vec!["b", "c"]);
}

#[test]
fn test_rating_exact_excludes_missing_stars() {
    let catalog = catalog_of(vec![rated("a", 5), product("b", "Saree", 1)]);
    let criteria = FilterCriteria {
        rating: 5,
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&filter(&catalog, &criteria)), vec!["a"]);
}

#[test]
fn test_rating_policy_accepts() {
    assert!(RatingPolicy::Exact.accepts(3, 0));
    assert!(RatingPolicy::Exact.accepts(3, 3));
    assert!(!RatingPolicy::Exact.accepts(4, 3));
    assert!(RatingPolicy::AtLeast.accepts(4, 3));
    assert!(!RatingPolicy::AtLeast.accepts(2, 3));
}

#[test]
fn test_rating_policy_display() {
    assert_eq!(format!("{}", RatingPolicy::Exact), "Exact");
    assert_eq!(format!("{}", RatingPolicy::AtLeast), "At least");
}

// ---------------------------------------------------------------------------
// Price slider
// ---------------------------------------------------------------------------

#[test]
fn test_slider_keeps_one_step_gap() {
    let range = PriceRange::from_slider(5000, 5200);
    assert_eq!(range, PriceRange::new(4700, 5200));
}

#[test]
fn test_slider_leaves_valid_range_alone() {
    assert_eq!(PriceRange::from_slider(1000, 5000), PriceRange::new(1000, 5000));
}

#[test]
fn test_slider_low_ceiling_saturates() {
    assert_eq!(PriceRange::from_slider(300, 200), PriceRange::new(0, 200));
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

#[test]
fn test_availability_starts_with_all() {
    let counts = availability(&sample_catalog(), &FilterCriteria::default());
    let categories: Vec<&str> = counts.iter().map(|a| a.category.as_str()).collect();
    assert_eq!(categories, vec!["all", "Saree", "Kurta"]);
    assert_eq!(counts[0].count, 3);
    assert_eq!(counts[1].count, 2);
    assert_eq!(counts[2].count, 1);
}

#[test]
fn test_availability_all_dominates_each_category() {
    let catalog = sample_catalog();
    let criteria_set = [
        FilterCriteria::default(),
        FilterCriteria {
            query: "silk".into(),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            price: PriceRange::new(1000, 2000),
            ..FilterCriteria::default()
        },
        FilterCriteria {
            rating: 4,
            ..FilterCriteria::default()
        },
    ];
    for criteria in &criteria_set {
        let counts = availability(&catalog, criteria);
        let all = counts[0].count;
        for entry in &counts[1..] {
            assert!(all >= entry.count, "{} exceeds all", entry.category);
        }
    }
}

#[test]
fn test_availability_ignores_selected_category() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        category: "Kurta".into(),
        ..FilterCriteria::default()
    };
    let counts = availability(&catalog, &criteria);
    assert_eq!(counts[1].category, "Saree");
    assert_eq!(counts[1].count, 2);
}

#[test]
fn test_availability_matches_filter_counts() {
    let catalog = sample_catalog();
    let base = FilterCriteria {
        query: "silk".into(),
        ..FilterCriteria::default()
    };
    for entry in availability(&catalog, &base) {
        let criteria = FilterCriteria {
            category: entry.category.clone(),
            ..base.clone()
        };
        assert_eq!(filter(&catalog, &criteria).len(), entry.count);
    }
}

#[test]
fn test_availability_zero_disables_control() {
    let catalog = sample_catalog();
    let criteria = FilterCriteria {
        query: "cotton".into(),
        ..FilterCriteria::default()
    };
    let counts = availability(&catalog, &criteria);
    let saree = counts.iter().find(|a| a.category == "Saree").unwrap();
    assert!(!saree.is_available());
    let kurta = counts.iter().find(|a| a.category == "Kurta").unwrap();
    assert!(kurta.is_available());
}
