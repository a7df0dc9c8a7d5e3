use serde::{Deserialize, Serialize};

use crate::consts::{ALL_CATEGORIES, PRICE_SLIDER_STEP};

/// How the rating selector constrains results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingPolicy {
    /// Only products rated exactly the selected value.
    #[default]
    Exact,
    /// Products rated the selected value or higher.
    AtLeast,
}

impl RatingPolicy {
    /// A threshold of 0 is unconstrained under either policy.
    pub fn accepts(self, rating: u8, threshold: u8) -> bool {
        if threshold == 0 {
            return true;
        }
        match self {
            Self::Exact => rating == threshold,
            Self::AtLeast => rating >= threshold,
        }
    }
}

impl std::fmt::Display for RatingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "Exact"),
            Self::AtLeast => write!(f, "At least"),
        }
    }
}

/// Inclusive effective-price window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Range from the dual price slider. The lower handle is pushed down so
    /// it stays at least one slider step below the upper handle.
    pub fn from_slider(min: u64, max: u64) -> Self {
        let ceiling = max.saturating_sub(PRICE_SLIDER_STEP);
        Self {
            min: min.min(ceiling),
            max,
        }
    }

    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// User-selected constraints of one filter pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterCriteria {
    /// `"all"` or an exact category value.
    pub category: String,
    pub query: String,
    pub price: PriceRange,
    /// 0 means unconstrained.
    pub rating: u8,
    pub rating_policy: RatingPolicy,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
            price: PriceRange::new(0, u64::MAX),
            rating: 0,
            rating_policy: RatingPolicy::default(),
        }
    }
}

impl FilterCriteria {
    pub fn with_policy(rating_policy: RatingPolicy) -> Self {
        Self {
            rating_policy,
            ..Self::default()
        }
    }

    /// Lower-cased, trimmed search text.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}
