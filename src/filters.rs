//! Selection predicates used by the list views.
//!
//! Every filter borrows its input and returns the matching records in their
//! original order; the `All` selector passes everything through.

use std::fmt;
use std::str::FromStr;

use crate::models::{CompleteMovement, MovementType, Product, QualityStatus};

/// Wire/CLI value meaning "no restriction"
pub const ALL: &str = "all";

/// Exact-match selector over values of `T`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(expected) => expected == value,
        }
    }

    /// Advance through `All` followed by each option, wrapping around
    pub fn cycle(&self, options: &[T]) -> Self
    where
        T: Clone,
    {
        let next = match self {
            Selector::All => 0,
            Selector::Only(current) => match options.iter().position(|o| o == current) {
                Some(i) => i + 1,
                None => options.len(),
            },
        };
        options
            .get(next)
            .cloned()
            .map(Selector::Only)
            .unwrap_or(Selector::All)
    }
}

pub type CategorySelector = Selector<String>;
pub type MovementTypeSelector = Selector<MovementType>;
pub type QualitySelector = Selector<QualityStatus>;

#[derive(Debug, thiserror::Error)]
#[error("unknown filter value '{value}', expected one of: {expected}")]
pub struct ParseSelectorError {
    value: String,
    expected: String,
}

impl FromStr for MovementTypeSelector {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(Selector::All);
        }
        MovementType::from_id(s)
            .map(Selector::Only)
            .ok_or_else(|| ParseSelectorError {
                value: s.to_string(),
                expected: "all, entrada, saida".to_string(),
            })
    }
}

impl FromStr for QualitySelector {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(Selector::All);
        }
        QualityStatus::from_id(s)
            .map(Selector::Only)
            .ok_or_else(|| ParseSelectorError {
                value: s.to_string(),
                expected: "all, pendente, aprovado, reprovado".to_string(),
            })
    }
}

impl FromStr for CategorySelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL {
            Selector::All
        } else {
            Selector::Only(s.to_string())
        })
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("Todas as categorias"),
            Selector::Only(category) => f.write_str(category),
        }
    }
}

/// Products view criteria: text search AND category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub search: String,
    pub category: CategorySelector,
}

impl ProductFilter {
    /// Case-insensitive substring match over name, category and supplier
    pub fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&product.name, &product.category, &product.supplier]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.category.matches(&product.category)
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

pub fn filter_movements<'a>(
    movements: &'a [CompleteMovement],
    selector: &MovementTypeSelector,
) -> Vec<&'a CompleteMovement> {
    movements
        .iter()
        .filter(|m| selector.matches(&m.movement.kind))
        .collect()
}

pub fn filter_by_quality<'a>(products: &'a [Product], selector: &QualitySelector) -> Vec<&'a Product> {
    products.iter().filter(|p| selector.matches(&p.quality)).collect()
}

/// Distinct categories in first-seen order, for the category selector
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| c == &product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}
