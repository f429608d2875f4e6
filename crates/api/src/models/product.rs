//! Catalog product types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mercato_core::{Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID (sequential, e.g. `"9"`).
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image URL.
    pub image: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: String,
}

/// Query filters for product listing.
///
/// Empty strings count as "no filter".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilter {
    /// Exact category match, ignoring case.
    pub category: Option<String>,
    /// Substring of name or description, ignoring case.
    pub search: Option<String>,
}

impl ProductFilter {
    /// Filter on category only.
    #[must_use]
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            search: None,
        }
    }

    /// Filter on search term only.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            category: None,
            search: Some(term.into()),
        }
    }

    /// Whether `product` passes every active filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = active(self.category.as_deref())
            .is_none_or(|category| product.category.to_lowercase() == category.to_lowercase());

        let search_ok = active(self.search.as_deref()).is_none_or(|term| {
            let term = term.to_lowercase();
            product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
        });

        category_ok && search_ok
    }
}

fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(name: &str, description: &str, category: &str) -> Product {
        Product {
            id: ProductId::new("1"),
            name: name.to_string(),
            description: description.to_string(),
            price: Price::from_cents(100),
            image: String::new(),
            category: category.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let p = product("Mug", "Ceramic", "Kitchen");
        assert!(ProductFilter::default().matches(&p));
        assert!(ProductFilter::category("").matches(&p));
        assert!(ProductFilter::search("").matches(&p));
    }

    #[test]
    fn test_category_ignores_case() {
        let p = product("Mug", "Ceramic", "Kitchen");
        assert!(ProductFilter::category("kITCHEN").matches(&p));
        assert!(!ProductFilter::category("Kitch").matches(&p));
    }

    #[test]
    fn test_search_covers_name_and_description() {
        let p = product("Mug", "Hand-glazed Ceramic", "Kitchen");
        assert!(ProductFilter::search("mug").matches(&p));
        assert!(ProductFilter::search("CERAMIC").matches(&p));
        assert!(!ProductFilter::search("steel").matches(&p));
    }

    #[test]
    fn test_filters_compose() {
        let p = product("Mug", "Ceramic", "Kitchen");
        let both = ProductFilter {
            category: Some("kitchen".to_string()),
            search: Some("plate".to_string()),
        };
        assert!(!both.matches(&p));
    }

    #[test]
    fn test_product_json_round_trip() {
        let original = product("Mug", "Ceramic", "Kitchen");
        let json = serde_json::to_string(&original).unwrap();
        let decoded: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_input_rejects_negative_price() {
        let json = r#"{"name": "Mug", "description": "", "price": -0.5, "image": "", "category": "Kitchen"}"#;
        assert!(serde_json::from_str::<ProductInput>(json).is_err());
    }
}
