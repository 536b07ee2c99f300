//! Fuzzy matching helpers for catalogue search.

use crate::domain::Product;
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};

/// A ranked fuzzy search result.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyResult {
    pub index: usize,
    pub score: i64,
}

/// Ranks products using `fuzzy-matcher` (Skim algorithm).
pub fn rank_products(query: &str, products: &[Product]) -> Vec<FuzzyResult> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return products
            .iter()
            .enumerate()
            .map(|(index, _)| FuzzyResult { index, score: 0 })
            .collect();
    }

    let matcher = SkimMatcherV2::default().smart_case();

    let mut results: Vec<FuzzyResult> = products
        .iter()
        .enumerate()
        .filter_map(|(index, product)| {
            matcher
                .fuzzy_match(&product.search_text(), trimmed)
                .map(|score| FuzzyResult { index, score })
        })
        .collect();

    results.sort_by_key(|result| std::cmp::Reverse(result.score));
    results
}

#[cfg(test)]
mod tests {
    use super::rank_products;
    use crate::domain::{Price, Product, StoreId};

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_owned(),
            name: name.to_owned(),
            description: String::new(),
            image_url: String::new(),
            url: String::new(),
            item_price: Price::eur(100),
            price_per_unit: Default::default(),
            store: StoreId::Aldi,
            timestamp: 0,
        }
    }

    #[test]
    fn empty_query_returns_all() {
        let products = vec![product("a", "brown bread"), product("b", "white bread")];
        let ranked = rank_products("", &products);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn query_filters_and_scores() {
        let products = vec![product("a", "brown bread"), product("b", "orange juice")];
        let ranked = rank_products("bread", &products);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 0);
    }
}
