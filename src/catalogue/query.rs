//! Query execution against a loaded catalogue.

use crate::catalogue::Catalogue;
use crate::domain::{Product, Unit};
use crate::search::fuzzy::rank_products;

/// A completed query with its matched listings in display order.
#[derive(Debug, Clone)]
pub struct QueryResults {
    /// The term as the user typed it (post-trim), for display.
    pub display_term: String,
    /// The lowercased term actually queried.
    pub term: String,
    /// Matches sorted cheapest-first (see [`price_sort_key`]).
    pub products: Vec<Product>,
}

/// Runs `term` against the catalogue: fuzzy rank, then price sort.
///
/// The term is lowercased for matching while the display term keeps the
/// user's casing.
pub fn run_query(catalogue: &Catalogue, display_term: &str) -> QueryResults {
    let term = display_term.to_lowercase();

    let mut products: Vec<Product> = rank_products(&term, catalogue.products())
        .into_iter()
        .filter_map(|result| catalogue.products().get(result.index).cloned())
        .collect();

    products.sort_by(|a, b| price_sort_key(a).cmp(&price_sort_key(b)));

    QueryResults {
        display_term: display_term.to_owned(),
        term,
        products,
    }
}

/// Total sort key: cheapest first by per-unit price, with the item price
/// standing in for listings that carry no per-unit quote. Ties break by
/// unit, item price, then id, so the ordering is deterministic (and
/// `sort_by`-safe) on mixed-unit result sets.
pub fn price_sort_key(product: &Product) -> (u32, Unit, u32, &str) {
    let per_unit_cents = match product.price_per_unit.unit {
        Unit::None => product.item_price.value,
        _ => product.price_per_unit.price.value,
    };

    (
        per_unit_cents,
        product.price_per_unit.unit,
        product.item_price.value,
        &product.id,
    )
}

#[cfg(test)]
mod tests {
    use super::{price_sort_key, run_query};
    use crate::catalogue::Catalogue;
    use crate::domain::{Price, PricePerUnit, Product, StoreId, Unit};

    fn product(id: &str, name: &str, cents: u32, ppu: Option<(u32, Unit)>) -> Product {
        Product {
            id: id.to_owned(),
            name: name.to_owned(),
            description: String::new(),
            image_url: String::new(),
            url: String::new(),
            item_price: Price::eur(cents),
            price_per_unit: ppu
                .map(|(value, unit)| PricePerUnit {
                    price: Price::eur(value),
                    unit,
                })
                .unwrap_or_default(),
            store: StoreId::Tesco,
            timestamp: 0,
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalogue = Catalogue::new(vec![
            product("a", "Irish Cheddar", 300, None),
            product("b", "Olive Oil", 700, None),
        ]);

        let results = run_query(&catalogue, "CHEDDAR");
        assert_eq!(results.term, "cheddar");
        assert_eq!(results.display_term, "CHEDDAR");
        assert_eq!(results.products.len(), 1);
        assert_eq!(results.products[0].id, "a");
    }

    #[test]
    fn results_sorted_by_price_per_unit() {
        let catalogue = Catalogue::new(vec![
            product("dear", "milk 1l", 250, Some((250, Unit::Litres))),
            product("cheap", "milk 2l", 300, Some((150, Unit::Litres))),
        ]);

        let results = run_query(&catalogue, "milk");
        assert_eq!(results.products[0].id, "cheap");
        assert_eq!(results.products[1].id, "dear");
    }

    #[test]
    fn listings_without_per_unit_quote_sort_by_item_price() {
        let quoted = product("kg", "spread", 200, Some((800, Unit::Kilogrammes)));
        let unquoted = product("plain", "spread", 100, None);

        assert!(price_sort_key(&unquoted) < price_sort_key(&quoted));
    }

    #[test]
    fn mixed_unit_ordering_is_total_and_stable() {
        // A triple that breaks any pairwise ppu-else-item comparator:
        // a beats b on per-kg price, b beats c on item price, yet c's item
        // price beats a's. A key-based sort must still order it consistently.
        let a = product("a", "spread", 500, Some((100, Unit::Kilogrammes)));
        let b = product("b", "spread", 100, Some((200, Unit::Kilogrammes)));
        let c = product("c", "spread", 300, Some((300, Unit::Litres)));

        for permutation in [
            vec![a.clone(), b.clone(), c.clone()],
            vec![c.clone(), b.clone(), a.clone()],
            vec![b.clone(), c.clone(), a.clone()],
        ] {
            let results = run_query(&Catalogue::new(permutation), "spread");
            let ids: Vec<&str> = results.products.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids, vec!["a", "b", "c"]);
        }

        // Transitivity of the key over the triple.
        assert!(price_sort_key(&a) < price_sort_key(&b));
        assert!(price_sort_key(&b) < price_sort_key(&c));
        assert!(price_sort_key(&a) < price_sort_key(&c));
    }
}
