use crate::domain::{Product, StoreSelection};

/// Returns indices into `original` whose store is in `stores`, preserving
/// original relative order. Every call re-derives from the full original
/// sequence, never from a previously filtered subset.
pub(super) fn filter_listings(original: &[Product], stores: &StoreSelection) -> Vec<usize> {
    original
        .iter()
        .enumerate()
        .filter(|(_, product)| stores.has(product.store))
        .map(|(index, _)| index)
        .collect()
}

/// Count label shown above the listing grid.
pub(super) fn count_label(count: usize) -> String {
    format!("{count} results")
}

#[cfg(test)]
mod tests {
    use super::{count_label, filter_listings};
    use crate::domain::{Price, Product, StoreId, StoreSelection};

    fn product(id: &str, store: StoreId) -> Product {
        Product {
            id: id.to_owned(),
            name: id.to_owned(),
            description: String::new(),
            image_url: String::new(),
            url: String::new(),
            item_price: Price::eur(100),
            price_per_unit: Default::default(),
            store,
            timestamp: 0,
        }
    }

    #[test]
    fn filter_preserves_original_order() {
        let original = vec![
            product("a", StoreId::SuperValu),
            product("b", StoreId::Lidl),
            product("c", StoreId::SuperValu),
        ];
        let stores: StoreSelection = [StoreId::SuperValu].into_iter().collect();

        let visible = filter_listings(&original, &stores);
        assert_eq!(visible, vec![0, 2]);
        assert_eq!(count_label(visible.len()), "2 results");
    }

    #[test]
    fn refilter_derives_from_original_not_previous_subset() {
        let original = vec![
            product("a", StoreId::SuperValu),
            product("b", StoreId::Lidl),
            product("c", StoreId::SuperValu),
        ];

        let narrow: StoreSelection = [StoreId::Lidl].into_iter().collect();
        assert_eq!(filter_listings(&original, &narrow), vec![1]);

        // Widening the selection again restores rows dropped by the previous
        // pass, which would be impossible if filtering consumed its own output.
        let wide = StoreSelection::default();
        assert_eq!(filter_listings(&original, &wide), vec![0, 1, 2]);
    }

    #[test]
    fn empty_original_yields_empty_subset() {
        let visible = filter_listings(&[], &StoreSelection::default());
        assert!(visible.is_empty());
        assert_eq!(count_label(0), "0 results");
    }

    #[test]
    fn empty_selection_hides_everything() {
        let original = vec![product("a", StoreId::Aldi)];
        assert!(filter_listings(&original, &StoreSelection::empty()).is_empty());
    }
}
