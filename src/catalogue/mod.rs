//! Product catalogue snapshot loading and query execution.

mod errors;
pub mod query;

pub use errors::CatalogueError;

use crate::domain::Product;
use std::fs;
use std::path::Path;

/// An in-memory product catalogue loaded from a scraper snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: Vec<Product>,
}

impl Catalogue {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Loads a catalogue from a JSON snapshot (an array of products).
    pub fn load(path: &Path) -> Result<Self, CatalogueError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogueError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let products: Vec<Product> =
            serde_json::from_str(&content).map_err(|source| CatalogueError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Catalogue;
    use crate::domain::{Price, Product, StoreId};

    #[test]
    fn snapshot_round_trips_through_json() {
        let products = vec![Product {
            id: "SV-1001".to_owned(),
            name: "Butter 454g".to_owned(),
            description: String::new(),
            image_url: String::new(),
            url: String::new(),
            item_price: Price::eur(399),
            price_per_unit: Default::default(),
            store: StoreId::SuperValu,
            timestamp: 0,
        }];

        let json = serde_json::to_string(&products).expect("serialize");
        let parsed: Vec<Product> = serde_json::from_str(&json).expect("parse");
        let catalogue = Catalogue::new(parsed);

        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.products()[0].item_price, Price::eur(399));
    }

    #[test]
    fn snapshot_accepts_formatted_price_strings() {
        let json = r#"[{
            "id": "LD-77",
            "name": "Red Lemonade 2L",
            "item_price": "€1.09",
            "store": "lidl"
        }]"#;

        let products: Vec<Product> = serde_json::from_str(json).expect("parse");
        assert_eq!(products[0].item_price, Price::eur(109));
        assert_eq!(products[0].store, StoreId::Lidl);
    }
}
