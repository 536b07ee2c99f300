//! Deterministic demo data for the visual harness.

use crate::catalogue::Catalogue;
use crate::domain::{Price, PricePerUnit, Product, StoreId, Unit};

/// Builds a small in-memory catalogue spanning every store.
pub fn demo_catalogue() -> Catalogue {
    Catalogue::new(vec![
        product(
            "sv-butter-454",
            "Irish Creamery Butter 454g",
            "Salted block butter",
            StoreId::SuperValu,
            319,
            per_kg(703),
        ),
        product(
            "ld-butter-454",
            "Dairy Manor Irish Butter 454g",
            "Salted butter",
            StoreId::Lidl,
            289,
            per_kg(637),
        ),
        product(
            "ts-butter-227",
            "Tesco Irish Butter 227g",
            "Half-pound salted butter",
            StoreId::Tesco,
            175,
            per_kg(771),
        ),
        product(
            "al-butter-454",
            "Connacht Gold Butter 454g",
            "Creamery butter",
            StoreId::Aldi,
            299,
            per_kg(659),
        ),
        product(
            "ds-butter-454",
            "Dunnes Stores Irish Butter 454g",
            "Salted creamery butter",
            StoreId::DunnesStores,
            305,
            per_kg(672),
        ),
        product(
            "sv-milk-2l",
            "Fresh Whole Milk 2L",
            "Pasteurised whole milk",
            StoreId::SuperValu,
            219,
            per_litre(110),
        ),
        product(
            "ts-milk-2l",
            "Tesco Whole Milk 2L",
            "Fresh whole milk",
            StoreId::Tesco,
            209,
            per_litre(105),
        ),
        product(
            "ld-bread-800",
            "Sliced Wholegrain Bread 800g",
            "Wholegrain pan loaf",
            StoreId::Lidl,
            149,
            per_kg(186),
        ),
    ])
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    store: StoreId,
    price_cents: u32,
    price_per_unit: PricePerUnit,
) -> Product {
    Product {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        image_url: String::new(),
        url: format!("https://example.com/products/{id}"),
        item_price: Price::eur(price_cents),
        price_per_unit,
        store,
        timestamp: 1_720_000_000,
    }
}

fn per_kg(cents: u32) -> PricePerUnit {
    PricePerUnit {
        price: Price::eur(cents),
        unit: Unit::Kilogrammes,
    }
}

fn per_litre(cents: u32) -> PricePerUnit {
    PricePerUnit {
        price: Price::eur(cents),
        unit: Unit::Litres,
    }
}
