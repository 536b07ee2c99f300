//! Domain models shared across the catalogue, search, and UI layers.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A supermarket chain tracked by the catalogue.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreId {
    SuperValu,
    Lidl,
    Tesco,
    Aldi,
    DunnesStores,
}

impl StoreId {
    pub const ALL: [StoreId; 5] = [
        StoreId::SuperValu,
        StoreId::Lidl,
        StoreId::Tesco,
        StoreId::Aldi,
        StoreId::DunnesStores,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SuperValu => "SuperValu",
            Self::Lidl => "Lidl",
            Self::Tesco => "Tesco",
            Self::Aldi => "Aldi",
            Self::DunnesStores => "Dunnes Stores",
        }
    }

    /// Short tag shown in listing rows.
    pub fn tag(self) -> &'static str {
        match self {
            Self::SuperValu => "SV",
            Self::Lidl => "LD",
            Self::Tesco => "TS",
            Self::Aldi => "AL",
            Self::DunnesStores => "DS",
        }
    }
}

/// An ordered, duplicate-free set of stores.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct StoreSelection(Vec<StoreId>);

impl Default for StoreSelection {
    fn default() -> Self {
        Self(StoreId::ALL.to_vec())
    }
}

impl StoreSelection {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn has(&self, id: StoreId) -> bool {
        self.0.contains(&id)
    }

    pub fn add(&mut self, id: StoreId) {
        if !self.has(id) {
            self.0.push(id);
        }
    }

    pub fn remove(&mut self, id: StoreId) {
        self.0.retain(|candidate| *candidate != id);
    }

    pub fn toggle(&mut self, id: StoreId) {
        if self.has(id) {
            self.remove(id);
        } else {
            self.add(id);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<StoreId> for StoreSelection {
    fn from_iter<I: IntoIterator<Item = StoreId>>(iter: I) -> Self {
        let mut selection = Self::empty();
        for id in iter {
            selection.add(id);
        }
        selection
    }
}

/// Catalogue currency. Only EUR listings exist today.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Currency {
    #[default]
    Eur,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eur => "€",
        }
    }
}

/// A monetary amount in minor units (cents).
///
/// Deserializes from either the structured form or a formatted string like
/// `"€2.50"`, which is what the scraper snapshots carry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "PriceRepr")]
pub struct Price {
    pub currency: Currency,
    pub value: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Text(String),
    Parts {
        #[serde(default)]
        currency: Currency,
        value: u32,
    },
}

impl TryFrom<PriceRepr> for Price {
    type Error = String;

    fn try_from(repr: PriceRepr) -> Result<Self, Self::Error> {
        match repr {
            PriceRepr::Text(raw) => {
                Price::parse(&raw).ok_or_else(|| format!("invalid price string `{raw}`"))
            }
            PriceRepr::Parts { currency, value } => Ok(Price::new(currency, value)),
        }
    }
}

impl Price {
    pub fn new(currency: Currency, value: u32) -> Self {
        Self { currency, value }
    }

    pub fn eur(value: u32) -> Self {
        Self::new(Currency::Eur, value)
    }

    /// Parses strings like `€2.50`, `2.50`, or `€1,024.99`. Amounts that do
    /// not fit in a `u32` cent count return `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned = raw.trim().replace(',', "");
        let mut rest = cleaned.as_str();

        let mut currency = Currency::Eur;
        for candidate in [Currency::Eur] {
            if let Some(stripped) = rest.strip_prefix(candidate.symbol()) {
                currency = candidate;
                rest = stripped;
                break;
            }
        }

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, "0"),
        };
        let whole: u32 = whole.parse().ok()?;
        let cents: u32 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u32>().ok()? * 10,
            2 => fraction.parse().ok()?,
            _ => return None,
        };

        let value = whole.checked_mul(100)?.checked_add(cents)?;
        Some(Self::new(currency, value))
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.value.cmp(&other.value))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{:02}",
            self.currency.symbol(),
            self.value / 100,
            self.value % 100
        )
    }
}

/// Unit a per-unit price is quoted against. The derived `Ord` is only a
/// stable grouping order for sort keys, not a physical comparison.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    #[default]
    None,
    Piece,
    Kilogrammes,
    Litres,
    SqMetres,
    Metres,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Piece => " each",
            Self::Kilogrammes => "/kg",
            Self::Litres => "/l",
            Self::SqMetres => "/m²",
            Self::Metres => "/m",
        }
    }
}

/// A price normalized per unit (per kg, per litre, ...).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct PricePerUnit {
    pub price: Price,
    pub unit: Unit,
}

impl PartialOrd for PricePerUnit {
    /// Prices quoted against different units are incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit != other.unit {
            return None;
        }
        self.price.partial_cmp(&other.price)
    }
}

impl fmt::Display for PricePerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.price, self.unit.suffix())
    }
}

/// A single catalogue listing scraped from a store's product page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub url: String,
    pub item_price: Price,
    #[serde(default)]
    pub price_per_unit: PricePerUnit,
    pub store: StoreId,
    #[serde(default)]
    pub timestamp: i64,
}

impl Product {
    /// Returns a searchable composite string used by fuzzy matching.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.store.label())
    }
}

/// The current application route.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Route {
    Home,
    Results,
}
