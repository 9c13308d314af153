use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;

use super::form::{parse_number, NumberPolicy};
use crate::domain::order::{Catalog, CatalogEntry, ItemId};

// ============================================================================
// Catalog Attributes
// ============================================================================
//
// Menu markup carries `data-item-id`, `data-name` and `data-price` on each
// item. The catalog file is a JSON array of those same attributes.
//
// ============================================================================

/// Price attribute as written in the markup: a string, or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceAttr {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogAttributes {
    pub item_id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<PriceAttr>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid price '{value}' for item {item_id}")]
    MalformedPrice { item_id: u32, value: String },

    #[error("Negative price {price} for item {item_id}")]
    NegativePrice { item_id: u32, price: f64 },
}

/// Build the lookup map from markup attributes. Later duplicates of an id
/// are ignored.
pub fn build_catalog(attrs: &[CatalogAttributes], policy: NumberPolicy) -> Result<Catalog, CatalogError> {
    let mut catalog = Catalog::new();

    for attr in attrs {
        let item_id = ItemId(attr.item_id);
        let name = match attr.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => CatalogEntry::placeholder(item_id).name,
        };
        let price = resolve_price(attr, policy)?;

        if !catalog.insert(item_id, CatalogEntry::new(name, price)) {
            tracing::warn!(item_id = attr.item_id, "Duplicate catalog entry ignored");
        }
    }

    Ok(catalog)
}

fn resolve_price(attr: &CatalogAttributes, policy: NumberPolicy) -> Result<f64, CatalogError> {
    let parsed = match &attr.price {
        None => Some(0.0),
        Some(PriceAttr::Number(n)) => Some(*n).filter(|n| n.is_finite()),
        Some(PriceAttr::Text(text)) => parse_number(text),
    };

    let price = match (parsed, policy) {
        (Some(price), _) => price,
        (None, NumberPolicy::Lenient) => {
            tracing::warn!(item_id = attr.item_id, "Malformed price treated as 0");
            return Ok(0.0);
        }
        (None, NumberPolicy::Strict) => {
            return Err(CatalogError::MalformedPrice {
                item_id: attr.item_id,
                value: raw_price(attr),
            });
        }
    };

    if price < 0.0 {
        return match policy {
            NumberPolicy::Lenient => {
                tracing::warn!(item_id = attr.item_id, price, "Negative price treated as 0");
                Ok(0.0)
            }
            NumberPolicy::Strict => Err(CatalogError::NegativePrice {
                item_id: attr.item_id,
                price,
            }),
        };
    }

    Ok(price)
}

fn raw_price(attr: &CatalogAttributes) -> String {
    match &attr.price {
        Some(PriceAttr::Number(n)) => n.to_string(),
        Some(PriceAttr::Text(text)) => text.clone(),
        None => String::new(),
    }
}

pub fn parse_catalog(json: &str, policy: NumberPolicy) -> Result<Catalog> {
    let attrs: Vec<CatalogAttributes> =
        serde_json::from_str(json).context("Catalog must be a JSON array of item attributes")?;
    Ok(build_catalog(&attrs, policy)?)
}

/// Read and build the catalog from a JSON file.
pub fn load_catalog(path: impl AsRef<Path>, policy: NumberPolicy) -> Result<Catalog> {
    let path = path.as_ref();
    let json = read_to_string(path)
        .with_context(|| format!("Failed to read catalog from {}", path.display()))?;

    let catalog = parse_catalog(&json, policy)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))?;

    tracing::info!(path = %path.display(), items = catalog.len(), "Catalog loaded");
    Ok(catalog)
}
