use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Menu item identifier, as carried by `qty_<id>` fields and `data-item-id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Table identifier. Never empty; surrounding whitespace is stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableNumber(String);

impl TableNumber {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One quantity field after the binding layer has parsed it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLineInput {
    pub item_id: ItemId,
    pub quantity: f64,
}

impl OrderLineInput {
    pub fn new(item_id: u32, quantity: f64) -> Self {
        Self {
            item_id: ItemId(item_id),
            quantity,
        }
    }
}

/// Typed snapshot of the order form at the moment review was triggered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderForm {
    pub table: Option<String>,
    #[serde(default, rename = "items")]
    pub lines: Vec<OrderLineInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub line_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub table: TableNumber,
    pub lines: Vec<OrderLine>,
    pub subtotal: f64,
}

impl OrderSummary {
    /// Total number of units across all lines.
    pub fn item_count(&self) -> f64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_number_trims_whitespace() {
        let table = TableNumber::parse("  4 ").unwrap();
        assert_eq!(table.as_str(), "4");
        assert_eq!(table.to_string(), "4");
    }

    #[test]
    fn test_table_number_rejects_blank() {
        assert!(TableNumber::parse("").is_none());
        assert!(TableNumber::parse("   ").is_none());
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId(42).to_string(), "42");
    }

    #[test]
    fn test_order_form_deserializes_items_key() {
        let json = r#"{"table":"7","items":[{"item_id":1,"quantity":2}]}"#;
        let form: OrderForm = serde_json::from_str(json).unwrap();

        assert_eq!(form.table.as_deref(), Some("7"));
        assert_eq!(form.lines, vec![OrderLineInput::new(1, 2.0)]);
    }

    #[test]
    fn test_order_form_items_default_to_empty() {
        let form: OrderForm = serde_json::from_str(r#"{"table":"7"}"#).unwrap();
        assert!(form.lines.is_empty());
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let summary = OrderSummary {
            table: TableNumber::parse("1").unwrap(),
            lines: vec![
                OrderLine {
                    item_id: ItemId(1),
                    name: "Burger".to_string(),
                    price: 9.5,
                    quantity: 2.0,
                    line_total: 19.0,
                },
                OrderLine {
                    item_id: ItemId(3),
                    name: "Fries".to_string(),
                    price: 3.25,
                    quantity: 1.0,
                    line_total: 3.25,
                },
            ],
            subtotal: 22.25,
        };

        assert_eq!(summary.item_count(), 3.0);
    }
}
