use super::catalog::Catalog;
use super::errors::ValidationError;
use super::value_objects::{OrderForm, OrderLine, OrderSummary, TableNumber};

// ============================================================================
// Order Review
// ============================================================================
//
// Form state + catalog -> summary. Pure: same inputs always give the same
// summary, and nothing outside the return value is touched.
//
// ============================================================================

/// Validate the form and price every selected line.
///
/// The table check runs first, so a form with neither a table nor items
/// reports `MissingTable`. Lines keep the order they appear in the form and
/// the subtotal is summed in that same order.
pub fn review_order(form: &OrderForm, catalog: &Catalog) -> Result<OrderSummary, ValidationError> {
    let table = form
        .table
        .as_deref()
        .and_then(TableNumber::parse)
        .ok_or(ValidationError::MissingTable)?;

    let lines: Vec<OrderLine> = form
        .lines
        .iter()
        .filter(|input| input.quantity.is_finite() && input.quantity > 0.0)
        .map(|input| {
            let entry = catalog.lookup(input.item_id);
            OrderLine {
                item_id: input.item_id,
                line_total: entry.price * input.quantity,
                name: entry.name,
                price: entry.price,
                quantity: input.quantity,
            }
        })
        .collect();

    if lines.is_empty() {
        return Err(ValidationError::NoItems);
    }

    let subtotal = lines.iter().fold(0.0, |acc, line| acc + line.line_total);

    tracing::debug!(
        table = %table,
        lines = lines.len(),
        subtotal,
        "Order reviewed"
    );

    Ok(OrderSummary {
        table,
        lines,
        subtotal,
    })
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{CatalogEntry, ItemId, OrderLineInput};

    fn menu() -> Catalog {
        [
            (ItemId(1), CatalogEntry::new("Burger", 9.5)),
            (ItemId(2), CatalogEntry::new("Salad", 7.0)),
            (ItemId(3), CatalogEntry::new("Fries", 3.25)),
        ]
        .into_iter()
        .collect()
    }

    fn form(table: Option<&str>, lines: &[(u32, f64)]) -> OrderForm {
        OrderForm {
            table: table.map(str::to_string),
            lines: lines
                .iter()
                .map(|&(id, qty)| OrderLineInput::new(id, qty))
                .collect(),
        }
    }

    #[test]
    fn test_burger_and_fries_example() {
        let summary = review_order(&form(Some("4"), &[(1, 2.0), (2, 0.0), (3, 1.0)]), &menu()).unwrap();

        assert_eq!(summary.table.as_str(), "4");
        assert_eq!(summary.lines.len(), 2);

        assert_eq!(summary.lines[0].name, "Burger");
        assert_eq!(summary.lines[0].quantity, 2.0);
        assert_eq!(summary.lines[0].line_total, 19.0);

        assert_eq!(summary.lines[1].name, "Fries");
        assert_eq!(summary.lines[1].line_total, 3.25);

        assert_eq!(summary.subtotal, 22.25);
    }

    #[test]
    fn test_missing_table_is_rejected() {
        let result = review_order(&form(None, &[(1, 1.0)]), &menu());
        assert_eq!(result, Err(ValidationError::MissingTable));
    }

    #[test]
    fn test_blank_table_is_rejected() {
        let result = review_order(&form(Some("  "), &[(1, 1.0)]), &menu());
        assert_eq!(result, Err(ValidationError::MissingTable));
    }

    #[test]
    fn test_table_checked_before_items() {
        let result = review_order(&form(Some(""), &[]), &menu());
        assert_eq!(result, Err(ValidationError::MissingTable));
    }

    #[test]
    fn test_no_positive_quantities_is_rejected() {
        let result = review_order(&form(Some("4"), &[(1, 0.0), (2, -3.0)]), &menu());
        assert_eq!(result, Err(ValidationError::NoItems));

        let result = review_order(&form(Some("4"), &[]), &menu());
        assert_eq!(result, Err(ValidationError::NoItems));
    }

    #[test]
    fn test_non_finite_quantities_are_dropped() {
        let result = review_order(&form(Some("4"), &[(1, f64::NAN), (3, f64::INFINITY)]), &menu());
        assert_eq!(result, Err(ValidationError::NoItems));
    }

    #[test]
    fn test_unknown_item_gets_placeholder_and_zero_total() {
        let summary = review_order(&form(Some("9"), &[(42, 3.0)]), &menu()).unwrap();

        assert_eq!(summary.lines[0].name, "Item 42");
        assert_eq!(summary.lines[0].price, 0.0);
        assert_eq!(summary.lines[0].line_total, 0.0);
        assert_eq!(summary.subtotal, 0.0);
    }

    #[test]
    fn test_lines_keep_form_order() {
        let summary = review_order(&form(Some("2"), &[(3, 1.0), (1, 1.0), (2, 1.0)]), &menu()).unwrap();
        let ids: Vec<u32> = summary.lines.iter().map(|l| l.item_id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_duplicate_item_fields_produce_separate_lines() {
        let summary = review_order(&form(Some("2"), &[(1, 1.0), (1, 2.0)]), &menu()).unwrap();

        assert_eq!(summary.lines.len(), 2);
        assert_eq!(summary.subtotal, 28.5);
    }

    #[test]
    fn test_subtotal_equals_sum_of_line_totals() {
        let summary = review_order(&form(Some("5"), &[(1, 3.0), (2, 2.0), (3, 4.0)]), &menu()).unwrap();
        let sum: f64 = summary.lines.iter().map(|l| l.line_total).sum();
        assert_eq!(summary.subtotal, sum);
    }

    #[test]
    fn test_review_is_deterministic() {
        let order = form(Some("4"), &[(1, 2.0), (3, 1.0)]);
        let catalog = menu();

        assert_eq!(review_order(&order, &catalog), review_order(&order, &catalog));
    }

    #[test]
    fn test_fractional_quantity_is_priced() {
        let summary = review_order(&form(Some("1"), &[(1, 0.5)]), &menu()).unwrap();
        assert_eq!(summary.lines[0].line_total, 4.75);
    }
}
