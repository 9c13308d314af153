use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::order::{OrderForm, OrderLineInput};

// ============================================================================
// Order Form Fields
// ============================================================================
//
// Converts raw `name=value` form fields into an `OrderForm`. This is the only
// place that knows the `table` / `qty_<id>` naming convention.
//
// ============================================================================

pub const TABLE_FIELD: &str = "table";
pub const QUANTITY_PREFIX: &str = "qty_";

/// How malformed numbers in form fields and catalog attributes are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberPolicy {
    /// Malformed numbers count as zero (bad item ids are skipped). Logged.
    #[default]
    Lenient,
    /// Malformed numbers are rejected.
    Strict,
}

impl FromStr for NumberPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(NumberPolicy::Lenient),
            "strict" => Ok(NumberPolicy::Strict),
            other => Err(format!("unknown number policy '{}' (expected lenient or strict)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Invalid quantity '{value}' for {field}.")]
    MalformedQuantity { field: String, value: String },

    #[error("Invalid item id in field {field}.")]
    MalformedItemId { field: String },
}

/// Parse submitted fields, in submission order, into a typed form.
pub fn parse_form_fields(
    fields: &[(String, String)],
    policy: NumberPolicy,
) -> Result<OrderForm, FormError> {
    let mut form = OrderForm::default();

    for (key, value) in fields {
        if key == TABLE_FIELD {
            if form.table.is_none() {
                form.table = Some(value.clone());
            }
            continue;
        }

        let Some(suffix) = key.strip_prefix(QUANTITY_PREFIX) else {
            continue;
        };

        let item_id = match suffix.parse::<u32>() {
            Ok(id) => id,
            Err(_) => match policy {
                NumberPolicy::Lenient => {
                    tracing::warn!(field = %key, "Skipping quantity field with malformed item id");
                    continue;
                }
                NumberPolicy::Strict => {
                    return Err(FormError::MalformedItemId { field: key.clone() });
                }
            },
        };

        let quantity = match parse_number(value) {
            Some(quantity) => quantity,
            None => match policy {
                NumberPolicy::Lenient => {
                    tracing::warn!(field = %key, value = %value, "Malformed quantity treated as 0");
                    0.0
                }
                NumberPolicy::Strict => {
                    return Err(FormError::MalformedQuantity {
                        field: key.clone(),
                        value: value.clone(),
                    });
                }
            },
        };

        form.lines.push(OrderLineInput::new(item_id, quantity));
    }

    Ok(form)
}

/// Parse a numeric field value. Blank is 0; non-finite or garbage is `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
