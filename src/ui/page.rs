use crate::domain::order::{review_order, Catalog, OrderSummary, ValidationError};

use super::form::{parse_form_fields, NumberPolicy};
use super::render::render_summary;

// ============================================================================
// Review Page
// ============================================================================
//
// Binds the "review" trigger to the pure core:
//   fields -> OrderForm -> review_order -> render -> summary region
//
// Any failure raises exactly one blocking alert and leaves the region as it
// was before the trigger.
//
// ============================================================================

/// Output region of the page. Starts hidden and empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRegion {
    pub hidden: bool,
    pub content: String,
}

impl Default for SummaryRegion {
    fn default() -> Self {
        Self {
            hidden: true,
            content: String::new(),
        }
    }
}

/// Synchronous, blocking user notification.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Collects alerts in order; used by the HTTP binding and tests.
impl Notifier for Vec<String> {
    fn alert(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    Rendered(OrderSummary),
    /// Review was blocked; carries the alert text shown to the user.
    Rejected(RejectReason, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    MissingTable,
    NoItems,
    MalformedInput,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::MissingTable => "missing_table",
            RejectReason::NoItems => "no_items",
            RejectReason::MalformedInput => "malformed_input",
        }
    }
}

impl From<&ValidationError> for RejectReason {
    fn from(error: &ValidationError) -> Self {
        match error {
            ValidationError::MissingTable => RejectReason::MissingTable,
            ValidationError::NoItems => RejectReason::NoItems,
        }
    }
}

#[derive(Debug, Default)]
pub struct ReviewPage {
    region: SummaryRegion,
}

impl ReviewPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> &SummaryRegion {
        &self.region
    }

    /// Handle one review trigger against the current field values.
    pub fn on_review<N: Notifier + ?Sized>(
        &mut self,
        fields: &[(String, String)],
        catalog: &Catalog,
        policy: NumberPolicy,
        notifier: &mut N,
    ) -> ReviewOutcome {
        let form = match parse_form_fields(fields, policy) {
            Ok(form) => form,
            Err(e) => return reject(notifier, RejectReason::MalformedInput, e.to_string()),
        };

        let summary = match review_order(&form, catalog) {
            Ok(summary) => summary,
            Err(e) => return reject(notifier, RejectReason::from(&e), e.to_string()),
        };

        self.region.content = render_summary(&summary);
        self.region.hidden = false;

        ReviewOutcome::Rendered(summary)
    }
}

fn reject<N: Notifier + ?Sized>(notifier: &mut N, reason: RejectReason, message: String) -> ReviewOutcome {
    tracing::info!(reason = reason.as_str(), "Order review rejected: {}", message);
    notifier.alert(&message);
    ReviewOutcome::Rejected(reason, message)
}
