// ============================================================================
// UI Binding Layer
// ============================================================================
//
// Everything that knows about the page: form field naming, catalog markup
// attributes, summary markup, and the review trigger itself.
//
// ============================================================================

pub mod form;
pub mod catalog;
pub mod render;
pub mod page;

pub use form::NumberPolicy;
pub use catalog::load_catalog;
pub use page::{RejectReason, ReviewOutcome, ReviewPage};
