// ============================================================================
// Order Domain - Review of a table order
// ============================================================================
//
// This module contains the order review core:
// - Value objects (ItemId, TableNumber, OrderLine, OrderSummary)
// - Catalog (item id -> name/price lookup)
// - Errors (ValidationError enum)
// - Review (review_order, the pure computation)
//
// ============================================================================

pub mod value_objects;
pub mod catalog;
pub mod errors;
pub mod review;

// Re-export for convenience
pub use value_objects::*;
pub use catalog::*;
pub use errors::*;
pub use review::*;
