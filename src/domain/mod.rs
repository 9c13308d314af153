// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Pure order-review logic. Nothing in here knows about form field names,
// markup, or HTTP; the `ui` layer translates those into typed values before
// calling in.
//
// ============================================================================

pub mod order;
