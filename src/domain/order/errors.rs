// ============================================================================
// Order Review Errors
// ============================================================================
//
// Display text is shown to the user verbatim as the blocking notification.
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a table number.")]
    MissingTable,

    #[error("Please choose at least one item.")]
    NoItems,
}

