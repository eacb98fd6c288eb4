/// Error types that can occur during tree operations
///
/// # Variants
///
/// - `NotFitted` - Indicates that the tree has not been built yet
/// - `InputValidationError` - Indicates the input data provided does not meet the expected format, type, or validation rules
/// - `TreeError` - Indicates that there is something wrong with the tree structure
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error(
        "Model has not been fitted. Certain methods require the model to be fitted before use."
    )]
    NotFitted,
    #[error("Input validation error: {0}")]
    InputValidationError(String),
    #[error("Tree structure error: {0}")]
    TreeError(&'static str),
}
