use super::*;

/// Performs validation checks on the input data matrix.
///
/// This function validates that:
/// - The input data matrix has at least one row and one column
/// - The input data does not contain NaN or infinite values
///
/// # Parameters
///
/// - `x` - A 2D array of values where rows represent samples
///
/// # Returns
///
/// - `Ok(())` - If all validation checks pass
/// - `Err(ModelError::InputValidationError)` - If any validation check fails, with an informative error message
pub fn preliminary_check<S>(x: &ArrayBase<S, Ix2>) -> Result<(), ModelError>
where
    S: Data<Elem = f64>,
{
    if x.nrows() == 0 {
        return Err(ModelError::InputValidationError(
            "Input data is empty".to_string(),
        ));
    }

    if x.ncols() == 0 {
        return Err(ModelError::InputValidationError(
            "Input data has no columns".to_string(),
        ));
    }

    for (i, row) in x.outer_iter().enumerate() {
        for (j, &val) in row.iter().enumerate() {
            if !val.is_finite() {
                return Err(ModelError::InputValidationError(format!(
                    "Input data contains NaN or infinite value at position [{}][{}]",
                    i, j
                )));
            }
        }
    }

    Ok(())
}

/// Validates that there is exactly one categorical flag per data column.
///
/// # Parameters
///
/// - `categorical` - Flags marking categorical columns, target included
/// - `n_columns` - Number of columns of the data the flags describe
///
/// # Returns
///
/// - `Ok(())` - If the lengths match
/// - `Err(ModelError::InputValidationError)` - If they differ
pub fn validate_categorical_flags(categorical: &[bool], n_columns: usize) -> Result<(), ModelError> {
    if categorical.len() != n_columns {
        return Err(ModelError::InputValidationError(format!(
            "Expected one categorical flag per column ({}), got {}",
            n_columns,
            categorical.len()
        )));
    }

    Ok(())
}

/// Validates that the regression error threshold is non-negative and finite.
///
/// # Parameters
///
/// * `error_threshold` - The early-stop mean squared error to validate
///
/// # Returns
///
/// - `Ok(())` - If the threshold is valid
/// - `Err(ModelError::InputValidationError)` - If the threshold is negative, NaN, or infinite
pub fn validate_error_threshold(error_threshold: f64) -> Result<(), ModelError> {
    if error_threshold < 0.0 || !error_threshold.is_finite() {
        return Err(ModelError::InputValidationError(format!(
            "error_threshold must be non-negative and finite, got {}",
            error_threshold
        )));
    }

    Ok(())
}

/// Validates the width of a prediction row against the training width.
///
/// Prediction rows may carry the target column or leave it out.
///
/// # Parameters
///
/// - `width` - Number of values in the prediction row
/// - `n_columns` - Number of columns of the training data, target included
///
/// # Returns
///
/// - `Ok(())` - If `width` is `n_columns` or `n_columns - 1`
/// - `Err(ModelError::InputValidationError)` - Otherwise
pub fn validate_prediction_width(width: usize, n_columns: usize) -> Result<(), ModelError> {
    if width != n_columns && width + 1 != n_columns {
        return Err(ModelError::InputValidationError(format!(
            "Prediction rows must have {} or {} columns, got {}",
            n_columns.saturating_sub(1),
            n_columns,
            width
        )));
    }

    Ok(())
}
