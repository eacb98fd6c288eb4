use super::*;

/// Replaces missing markers in one column by the mean of the column's present values.
///
/// # Parameters
///
/// - `data` - Data modified in place
/// - `column` - Index of the column to repair
/// - `is_missing` - Predicate recognising a missing marker (for example `|v| v < 0.0`)
/// - `round` - Round the mean to the nearest integer, for integer-coded attributes.
///   Halves round towards positive infinity, so `-1.5` becomes `-1.0`
///
/// # Returns
///
/// * `Result<f64, ModelError>` - The value written into the missing cells
///
/// # Errors
///
/// - Returns `ModelError::InputValidationError` if `column` is out of range or the column has
///   no present value to average
///
/// # Example
/// ```rust
/// use arbor::utility::impute::impute_column_mean;
/// use ndarray::array;
///
/// let mut data = array![[1.0, 0.0], [-1.0, 1.0], [2.0, 1.0]];
/// let filled = impute_column_mean(&mut data, 0, |v| v < 0.0, true).unwrap();
/// assert_eq!(filled, 2.0);
/// assert_eq!(data[[1, 0]], 2.0);
/// ```
pub fn impute_column_mean<F>(
    data: &mut Array2<f64>,
    column: usize,
    is_missing: F,
    round: bool,
) -> Result<f64, ModelError>
where
    F: Fn(f64) -> bool,
{
    if column >= data.ncols() {
        return Err(ModelError::InputValidationError(format!(
            "Column {} is out of range for data with {} columns",
            column,
            data.ncols()
        )));
    }

    let mut values = data.column_mut(column);
    let (sum, count) = values
        .iter()
        .filter(|&&v| !is_missing(v))
        .fold((0.0, 0usize), |(sum, count), &v| (sum + v, count + 1));

    if count == 0 {
        return Err(ModelError::InputValidationError(format!(
            "Column {} has no present values to average",
            column
        )));
    }

    let mean = sum / count as f64;
    let fill = if round { (mean + 0.5).floor() } else { mean };

    values.mapv_inplace(|v| if is_missing(v) { fill } else { v });

    Ok(fill)
}
