use super::*;
use crate::math::{mean, variance};

/// Standardizes the numeric attribute columns to zero mean and unit variance
///
/// Categorical columns and the target (last column) are copied unchanged. Each numeric
/// attribute column is replaced by its z-score `(x - mean) / std`, using the population
/// standard deviation. A column with zero variance is only centred.
///
/// # Parameters
///
/// - `data` - Rows with the target in the last column
/// - `categorical` - One flag per column; `true` columns are left untouched
///
/// # Returns
///
/// * `Result<Array2<f64>, ModelError>` - The standardized copy of `data`
///
/// # Errors
///
/// - Returns `ModelError::InputValidationError` if the flags do not match the column count
///
/// # Example
/// ```rust
/// use arbor::utility::standardize::standardize_numeric;
/// use ndarray::array;
///
/// let data = array![[1.0, 0.0, 10.0], [3.0, 1.0, 20.0]];
/// let standardized = standardize_numeric(&data, &[false, true, false]).unwrap();
/// assert_eq!(standardized.column(0).to_vec(), vec![-1.0, 1.0]);
/// assert_eq!(standardized.column(1), data.column(1));
/// assert_eq!(standardized.column(2), data.column(2));
/// ```
pub fn standardize_numeric<S>(
    data: &ArrayBase<S, Ix2>,
    categorical: &[bool],
) -> Result<Array2<f64>, ModelError>
where
    S: Data<Elem = f64>,
{
    if categorical.len() != data.ncols() {
        return Err(ModelError::InputValidationError(format!(
            "Expected one categorical flag per column ({}), got {}",
            data.ncols(),
            categorical.len()
        )));
    }

    let mut standardized = data.to_owned();
    let n_attributes = data.ncols().saturating_sub(1);

    for (column, mut values) in standardized
        .axis_iter_mut(Axis(1))
        .enumerate()
        .take(n_attributes)
    {
        if categorical[column] {
            continue;
        }

        let mean = mean(&values);
        let std_dev = variance(&values).sqrt();
        if std_dev > 0.0 {
            values.mapv_inplace(|v| (v - mean) / std_dev);
        } else {
            values.mapv_inplace(|v| v - mean);
        }
    }

    Ok(standardized)
}
