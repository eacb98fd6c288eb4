use super::*;

/// Every `TUNING_STRIDE`-th row of the target ranking goes to the tuning set.
const TUNING_STRIDE: usize = 5;

/// Splits a dataset into a 20% tuning set and an 80% test set.
///
/// Rows are stably sorted by the target (last column). Sorted positions 0, 5, 10, ... form the
/// tuning set, which is used for pruning or threshold tuning; the remaining rows form the test
/// set used for cross-validation. Both sets keep the sorted order.
///
/// # Parameters
///
/// * `data` - Rows with the target in the last column
///
/// # Returns
///
/// - `Result<(Array2<f64>, Array2<f64>), ModelError>` - `(tuning, test)` if processing successfully
///
/// # Errors
///
/// - Returns `ModelError::InputValidationError` if `data` has no columns, fewer than 2 rows,
///   or a NaN target
///
/// # Example
/// ```rust
/// use arbor::utility::tuning_split::tuning_test_split;
/// use ndarray::Array2;
///
/// let data = Array2::from_shape_fn((10, 2), |(i, j)| if j == 1 { (9 - i) as f64 } else { i as f64 });
/// let (tuning, test) = tuning_test_split(data.view()).unwrap();
/// assert_eq!(tuning.nrows(), 2);
/// assert_eq!(test.nrows(), 8);
/// // targets 0 and 5 are picked
/// assert_eq!(tuning.column(1).to_vec(), vec![0.0, 5.0]);
/// ```
pub fn tuning_test_split(data: ArrayView2<f64>) -> Result<(Array2<f64>, Array2<f64>), ModelError> {
    if data.ncols() == 0 {
        return Err(ModelError::InputValidationError(
            "Cannot split data without a target column".to_string(),
        ));
    }

    if data.nrows() < 2 {
        return Err(ModelError::InputValidationError(format!(
            "At least 2 rows are needed to split off a tuning set, got {}",
            data.nrows()
        )));
    }

    let targets = data.column(data.ncols() - 1);
    if targets.iter().any(|v| v.is_nan()) {
        return Err(ModelError::InputValidationError(
            "Targets contain NaN values".to_string(),
        ));
    }

    let mut order: Vec<usize> = (0..data.nrows()).collect();
    order.sort_by(|&a, &b| targets[a].total_cmp(&targets[b]));

    let (tuning_rows, test_rows): (Vec<(usize, usize)>, Vec<(usize, usize)>) = order
        .into_iter()
        .enumerate()
        .partition(|&(position, _)| position % TUNING_STRIDE == 0);

    let rows_of = |picked: Vec<(usize, usize)>| -> Vec<usize> {
        picked.into_iter().map(|(_, row)| row).collect()
    };

    Ok((
        data.select(Axis(0), &rows_of(tuning_rows)),
        data.select(Axis(0), &rows_of(test_rows)),
    ))
}
