use super::*;

/// Assigns every row to one of `k` folds, balancing the target distribution across folds.
///
/// Row indices are stably sorted by target value and fold indices are dealt round-robin
/// over the sorted order, so each fold receives every k-th row of the target ranking.
///
/// # Parameters
///
/// - `targets` - Target value of every row
/// - `k` - Number of folds, between 2 and the number of rows
///
/// # Returns
///
/// - `Result<Vec<usize>, ModelError>` - Fold index in `0..k` for every row, in row order
///
/// # Errors
///
/// - Returns `ModelError::InputValidationError` if `k < 2`, if `k` exceeds the number of rows,
///   or if a target is NaN
///
/// # Example
/// ```rust
/// use arbor::utility::k_fold::stratified_fold_assignment;
/// use ndarray::array;
///
/// let targets = array![3.0, 1.0, 2.0, 0.0];
/// let folds = stratified_fold_assignment(&targets, 2).unwrap();
/// // sorted order is rows 3, 1, 2, 0
/// assert_eq!(folds, vec![1, 1, 0, 0]);
/// ```
pub fn stratified_fold_assignment<S>(
    targets: &ArrayBase<S, Ix1>,
    k: usize,
) -> Result<Vec<usize>, ModelError>
where
    S: Data<Elem = f64>,
{
    let n_rows = targets.len();
    if k < 2 || k > n_rows {
        return Err(ModelError::InputValidationError(format!(
            "k must be between 2 and the number of rows ({}), got {}",
            n_rows, k
        )));
    }

    if targets.iter().any(|v| v.is_nan()) {
        return Err(ModelError::InputValidationError(
            "Targets contain NaN values".to_string(),
        ));
    }

    let mut order: Vec<usize> = (0..n_rows).collect();
    order.sort_by(|&a, &b| targets[a].total_cmp(&targets[b]));

    let mut assignment = vec![0; n_rows];
    for (position, &row) in order.iter().enumerate() {
        assignment[row] = position % k;
    }

    Ok(assignment)
}

/// Number of rows in each fold of an assignment.
///
/// # Parameters
///
/// - `assignment` - Fold index of every row
/// - `k` - Number of folds
///
/// # Returns
///
/// - `Vec<usize>` - Row count per fold; indices outside `0..k` are ignored
pub fn fold_sizes(assignment: &[usize], k: usize) -> Vec<usize> {
    let mut sizes = vec![0; k];
    for &fold in assignment {
        if let Some(size) = sizes.get_mut(fold) {
            *size += 1;
        }
    }
    sizes
}
