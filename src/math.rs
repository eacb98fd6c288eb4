use ndarray::{ArrayBase, Data, Ix1};

/// Calculates the arithmetic mean of a set of values.
///
/// # Parameters
///
/// - `values` - Observed values stored in a 1D array
///
/// # Returns
///
/// - `f64` - Mean of the values (0.0 when the array is empty)
///
/// # Examples
/// ```rust
/// use arbor::math::mean;
/// use ndarray::array;
///
/// let values = array![1.0, 2.0, 6.0];
/// assert!((mean(&values) - 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn mean<S>(values: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    if values.is_empty() {
        return 0.0;
    }

    values.sum() / values.len() as f64
}

/// Calculates the total sum of squares (SST).
///
/// SST measures the total variability in the data as the sum of squared
/// differences between each value and the mean of all values.
///
/// # Parameters
///
/// - `values` - Observed values stored in a 1D array
///
/// # Returns
///
/// - `f64` - Total sum of squares for the provided values
///
/// # Examples
/// ```rust
/// use arbor::math::sum_of_square_total;
/// use ndarray::array;
///
/// let values = array![1.0, 2.0, 3.0];
/// let sst = sum_of_square_total(&values);
/// // Mean is 2.0, so SST = (1-2)^2 + (2-2)^2 + (3-2)^2 = 1 + 0 + 1 = 2.0
/// assert!((sst - 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn sum_of_square_total<S>(values: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    if values.is_empty() {
        return 0.0;
    }

    let mean = mean(values);
    values.fold(0.0, |acc, &x| {
        let diff = x - mean;
        acc + diff * diff
    })
}

/// Calculates the population variance (mean squared error around the mean) of a set of values.
///
/// # Parameters
///
/// - `y` - Values for which to calculate the variance
///
/// # Returns
///
/// - `f64` - Variance of the input values (0.0 when the array is empty, and 0.0 for a single value)
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use arbor::math::variance;
///
/// let values = array![1.0, 2.0, 3.0];
/// // Mean is 2.0, so variance = ((1-2)^2 + (2-2)^2 + (3-2)^2) / 3 ~= 0.66667
/// assert!((variance(&values) - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[inline]
pub fn variance<S>(y: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    if y.is_empty() {
        return 0.0;
    }

    sum_of_square_total(y) / y.len() as f64
}

/// Calculates the entropy (natural logarithm) of a discrete distribution given as counts.
///
/// Counts of zero are skipped, so a distribution concentrated on a single value has entropy 0.
///
/// # Parameters
///
/// - `counts` - Number of occurrences of each distinct value
///
/// # Returns
///
/// - `f64` - Entropy in nats (0.0 when all counts are zero or the slice is empty)
///
/// # Examples
/// ```rust
/// use arbor::math::entropy_from_counts;
///
/// // Two equally likely values
/// let h = entropy_from_counts(&[7, 7]);
/// assert!((h - 2f64.ln()).abs() < 1e-12);
/// assert_eq!(entropy_from_counts(&[5]), 0.0);
/// ```
#[inline]
pub fn entropy_from_counts(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.ln()
        })
        .sum()
}
