#[cfg(feature = "machine_learning")]
use crate::machine_learning::TreeKind;
use ndarray::prelude::*;
use ndarray::Data;

/// Calculates the Mean Squared Error between predicted and actual values.
///
/// Mean Squared Error measures the average of the squared differences between predicted values and ground truth values.
///
/// # Parameters
///
/// - `y_true` - Ground-truth values for each sample
/// - `y_pred` - Predicted values for each sample
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use arbor::metric::mean_squared_error;
///
/// let actual = array![3.0, -0.5, 2.0, 7.0];
/// let predicted = array![2.5, 0.0, 2.1, 7.8];
/// let mse = mean_squared_error(&actual, &predicted);
/// // MSE = (0.25 + 0.25 + 0.01 + 0.64) / 4 = 0.2875
/// assert!((mse - 0.2875).abs() < 1e-10);
/// ```
///
/// # Returns
///
/// - `f64` - Mean squared error (returns 0.0 when the input arrays are empty)
///
/// # Panics
///
/// - Panics if the two arrays have different lengths
pub fn mean_squared_error<S1, S2>(y_true: &ArrayBase<S1, Ix1>, y_pred: &ArrayBase<S2, Ix1>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if y_true.len() != y_pred.len() {
        panic!(
            "Input arrays must have the same length. Predicted: {}, Actual: {}",
            y_pred.len(),
            y_true.len()
        );
    }

    let n = y_true.len();
    if n == 0 {
        return 0.0;
    }

    let sum_squared_diff = y_true
        .iter()
        .zip(y_pred.iter())
        .fold(0.0, |acc, (&actual, &pred)| {
            let error = actual - pred;
            acc + error * error
        });

    sum_squared_diff / n as f64
}

/// Calculates classification accuracy.
///
/// Accuracy is the proportion of correctly predicted samples over all samples.
/// Labels are compared exactly, since class labels are numerically encoded categories.
///
/// # Parameters
///
/// - `predicted` - Predicted class labels
/// - `actual` - Ground-truth class labels
///
/// # Examples
/// ```rust
/// use arbor::metric::accuracy;
/// use ndarray::array;
///
/// let predicted = array![0.0, 1.0, 1.0];
/// let actual = array![0.0, 0.0, 1.0];
/// let acc = accuracy(&predicted, &actual);
/// assert!((acc - 2.0 / 3.0).abs() < 1e-12);
/// ```
///
/// # Returns
///
/// - `f64` - Accuracy in the range \[0.0, 1.0\] (0.0 when the input arrays are empty)
///
/// # Panics
///
/// - Panics if the two arrays have different lengths
pub fn accuracy<S1, S2>(predicted: &ArrayBase<S1, Ix1>, actual: &ArrayBase<S2, Ix1>) -> f64
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    if predicted.len() != actual.len() {
        panic!(
            "Input arrays must have the same length. Predicted: {}, Actual: {}",
            predicted.len(),
            actual.len()
        );
    }

    if predicted.is_empty() {
        return 0.0;
    }

    let correct_predictions = predicted
        .iter()
        .zip(actual.iter())
        .filter(|&(p, a)| p == a)
        .count();

    correct_predictions as f64 / predicted.len() as f64
}

/// A performance measure used to judge a tree against held-out rows.
///
/// The pruner only needs to know how to score a set of predictions and
/// which direction counts as an improvement.
pub trait PerformanceMeasure {
    /// Scores `predicted` against `actual`.
    fn measure(&self, predicted: ArrayView1<f64>, actual: ArrayView1<f64>) -> f64;

    /// Returns `true` if `candidate` is strictly worse than `baseline`.
    fn is_worse(&self, candidate: f64, baseline: f64) -> bool;
}

/// Built-in performance measures.
///
/// # Variants
///
/// - `Accuracy` - Share of exactly matching labels, higher is better
/// - `MeanSquaredError` - Mean squared residual, lower is better
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Accuracy,
    MeanSquaredError,
}

#[cfg(feature = "machine_learning")]
impl Metric {
    /// Picks accuracy for classification trees and mean squared error for regression trees.
    pub fn for_kind(kind: TreeKind) -> Self {
        match kind {
            TreeKind::Classification => Metric::Accuracy,
            TreeKind::Regression => Metric::MeanSquaredError,
        }
    }
}

impl PerformanceMeasure for Metric {
    fn measure(&self, predicted: ArrayView1<f64>, actual: ArrayView1<f64>) -> f64 {
        match self {
            Metric::Accuracy => accuracy(&predicted, &actual),
            Metric::MeanSquaredError => mean_squared_error(&actual, &predicted),
        }
    }

    fn is_worse(&self, candidate: f64, baseline: f64) -> bool {
        match self {
            Metric::Accuracy => candidate < baseline,
            Metric::MeanSquaredError => candidate > baseline,
        }
    }
}
