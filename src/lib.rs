/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value
/// of the specified field. The generated method includes appropriate documentation
/// describing the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_impurity)
/// - `$field_name` - The name of the field to access (e.g., impurity)
/// - `$return_type` - The return type of the getter method
///
/// # Generated Method
///
/// The macro generates a method that returns the field value,
/// with documentation that describes what field is being accessed.
#[cfg(feature = "machine_learning")]
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// A macro that generates a public getter method returning a borrowed view of a field.
///
/// The field is exposed through `as_ref`, so an `Option<T>` field is returned as
/// `Option<&T>` and a `Vec<T>` field as `&[T]`.
///
/// # Parameters
///
/// - `$method_name` - The identifier for the generated getter method name
/// - `$field_name` - The identifier of the struct field to access
/// - `$return_type` - The type expression for the return value
///
/// # Generated Method
///
/// The macro generates a method that returns the field through `as_ref`,
/// with documentation that describes what field is being accessed
#[cfg(feature = "machine_learning")]
macro_rules! get_field_as_ref {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field as a reference")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name.as_ref()
        }
    };
}

/// Error type shared by every fallible operation of the crate.
///
/// # Example
/// ```rust
/// use arbor::error::ModelError;
/// use arbor::machine_learning::DecisionTree;
///
/// let tree = DecisionTree::default();
/// assert_eq!(tree.predict_one(&[0.0]), Err(ModelError::NotFitted));
/// ```
pub mod error;

/// Module `math` contains the statistics the tree induction relies on.
///
/// # Functions
/// - `mean` - Arithmetic mean of a set of values
/// - `sum_of_square_total` - Total variability measurement (SST)
/// - `variance` - Population variance, the mean squared error around the mean
/// - `entropy_from_counts` - Entropy (natural logarithm) of a distribution given as counts
///
/// # Example
/// ```rust
/// use arbor::math::{entropy_from_counts, variance};
/// use ndarray::array;
///
/// let h = entropy_from_counts(&[9, 5]);
/// assert!(h > 0.0);
///
/// let v = variance(&array![1.0, 2.0, 3.0]);
/// assert!((v - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[cfg(feature = "math")]
pub mod math;

/// Module `machine_learning` provides decision trees and their cross-validation.
///
/// # Decision Trees
/// - **DecisionTree**: Classification (gain ratio) and regression (residual sum of squares)
///   trees over mixed categorical and numeric columns, with multi-way categorical splits,
///   median binary numeric splits and reduced-error pruning
/// - **DecisionTreeParams**: Induction hyperparameters
/// - **FoldFilter**: Selection of one fold's rows for prediction
///
/// # Cross-Validation
/// - `cross_validate` - Stratified k-fold evaluation with optional pruning
/// - `tune_error_threshold` - Search of the regression early-stop threshold
///
/// # Examples
/// ```rust
/// use arbor::machine_learning::*;
/// use arbor::metric::Metric;
/// use ndarray::array;
///
/// let data = array![[0.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [0.0, 0.0, 0.0]];
/// let mut tree = DecisionTree::new(DecisionTreeParams::default());
/// tree.fit(data.view(), &[true, true, true]).unwrap();
///
/// let pruned = tree.prune(data.view(), &Metric::Accuracy).unwrap();
/// assert_eq!(pruned, 0);
/// assert_eq!(tree.predict_one(&[1.0, 0.0]).unwrap(), 1.0);
/// ```
#[cfg(feature = "machine_learning")]
pub mod machine_learning;

/// A convenience module that re-exports the most commonly used types and functions from this crate.
///
/// # Examples
/// ```rust
/// use arbor::prelude::*;
///
/// let (_, data, categorical) = load_weather();
/// let mut tree = DecisionTree::default();
/// tree.fit(data.view(), categorical).unwrap();
/// ```
pub mod prelude;

/// Data preparation around tree induction.
///
/// # Functions
/// - `stratified_fold_assignment` - Target-sorted round-robin assignment of rows to k folds
/// - `fold_sizes` - Row count per fold of an assignment
/// - `tuning_test_split` - Deterministic 20% tuning / 80% test split
/// - `standardize_numeric` - Z-score standardization of numeric attribute columns
/// - `impute_column_mean` - Mean imputation of missing markers
///
/// # Examples
/// ```rust
/// use arbor::utility::*;
/// use ndarray::array;
///
/// let targets = array![0.0, 1.0, 0.0, 1.0];
/// let folds = stratified_fold_assignment(&targets, 2).unwrap();
/// assert_eq!(fold_sizes(&folds, 2), vec![2, 2]);
/// ```
#[cfg(feature = "utility")]
pub mod utility;

/// Performance measures used to prune trees and report cross-validation results.
///
/// # Functions and Types
/// - **accuracy**: Share of exactly matching class labels
/// - **mean_squared_error**: Average of squared differences between predicted and actual values
/// - **PerformanceMeasure**: Scoring trait with a direction (`is_worse`)
/// - **Metric**: Built-in measures implementing `PerformanceMeasure`
///
/// # Examples
/// ```rust
/// use arbor::metric::*;
/// use ndarray::array;
///
/// let predicted = array![1.0, 0.0, 1.0];
/// let actual = array![1.0, 1.0, 1.0];
/// let score = Metric::Accuracy.measure(predicted.view(), actual.view());
/// assert!((score - 2.0 / 3.0).abs() < 1e-12);
/// assert!(Metric::Accuracy.is_worse(0.5, score));
/// ```
#[cfg(feature = "metric")]
pub mod metric;

/// Bundled datasets for experimentation.
///
/// # Available Datasets
/// - **weather**: The 14-row "play tennis" set (4 categorical attributes, binary target)
///
/// # Data Format
/// Datasets return `(headers, data, categorical)` where the target is the last column of
/// `data` and `categorical` flags every column, target included.
///
/// # Examples
/// ```rust
/// use arbor::dataset::weather;
///
/// let (headers, data, categorical) = weather::load_weather();
/// println!("Dataset shape: {:?}", data.shape());
/// println!("Columns: {:?}", headers);
/// assert_eq!(categorical.len(), data.ncols());
/// ```
#[cfg(feature = "dataset")]
pub mod dataset;
