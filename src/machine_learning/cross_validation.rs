use super::*;
use crate::utility::k_fold::stratified_fold_assignment;

/// Settings for k-fold cross-validation of decision trees.
///
/// # Fields
///
/// - `k` - Number of folds
/// - `tree` - Hyperparameters of every tree grown during validation
/// - `prune` - Prune each classification tree against the pruning set before it is evaluated.
///   Regression trees are never pruned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossValidationParams {
    pub k: usize,
    pub tree: DecisionTreeParams,
    pub prune: bool,
}

/// Five folds, default tree parameters, pruning on.
impl Default for CrossValidationParams {
    fn default() -> Self {
        Self {
            k: 5,
            tree: DecisionTreeParams::default(),
            prune: true,
        }
    }
}

/// Outcome of a cross-validation run.
///
/// # Fields
///
/// - `predictions` - Out-of-fold prediction for every row, in row order
/// - `fold_assignment` - Fold index of every row
/// - `performance` - `metric` over all out-of-fold predictions
/// - `metric` - Accuracy for classification, mean squared error for regression
#[derive(Debug, Clone, PartialEq)]
pub struct CrossValidationReport {
    pub predictions: Array1<f64>,
    pub fold_assignment: Vec<usize>,
    pub performance: f64,
    pub metric: Metric,
}

/// Result of searching the regression error threshold.
///
/// # Fields
///
/// - `best_threshold` - Candidate with the lowest cross-validated mean squared error
/// - `best_performance` - Mean squared error of `best_threshold`
/// - `scores` - `(threshold, mean squared error)` for every candidate, in the order given
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdSearch {
    pub best_threshold: f64,
    pub best_performance: f64,
    pub scores: Vec<(f64, f64)>,
}

/// Cross-validates decision trees on `data`.
///
/// Rows are assigned to folds with `stratified_fold_assignment`. For every fold a tree is
/// grown on the rows of the other folds, pruned against `pruning_set` when the target is
/// categorical and `params.prune` is set, and used to predict the rows of the fold. Folds
/// are processed in parallel, each with its own tree.
///
/// # Parameters
///
/// - `data` - Rows with the target in the last column
/// - `categorical` - One flag per column of `data`
/// - `pruning_set` - Held-out rows for reduced-error pruning, target included
/// - `params` - Fold count, tree parameters and pruning switch
///
/// # Returns
///
/// * `Result<CrossValidationReport, ModelError>` - Out-of-fold predictions and their performance
///
/// # Example
/// ```rust
/// use arbor::dataset::weather::load_weather;
/// use arbor::machine_learning::{CrossValidationParams, cross_validate};
///
/// let (_, data, categorical) = load_weather();
/// let params = CrossValidationParams { k: 2, prune: false, ..Default::default() };
/// let report = cross_validate(data.view(), categorical, None, &params).unwrap();
/// assert_eq!(report.predictions.len(), 14);
/// assert!((0.0..=1.0).contains(&report.performance));
/// ```
pub fn cross_validate(
    data: ArrayView2<f64>,
    categorical: &[bool],
    pruning_set: Option<ArrayView2<f64>>,
    params: &CrossValidationParams,
) -> Result<CrossValidationReport, ModelError> {
    preliminary_check(&data)?;
    validate_categorical_flags(categorical, data.ncols())?;
    validate_error_threshold(params.tree.error_threshold)?;

    let kind = TreeKind::from_flags(categorical).ok_or_else(|| {
        ModelError::InputValidationError("Categorical flags are empty".to_string())
    })?;
    let metric = Metric::for_kind(kind);
    let actual = data.column(data.ncols() - 1);

    let fold_assignment = stratified_fold_assignment(&actual, params.k)?;
    let prune_with = pruning_set.filter(|_| params.prune && kind == TreeKind::Classification);

    let folds: Result<Vec<(Vec<usize>, Array1<f64>)>, ModelError> = (0..params.k)
        .into_par_iter()
        .map(|fold| {
            let training_rows: Vec<usize> = fold_assignment
                .iter()
                .enumerate()
                .filter(|&(_, &f)| f != fold)
                .map(|(row, _)| row)
                .collect();
            let training = data.select(Axis(0), &training_rows);

            let mut tree = DecisionTree::new(params.tree);
            tree.fit(training.view(), categorical)?;

            if let Some(pruning_set) = prune_with {
                tree.prune(pruning_set, &metric)?;
            }

            let filter = FoldFilter::new(&fold_assignment, fold);
            let predictions = tree.predict_fold(data, &filter)?;
            info!(
                "fold {}: trained on {} rows, predicted {} held-out rows with {} nodes",
                fold,
                training_rows.len(),
                predictions.len(),
                tree.node_count()?
            );

            Ok((filter.selected_rows(), predictions))
        })
        .collect();

    let mut predictions = Array1::zeros(data.nrows());
    for (rows, fold_predictions) in folds? {
        for (row, &prediction) in rows.into_iter().zip(fold_predictions.iter()) {
            predictions[row] = prediction;
        }
    }

    let performance = metric.measure(predictions.view(), actual);
    info!(
        "{}-fold cross-validation of {:?} trees: {:?} = {:.6}",
        params.k, kind, metric, performance
    );

    Ok(CrossValidationReport {
        predictions,
        fold_assignment,
        performance,
        metric,
    })
}

/// Picks the regression error threshold with the lowest cross-validated mean squared error.
///
/// Every candidate is evaluated with `k`-fold cross-validation on `data` (usually the tuning
/// set). Ties go to the earlier candidate.
///
/// # Parameters
///
/// - `data` - Rows with a continuous target in the last column
/// - `categorical` - One flag per column of `data`; the last flag must be `false`
/// - `candidates` - Error thresholds to try
/// - `k` - Number of folds
///
/// # Returns
///
/// * `Result<ThresholdSearch, ModelError>` - The winning threshold and every candidate's score
pub fn tune_error_threshold(
    data: ArrayView2<f64>,
    categorical: &[bool],
    candidates: &[f64],
    k: usize,
) -> Result<ThresholdSearch, ModelError> {
    if TreeKind::from_flags(categorical) != Some(TreeKind::Regression) {
        return Err(ModelError::InputValidationError(
            "Error threshold tuning needs a continuous target".to_string(),
        ));
    }

    if candidates.is_empty() {
        return Err(ModelError::InputValidationError(
            "No error threshold candidates given".to_string(),
        ));
    }

    let mut scores = Vec::with_capacity(candidates.len());
    for &error_threshold in candidates {
        let params = CrossValidationParams {
            k,
            tree: DecisionTreeParams { error_threshold },
            prune: false,
        };
        let report = cross_validate(data, categorical, None, &params)?;
        debug!(
            "error threshold {}: mean squared error {:.6}",
            error_threshold, report.performance
        );
        scores.push((error_threshold, report.performance));
    }

    let (best_threshold, best_performance) = scores.iter().skip(1).fold(
        scores[0],
        |best, &candidate| {
            if candidate.1 < best.1 { candidate } else { best }
        },
    );
    info!(
        "best error threshold {} with mean squared error {:.6}",
        best_threshold, best_performance
    );

    Ok(ThresholdSearch {
        best_threshold,
        best_performance,
        scores,
    })
}
