use super::*;

mod builder;
mod frequency;
mod node;
mod predict;
mod prune;
/// Split scoring and row partitioning used while growing a tree
pub mod split;

pub use frequency::{FrequencyTable, ValueCounts};
pub use node::{Branch, CategoryKey, Node, NodeKind};

/// Task solved by a tree, fixed by the categorical flag of the target column.
///
/// # Variants
///
/// - `Classification` - Categorical target; splits maximise the gain ratio and leaves hold the majority class
/// - `Regression` - Continuous target; splits minimise the residual sum of squares and leaves hold the mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Classification,
    Regression,
}

impl TreeKind {
    /// Reads the tree kind off the last flag, or `None` for an empty flag vector.
    pub fn from_flags(categorical: &[bool]) -> Option<Self> {
        categorical.last().map(|&is_categorical| {
            if is_categorical {
                TreeKind::Classification
            } else {
                TreeKind::Regression
            }
        })
    }
}

/// Hyperparameters for decision tree induction.
///
/// # Fields
///
/// - `error_threshold` - A regression node whose mean squared error is at or below this value
///   becomes a leaf. Ignored by classification trees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionTreeParams {
    pub error_threshold: f64,
}

/// Grows regression trees until every node is exact (`error_threshold = 0.0`).
impl Default for DecisionTreeParams {
    fn default() -> Self {
        Self {
            error_threshold: 0.0,
        }
    }
}

/// Selects the rows of one fold out of a fold assignment.
///
/// # Fields
///
/// - `assignment` - Fold index of every row
/// - `fold` - The fold whose rows are selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldFilter<'a> {
    pub assignment: &'a [usize],
    pub fold: usize,
}

impl<'a> FoldFilter<'a> {
    pub fn new(assignment: &'a [usize], fold: usize) -> Self {
        Self { assignment, fold }
    }

    /// Indices of the selected rows, ascending.
    pub fn selected_rows(&self) -> Vec<usize> {
        self.assignment
            .iter()
            .enumerate()
            .filter(|&(_, &fold)| fold == self.fold)
            .map(|(row, _)| row)
            .collect()
    }
}

/// Decision tree over mixed categorical and numeric columns.
///
/// Classification trees choose the column with the highest gain ratio; regression trees
/// choose the column with the lowest residual sum of squares. Categorical columns split
/// into one child per observed value, numeric columns split in two at the median row.
/// After fitting, the tree can be simplified with reduced-error pruning against held-out
/// rows; pruning only flags nodes, so it can be undone with `reset_pruning`.
///
/// Training data carries the target in its last column. Rows passed for prediction may
/// include or omit that column.
///
/// # Fields
///
/// - `params` - Induction hyperparameters
/// - `categorical` - One flag per column, target included; `true` marks a categorical column
/// - `n_columns` - Width of the training data, target included
/// - `root` - The root node, or `None` if the tree has not been fitted
///
/// # Example
/// ```rust
/// use arbor::machine_learning::{DecisionTree, DecisionTreeParams};
/// use ndarray::array;
///
/// // outlook, windy, play
/// let data = array![
///     [0.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
///     [1.0, 0.0, 1.0],
///     [2.0, 0.0, 1.0],
///     [2.0, 1.0, 0.0],
/// ];
/// let flags = [true, true, true];
///
/// let mut tree = DecisionTree::new(DecisionTreeParams::default());
/// tree.fit(data.view(), &flags).unwrap();
///
/// let predictions = tree.predict(data.view()).unwrap();
/// assert_eq!(predictions, data.column(2));
/// println!("{}", tree.generate_tree_structure().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree {
    params: DecisionTreeParams,
    categorical: Vec<bool>,
    n_columns: usize,
    root: Option<Node>,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new(DecisionTreeParams::default())
    }
}

impl DecisionTree {
    /// Creates an unfitted tree.
    ///
    /// # Parameters
    ///
    /// * `params` - Induction hyperparameters
    ///
    /// # Returns
    ///
    /// * `DecisionTree` - A new untrained `DecisionTree` instance
    pub fn new(params: DecisionTreeParams) -> Self {
        Self {
            params,
            categorical: Vec::new(),
            n_columns: 0,
            root: None,
        }
    }

    get_field!(get_parameters, params, DecisionTreeParams);
    get_field!(get_n_columns, n_columns, usize);
    get_field_as_ref!(get_categorical_flags, categorical, &[bool]);
    get_field_as_ref!(get_root, root, Option<&Node>);

    /// Task of the fitted tree, or `None` before fitting.
    pub fn get_kind(&self) -> Option<TreeKind> {
        TreeKind::from_flags(&self.categorical)
    }

    /// Builds the tree from `data`, replacing any previous fit.
    ///
    /// # Parameters
    ///
    /// - `data` - Training rows with the target in the last column
    /// - `categorical` - One flag per column of `data`; the last flag decides between
    ///   classification and regression
    ///
    /// # Returns
    ///
    /// * `Result<&mut Self, ModelError>` - A mutable reference to `self` for method chaining,
    ///   or `ModelError::InputValidationError` for malformed inputs
    pub fn fit(
        &mut self,
        data: ArrayView2<f64>,
        categorical: &[bool],
    ) -> Result<&mut Self, ModelError> {
        preliminary_check(&data)?;
        validate_categorical_flags(categorical, data.ncols())?;
        validate_error_threshold(self.params.error_threshold)?;

        let kind = TreeKind::from_flags(categorical).ok_or_else(|| {
            ModelError::InputValidationError("Categorical flags are empty".to_string())
        })?;

        let root = builder::grow(data.to_owned(), categorical, kind, &self.params, 0);
        debug!(
            "fitted {:?} tree on {} rows: {} nodes, {} leaves, depth {}",
            kind,
            data.nrows(),
            root.node_count(),
            root.leaf_count(),
            root.depth()
        );

        self.categorical = categorical.to_vec();
        self.n_columns = data.ncols();
        self.root = Some(root);

        Ok(self)
    }

    fn fitted_root(&self) -> Result<&Node, ModelError> {
        self.root.as_ref().ok_or(ModelError::NotFitted)
    }

    /// Predicts the target of a single row.
    ///
    /// # Parameters
    ///
    /// * `row` - Attribute values, with or without the trailing target value
    ///
    /// # Returns
    ///
    /// * `Result<f64, ModelError>` - The predicted class or value, `ModelError::NotFitted`
    ///   before fitting, or `ModelError::InputValidationError` for a row of the wrong width
    pub fn predict_one(&self, row: &[f64]) -> Result<f64, ModelError> {
        let root = self.fitted_root()?;
        validate_prediction_width(row.len(), self.n_columns)?;

        predict::traverse(root, &ArrayView1::from(row))
    }

    /// Predicts every row of `data` in parallel.
    ///
    /// # Parameters
    ///
    /// * `data` - Rows to predict, with or without the target column
    ///
    /// # Returns
    ///
    /// * `Result<Array1<f64>, ModelError>` - One prediction per row, in row order
    pub fn predict(&self, data: ArrayView2<f64>) -> Result<Array1<f64>, ModelError> {
        let root = self.fitted_root()?;
        validate_prediction_width(data.ncols(), self.n_columns)?;

        let predictions: Result<Vec<f64>, ModelError> = data
            .axis_iter(Axis(0))
            .into_par_iter()
            .map(|row| predict::traverse(root, &row))
            .collect();

        Ok(Array1::from_vec(predictions?))
    }

    /// Predicts only the rows of `data` that belong to the fold selected by `filter`.
    ///
    /// # Parameters
    ///
    /// - `data` - Rows to predict, with or without the target column
    /// - `filter` - Fold assignment of every row of `data`, and the fold to predict
    ///
    /// # Returns
    ///
    /// * `Result<Array1<f64>, ModelError>` - One prediction per selected row, in row order
    pub fn predict_fold(
        &self,
        data: ArrayView2<f64>,
        filter: &FoldFilter,
    ) -> Result<Array1<f64>, ModelError> {
        if filter.assignment.len() != data.nrows() {
            return Err(ModelError::InputValidationError(format!(
                "Fold assignment covers {} rows but the data has {}",
                filter.assignment.len(),
                data.nrows()
            )));
        }

        self.predict(data.select(Axis(0), &filter.selected_rows()).view())
    }

    /// Applies reduced-error pruning against held-out rows.
    ///
    /// Every internal node is collapsed in turn, children before parents, and stays collapsed
    /// unless `measure` on `validation` becomes strictly worse. Calling it again with the same
    /// rows changes nothing.
    ///
    /// # Parameters
    ///
    /// - `validation` - Held-out rows with the target in the last column
    /// - `measure` - Performance measure deciding what "worse" means
    ///
    /// # Returns
    ///
    /// * `Result<usize, ModelError>` - The number of nodes pruned by this call
    pub fn prune<M>(&mut self, validation: ArrayView2<f64>, measure: &M) -> Result<usize, ModelError>
    where
        M: PerformanceMeasure + ?Sized,
    {
        let n_columns = self.n_columns;
        let root = self.root.as_mut().ok_or(ModelError::NotFitted)?;

        preliminary_check(&validation)?;
        if validation.ncols() != n_columns {
            return Err(ModelError::InputValidationError(format!(
                "Validation rows must include the target: expected {} columns, got {}",
                n_columns,
                validation.ncols()
            )));
        }

        let pruned = prune::reduced_error_prune(root, &validation.to_owned(), measure)?;
        debug!(
            "pruned {} nodes, {} nodes remain active",
            pruned,
            root.node_count()
        );

        Ok(pruned)
    }

    /// Clears every pruning flag, restoring the tree as it was grown.
    pub fn reset_pruning(&mut self) -> Result<(), ModelError> {
        self.root
            .as_mut()
            .ok_or(ModelError::NotFitted)?
            .clear_pruning();
        Ok(())
    }

    /// Number of nodes reachable during prediction.
    pub fn node_count(&self) -> Result<usize, ModelError> {
        Ok(self.fitted_root()?.node_count())
    }

    /// Number of nodes that answer as leaves, pruned nodes included.
    pub fn leaf_count(&self) -> Result<usize, ModelError> {
        Ok(self.fitted_root()?.leaf_count())
    }

    /// Length of the longest root-to-leaf path (a single leaf has depth 0).
    pub fn depth(&self) -> Result<usize, ModelError> {
        Ok(self.fitted_root()?.depth())
    }

    /// Generates a human-readable view of the tree.
    ///
    /// Each edge is labelled with the category or comparison that leads to it. Pruned nodes
    /// are shown as leaves carrying their fallback value.
    ///
    /// # Returns
    ///
    /// * `Result<String, ModelError>` - The formatted tree, or `ModelError::NotFitted`
    pub fn generate_tree_structure(&self) -> Result<String, ModelError> {
        let root = self.fitted_root()?;

        let mut output = String::new();
        output.push_str("Decision Tree Structure:\n");
        self.print_node(root, None, &mut output, "", true);
        Ok(output)
    }

    // Recursively print tree structure
    fn print_node(
        &self,
        node: &Node,
        edge: Option<String>,
        output: &mut String,
        prefix: &str,
        is_last: bool,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&format!("{}{}", prefix, connector));
        if let Some(edge) = edge {
            output.push_str(&format!("[{}] ", edge));
        }

        if node.is_pruned() {
            output.push_str(&format!(
                "Pruned: value={:.4} ({} rows)\n",
                node.leaf_value(),
                node.get_samples().nrows()
            ));
            return;
        }

        let new_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        match node.get_kind() {
            NodeKind::Leaf { value } => {
                output.push_str(&format!(
                    "Leaf: value={:.4} ({} rows)\n",
                    value,
                    node.get_samples().nrows()
                ));
            }
            NodeKind::Categorical { feature_index, .. } => {
                output.push_str(&format!("Split: feature[{}] (categorical)\n", feature_index));

                let children = node.children();
                let keys: Vec<f64> = node
                    .get_frequency()
                    .column(*feature_index)
                    .map(|counts| counts.as_slice().iter().map(|&(v, _)| v).collect())
                    .unwrap_or_default();
                let last = children.len().saturating_sub(1);
                for (i, (child, key)) in children.into_iter().zip(keys).enumerate() {
                    self.print_node(
                        child,
                        Some(format!("= {}", key)),
                        output,
                        &new_prefix,
                        i == last,
                    );
                }
            }
            NodeKind::Numeric {
                feature_index,
                threshold,
                left,
                right,
                ..
            } => {
                output.push_str(&format!(
                    "Split: feature[{}] <= {:.4}\n",
                    feature_index, threshold
                ));
                self.print_node(
                    left,
                    Some(format!("<= {:.4}", threshold)),
                    output,
                    &new_prefix,
                    false,
                );
                self.print_node(
                    right,
                    Some(format!("> {:.4}", threshold)),
                    output,
                    &new_prefix,
                    true,
                );
            }
        }
    }
}
