pub use crate::machine_learning::cross_validation::{
    CrossValidationParams, CrossValidationReport, ThresholdSearch, cross_validate,
    tune_error_threshold,
};
pub use crate::machine_learning::decision_tree::{
    Branch, CategoryKey, DecisionTree, DecisionTreeParams, FoldFilter, Node, NodeKind, TreeKind,
};
