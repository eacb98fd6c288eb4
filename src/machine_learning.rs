use crate::error::ModelError;
use crate::metric::{Metric, PerformanceMeasure};
use helper_function::*;
use log::{debug, info};
use ndarray::prelude::*;
use ndarray::Data;
use rayon::prelude::*;

/// Stratified k-fold cross-validation of decision trees, with optional pruning and threshold tuning
pub mod cross_validation;
/// Decision tree induction, prediction and reduced-error pruning for classification and regression
pub mod decision_tree;
/// This module provides helper functions for machine learning models
mod helper_function;

pub use cross_validation::*;
pub use decision_tree::*;
