use crate::error::ModelError;
use ndarray::prelude::*;
use ndarray::Data;

/// Mean imputation of missing markers in integer-coded or continuous columns
pub mod impute;
/// Stratified k-fold assignment of rows to folds
pub mod k_fold;
/// Z-score standardization of numeric attribute columns
pub mod standardize;
/// Deterministic 20/80 tuning and test split
pub mod tuning_split;

pub use impute::*;
pub use k_fold::*;
pub use standardize::*;
pub use tuning_split::*;
