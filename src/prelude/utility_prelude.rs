pub use crate::utility::impute::impute_column_mean;
pub use crate::utility::k_fold::{fold_sizes, stratified_fold_assignment};
pub use crate::utility::standardize::standardize_numeric;
pub use crate::utility::tuning_split::tuning_test_split;
