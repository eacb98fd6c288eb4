pub use crate::math::{entropy_from_counts, mean, sum_of_square_total, variance};
