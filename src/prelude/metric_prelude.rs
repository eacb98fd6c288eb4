pub use crate::metric::{Metric, PerformanceMeasure, accuracy, mean_squared_error};
