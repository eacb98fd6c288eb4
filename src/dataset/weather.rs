use ndarray::prelude::*;
use std::sync::OnceLock;

// Use `OnceLock` for thread-safe delayed initialization
static WEATHER_DATA: OnceLock<(Array1<&'static str>, Array2<f64>, Vec<bool>)> = OnceLock::new();

const HEADERS: [&str; 5] = ["outlook", "temperature", "humidity", "windy", "play"];

const ROWS: [[f64; 5]; 14] = [
    [0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 0.0],
    [1.0, 0.0, 0.0, 0.0, 1.0],
    [2.0, 1.0, 0.0, 0.0, 1.0],
    [2.0, 2.0, 1.0, 0.0, 1.0],
    [2.0, 2.0, 1.0, 1.0, 0.0],
    [1.0, 2.0, 1.0, 1.0, 1.0],
    [0.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 2.0, 1.0, 0.0, 1.0],
    [2.0, 1.0, 1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 1.0, 0.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, 0.0, 1.0],
    [2.0, 1.0, 0.0, 1.0, 0.0],
];

fn load_weather_internal() -> (Array1<&'static str>, Array2<f64>, Vec<bool>) {
    let headers = Array1::from_vec(HEADERS.to_vec());
    let data = Array2::from_shape_fn((ROWS.len(), HEADERS.len()), |(i, j)| ROWS[i][j]);
    let categorical = vec![true; HEADERS.len()];
    (headers, data, categorical)
}

/// Loads the weather ("play tennis") dataset with memoization
///
/// A 14-row toy dataset with four categorical attributes and a binary target, the
/// classic example for decision tree induction. Every column is categorical and the
/// target is the last column.
///
/// # Encoding
///
/// - outlook: sunny = 0, overcast = 1, rainy = 2
/// - temperature: hot = 0, mild = 1, cool = 2
/// - humidity: high = 0, normal = 1
/// - windy: false = 0, true = 1
/// - play (target): no = 0, yes = 1
///
/// # Returns
///
/// * A tuple containing:
///     - `&'static Array1<&'static str>`: Static reference to the column headers
///     - `&'static Array2<f64>`: Static reference to the rows, target in the last column
///     - `&'static [bool]`: Categorical flag of every column
///
/// # Examples
/// ```rust
/// use arbor::dataset::weather::load_weather;
///
/// let (headers, data, categorical) = load_weather();
/// assert_eq!(headers.len(), 5);
/// assert_eq!(data.shape(), &[14, 5]);
/// assert!(categorical.iter().all(|&c| c));
/// ```
pub fn load_weather() -> (
    &'static Array1<&'static str>,
    &'static Array2<f64>,
    &'static [bool],
) {
    let (headers, data, categorical) = WEATHER_DATA.get_or_init(load_weather_internal);
    (headers, data, categorical.as_slice())
}

/// Loads the weather dataset and returns owned copies
///
/// Use this function when you need owned data that can be modified.
/// For read-only access, prefer `load_weather()` which returns references.
pub fn load_weather_owned() -> (Array1<&'static str>, Array2<f64>, Vec<bool>) {
    let (headers, data, categorical) = load_weather();
    (headers.clone(), data.clone(), categorical.to_vec())
}
