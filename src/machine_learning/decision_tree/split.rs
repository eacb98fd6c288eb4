use super::frequency::{FrequencyTable, ValueCounts};
use super::node::CategoryKey;
use crate::math::{entropy_from_counts, sum_of_square_total};
use ndarray::{Array2, Axis, s};

/// Decimal places kept when comparing regression scores for the all-equal check.
const REGRESSION_SCORE_SCALE: f64 = 10_000.0;

/// The split chosen for a node.
///
/// # Variants
///
/// - `Categorical` - One child per distinct value of the column
/// - `Numeric` - Two children, sliced at `split_row` of the rows sorted by the column;
///   `threshold` is the midpoint of the two values straddling that row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitChoice {
    Categorical {
        feature_index: usize,
    },
    Numeric {
        feature_index: usize,
        threshold: f64,
        split_row: usize,
    },
}

impl SplitChoice {
    pub fn feature_index(&self) -> usize {
        match *self {
            SplitChoice::Categorical { feature_index }
            | SplitChoice::Numeric { feature_index, .. } => feature_index,
        }
    }
}

/// Median partition of rows sorted by a numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MedianSplit {
    pub split_row: usize,
    pub threshold: f64,
}

/// Regression score of one column: the sum of squared residuals around the group
/// means, divided by the number of rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionCandidate {
    pub feature_index: usize,
    pub score: f64,
    pub median: Option<MedianSplit>,
}

/// Classification score of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationCandidate {
    pub feature_index: usize,
    pub conditional_entropy: f64,
    pub intrinsic_value: f64,
    pub gain_ratio: f64,
    pub median: Option<MedianSplit>,
}

/// Returns a copy of `samples` with its rows stably sorted by `column`.
pub fn sort_rows_by_column(samples: &Array2<f64>, column: usize) -> Array2<f64> {
    let values = samples.column(column);
    let mut order: Vec<usize> = (0..samples.nrows()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    samples.select(Axis(0), &order)
}

/// Locates the median row of rows already sorted by `column`.
///
/// Needs at least two rows, so both halves are non-empty.
fn median_split(sorted: &Array2<f64>, column: usize) -> Option<MedianSplit> {
    let n = sorted.nrows();
    if n < 2 {
        return None;
    }

    let split_row = n / 2;
    let threshold = (sorted[[split_row - 1, column]] + sorted[[split_row, column]]) / 2.0;
    Some(MedianSplit {
        split_row,
        threshold,
    })
}

/// Row ranges of each category group in rows sorted by that column.
fn group_ranges(counts: &ValueCounts) -> Vec<(usize, usize)> {
    let mut start = 0;
    counts
        .as_slice()
        .iter()
        .map(|&(_, count)| {
            let range = (start, start + count);
            start += count;
            range
        })
        .collect()
}

/// Scores every non-target column for a regression node.
///
/// Categorical columns are scored by the residuals around each category's mean target.
/// Numeric columns are split at the median row only, and scored by the residuals around
/// the two halves' means.
pub fn regression_candidates(
    samples: &Array2<f64>,
    categorical: &[bool],
    frequency: &FrequencyTable,
) -> Vec<RegressionCandidate> {
    let n = samples.nrows();
    let target = samples.ncols() - 1;
    let mut candidates = Vec::with_capacity(target);

    for column in 0..target {
        let sorted = sort_rows_by_column(samples, column);
        let targets = sorted.column(target);

        let (residuals, median) = match (categorical[column], frequency.column(column)) {
            (true, Some(counts)) => {
                let residuals = group_ranges(counts)
                    .into_iter()
                    .map(|(start, end)| sum_of_square_total(&targets.slice(s![start..end])))
                    .sum::<f64>();
                (residuals, None)
            }
            _ => match median_split(&sorted, column) {
                Some(median) => {
                    let left = sum_of_square_total(&targets.slice(s![..median.split_row]));
                    let right = sum_of_square_total(&targets.slice(s![median.split_row..]));
                    (left + right, Some(median))
                }
                None => continue,
            },
        };

        candidates.push(RegressionCandidate {
            feature_index: column,
            score: residuals / n as f64,
            median,
        });
    }

    candidates
}

/// Chooses the column with the lowest regression score.
///
/// Returns `None` when every score is equal to four decimal places, or when the
/// winning column cannot partition the node.
pub fn select_regression_split(
    samples: &Array2<f64>,
    categorical: &[bool],
    frequency: &FrequencyTable,
) -> Option<SplitChoice> {
    let candidates = regression_candidates(samples, categorical, frequency);
    let first = candidates.first()?;

    let rounded = |score: f64| (score * REGRESSION_SCORE_SCALE).round();
    if candidates
        .iter()
        .all(|c| rounded(c.score) == rounded(first.score))
    {
        return None;
    }

    let best = candidates
        .iter()
        .skip(1)
        .fold(first, |best, c| if c.score < best.score { c } else { best });

    to_choice(best.feature_index, best.median, frequency)
}

/// Scores every non-target column for a classification node with entropy `node_entropy`.
///
/// For a categorical column the rows are grouped by the column's value; each group's
/// target entropy is weighted by the group's share of rows. The intrinsic value is the
/// entropy of the column's own value distribution. Numeric columns are grouped into the
/// two halves of their median split. A numeric column whose two straddling values are
/// equal is skipped, since prediction routes every tie to the left.
pub fn classification_candidates(
    samples: &Array2<f64>,
    categorical: &[bool],
    frequency: &FrequencyTable,
    node_entropy: f64,
) -> Vec<ClassificationCandidate> {
    let n = samples.nrows() as f64;
    let target = samples.ncols() - 1;
    let mut candidates = Vec::with_capacity(target);

    for column in 0..target {
        let sorted = sort_rows_by_column(samples, column);
        let targets = sorted.column(target);

        let (ranges, median, intrinsic_value) =
            match (categorical[column], frequency.column(column)) {
                (true, Some(counts)) => {
                    (group_ranges(counts), None, entropy_from_counts(&counts.counts()))
                }
                _ => match median_split(&sorted, column) {
                    Some(median)
                        if sorted[[median.split_row - 1, column]]
                            < sorted[[median.split_row, column]] =>
                    {
                        let ranges = vec![(0, median.split_row), (median.split_row, sorted.nrows())];
                        let shares = [median.split_row, sorted.nrows() - median.split_row];
                        (ranges, Some(median), entropy_from_counts(&shares))
                    }
                    _ => continue,
                },
            };

        let conditional_entropy = ranges
            .into_iter()
            .map(|(start, end)| {
                let group = targets.slice(s![start..end]);
                let weight = (end - start) as f64 / n;
                weight * entropy_from_counts(&ValueCounts::from_column(&group).counts())
            })
            .sum::<f64>();

        let gain_ratio = if intrinsic_value == 0.0 {
            0.0
        } else {
            (node_entropy - conditional_entropy) / intrinsic_value
        };

        candidates.push(ClassificationCandidate {
            feature_index: column,
            conditional_entropy,
            intrinsic_value,
            gain_ratio,
            median,
        });
    }

    candidates
}

/// Chooses the column with the highest gain ratio.
///
/// Returns `None` when every column leaves the same conditional entropy, or when the
/// winning column cannot partition the node.
pub fn select_classification_split(
    samples: &Array2<f64>,
    categorical: &[bool],
    frequency: &FrequencyTable,
    node_entropy: f64,
) -> Option<SplitChoice> {
    let candidates = classification_candidates(samples, categorical, frequency, node_entropy);
    let first = candidates.first()?;

    if candidates
        .iter()
        .all(|c| c.conditional_entropy == first.conditional_entropy)
    {
        return None;
    }

    let best = candidates.iter().skip(1).fold(first, |best, c| {
        if c.gain_ratio > best.gain_ratio { c } else { best }
    });

    to_choice(best.feature_index, best.median, frequency)
}

fn to_choice(
    feature_index: usize,
    median: Option<MedianSplit>,
    frequency: &FrequencyTable,
) -> Option<SplitChoice> {
    match median {
        Some(MedianSplit {
            split_row,
            threshold,
        }) => Some(SplitChoice::Numeric {
            feature_index,
            threshold,
            split_row,
        }),
        // a single observed category would hand the whole node to one child
        None => frequency
            .column(feature_index)
            .filter(|counts| counts.len() >= 2)
            .map(|_| SplitChoice::Categorical { feature_index }),
    }
}

/// Row subsets produced by a split.
///
/// # Variants
///
/// - `Categorical` - One `(category, rows)` group per observed value, ascending
/// - `Numeric` - Rows at or below the threshold, and rows above it
#[derive(Debug, Clone)]
pub enum Partition {
    Categorical(Vec<(CategoryKey, Array2<f64>)>),
    Numeric {
        left: Array2<f64>,
        right: Array2<f64>,
    },
}

/// Slices `samples` into the row groups of `choice`.
///
/// Rows are sorted by the split column first; categorical groups take their sizes from
/// the frequency table, numeric splits cut at the recorded median row. Every row ends up
/// in exactly one group.
pub fn partition(samples: &Array2<f64>, choice: &SplitChoice, frequency: &FrequencyTable) -> Partition {
    let column = choice.feature_index();
    let sorted = sort_rows_by_column(samples, column);

    match *choice {
        SplitChoice::Categorical { .. } => {
            let groups = frequency
                .column(column)
                .map(|counts| {
                    counts
                        .as_slice()
                        .iter()
                        .zip(group_ranges(counts))
                        .map(|(&(value, _), (start, end))| {
                            (
                                CategoryKey::new(value),
                                sorted.slice(s![start..end, ..]).to_owned(),
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();
            Partition::Categorical(groups)
        }
        SplitChoice::Numeric { split_row, .. } => Partition::Numeric {
            left: sorted.slice(s![..split_row, ..]).to_owned(),
            right: sorted.slice(s![split_row.., ..]).to_owned(),
        },
    }
}
