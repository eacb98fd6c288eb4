use ndarray::{Array2, ArrayBase, Data, Ix1};

/// Distinct values of one column with their number of occurrences, in ascending value order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCounts(Vec<(f64, usize)>);

impl ValueCounts {
    /// Counts every distinct value of `column` in one pass over a sorted copy.
    pub fn from_column<S>(column: &ArrayBase<S, Ix1>) -> Self
    where
        S: Data<Elem = f64>,
    {
        let mut sorted = column.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mut counts: Vec<(f64, usize)> = Vec::new();
        for value in sorted {
            match counts.last_mut() {
                Some((last, count)) if *last == value => *count += 1,
                _ => counts.push((value, 1)),
            }
        }

        Self(counts)
    }

    /// Returns the `(value, count)` pairs in ascending value order.
    pub fn as_slice(&self) -> &[(f64, usize)] {
        &self.0
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The counts alone, in ascending value order.
    pub fn counts(&self) -> Vec<usize> {
        self.0.iter().map(|&(_, count)| count).collect()
    }

    /// The most frequent value.
    ///
    /// Scans in ascending order and only replaces the running maximum on a strictly
    /// larger count, so among tied values the smallest one wins.
    pub fn majority(&self) -> Option<f64> {
        let mut iter = self.0.iter();
        let &(mut best_value, mut best_count) = iter.next()?;
        for &(value, count) in iter {
            if count > best_count {
                best_value = value;
                best_count = count;
            }
        }
        Some(best_value)
    }
}

/// Per-node counts of every categorical column, computed once when the node is created.
///
/// Numeric columns have no entry. For a categorical target the most frequent class is
/// cached alongside the counts.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    columns: Vec<Option<ValueCounts>>,
    majority: Option<f64>,
}

impl FrequencyTable {
    /// Builds the table for `samples`, whose last column is the target.
    ///
    /// `categorical` must have one flag per column of `samples`.
    pub fn new(samples: &Array2<f64>, categorical: &[bool]) -> Self {
        let columns: Vec<Option<ValueCounts>> = categorical
            .iter()
            .enumerate()
            .map(|(column, &is_categorical)| {
                is_categorical.then(|| ValueCounts::from_column(&samples.column(column)))
            })
            .collect();

        let majority = columns
            .last()
            .and_then(|target| target.as_ref())
            .and_then(ValueCounts::majority);

        Self { columns, majority }
    }

    /// Counts for `column`, or `None` if the column is numeric.
    pub fn column(&self, column: usize) -> Option<&ValueCounts> {
        self.columns.get(column).and_then(|counts| counts.as_ref())
    }

    /// Counts of the target column, or `None` for a numeric target.
    pub fn target(&self) -> Option<&ValueCounts> {
        self.columns.last().and_then(|counts| counts.as_ref())
    }

    /// The cached most frequent target value (classification only).
    pub fn majority(&self) -> Option<f64> {
        self.majority
    }
}
