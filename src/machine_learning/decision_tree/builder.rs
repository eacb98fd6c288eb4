use super::frequency::{FrequencyTable, ValueCounts};
use super::node::{CategoryKey, Node, NodeKind};
use super::split::{
    Partition, SplitChoice, partition, select_classification_split, select_regression_split,
};
use super::{DecisionTreeParams, TreeKind};
use crate::math::{entropy_from_counts, mean, variance};
use ahash::AHashMap;
use log::debug;
use ndarray::{Array2, s};

/// Why a node stopped growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeafReason {
    Pure,
    IdenticalAttributes,
    BelowErrorThreshold,
    NoViableSplit,
}

/// Grows the subtree for `samples` depth-first.
///
/// `categorical` is shared read-only by every node of the tree; `samples` is owned by the
/// node being grown and its partitions are copied into the children.
pub(super) fn grow(
    samples: Array2<f64>,
    categorical: &[bool],
    kind: TreeKind,
    params: &DecisionTreeParams,
    depth: usize,
) -> Node {
    let frequency = FrequencyTable::new(&samples, categorical);
    let target = samples.column(samples.ncols() - 1);

    let (impurity, fallback) = match kind {
        TreeKind::Classification => (
            frequency
                .target()
                .map_or(0.0, |counts| entropy_from_counts(&counts.counts())),
            frequency.majority().unwrap_or_else(|| mean(&target)),
        ),
        TreeKind::Regression => (variance(&target), mean(&target)),
    };

    let stop = match kind {
        TreeKind::Classification if impurity == 0.0 => Some(LeafReason::Pure),
        TreeKind::Classification if attributes_identical(&samples) => {
            Some(LeafReason::IdenticalAttributes)
        }
        TreeKind::Regression if impurity <= params.error_threshold => {
            Some(LeafReason::BelowErrorThreshold)
        }
        _ => None,
    };

    let choice = match stop {
        Some(reason) => Err(reason),
        None => match kind {
            TreeKind::Classification => {
                select_classification_split(&samples, categorical, &frequency, impurity)
            }
            TreeKind::Regression => select_regression_split(&samples, categorical, &frequency),
        }
        .ok_or(LeafReason::NoViableSplit),
    };

    let choice = match choice {
        Ok(choice) => choice,
        Err(reason) => {
            let value = leaf_value(&samples, kind);
            debug!(
                "depth {}: leaf over {} rows ({:?}), value {:.4}",
                depth,
                samples.nrows(),
                reason,
                value
            );
            return Node::new(
                samples,
                frequency,
                impurity,
                fallback,
                NodeKind::Leaf { value },
            );
        }
    };

    let node_kind = match (partition(&samples, &choice, &frequency), choice) {
        (Partition::Categorical(groups), SplitChoice::Categorical { feature_index }) => {
            debug!(
                "depth {}: categorical split on column {} into {} children",
                depth,
                feature_index,
                groups.len()
            );
            let children: AHashMap<CategoryKey, Node> = groups
                .into_iter()
                .map(|(key, rows)| (key, grow(rows, categorical, kind, params, depth + 1)))
                .collect();
            NodeKind::Categorical {
                feature_index,
                children,
            }
        }
        (
            Partition::Numeric { left, right },
            SplitChoice::Numeric {
                feature_index,
                threshold,
                split_row,
            },
        ) => {
            debug!(
                "depth {}: numeric split on column {} at {:.4} ({} | {} rows)",
                depth,
                feature_index,
                threshold,
                left.nrows(),
                right.nrows()
            );
            NodeKind::Numeric {
                feature_index,
                threshold,
                split_row,
                left: Box::new(grow(left, categorical, kind, params, depth + 1)),
                right: Box::new(grow(right, categorical, kind, params, depth + 1)),
            }
        }
        // partition always mirrors the shape of the choice it was given
        _ => NodeKind::Leaf {
            value: leaf_value(&samples, kind),
        },
    };

    Node::new(samples, frequency, impurity, fallback, node_kind)
}

/// Majority class (recounted from the rows) or mean target.
fn leaf_value(samples: &Array2<f64>, kind: TreeKind) -> f64 {
    let target = samples.column(samples.ncols() - 1);
    match kind {
        TreeKind::Classification => ValueCounts::from_column(&target)
            .majority()
            .unwrap_or(0.0),
        TreeKind::Regression => mean(&target),
    }
}

/// Returns `true` when no two rows differ in any non-target column.
fn attributes_identical(samples: &Array2<f64>) -> bool {
    let attributes = samples.slice(s![.., ..samples.ncols() - 1]);
    match attributes.rows().into_iter().next() {
        Some(first) => attributes.rows().into_iter().all(|row| row == first),
        None => true,
    }
}
