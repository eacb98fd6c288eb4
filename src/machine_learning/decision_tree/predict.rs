use super::node::{Branch, CategoryKey, Node, NodeKind};
use crate::error::ModelError;
use ndarray::{ArrayBase, Data, Ix1};

/// Walks `row` from `root` down to the node that answers for it.
///
/// A pruned node answers with its own fallback. A categorical value never observed at a node
/// stops the descent and that node's fallback is returned.
pub(super) fn traverse<S>(root: &Node, row: &ArrayBase<S, Ix1>) -> Result<f64, ModelError>
where
    S: Data<Elem = f64>,
{
    let mut node = root;
    loop {
        if node.acts_as_leaf() {
            return Ok(node.leaf_value());
        }

        node = match node.get_kind() {
            NodeKind::Leaf { value } => return Ok(*value),
            NodeKind::Categorical {
                feature_index,
                children,
            } => {
                let value = feature_value(row, *feature_index)?;
                match children.get(&CategoryKey::new(value)) {
                    Some(child) => child,
                    None => return Ok(node.get_fallback()),
                }
            }
            NodeKind::Numeric {
                feature_index,
                threshold,
                left,
                right,
                ..
            } => match Branch::route(feature_value(row, *feature_index)?, *threshold) {
                Branch::Left => &**left,
                Branch::Right => &**right,
            },
        };
    }
}

fn feature_value<S>(row: &ArrayBase<S, Ix1>, feature_index: usize) -> Result<f64, ModelError>
where
    S: Data<Elem = f64>,
{
    row.get(feature_index)
        .copied()
        .ok_or(ModelError::TreeError("Split column is outside the prediction row"))
}
