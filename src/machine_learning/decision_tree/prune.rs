use super::node::{Node, Step};
use super::predict::traverse;
use crate::error::ModelError;
use crate::metric::PerformanceMeasure;
use log::trace;
use ndarray::{Array1, Array2};

/// Reduced-error pruning of the tree rooted at `root` against `validation`.
///
/// Internal nodes are visited children first. For each one the whole tree is scored on
/// `validation`, the node is collapsed, and the tree is scored again; the collapse is
/// reverted only when the score got strictly worse. Nodes that already answer as leaves
/// are skipped together with their subtrees.
///
/// Returns the number of nodes that stayed pruned.
pub(super) fn reduced_error_prune<M>(
    root: &mut Node,
    validation: &Array2<f64>,
    measure: &M,
) -> Result<usize, ModelError>
where
    M: PerformanceMeasure + ?Sized,
{
    let mut order = Vec::new();
    collect_post_order(root, &mut Vec::new(), &mut order);

    let mut kept = 0;
    for path in order {
        let before = evaluate(root, validation, measure)?;
        set_pruned(root, &path, true)?;
        let after = evaluate(root, validation, measure)?;

        let reverted = measure.is_worse(after, before);
        if reverted {
            set_pruned(root, &path, false)?;
        } else {
            kept += 1;
        }

        trace!(
            "prune at depth {}: {:.6} -> {:.6}, {}",
            path.len(),
            before,
            after,
            if reverted { "reverted" } else { "kept" }
        );
    }

    Ok(kept)
}

/// Appends the path of every internal node below `node` in post-order.
fn collect_post_order(node: &Node, path: &mut Vec<Step>, order: &mut Vec<Vec<Step>>) {
    if node.acts_as_leaf() {
        return;
    }

    for step in node.child_steps() {
        if let Some(child) = node.child(step) {
            path.push(step);
            collect_post_order(child, path, order);
            path.pop();
        }
    }

    order.push(path.clone());
}

fn set_pruned(root: &mut Node, path: &[Step], pruned: bool) -> Result<(), ModelError> {
    root.descendant_mut(path)
        .ok_or(ModelError::TreeError("Pruning path does not resolve to a node"))?
        .set_pruned(pruned);
    Ok(())
}

/// Scores the tree on `rows`, whose last column holds the expected values.
fn evaluate<M>(root: &Node, rows: &Array2<f64>, measure: &M) -> Result<f64, ModelError>
where
    M: PerformanceMeasure + ?Sized,
{
    let predictions = rows
        .rows()
        .into_iter()
        .map(|row| traverse(root, &row))
        .collect::<Result<Vec<f64>, ModelError>>()?;

    let actual = rows.column(rows.ncols() - 1);
    Ok(measure.measure(Array1::from_vec(predictions).view(), actual))
}
