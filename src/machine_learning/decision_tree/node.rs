use super::frequency::FrequencyTable;
use ahash::AHashMap;
use ndarray::Array2;

/// Key of a child produced by a categorical split.
///
/// Wraps the bit pattern of the category value so it can be hashed. `-0.0` and `0.0`
/// map to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryKey(u64);

impl CategoryKey {
    pub fn new(value: f64) -> Self {
        let value = if value == 0.0 { 0.0 } else { value };
        Self(value.to_bits())
    }

    /// The category value this key was built from.
    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// Side of a numeric binary split.
///
/// # Variants
///
/// - `Left` - Rows whose value is less than or equal to the threshold
/// - `Right` - Rows whose value is greater than the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Left,
    Right,
}

impl Branch {
    /// Chooses the branch a value falls into for the given threshold.
    #[inline]
    pub fn route(value: f64, threshold: f64) -> Self {
        if value > threshold {
            Branch::Right
        } else {
            Branch::Left
        }
    }
}

/// What a node does with a row.
///
/// # Variants
///
/// - `Leaf` - Terminal node returning `value` (majority class or mean target)
/// - `Categorical` - Multi-way split with one child per category observed at this node
/// - `Numeric` - Binary split at `threshold`; `split_row` is where the sorted rows were sliced
#[derive(Debug, Clone)]
pub enum NodeKind {
    Leaf {
        value: f64,
    },
    Categorical {
        feature_index: usize,
        children: AHashMap<CategoryKey, Node>,
    },
    Numeric {
        feature_index: usize,
        threshold: f64,
        split_row: usize,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// A node of a decision tree.
///
/// Every field is computed when the node is grown. The only state that changes
/// afterwards is the `pruned` flag: a pruned node keeps its children but is
/// treated as a leaf returning its own cached `fallback` value.
///
/// # Fields
///
/// - `samples` - The rows that reached this node during training (target in the last column)
/// - `frequency` - Per-column value counts of the categorical columns
/// - `impurity` - Entropy (classification) or mean squared error (regression) of the target
/// - `fallback` - Majority class (classification) or mean target (regression) of `samples`
/// - `kind` - Leaf value or split with its children
/// - `pruned` - Whether reduced-error pruning collapsed this node
#[derive(Debug, Clone)]
pub struct Node {
    samples: Array2<f64>,
    frequency: FrequencyTable,
    impurity: f64,
    fallback: f64,
    kind: NodeKind,
    pruned: bool,
}

/// One step on the way from the root to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    Category(CategoryKey),
    Branch(Branch),
}

impl Node {
    pub(super) fn new(
        samples: Array2<f64>,
        frequency: FrequencyTable,
        impurity: f64,
        fallback: f64,
        kind: NodeKind,
    ) -> Self {
        Self {
            samples,
            frequency,
            impurity,
            fallback,
            kind,
            pruned: false,
        }
    }

    get_field!(get_impurity, impurity, f64);
    get_field!(get_fallback, fallback, f64);
    get_field!(is_pruned, pruned, bool);

    /// The training rows that reached this node.
    pub fn get_samples(&self) -> &Array2<f64> {
        &self.samples
    }

    pub fn get_frequency(&self) -> &FrequencyTable {
        &self.frequency
    }

    pub fn get_kind(&self) -> &NodeKind {
        &self.kind
    }

    pub(super) fn set_pruned(&mut self, pruned: bool) {
        self.pruned = pruned;
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// A pruned node answers like a leaf.
    pub fn acts_as_leaf(&self) -> bool {
        self.pruned || self.is_leaf()
    }

    /// The value this node returns when it acts as a leaf.
    pub fn leaf_value(&self) -> f64 {
        match self.kind {
            NodeKind::Leaf { value } if !self.pruned => value,
            _ => self.fallback,
        }
    }

    /// Index of the split column, or `None` for a leaf.
    pub fn feature_index(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Leaf { .. } => None,
            NodeKind::Categorical { feature_index, .. }
            | NodeKind::Numeric { feature_index, .. } => Some(feature_index),
        }
    }

    /// The child for a category value, if this is a categorical split that observed it.
    pub fn category_child(&self, value: f64) -> Option<&Node> {
        match &self.kind {
            NodeKind::Categorical { children, .. } => children.get(&CategoryKey::new(value)),
            _ => None,
        }
    }

    /// The child on `branch`, if this is a numeric split.
    pub fn branch_child(&self, branch: Branch) -> Option<&Node> {
        match &self.kind {
            NodeKind::Numeric { left, right, .. } => Some(match branch {
                Branch::Left => &**left,
                Branch::Right => &**right,
            }),
            _ => None,
        }
    }

    /// All children, structural order (categories ascending, then left before right).
    ///
    /// Pruning does not hide children from this listing.
    pub fn children(&self) -> Vec<&Node> {
        self.child_steps()
            .into_iter()
            .filter_map(|step| self.child(step))
            .collect()
    }

    pub(super) fn child_steps(&self) -> Vec<Step> {
        match &self.kind {
            NodeKind::Leaf { .. } => Vec::new(),
            NodeKind::Categorical { children, .. } => {
                let mut keys: Vec<CategoryKey> = children.keys().copied().collect();
                keys.sort_by(|a, b| a.value().total_cmp(&b.value()));
                keys.into_iter().map(Step::Category).collect()
            }
            NodeKind::Numeric { .. } => vec![
                Step::Branch(Branch::Left),
                Step::Branch(Branch::Right),
            ],
        }
    }

    pub(super) fn child(&self, step: Step) -> Option<&Node> {
        match step {
            Step::Category(key) => match &self.kind {
                NodeKind::Categorical { children, .. } => children.get(&key),
                _ => None,
            },
            Step::Branch(branch) => self.branch_child(branch),
        }
    }

    pub(super) fn child_mut(&mut self, step: Step) -> Option<&mut Node> {
        match (step, &mut self.kind) {
            (Step::Category(key), NodeKind::Categorical { children, .. }) => children.get_mut(&key),
            (Step::Branch(Branch::Left), NodeKind::Numeric { left, .. }) => Some(&mut **left),
            (Step::Branch(Branch::Right), NodeKind::Numeric { right, .. }) => Some(&mut **right),
            _ => None,
        }
    }

    /// Follows `path` from this node.
    pub(super) fn descendant_mut(&mut self, path: &[Step]) -> Option<&mut Node> {
        path.iter()
            .try_fold(self, |node, &step| node.child_mut(step))
    }

    /// Clears the pruned flag on this node and every descendant.
    pub(super) fn clear_pruning(&mut self) {
        self.pruned = false;
        match &mut self.kind {
            NodeKind::Leaf { .. } => {}
            NodeKind::Categorical { children, .. } => {
                children.values_mut().for_each(Node::clear_pruning);
            }
            NodeKind::Numeric { left, right, .. } => {
                left.clear_pruning();
                right.clear_pruning();
            }
        }
    }

    /// Number of nodes reachable during prediction, this one included.
    pub fn node_count(&self) -> usize {
        if self.acts_as_leaf() {
            return 1;
        }
        1 + self.children().iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Number of nodes that answer as leaves during prediction.
    pub fn leaf_count(&self) -> usize {
        if self.acts_as_leaf() {
            return 1;
        }
        self.children().iter().map(|c| c.leaf_count()).sum()
    }

    /// Depth of the effective tree below this node (a lone leaf has depth 0).
    pub fn depth(&self) -> usize {
        if self.acts_as_leaf() {
            return 0;
        }
        1 + self
            .children()
            .iter()
            .map(|c| c.depth())
            .max()
            .unwrap_or(0)
    }
}
