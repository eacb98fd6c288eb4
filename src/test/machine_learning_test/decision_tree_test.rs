use super::*;

#[test]
fn test_decision_tree_default() {
    let tree = DecisionTree::default();
    assert_eq!(tree.get_parameters(), DecisionTreeParams::default());
    assert_eq!(tree.get_parameters().error_threshold, 0.0);
    assert!(tree.get_root().is_none());
    assert!(tree.get_kind().is_none());
    assert_eq!(tree.get_n_columns(), 0);
}

#[test]
fn test_tree_kind_from_flags() {
    assert_eq!(
        TreeKind::from_flags(&[false, true]),
        Some(TreeKind::Classification)
    );
    assert_eq!(
        TreeKind::from_flags(&[true, false]),
        Some(TreeKind::Regression)
    );
    assert_eq!(TreeKind::from_flags(&[]), None);
}

#[test]
fn test_weather_memorizes_training_rows() {
    let (data, categorical) = weather();
    let tree = fitted(&data, &categorical);

    let predictions = tree.predict(data.view()).unwrap();
    assert_eq!(predictions, data.column(4));
    assert_eq!(tree.get_kind(), Some(TreeKind::Classification));
}

#[test]
fn test_weather_tree_shape() {
    let (data, categorical) = weather();
    let tree = fitted(&data, &categorical);
    let root = tree.get_root().unwrap();

    // outlook at the root, humidity under sunny, windy under rainy
    assert_eq!(root.feature_index(), Some(0));
    assert_eq!(root.category_child(0.0).unwrap().feature_index(), Some(2));
    assert!(root.category_child(1.0).unwrap().is_leaf());
    assert_eq!(root.category_child(2.0).unwrap().feature_index(), Some(3));

    assert_eq!(tree.node_count().unwrap(), 8);
    assert_eq!(tree.leaf_count().unwrap(), 5);
    assert_eq!(tree.depth().unwrap(), 2);
}

#[test]
fn test_prediction_rows_without_target() {
    let (data, categorical) = weather();
    let tree = fitted(&data, &categorical);

    let attributes = data.slice(s![.., ..4]);
    let predictions = tree.predict(attributes).unwrap();
    assert_eq!(predictions, data.column(4));

    assert_eq!(tree.predict_one(&[1.0, 0.0, 0.0, 0.0]).unwrap(), 1.0);
    assert_eq!(tree.predict_one(&[2.0, 1.0, 0.0, 1.0, 0.0]).unwrap(), 0.0);
}

#[test]
fn test_classification_leaves_are_pure() {
    let (data, categorical) = weather();
    let tree = fitted(&data, &categorical);

    for leaf in effective_leaves(tree.get_root().unwrap()) {
        assert_eq!(leaf.get_impurity(), 0.0);
        let value = leaf.leaf_value();
        assert!(leaf.get_samples().column(4).iter().all(|&v| v == value));
    }
}

#[test]
fn test_children_partition_parent_rows() {
    let (data, categorical) = weather();
    let tree = fitted(&data, &categorical);
    let root = tree.get_root().unwrap();

    let child_rows: usize = root
        .children()
        .iter()
        .map(|child| child.get_samples().nrows())
        .sum();
    assert_eq!(child_rows, root.get_samples().nrows());

    for child in root.children() {
        let outlook = child.get_samples()[[0, 0]];
        assert!(child.get_samples().column(0).iter().all(|&v| v == outlook));
    }
}

#[test]
fn test_identical_attributes_terminate_in_one_step() {
    let data = array![[1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]];
    let tree = fitted(&data, &[true, true, true]);

    let root = tree.get_root().unwrap();
    assert!(root.is_leaf());
    assert_eq!(tree.node_count().unwrap(), 1);
    assert_eq!(root.leaf_value(), 1.0);
}

#[test]
fn test_single_row_is_a_leaf() {
    let data = array![[3.0, 2.5, 7.0]];
    let tree = fitted(&data, &[true, false, false]);

    let root = tree.get_root().unwrap();
    assert!(root.is_leaf());
    assert_eq!(root.get_impurity(), 0.0);
    assert_eq!(root.leaf_value(), 7.0);
}

#[test]
fn test_regression_leaf_is_mean_and_impurity_is_variance() {
    let data = array![[1.0, 2.0], [2.0, 4.0], [3.0, 9.0]];
    let tree = fitted(&data, &[false, false]);

    let root = tree.get_root().unwrap();
    assert!(root.is_leaf());
    assert_abs_diff_eq!(root.get_impurity(), 26.0 / 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(root.leaf_value(), 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tree.predict_one(&[10.0]).unwrap(), 5.0, epsilon = 1e-9);
}

#[test]
fn test_regression_median_split_and_branch_direction() {
    let (data, categorical) = step_regression();
    let tree = fitted(&data, &categorical);
    let root = tree.get_root().unwrap();

    match root.get_kind() {
        NodeKind::Numeric {
            feature_index,
            threshold,
            split_row,
            ..
        } => {
            assert_eq!(*feature_index, 0);
            assert_abs_diff_eq!(*threshold, 4.5);
            assert_eq!(*split_row, 4);
        }
        other => panic!("expected a numeric split, got {:?}", other),
    }

    assert_eq!(tree.predict_one(&[4.4, 1.0]).unwrap(), 0.0);
    assert_eq!(tree.predict_one(&[4.5, 1.0]).unwrap(), 0.0);
    assert_eq!(tree.predict_one(&[4.6, 1.0]).unwrap(), 10.0);
    assert_eq!(
        root.branch_child(Branch::Right).unwrap().leaf_value(),
        10.0
    );
}

#[test]
fn test_regression_error_threshold_stops_early() {
    let (data, categorical) = step_regression();
    let mut tree = DecisionTree::new(DecisionTreeParams {
        error_threshold: 25.0,
    });
    tree.fit(data.view(), &categorical).unwrap();

    // the root's mean squared error is exactly 25
    assert!(tree.get_root().unwrap().is_leaf());
    assert_abs_diff_eq!(tree.predict_one(&[1.0, 1.0]).unwrap(), 5.0);
}

#[test]
fn test_unseen_category_falls_back_to_node_majority() {
    let (data, categorical) = weather();
    let tree = fitted(&data, &categorical);

    // unknown outlook stops at the root: 9 of 14 days are "play"
    assert_eq!(tree.predict_one(&[5.0, 0.0, 0.0, 0.0]).unwrap(), 1.0);
    // unknown humidity on a sunny day stops at the sunny node (3 of 5 are "don't play")
    assert_eq!(tree.predict_one(&[0.0, 0.0, 7.0, 0.0]).unwrap(), 0.0);
}

#[test]
fn test_unseen_category_in_regression_falls_back_to_node_mean() {
    let data = array![
        [0.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
        [1.0, 0.0, 5.0],
        [1.0, 1.0, 5.0],
    ];
    let tree = fitted(&data, &[true, true, false]);

    assert_eq!(tree.get_root().unwrap().feature_index(), Some(0));
    assert_abs_diff_eq!(tree.predict_one(&[1.0, 0.0]).unwrap(), 5.0);
    assert_abs_diff_eq!(tree.predict_one(&[9.0, 0.0]).unwrap(), 3.0);
}

#[test]
fn test_constant_column_is_not_chosen() {
    // column 0 never varies and has no split information
    let data = array![[1.0, 1.0, 0.0], [1.0, 2.0, 1.0]];
    let tree = fitted(&data, &[true, false, true]);

    let root = tree.get_root().unwrap();
    assert_eq!(root.feature_index(), Some(1));
    assert_eq!(tree.predict(data.view()).unwrap(), data.column(2));
}

#[test]
fn test_numeric_column_tied_at_median_is_not_chosen() {
    // the constant column would separate the labels only through row order
    let data = array![
        [7.0, 0.0, 0.0, 0.0],
        [7.0, 1.0, 0.0, 0.0],
        [7.0, 0.0, 1.0, 1.0],
        [7.0, 1.0, 1.0, 1.0],
    ];
    let tree = fitted(&data, &[false, true, true, true]);
    assert_eq!(tree.get_root().unwrap().feature_index(), Some(2));
    assert_eq!(tree.predict(data.view()).unwrap(), data.column(3));

    // with nothing informative left the root stays a leaf
    let data = array![[7.0, 0.0, 0.0], [7.0, 1.0, 0.0], [7.0, 0.0, 1.0], [7.0, 1.0, 1.0]];
    let tree = fitted(&data, &[false, true, true]);
    let root = tree.get_root().unwrap();
    assert!(root.is_leaf());
    assert_eq!(root.leaf_value(), 0.0);
}

#[test]
fn test_classification_numeric_children_agree_with_routing() {
    fn check(node: &Node) {
        if let NodeKind::Numeric {
            feature_index,
            threshold,
            left,
            right,
            ..
        } = node.get_kind()
        {
            let column = *feature_index;
            assert!(left.get_samples().column(column).iter().all(|&v| v <= *threshold));
            assert!(right.get_samples().column(column).iter().all(|&v| v > *threshold));
            check(left);
            check(right);
        }
    }

    let data = array![
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [1.0, 0.0, 1.0],
        [2.0, 1.0, 1.0],
        [2.0, 0.0, 1.0],
        [3.0, 1.0, 1.0],
    ];
    let tree = fitted(&data, &[false, true, true]);
    let root = tree.get_root().unwrap();
    assert_eq!(root.feature_index(), Some(0));
    check(root);

    assert_eq!(tree.predict_one(&[1.0, 0.0]).unwrap(), 0.0);
    assert_eq!(tree.predict_one(&[2.0, 0.0]).unwrap(), 1.0);
    assert_eq!(tree.predict_one(&[3.0, 1.0]).unwrap(), 1.0);
}

#[test]
fn test_predict_fold_selects_rows_in_order() {
    let (data, categorical) = weather();
    let tree = fitted(&data, &categorical);

    let assignment: Vec<usize> = (0..data.nrows()).map(|i| i % 2).collect();
    let filter = FoldFilter::new(&assignment, 1);
    assert_eq!(filter.selected_rows(), vec![1, 3, 5, 7, 9, 11, 13]);

    let predictions = tree.predict_fold(data.view(), &filter).unwrap();
    let expected: Vec<f64> = filter
        .selected_rows()
        .iter()
        .map(|&row| data[[row, 4]])
        .collect();
    assert_eq!(predictions.to_vec(), expected);
}

#[test]
fn test_predict_fold_rejects_mismatched_assignment() {
    let (data, categorical) = weather();
    let tree = fitted(&data, &categorical);

    let assignment = vec![0; 3];
    let result = tree.predict_fold(data.view(), &FoldFilter::new(&assignment, 0));
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
}

#[test]
fn test_not_fitted_errors() {
    let mut tree = DecisionTree::default();
    let rows = array![[0.0, 1.0]];

    assert_eq!(tree.predict_one(&[0.0]), Err(ModelError::NotFitted));
    assert_eq!(tree.predict(rows.view()), Err(ModelError::NotFitted));
    assert_eq!(tree.generate_tree_structure(), Err(ModelError::NotFitted));
    assert_eq!(tree.node_count(), Err(ModelError::NotFitted));
    assert_eq!(tree.reset_pruning(), Err(ModelError::NotFitted));
    assert_eq!(
        tree.prune(rows.view(), &Metric::Accuracy),
        Err(ModelError::NotFitted)
    );
}

#[test]
fn test_fit_rejects_malformed_inputs() {
    let mut tree = DecisionTree::default();

    let empty = Array2::<f64>::zeros((0, 3));
    assert!(matches!(
        tree.fit(empty.view(), &[true, true, true]),
        Err(ModelError::InputValidationError(_))
    ));

    let data = array![[0.0, 1.0], [1.0, 0.0]];
    assert!(matches!(
        tree.fit(data.view(), &[true]),
        Err(ModelError::InputValidationError(_))
    ));

    let with_nan = array![[0.0, f64::NAN], [1.0, 0.0]];
    assert!(matches!(
        tree.fit(with_nan.view(), &[true, true]),
        Err(ModelError::InputValidationError(_))
    ));

    let mut negative = DecisionTree::new(DecisionTreeParams {
        error_threshold: -1.0,
    });
    assert!(matches!(
        negative.fit(data.view(), &[false, false]),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(tree.get_root().is_none());
}

#[test]
fn test_predict_rejects_wrong_width() {
    let (data, categorical) = weather();
    let tree = fitted(&data, &categorical);

    assert!(matches!(
        tree.predict_one(&[0.0, 0.0]),
        Err(ModelError::InputValidationError(_))
    ));
    let wide = Array2::<f64>::zeros((2, 7));
    assert!(matches!(
        tree.predict(wide.view()),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn test_refit_replaces_previous_tree() {
    let (data, categorical) = weather();
    let mut tree = fitted(&data, &categorical);

    let (regression, flags) = step_regression();
    tree.fit(regression.view(), &flags).unwrap();
    assert_eq!(tree.get_kind(), Some(TreeKind::Regression));
    assert_eq!(tree.get_n_columns(), 3);
    assert_eq!(tree.get_categorical_flags(), flags.as_slice());
    assert_eq!(tree.node_count().unwrap(), 3);
}

#[test]
fn test_generate_tree_structure() {
    let (data, categorical) = weather();
    let tree = fitted(&data, &categorical);

    let structure = tree.generate_tree_structure().unwrap();
    assert!(structure.starts_with("Decision Tree Structure:\n"));
    assert!(structure.contains("Split: feature[0] (categorical)"));
    assert!(structure.contains("[= 1] Leaf: value=1.0000 (4 rows)"));
    assert_eq!(structure.matches("Leaf:").count(), 5);

    let (regression, flags) = step_regression();
    let structure = fitted(&regression, &flags)
        .generate_tree_structure()
        .unwrap();
    assert!(structure.contains("Split: feature[0] <= 4.5000"));
    assert!(structure.contains("[> 4.5000] Leaf: value=10.0000"));
}
