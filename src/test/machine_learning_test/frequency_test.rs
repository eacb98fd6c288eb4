use super::*;

#[test]
fn test_value_counts_sorted_and_merged() {
    let column = array![2.0, 1.0, 2.0, 3.0, 1.0, 2.0];
    let counts = ValueCounts::from_column(&column);

    assert_eq!(counts.as_slice(), &[(1.0, 2), (2.0, 3), (3.0, 1)]);
    assert_eq!(counts.len(), 3);
    assert_eq!(counts.counts(), vec![2, 3, 1]);
    assert_eq!(counts.majority(), Some(2.0));
}

#[test]
fn test_majority_tie_goes_to_smallest_value() {
    let counts = ValueCounts::from_column(&array![1.0, 0.0, 1.0, 0.0, 2.0]);
    assert_eq!(counts.majority(), Some(0.0));

    let counts = ValueCounts::from_column(&array![3.0, 3.0, 1.0, 2.0, 2.0]);
    assert_eq!(counts.majority(), Some(2.0));
}

#[test]
fn test_value_counts_empty_column() {
    let counts = ValueCounts::from_column(&Array1::<f64>::zeros(0));
    assert!(counts.is_empty());
    assert!(counts.counts().is_empty());
    assert_eq!(counts.majority(), None);
}

#[test]
fn test_frequency_table_skips_numeric_columns() {
    let data = array![[0.0, 1.5, 1.0], [1.0, 2.5, 0.0], [0.0, 3.5, 1.0]];
    let table = FrequencyTable::new(&data, &[true, false, true]);

    assert_eq!(table.column(0).unwrap().as_slice(), &[(0.0, 2), (1.0, 1)]);
    assert!(table.column(1).is_none());
    assert!(table.column(7).is_none());
    assert_eq!(table.target().unwrap().counts(), vec![1, 2]);
    assert_eq!(table.majority(), Some(1.0));
}

#[test]
fn test_frequency_table_numeric_target_has_no_majority() {
    let data = array![[0.0, 1.5], [1.0, 2.5]];
    let table = FrequencyTable::new(&data, &[true, false]);

    assert!(table.target().is_none());
    assert_eq!(table.majority(), None);
}

#[test]
fn test_node_frequency_is_fixed_at_construction() {
    let (data, categorical) = weather();
    let mut tree = fitted(&data, &categorical);
    let before = tree.get_root().unwrap().get_frequency().clone();

    let mut validation = data.clone();
    validation.column_mut(4).fill(1.0);
    tree.prune(validation.view(), &Metric::Accuracy).unwrap();

    let root = tree.get_root().unwrap();
    assert_eq!(root.get_frequency(), &before);
    assert_eq!(before.column(0).unwrap().counts(), vec![5, 4, 5]);
    assert_eq!(before.majority(), Some(1.0));
}
