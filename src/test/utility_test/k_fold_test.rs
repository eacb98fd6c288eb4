use super::*;

#[test]
fn test_every_row_gets_a_fold() {
    let targets = array![0.0, 1.0, 1.0, 0.0, 2.0, 1.0, 0.0, 2.0, 1.0, 1.0, 0.0];
    for k in 2..=targets.len() {
        let assignment = stratified_fold_assignment(&targets, k).unwrap();
        assert_eq!(assignment.len(), targets.len());
        assert!(assignment.iter().all(|&fold| fold < k));

        let sizes = fold_sizes(&assignment, k);
        assert_eq!(sizes.iter().sum::<usize>(), targets.len());
        let largest = *sizes.iter().max().unwrap();
        let smallest = *sizes.iter().min().unwrap();
        assert!(largest - smallest <= 1);
    }
}

#[test]
fn test_classes_are_spread_over_folds() {
    // six of each class: every fold gets two of each
    let targets = Array1::from_iter((0..12).map(|i| (i % 2) as f64));
    let assignment = stratified_fold_assignment(&targets, 3).unwrap();

    for fold in 0..3 {
        let members: Vec<f64> = (0..12)
            .filter(|&row| assignment[row] == fold)
            .map(|row| targets[row])
            .collect();
        assert_eq!(members.iter().filter(|&&t| t == 0.0).count(), 2);
        assert_eq!(members.iter().filter(|&&t| t == 1.0).count(), 2);
    }
}

#[test]
fn test_ties_keep_row_order() {
    let targets = array![5.0, 5.0, 5.0, 5.0];
    assert_eq!(
        stratified_fold_assignment(&targets, 2).unwrap(),
        vec![0, 1, 0, 1]
    );

    let targets = array![3.0, 1.0, 2.0, 0.0];
    assert_eq!(
        stratified_fold_assignment(&targets.view(), 2).unwrap(),
        vec![1, 1, 0, 0]
    );
}

#[test]
fn test_invalid_fold_counts() {
    let targets = array![0.0, 1.0, 0.0];
    for k in [0, 1, 4] {
        assert!(matches!(
            stratified_fold_assignment(&targets, k),
            Err(ModelError::InputValidationError(_))
        ));
    }
}

#[test]
fn test_nan_target_is_rejected() {
    let targets = array![0.0, f64::NAN, 1.0];
    assert!(matches!(
        stratified_fold_assignment(&targets, 2),
        Err(ModelError::InputValidationError(_))
    ));
}

#[test]
fn test_fold_sizes_ignores_out_of_range() {
    assert_eq!(fold_sizes(&[0, 1, 1, 5], 2), vec![1, 2]);
    assert_eq!(fold_sizes(&[], 3), vec![0, 0, 0]);
}
