use super::*;

#[test]
fn test_tuning_split_weather_sizes() {
    let data = Array2::from_shape_fn((14, 2), |(i, j)| if j == 1 { (i % 2) as f64 } else { i as f64 });
    let (tuning, test) = tuning_test_split(data.view()).unwrap();

    // sorted positions 0, 5 and 10
    assert_eq!(tuning.nrows(), 3);
    assert_eq!(test.nrows(), 11);
    assert_eq!(tuning.ncols(), 2);
    assert_eq!(test.ncols(), 2);
}

#[test]
fn test_tuning_split_picks_every_fifth_ranked_row() {
    let targets = [4.0, 9.0, 0.0, 7.0, 2.0, 8.0, 1.0, 6.0, 3.0, 5.0, 10.0];
    let data = Array2::from_shape_fn((11, 2), |(i, j)| if j == 1 { targets[i] } else { i as f64 });

    let (tuning, test) = tuning_test_split(data.view()).unwrap();
    assert_eq!(tuning.column(1).to_vec(), vec![0.0, 5.0, 10.0]);
    assert_eq!(
        test.column(1).to_vec(),
        vec![1.0, 2.0, 3.0, 4.0, 6.0, 7.0, 8.0, 9.0]
    );

    // rows travel with their attributes
    assert_eq!(tuning.column(0).to_vec(), vec![2.0, 9.0, 10.0]);
}

#[test]
fn test_tuning_split_is_a_partition() {
    let data = array![[1.0, 1.0], [2.0, 0.0], [3.0, 1.0], [4.0, 0.0], [5.0, 1.0], [6.0, 0.0]];
    let (tuning, test) = tuning_test_split(data.view()).unwrap();

    let mut ids: Vec<f64> = tuning.column(0).iter().chain(test.column(0).iter()).copied().collect();
    ids.sort_by(|a, b| a.total_cmp(b));
    assert_eq!(ids, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(tuning.nrows(), 2);
}

#[test]
fn test_tuning_split_rejects_degenerate_input() {
    let single = array![[1.0, 0.0]];
    assert!(matches!(
        tuning_test_split(single.view()),
        Err(ModelError::InputValidationError(_))
    ));

    let no_columns = Array2::<f64>::zeros((4, 0));
    assert!(tuning_test_split(no_columns.view()).is_err());

    let nan_target = array![[1.0, 0.0], [2.0, f64::NAN]];
    assert!(matches!(
        tuning_test_split(nan_target.view()),
        Err(ModelError::InputValidationError(_))
    ));
}
