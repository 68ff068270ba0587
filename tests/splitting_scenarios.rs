use tsxv::types::Diagnostic;
use tsxv::{
    split_train, split_train_val_forward_chaining, split_train_val_group_k_fold,
    split_train_val_k_fold, split_train_val_test_forward_chaining,
    split_train_val_test_group_k_fold, split_train_val_test_k_fold, split_train_variable_input,
};

fn demo_series() -> Vec<u32> {
    (0..31).collect()
}

#[test]
fn test_forward_chaining_thirty_one_elements() {
    let series = demo_series();
    let folds = split_train_val_forward_chaining(&series, 4, 3, 3).unwrap();

    assert_eq!(folds.len(), 5);
    assert_eq!(folds[0].train.len(), 2);
    assert_eq!(folds[0].validation.len(), 1);

    // Fold k: training pairs at 3i for i < k + 2, validation right after the last training output
    for (k, fold) in folds.iter().enumerate() {
        assert_eq!(fold.index, k);
        assert_eq!(fold.train.len(), k + 2);

        for (i, pair) in fold.train.iter().enumerate() {
            let start = 3 * i as u32;
            let input: Vec<u32> = (start..start + 4).collect();
            let output: Vec<u32> = (start + 4..start + 7).collect();
            assert_eq!(pair.input.values, input);
            assert_eq!(pair.output.values, output);
        }

        let val_start = (3 * (k + 1) + 7) as u32;
        let validation = &fold.validation[0];
        assert_eq!(validation.input.values, (val_start..val_start + 4).collect::<Vec<_>>());
        assert_eq!(validation.output.values, (val_start + 4..val_start + 7).collect::<Vec<_>>());
    }
}

#[test]
fn test_too_short_sequence_is_not_an_error() {
    let series: Vec<u32> = (0..5).collect();
    let expected = Diagnostic::SequenceTooShort {
        required: 7,
        available: 5,
    };

    let pairs = split_train(&series, 4, 3, 1).unwrap();
    assert!(pairs.is_empty());
    assert_eq!(pairs.diagnostic(), Some(&expected));

    let expanding = split_train_variable_input(&series, 4, 3, 1).unwrap();
    assert_eq!(expanding.diagnostic(), Some(&expected));

    for folds in [
        split_train_val_forward_chaining(&series, 4, 3, 1).unwrap(),
        split_train_val_test_forward_chaining(&series, 4, 3, 1).unwrap(),
        split_train_val_k_fold(&series, 4, 3, 1).unwrap(),
        split_train_val_test_k_fold(&series, 4, 3, 1).unwrap(),
        split_train_val_group_k_fold(&series, 4, 3, 1).unwrap(),
        split_train_val_test_group_k_fold(&series, 4, 3, 1).unwrap(),
    ] {
        assert!(folds.is_empty());
        assert_eq!(folds.diagnostic(), Some(&expected));
    }
}

#[test]
fn test_split_train_pair_count() {
    let series: Vec<u32> = (0..100).collect();

    for (inputs, outputs, jumps) in [(4, 3, 3), (10, 1, 1), (1, 1, 7), (50, 50, 9), (30, 5, 100)] {
        let pairs = split_train(&series, inputs, outputs, jumps).unwrap();
        let expected = (100 - inputs - outputs) / jumps + 1;
        assert_eq!(pairs.len(), expected, "params {:?}", (inputs, outputs, jumps));
    }
}

#[test]
fn test_split_train_is_deterministic() {
    let series: Vec<f64> = (0..57).map(|v| (v as f64).sin()).collect();

    let first = split_train(&series, 6, 2, 4).unwrap();
    let second = split_train(&series, 6, 2, 4).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_pairs_reassemble_contiguous_ranges() {
    let series: Vec<u32> = (100..160).collect();
    let pairs = split_train(&series, 5, 4, 3).unwrap();

    for pair in &pairs {
        let mut joined = pair.input.values.clone();
        joined.extend_from_slice(&pair.output.values);
        assert_eq!(joined, series[pair.start()..pair.end()].to_vec());
    }
}

#[test]
fn test_variable_input_starts_and_widths() {
    let series = demo_series();
    let pairs = split_train_variable_input(&series, 5, 2, 4).unwrap();

    // ends of X: 5, 9, ..., 29; 33 + 2 would pass the end
    assert_eq!(pairs.len(), 7);
    for (k, pair) in pairs.iter().enumerate() {
        assert_eq!(pair.input.start, 0);
        assert_eq!(pair.input.end, 5 + 4 * k);
        assert_eq!(pair.output.len(), 2);
    }
    assert_eq!(pairs[6].end(), 31);
}

#[test]
fn test_group_k_fold_three_way_demo() {
    let series = demo_series();
    let folds = split_train_val_test_group_k_fold(&series, 4, 3, 3).unwrap();

    assert_eq!(folds.len(), 5);
    for fold in &folds {
        assert!(fold.test.is_some());
        // a validation pair is kept even when its test pair runs off the end
        assert!(fold.validation.len() - fold.test().len() <= 1);
        for (validation, test) in fold.validation.iter().zip(fold.test()) {
            assert_eq!(test.start(), validation.end());
        }
        assert!(fold.pairs().all(|p| p.end() <= series.len()));
    }
}

#[test]
fn test_k_fold_three_way_demo() {
    let series: Vec<u32> = (0..60).collect();
    let folds = split_train_val_test_k_fold(&series, 4, 3, 3).unwrap();

    assert!(!folds.is_empty());
    for (k, fold) in folds.iter().enumerate() {
        // leading pairs, then validation + test, then trailing pairs
        let leading = fold
            .train
            .iter()
            .take_while(|p| p.end() <= fold.validation[0].start())
            .count();
        assert_eq!(leading, k + 2);
        assert_eq!(fold.test()[0].start(), fold.validation[0].end());
        assert!(fold.test()[0].end() <= 60);
    }
}
