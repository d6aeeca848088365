//! End-to-end preprocessing pipeline tests.

use approx::assert_abs_diff_eq;
use tabprep::{
    Dataset, DatasetError, EncodeMethod, FillMethod, Preprocessor, ScaleMethod, Statistics, Value,
};

#[test]
fn variance_equals_stdev_squared() {
    let ds = Dataset::builder()
        .column("x", [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
        .build()
        .unwrap();
    let stats = Statistics::new(&ds);
    let stdev = stats.stdev("x").unwrap();
    assert_abs_diff_eq!(stats.variance("x").unwrap(), stdev * stdev, epsilon = 1e-9);
    assert_abs_diff_eq!(stdev, 2.0, epsilon = 1e-9);
}

#[test]
fn min_max_scale_concrete_scenario() {
    let mut prep = Preprocessor::new(
        Dataset::builder()
            .column("feature", [10.0, 20.0, 30.0, 40.0, 50.0])
            .build()
            .unwrap(),
    );
    prep.scale(&["feature"], ScaleMethod::MinMax).unwrap();

    let expected = [0.0, 0.25, 0.5, 0.75, 1.0];
    for (cell, want) in prep
        .dataset()
        .column("feature")
        .unwrap()
        .iter()
        .zip(expected)
    {
        let got = cell.as_number().unwrap();
        assert_abs_diff_eq!(got, want, epsilon = 1e-9);
        assert!((0.0..=1.0).contains(&got));
    }
}

#[test]
fn standard_scale_concrete_scenario() {
    let mut prep = Preprocessor::new(
        Dataset::builder()
            .column("feature", [10.0, 20.0, 30.0, 40.0, 50.0])
            .build()
            .unwrap(),
    );
    prep.scale(&["feature"], ScaleMethod::Standard).unwrap();

    let expected = [-1.4142, -0.7071, 0.0, 0.7071, 1.4142];
    for (cell, want) in prep
        .dataset()
        .column("feature")
        .unwrap()
        .iter()
        .zip(expected)
    {
        assert_abs_diff_eq!(cell.as_number().unwrap(), want, epsilon = 1e-4);
    }

    let stats = prep.statistics();
    assert_abs_diff_eq!(stats.mean("feature").unwrap(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(stats.stdev("feature").unwrap(), 1.0, epsilon = 1e-9);
}

#[test]
fn dropna_then_isna_yields_empty_columns() {
    let mut prep = Preprocessor::new(
        Dataset::builder()
            .column("idade", [Some(20.0), Some(30.0), None, Some(50.0)])
            .column("salario", [Some(500.0), None, Some(800.0), Some(1200.0)])
            .build()
            .unwrap(),
    );
    prep.dropna(&["idade", "salario"]).unwrap();

    let nulls = prep.isna(&["idade", "salario"]).unwrap();
    assert_eq!(nulls.n_rows(), 0);
    for (_, column) in nulls.columns() {
        assert!(column.is_empty());
    }
}

#[test]
fn label_encode_itemset_is_dense_rank_range() {
    let mut prep = Preprocessor::new(
        Dataset::builder()
            .column("cor", ["azul", "verde", "vermelho", "azul"])
            .build()
            .unwrap(),
    );
    prep.encode(&["cor"], EncodeMethod::Label).unwrap();

    // concrete scenario: alphabetical assignment
    let codes: Vec<f64> = prep
        .dataset()
        .column("cor")
        .unwrap()
        .iter()
        .map(|v| v.as_number().unwrap())
        .collect();
    assert_eq!(codes, [0.0, 1.0, 2.0, 0.0]);

    // itemset of the result is exactly {0, ..., k-1}
    let items = prep.statistics().itemset("cor").unwrap();
    assert_eq!(items.len(), 3);
    for code in 0..3 {
        assert!(items.contains(&Value::from(code as f64)));
    }
}

#[test]
fn one_hot_indicator_rows_sum_to_one() {
    let mut prep = Preprocessor::new(
        Dataset::builder()
            .column("cor", ["azul", "verde", "vermelho", "azul"])
            .build()
            .unwrap(),
    );
    prep.encode(&["cor"], EncodeMethod::OneHot).unwrap();

    let ds = prep.dataset();
    assert!(!ds.contains_column("cor"));

    let indicator_names: Vec<String> = ds
        .column_names()
        .filter(|n| n.starts_with("cor_"))
        .map(str::to_owned)
        .collect();
    assert_eq!(indicator_names.len(), 3);

    for row in 0..4 {
        let sum: f64 = indicator_names
            .iter()
            .map(|n| ds.column(n).unwrap().get(row).unwrap().as_number().unwrap())
            .sum();
        assert_eq!(sum, 1.0);
    }
}

#[test]
fn frequency_totals_round_trip() {
    let ds = Dataset::builder()
        .column("c", [Some("a"), Some("b"), Some("a"), None, Some("c")])
        .build()
        .unwrap();
    let stats = Statistics::new(&ds);

    let absolute = stats.absolute_frequency("c").unwrap();
    assert_eq!(absolute.values().sum::<usize>(), 5);

    let relative = stats.relative_frequency("c").unwrap();
    assert_abs_diff_eq!(relative.values().sum::<f64>(), 1.0, epsilon = 1e-9);
}

#[test]
fn fillna_mean_concrete_scenario() {
    let mut prep = Preprocessor::new(
        Dataset::builder()
            .column("idade", [Some(20.0), Some(30.0), None, Some(50.0)])
            .build()
            .unwrap(),
    );
    prep.fillna(&["idade"], FillMethod::Mean, Value::from(0.0))
        .unwrap();

    let filled = prep
        .dataset()
        .column("idade")
        .unwrap()
        .get(2)
        .unwrap()
        .as_number()
        .unwrap();
    assert_abs_diff_eq!(filled, 33.333_333_3, epsilon = 1e-6);
}

#[test]
fn shape_mismatch_fails_before_any_dataset_exists() {
    let result = Preprocessor::from_columns([
        ("a", vec![Value::from(1.0), Value::from(2.0)]),
        ("b", vec![Value::from(3.0)]),
    ]);
    assert!(matches!(result, Err(DatasetError::ShapeMismatch { .. })));
}

#[test]
fn method_strings_parse_into_closed_enums() {
    assert_eq!("mean".parse::<FillMethod>().unwrap(), FillMethod::Mean);
    assert_eq!("minMax".parse::<ScaleMethod>().unwrap(), ScaleMethod::MinMax);
    assert_eq!("oneHot".parse::<EncodeMethod>().unwrap(), EncodeMethod::OneHot);

    assert!(matches!(
        "zscore".parse::<ScaleMethod>(),
        Err(DatasetError::UnsupportedScaleMethod(_))
    ));
    assert!(matches!(
        "target".parse::<EncodeMethod>(),
        Err(DatasetError::UnsupportedEncodeMethod(_))
    ));
    assert!(matches!(
        "ffill".parse::<FillMethod>(),
        Err(DatasetError::InvalidFillMethod(_))
    ));
}

#[test]
fn full_pipeline_fill_scale_encode() {
    let mut prep = Preprocessor::new(
        Dataset::builder()
            .column("idade", [Some(20.0), Some(30.0), None, Some(50.0)])
            .column("salario", [Some(500.0), None, Some(800.0), Some(1200.0)])
            .column("cidade", [Some("A"), Some("B"), Some("A"), None])
            .build()
            .unwrap(),
    );

    prep.fillna(&["idade", "salario"], FillMethod::Median, Value::from(0.0))
        .unwrap()
        .scale(&["idade", "salario"], ScaleMethod::MinMax)
        .unwrap()
        .encode(&["cidade"], EncodeMethod::OneHot)
        .unwrap();

    let ds = prep.dataset();
    assert_eq!(ds.n_rows(), 4);
    assert_eq!(
        ds.column_names().collect::<Vec<_>>(),
        ["idade", "salario", "cidade_A", "cidade_B", "cidade_missing"]
    );

    // everything is numeric and null-free now
    for (_, column) in ds.columns() {
        assert!(column.is_numeric());
        assert!(!column.has_nulls());
    }

    let stats = prep.statistics();
    for name in ["idade", "salario"] {
        for cell in ds.column(name).unwrap().iter() {
            let x = cell.as_number().unwrap();
            assert!((0.0..=1.0).contains(&x));
        }
        let _ = stats.mean(name).unwrap();
    }
}

#[test]
fn failed_operation_leaves_the_dataset_unchanged() {
    let mut prep = Preprocessor::new(
        Dataset::builder()
            .column("x", [Some(1.0), None])
            .column("c", [Some("a"), Some("b")])
            .build()
            .unwrap(),
    );
    let before = prep.dataset().clone();

    assert!(prep.scale(&["x", "c"], ScaleMethod::Standard).is_err());
    assert!(prep
        .fillna(&["c", "x"], FillMethod::Mean, Value::from(0.0))
        .is_err());
    assert!(prep.dropna(&["missing_col"]).is_err());

    assert_eq!(prep.dataset(), &before);
}
