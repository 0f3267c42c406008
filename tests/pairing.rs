use excel2graph::models::{Cell, Column, ColumnPair, Dataset};
use excel2graph::series::series_values;
use excel2graph::{Error, extract_pairs};

fn dataset(names: &[&str]) -> Dataset {
    Dataset::from_numeric(names.iter().map(|n| (*n, vec![1.0, 2.0])).collect())
}

#[test]
fn first_pair_only_when_limited_to_one() {
    let ds = dataset(&["X1", "Y1", "X2", "Y2"]);
    assert_eq!(extract_pairs(&ds, 1), vec![ColumnPair::new("X1", "Y1")]);
}

#[test]
fn mismatched_suffixes_give_nothing() {
    let ds = dataset(&["X1", "Y2"]);
    assert!(extract_pairs(&ds, 10).is_empty());
}

#[test]
fn pairing_ignores_column_order() {
    let a = extract_pairs(&dataset(&["X1", "Y1", "Xb", "Yb"]), 10);
    let b = extract_pairs(&dataset(&["Yb", "Y1", "Xb", "X1"]), 10);
    let mut a_sorted = a.clone();
    let mut b_sorted = b.clone();
    a_sorted.sort_by(|p, q| p.x.cmp(&q.x));
    b_sorted.sort_by(|p, q| p.x.cmp(&q.x));
    assert_eq!(a_sorted, b_sorted);
    // order follows the X columns as they appear
    assert_eq!(b[0], ColumnPair::new("Xb", "Yb"));
}

#[test]
fn output_never_exceeds_limit_or_available_pairs() {
    let ds = dataset(&["X1", "Y1", "X2", "Y2", "X3", "Y3", "Z", "x4", "Y4"]);
    for max in 0..6 {
        let pairs = extract_pairs(&ds, max);
        assert!(pairs.len() <= max.min(3));
    }
    // lower-case prefixes and stray columns never pair
    assert_eq!(extract_pairs(&ds, 10).len(), 3);
}

#[test]
fn suffix_match_is_case_sensitive() {
    let ds = dataset(&["Xa", "YA", "Ya"]);
    assert_eq!(extract_pairs(&ds, 10), vec![ColumnPair::new("Xa", "Ya")]);
}

#[test]
fn uneven_columns_drop_trailing_rows() {
    let ds = Dataset::new(vec![
        Column {
            name: "X1".into(),
            cells: vec![Cell::Number(1.0), Cell::Number(2.0), Cell::Number(3.0)],
        },
        Column {
            name: "Y1".into(),
            cells: vec![Cell::Number(10.0), Cell::Empty],
        },
    ]);
    let (xs, ys) = series_values(&ds, &ColumnPair::new("X1", "Y1")).unwrap();
    assert_eq!(xs, vec![1.0]);
    assert_eq!(ys, vec![10.0]);
}

#[test]
fn text_in_a_paired_column_is_rejected() {
    let ds = Dataset::new(vec![
        Column {
            name: "X1".into(),
            cells: vec![Cell::Number(1.0), Cell::Text("n/a".into())],
        },
        Column {
            name: "Y1".into(),
            cells: vec![Cell::Number(1.0), Cell::Number(2.0)],
        },
    ]);
    let err = series_values(&ds, &ColumnPair::new("X1", "Y1")).unwrap_err();
    match err {
        Error::NonNumeric { column, row, value } => {
            assert_eq!(column, "X1");
            assert_eq!(row, 3);
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected error: {other}"),
    }
}
