use {
    std::cmp::Ordering::*,
    tuple_order::{
        dynamic::{DynOrder, Error, Row},
        order, row,
    },
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn people() -> DynOrder {
    DynOrder::terminal()
        .prepend::<u32>()
        .prepend::<Option<String>>()
        .prepend::<String>()
}

fn person(last: &str, first: Option<&str>, age: u32) -> Row {
    row![last.to_owned(), first.map(str::to_owned), age]
}

#[test]
fn rows_sort_like_tuples() {
    init_logging();
    let input = vec![
        ("Smith", Some("Jane"), 40),
        ("Doe", None, 20),
        ("Smith", None, 50),
        ("Doe", Some("John"), 30),
        ("Smith", Some("Jane"), 35),
    ];

    let sorted = people()
        .sort(input.iter().map(|&(l, f, a)| person(l, f, a)))
        .unwrap()
        .into_iter()
        .map(|row| format!("{:?}", row.row()))
        .collect::<Vec<_>>();

    let mut expected = input
        .iter()
        .map(|&(l, f, a)| order((l.to_owned(), f.map(str::to_owned), a)))
        .collect::<Vec<_>>();
    expected.sort();
    let expected = expected
        .into_iter()
        .map(|o| {
            let (l, f, a) = o.into_tuple();
            format!("{:?}", person(&l, f.as_deref(), a))
        })
        .collect::<Vec<_>>();

    assert_eq!(sorted, expected);
    assert_eq!(sorted[0], r#"["Doe", None, 20]"#);
}

#[test]
fn every_scenario_matches() {
    init_logging();
    let order = DynOrder::terminal()
        .prepend::<i32>()
        .prepend::<Option<&'static str>>();
    let bind = |first: Option<&'static str>, second: i32| order.bind(row![first, second]);

    let compare = |a: (Option<&'static str>, i32), b: (Option<&'static str>, i32)| {
        bind(a.0, a.1)?.try_compare(&bind(b.0, b.1)?)
    };
    assert_eq!(compare((Some("A"), 1), (Some("A"), 1)), Ok(Equal));
    assert_eq!(compare((Some("A"), 1), (Some("A"), 0)), Ok(Greater));
    assert_eq!(compare((Some("A"), 1), (Some("B"), 0)), Ok(Less));
    assert_eq!(compare((Some("A"), 1), (Some("A"), 2)), Ok(Less));
    assert_eq!(compare((Some("A"), 1), (None, 2)), Ok(Greater));
    assert_eq!(compare((None, 2), (Some("A"), 1)), Ok(Less));
    assert_eq!(compare((None, 2), (None, 2)), Ok(Equal));
}

#[test]
fn sort_fails_fast_on_mismatched_row() {
    init_logging();
    let rows = vec![
        person("Doe", None, 20),
        row!["Doe".to_owned(), None::<String>],
        row!["Doe".to_owned(), None::<String>, 20_i64],
    ];
    assert_eq!(
        people().sort(rows).unwrap_err(),
        Error::ArityMismatch {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn type_mismatch_names_both_types() {
    init_logging();
    let err = people()
        .bind(row!["Doe".to_owned(), None::<String>, 20_i64])
        .unwrap_err();
    assert_eq!(
        err,
        Error::TypeMismatch {
            index: 2,
            expected: "u32",
            found: "i64"
        }
    );
    assert_eq!(
        err.to_string(),
        "type mismatch at field 2: expected `u32`, found `i64`"
    );
}

#[test]
fn empty_chain_orders_empty_rows() {
    let order = DynOrder::terminal();
    let a = order.bind(row![]).unwrap();
    let b = order.bind(Vec::new()).unwrap();
    assert_eq!(a.try_compare(&b), Ok(Equal));
    assert!(order.bind(row![1]).is_err());
}

#[test]
fn rows_keep_their_order() {
    let bound = people().bind(person("Doe", Some("J"), 1)).unwrap();
    assert_eq!(bound.order().arity(), 3);
    assert_eq!(bound.into_row().len(), 3);
}
