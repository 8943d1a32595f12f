//! Property-based tests for the query operators.
//!
//! Every operator is checked against a brute-force evaluation over the same
//! randomly generated rows.

use proptest::prelude::*;
use rowflow_core::schema::TableBuilder;
use rowflow_core::{DataType, Row, RowRef, Value};
use rowflow_query::executor::{
    collect, IndexScan, NestedLoopsJoin, Operator, Project, Select, Sort, TableScan, Unique,
};
use rowflow_storage::RowStore;
use std::rc::Rc;

/// Strategy for (key, payload) pairs within a small range so keys repeat.
fn pairs_strategy(max_rows: usize) -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-20i64..20, -5i64..5), 0..max_rows)
}

/// Builds a store of (id, k, v) rows with `id` the position in `pairs`.
fn build_store(name: &str, pairs: &[(i64, i64)]) -> RowStore {
    let schema = TableBuilder::new(name)
        .unwrap()
        .add_column("id", DataType::Int64)
        .unwrap()
        .add_column("k", DataType::Int64)
        .unwrap()
        .add_column("v", DataType::Int64)
        .unwrap()
        .build()
        .unwrap();
    let mut store = RowStore::new(Rc::new(schema));
    for (i, (k, v)) in pairs.iter().enumerate() {
        store
            .insert_values(vec![Value::Int64(i as i64), Value::Int64(*k), Value::Int64(*v)])
            .unwrap();
    }
    store
}

fn ints(row: &Row) -> Vec<i64> {
    row.values().iter().map(|v| v.as_i64().unwrap()).collect()
}

fn all_ints(rows: &[RowRef]) -> Vec<Vec<i64>> {
    rows.iter().map(|row| ints(row)).collect()
}

/// Rows of `pairs` as (id, k, v) in store order.
fn expected_rows(pairs: &[(i64, i64)]) -> Vec<Vec<i64>> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, (k, v))| vec![i as i64, *k, *v])
        .collect()
}

proptest! {
    /// A full scan yields every stored row exactly once, in store order.
    #[test]
    fn scan_is_complete(pairs in pairs_strategy(100)) {
        let store = build_store("t", &pairs);
        let rows = collect(&mut TableScan::new(&store)).unwrap();
        prop_assert_eq!(rows.len(), store.len());
        prop_assert_eq!(all_ints(&rows), expected_rows(&pairs));
    }

    /// An index scan over [lo, hi] yields exactly the keys in range, in key order.
    #[test]
    fn index_scan_matches_range(pairs in pairs_strategy(100), lo in -25i64..25, hi in -25i64..25) {
        let mut store = build_store("t", &pairs);
        store.create_index("by_k", &["k"]).unwrap();
        let index = store.index("by_k").unwrap();

        let mut scan = IndexScan::new(index, vec![Value::Int64(lo)], Some(vec![Value::Int64(hi)])).unwrap();
        let got: Vec<i64> = collect(&mut scan).unwrap().iter().map(|r| r.at(0).unwrap().as_i64().unwrap()).collect();

        let mut expected: Vec<i64> = pairs.iter().map(|(k, _)| *k).filter(|k| *k >= lo && *k <= hi).collect();
        expected.sort();
        prop_assert_eq!(got, expected);
    }

    /// Select keeps exactly the accepted rows, in input order.
    #[test]
    fn select_is_sound(pairs in pairs_strategy(100), threshold in -20i64..20) {
        let store = build_store("t", &pairs);
        let mut select = Select::new(TableScan::new(&store), move |row: &Row| {
            row.at(1).map(|v| v.as_i64() >= Some(threshold)).unwrap_or(false)
        });
        let got = all_ints(&collect(&mut select).unwrap());
        let expected: Vec<Vec<i64>> = expected_rows(&pairs).into_iter().filter(|r| r[1] >= threshold).collect();
        prop_assert_eq!(got, expected);
    }

    /// Project yields the requested columns of each input row, in requested order.
    #[test]
    fn project_picks_columns(
        pairs in pairs_strategy(50),
        columns in Just(vec![0usize, 1, 2]).prop_shuffle().prop_flat_map(|c| (Just(c), 0usize..=3)),
    ) {
        let (order, n) = columns;
        let selected = &order[..n];
        let store = build_store("t", &pairs);
        let mut project = Project::new(TableScan::new(&store), selected).unwrap();
        prop_assert_eq!(project.arity(), n);

        let got = all_ints(&collect(&mut project).unwrap());
        let expected: Vec<Vec<i64>> = expected_rows(&pairs)
            .into_iter()
            .map(|r| selected.iter().map(|&c| r[c]).collect())
            .collect();
        prop_assert_eq!(got, expected);
    }

    /// The join yields concat(l, r without join column) for every matching pair,
    /// left-major, with duplicates kept.
    #[test]
    fn join_matches_brute_force(left in pairs_strategy(30), right in pairs_strategy(30)) {
        let left_store = build_store("l", &left);
        let right_store = build_store("r", &right);
        let mut join = NestedLoopsJoin::new(
            TableScan::new(&left_store), &[1],
            TableScan::new(&right_store), &[1],
        ).unwrap();
        prop_assert_eq!(join.arity(), 5);
        let got = all_ints(&collect(&mut join).unwrap());

        let mut expected = Vec::new();
        for l in expected_rows(&left) {
            for r in expected_rows(&right) {
                if l[1] == r[1] {
                    expected.push(vec![l[0], l[1], l[2], r[0], r[2]]);
                }
            }
        }
        prop_assert_eq!(got, expected);
    }

    /// Sort yields a permutation of its input ordered by the key columns.
    #[test]
    fn sort_orders_permutation(pairs in pairs_strategy(100)) {
        let store = build_store("t", &pairs);
        let mut sort = Sort::new(TableScan::new(&store), &[2, 1]).unwrap();
        let got = all_ints(&collect(&mut sort).unwrap());

        let mut expected = expected_rows(&pairs);
        expected.sort_by_key(|r| (r[2], r[1]));
        prop_assert_eq!(got, expected);
    }

    /// Unique over sorted input collapses adjacent equal rows only.
    #[test]
    fn unique_dedups_sorted_input(pairs in pairs_strategy(100)) {
        let store = build_store("t", &pairs);
        let project = Project::new(TableScan::new(&store), &[1, 2]).unwrap();
        let mut unique = Unique::new(Sort::new(project, &[0, 1]).unwrap());
        let got = all_ints(&collect(&mut unique).unwrap());

        let mut expected: Vec<Vec<i64>> = pairs.iter().map(|(k, v)| vec![*k, *v]).collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(got, expected);
    }

    /// Unique without a sort leaves non-adjacent duplicates in place.
    #[test]
    fn unique_keeps_non_adjacent(pairs in pairs_strategy(60)) {
        let store = build_store("t", &pairs);
        let project = Project::new(TableScan::new(&store), &[1]).unwrap();
        let mut unique = Unique::new(project);
        let got = all_ints(&collect(&mut unique).unwrap());

        let mut expected: Vec<Vec<i64>> = pairs.iter().map(|(k, _)| vec![*k]).collect();
        expected.dedup();
        prop_assert_eq!(got, expected);
    }

    /// No stored row is still referenced once a pipeline is closed and its
    /// output dropped, however far it was driven.
    #[test]
    fn pipeline_releases_rows(pairs in pairs_strategy(40), pulls in 0usize..20) {
        let store = build_store("t", &pairs);
        {
            let select = Select::new(TableScan::new(&store), |row: &Row| {
                row.at(2).map(|v| v.as_i64() != Some(0)).unwrap_or(false)
            });
            let join = NestedLoopsJoin::new(select, &[1], TableScan::new(&store), &[1]).unwrap();
            let mut sort = Sort::new(join, &[0]).unwrap();
            sort.open().unwrap();
            let mut held = Vec::new();
            for _ in 0..pulls {
                match sort.next().unwrap() {
                    Some(row) => held.push(row),
                    None => break,
                }
            }
            sort.close();
            prop_assert!(held.iter().all(|row| Rc::strong_count(row) == 1));
        }
        prop_assert!(store.rows().all(|row| Rc::strong_count(row) == 1));
    }
}
