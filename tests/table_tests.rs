use bcml::{tuple, Error, Table, Tuple, Value};

fn sample() -> Table {
    let mut table = Table::new();
    table.push(tuple![1, 2]);
    table.push(tuple![3, 4]);
    table
}

#[test]
fn test_push_wraps_scalars() {
    let mut table = Table::new();
    table.push(tuple![1, 2]);
    table.push("lone");
    assert_eq!(table.len(), 2);
    assert_eq!(table.row(0).unwrap(), &tuple![1, 2]);
    assert_eq!(table.row(1).unwrap(), &tuple!["lone"]);
}

#[test]
fn test_jagged_rows() {
    let mut table = Table::new();
    table.push(tuple![1]);
    table.push(tuple![2, 3, 4]);
    assert_eq!(table.row(0).unwrap().len(), 1);
    assert_eq!(table.row(1).unwrap().len(), 3);
    assert!(table.get(0, 2).is_err());
    assert_eq!(table.get(1, 2).unwrap(), &Value::from(4));
}

#[test]
fn test_get_bounds() {
    let table = sample();
    assert_eq!(table.get(0, 1).unwrap(), &Value::from(2));
    assert!(matches!(table.get(5, 0), Err(Error::OutOfRange { .. })));
    assert!(matches!(table.get(0, 5), Err(Error::OutOfRange { .. })));
}

#[test]
fn test_insert_within_row() {
    let mut table = sample();
    table.insert(0, 1, 9).unwrap();
    assert_eq!(table.row(0).unwrap(), &tuple![1, 9, 2]);
    // the column must land strictly inside the addressed row
    assert!(table.insert(0, 3, 9).is_err());
    assert!(table.insert(7, 0, 9).is_err());
}

#[test]
fn test_replace_and_remove() {
    let mut table = sample();
    table.replace(1, 0, 30).unwrap();
    assert_eq!(table.get(1, 0).unwrap(), &Value::from(30));
    table.remove(1, 0).unwrap();
    assert_eq!(table.row(1).unwrap(), &tuple![4]);
    assert!(table.remove(1, 5).is_err());
    // an emptied row stays in place
    table.remove(1, 0).unwrap();
    assert_eq!(table.len(), 2);
    assert!(table.row(1).unwrap().is_empty());
}

#[test]
fn test_swap_and_pop() {
    let mut table = sample();
    table.swap(0, 1).unwrap();
    assert_eq!(table.row(0).unwrap(), &tuple![3, 4]);
    assert!(table.swap(0, 2).is_err());
    table.pop();
    assert_eq!(table.len(), 1);
    let mut empty = Table::new();
    empty.pop();
    assert!(empty.is_empty());
}

#[test]
fn test_index_of_miss_is_origin() {
    let table = sample();
    assert_eq!(table.index_of(&Value::from(4)), (1, 1));
    // a miss reports (0, 0); membership must be checked separately
    assert_eq!(table.index_of(&Value::from(77)), (0, 0));
    assert!(!table.contains(&Value::from(77)));
}

#[test]
fn test_contains_dual_path() {
    let table = sample();
    assert!(table.contains(&Value::from(3)));
    assert!(table.contains(&Value::from(tuple![1, 2])));
    assert!(!table.contains(&Value::from(tuple![1])));
    assert!(!Table::new().contains(&Value::from(1)));
}

#[test]
fn test_slice_and_join() {
    let mut table = sample();
    let mut other = Table::new();
    other.push(tuple![5, 6]);
    table.join(&[other]);
    assert_eq!(table.len(), 3);
    table.slice(1, 3);
    assert_eq!(table.len(), 2);
    assert_eq!(table.row(0).unwrap(), &tuple![3, 4]);
}

#[test]
fn test_subset_and_superset() {
    let small = sample();
    let mut big = sample();
    big.push(tuple![5, 6]);
    assert!(small.is_subset_of(&big));
    assert!(big.is_superset_of(&small));
    assert!(!big.is_subset_of(&small));
    assert!(Table::new().is_subset_of(&small));
}

#[test]
fn test_subset_superset_mutual_inverse() {
    let a = sample();
    let mut b = sample();
    b.push(tuple![9]);
    assert_eq!(a.is_subset_of(&b), b.is_superset_of(&a));
    assert_eq!(b.is_subset_of(&a), a.is_superset_of(&b));
    assert_eq!(a.is_subset_of(&a), a.is_superset_of(&a));
}

#[test]
fn test_subtract() {
    let mut table = sample();
    table.push(tuple![5, 6]);
    let result = table.subtract(&sample());
    assert_eq!(result.len(), 1);
    assert_eq!(result.row(0).unwrap(), &tuple![5, 6]);
}

#[test]
fn test_is_disjoint_cell_wise() {
    let table = sample();
    let mut other = Table::new();
    other.push(tuple![7, 8]);
    assert!(table.is_disjoint(&other));
    // one shared cell anywhere breaks disjointness
    other.push(tuple![9, 2]);
    assert!(!table.is_disjoint(&other));
    assert!(table.is_disjoint(&Table::new()));
}

#[test]
fn test_filter_flattens() {
    let mut table = Table::new();
    table.push(tuple![1, "a"]);
    table.push(tuple!["b", 2]);
    table.push(tuple!["c"]);
    let numbers = table.filter(|v| v.is_numeric());
    assert_eq!(numbers, tuple![1, 2]);
    let nothing = table.filter(|v| v.is_line());
    assert!(nothing.is_empty());
}

#[test]
fn test_display() {
    let table = sample();
    assert_eq!(table.to_string(), "[1, 2]\n[3, 4]\n");
    assert_eq!(Table::new().to_string(), "");
}

#[test]
fn test_from_iterator() {
    let rows = vec![tuple![1], tuple![2]];
    let table: Table = rows.into_iter().collect();
    assert_eq!(table.len(), 2);
    let lens: Vec<usize> = table.iter().map(Tuple::len).collect();
    assert_eq!(lens, vec![1, 1]);
}
