use bcml::{tuple, Error, Kind, Tuple, Value};
use num_bigint::BigInt;

fn mixed() -> Tuple {
    tuple![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, "2", false]
}

#[test]
fn test_length_and_empty() {
    let mut t = Tuple::new();
    assert_eq!(t.len(), 0);
    assert!(t.is_empty());
    t.push(1);
    t.push(2);
    t.push(3);
    assert_eq!(t.len(), 3);
    t.pop();
    t.pop();
    t.pop();
    assert!(t.is_empty());
}

#[test]
fn test_equality() {
    let mut a = Tuple::new();
    let mut b = Tuple::new();
    a.push(1);
    assert_ne!(a, b);
    b.push(1);
    assert_eq!(a, b);
    a.push(2);
    assert_ne!(a, b);
    b.push(2);
    assert_eq!(a, b);
}

#[test]
fn test_push_opt_drops_none() {
    let mut t = tuple![1];
    t.push_opt(None);
    assert_eq!(t.len(), 1);
    t.push_opt(Some(Value::from(2)));
    assert_eq!(t.len(), 2);
}

#[test]
fn test_insert() {
    let mut t = tuple![0];
    t.insert(0, 2).unwrap();
    t.insert(2, 3).unwrap();
    assert_eq!(t, tuple![2, 0, 3]);
    assert!(matches!(
        t.insert(9, 1),
        Err(Error::OutOfRange { index: 9, len: 3 })
    ));
    // a dropped value wins over a bad index
    assert!(t.insert_opt(9, None).is_ok());
}

#[test]
fn test_replace() {
    let mut t = mixed();
    t.replace(0, 1).unwrap();
    t.replace(1, 2).unwrap();
    t.replace(2, 3).unwrap();
    assert_eq!(t.get(0).unwrap(), &Value::from(1));
    assert_eq!(t.get(1).unwrap(), &Value::from(2));
    assert_eq!(t.get(2).unwrap(), &Value::from(3));
    assert!(t.replace(t.len(), 0).is_err());
    assert!(t.replace_opt(t.len(), None).is_ok());
}

#[test]
fn test_swap() {
    let mut t = mixed();
    t.swap(0, 1).unwrap();
    t.swap(1, 2).unwrap();
    t.swap(2, 3).unwrap();
    assert_eq!(t.get(0).unwrap(), &Value::from(1));
    assert_eq!(t.get(1).unwrap(), &Value::from(2));
    assert_eq!(t.get(2).unwrap(), &Value::from(3));
    assert!(t.swap(0, t.len()).is_err());
    assert!(t.swap(t.len(), 0).is_err());
}

#[test]
fn test_get_bounds() {
    let t = mixed();
    assert_eq!(t.get(10).unwrap(), &Value::from("2"));
    assert_eq!(t.get(11).unwrap(), &Value::from(false));
    assert!(matches!(t.get(12), Err(Error::OutOfRange { .. })));
}

#[test]
fn test_index_of_and_contains() {
    let t = mixed();
    assert_eq!(t.index_of(&Value::from(0)), Some(0));
    assert_eq!(t.index_of(&Value::from(9)), Some(9));
    assert_eq!(t.index_of(&Value::from("2")), Some(10));
    assert_eq!(t.index_of(&Value::from(false)), Some(11));
    assert_eq!(t.index_of(&Value::from(77)), None);
    assert!(t.contains(&Value::from("2")));
    // a string probe never matches the integer with the same digits
    assert_eq!(t.index_of(&Value::from("9")), None);
}

#[test]
fn test_contains_kind() {
    let mut t = tuple![1, 1];
    assert!(t.contains_kind(Kind::Int));
    assert!(!t.contains_kind(Kind::Str));
    assert!(!t.contains_kind(Kind::Bool));
    t.push("test");
    assert!(t.contains_kind(Kind::Str));
    t.push(true);
    assert!(t.contains_kind(Kind::Bool));
}

#[test]
fn test_values_of_kind() {
    let big: BigInt = "12345678901234567890123456789012345678901234567890"
        .parse()
        .unwrap();
    let t = tuple![1, 2, 3, 4.0f32, 5.5, 5.65, "Ciao", false, big.clone()];
    assert_eq!(t.values_of_kind(Kind::Int), tuple![1, 2, 3]);
    assert!(t.values_of_kind(Kind::Float).contains(&Value::from(4.0f32)));
    assert!(t.values_of_kind(Kind::Double).contains(&Value::from(5.5)));
    assert_eq!(t.values_of_kind(Kind::Str), tuple!["Ciao"]);
    assert!(t.values_of_kind(Kind::BigInt).contains(&Value::from(big)));
    assert!(t.values_of_kind(Kind::Char).is_empty());
}

#[test]
fn test_remove() {
    let mut t = mixed();
    t.remove(0).unwrap();
    assert_eq!(t.to_string(), "[1, 2, 3, 4, 5, 6, 7, 8, 9, 2, false]");
    t.remove(t.len() - 1).unwrap();
    assert_eq!(t.to_string(), "[1, 2, 3, 4, 5, 6, 7, 8, 9, 2]");
    assert!(!t.contains(&Value::from(false)));
    assert!(t.remove(t.len()).is_err());
    t.clear();
    // removing from an empty tuple is a no-op, not an error
    assert!(t.remove(0).is_ok());
}

#[test]
fn test_to_string() {
    assert_eq!(
        mixed().to_string(),
        "[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 2, false]"
    );
    assert_eq!(Tuple::new().to_string(), "[]");
}

#[test]
fn test_sort() {
    let mut t = mixed();
    t.sort();
    assert_eq!(
        t.to_string(),
        "[false, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 2]"
    );
    let mut single = tuple!["0"];
    single.sort();
    assert_eq!(single.to_string(), "[0]");
}

#[test]
fn test_sort_idempotent() {
    let mut t = mixed();
    t.sort();
    let once = t.clone();
    t.sort();
    assert_eq!(t, once);
}

#[test]
fn test_sort_bool_bucket_true_first() {
    let mut t = tuple![false, true, false, true];
    t.sort();
    assert_eq!(t, tuple![true, true, false, false]);
}

#[test]
fn test_sort_segments_by_kind() {
    // byte < long < char buckets regardless of the values inside
    let mut t = tuple![5i64, 'b', 3i64, 'a', 2i8];
    t.sort();
    assert_eq!(t, tuple![2i8, 3i64, 5i64, 'a', 'b']);
}

#[test]
fn test_sort_keeps_nested_line_last() {
    use bcml::Line;
    let mut t = tuple![Value::from(Line::new("k", 1)), Value::from(1)];
    t.sort();
    assert_eq!(t.get(0).unwrap(), &Value::from(1));
    assert!(t.get(1).unwrap().is_line());
}

#[test]
fn test_reverse() {
    let mut t = mixed();
    t.reverse();
    assert_eq!(t.to_string(), "[false, 2, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]");
    t.reverse();
    assert_eq!(t, mixed());
    let mut empty = Tuple::new();
    empty.reverse();
    assert_eq!(empty.to_string(), "[]");
}

#[test]
fn test_slice() {
    let mut t = mixed();
    t.slice(1, 4);
    assert_eq!(t.to_string(), "[1, 2, 3]");
    let mut t = mixed();
    t.slice(7, t.len());
    assert_eq!(t.to_string(), "[7, 8, 9, 2, false]");
    let mut t = mixed();
    t.slice(3, 99);
    assert_eq!(t.len(), 9);
    let mut t = mixed();
    t.slice(99, 3);
    assert!(t.is_empty());
    let mut empty = Tuple::new();
    empty.slice(0, 1);
    assert_eq!(empty.to_string(), "[]");
}

#[test]
fn test_split() {
    let mut t = mixed();
    let mut tail = Tuple::new();
    t.split(7, &mut tail);
    assert_eq!(t.to_string(), "[0, 1, 2, 3, 4, 5, 6]");
    assert_eq!(tail.to_string(), "[7, 8, 9, 2, false]");
    t.clear();
    t.split(1, &mut tail);
    assert_eq!(t.to_string(), "[]");
    // the out-tuple's previous contents are overwritten
    assert_eq!(tail.to_string(), "[]");
}

#[test]
fn test_join() {
    let mut t = tuple![0, 1, 2];
    let other = tuple![7, 8];
    t.join(&[Value::from(other), Value::from("not a tuple"), Value::from(9)]);
    assert_eq!(t.to_string(), "[0, 1, 2, 7, 8]");
}

#[test]
fn test_join_split_inverse() {
    let mut a = tuple![0, 1, 2, 3];
    let b = tuple![4, "5", false];
    let before = a.clone();
    let cut = a.len();
    a.join(&[Value::from(b.clone())]);
    let mut fresh = Tuple::new();
    a.split(cut, &mut fresh);
    assert_eq!(a, before);
    assert_eq!(fresh, b);
}

#[test]
fn test_fill() {
    let mut t = Tuple::new();
    t.fill(1, 10);
    assert_eq!(t.len(), 10);
    t.fill(1, 10);
    assert_eq!(t.len(), 20);
    t.fill(1, 0);
    assert_eq!(t.len(), 20);
    assert!(t.iter().all(|v| v == &Value::from(1)));
}

#[test]
fn test_fill_random_overwrites_in_place() {
    let mut t = Tuple::new();
    t.fill("x", 5);
    t.fill_random(3);
    assert_eq!(t.len(), 5);
    for i in 0..3 {
        let n = t.get(i).unwrap().as_i64().unwrap();
        assert!((0..=99).contains(&n));
    }
    assert_eq!(t.get(3).unwrap(), &Value::from("x"));
    assert_eq!(t.get(4).unwrap(), &Value::from("x"));
}

#[test]
fn test_fill_random_clamps_and_swaps_bounds() {
    let mut t = Tuple::new();
    t.fill(0, 4);
    // more slots requested than exist: clamped, never appended
    t.fill_random_range(30, 10, 100);
    assert_eq!(t.len(), 4);
    for v in t.iter() {
        let n = v.as_i64().unwrap();
        assert!((10..=30).contains(&n));
    }
    let mut empty = Tuple::new();
    empty.fill_random(5);
    assert!(empty.is_empty());
}

#[test]
fn test_is_subset_of() {
    let t = tuple![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, "2"];
    let big = tuple![0, 9, 2, 3, 7, 5, 6, 4, 8, 1, "2", false];
    assert!(t.is_subset_of(&Value::from(big.clone())).unwrap());
    let mut t = t;
    t.push("1");
    assert!(!t.is_subset_of(&Value::from(big.clone())).unwrap());
    t.clear();
    assert!(t.is_subset_of(&Value::from(big)).unwrap());
}

#[test]
fn test_subset_superset_reflexive() {
    let t = mixed();
    assert!(t.is_subset_of(&Value::from(t.clone())).unwrap());
    assert!(t.is_superset_of(&Value::from(t.clone())).unwrap());
}

#[test]
fn test_is_superset_of() {
    let t = tuple![0, 1, 2, 3, false, "cuai"];
    let mut small = tuple![0, 1, 3, false, 2];
    assert!(t.is_superset_of(&Value::from(small.clone())).unwrap());
    small.pop();
    small.push("1");
    assert!(!t.is_superset_of(&Value::from(small.clone())).unwrap());
    small.clear();
    assert!(t.is_superset_of(&Value::from(small)).unwrap());
    assert!(matches!(
        t.is_superset_of(&Value::from("0")),
        Err(Error::NotATuple)
    ));
}

#[test]
fn test_strict_subset_and_superset() {
    let t = tuple![0, 1, 2, 3, false];
    let big = tuple![0, 1, 2, 3, false, "cuai"];
    assert!(t.is_strict_subset_of(&Value::from(big.clone())).unwrap());
    assert!(big.is_strict_superset_of(&Value::from(t.clone())).unwrap());

    let mut t = t;
    t.push("1");
    let mut big = big;
    big.pop();
    assert!(!t.is_strict_subset_of(&Value::from(big.clone())).unwrap());
    t.clear();
    assert!(t.is_strict_subset_of(&Value::from(big)).unwrap());
    assert!(matches!(
        t.is_strict_subset_of(&Value::from(0)),
        Err(Error::NotATuple)
    ));
}

#[test]
fn test_strict_subset_streak_behavior() {
    // the streak counter only fails on a miss after the last run of
    // hits, so a reordered subset still passes
    let t = tuple![1, 2];
    assert!(t.is_strict_subset_of(&Value::from(tuple![2, 1, 5])).unwrap());
    // a miss in the middle resets the streak below the full length
    let t = tuple![1, 9, 2];
    assert!(!t.is_strict_subset_of(&Value::from(tuple![1, 2, 3])).unwrap());
    // a miss up front leaves the trailing streak short as well
    let t = tuple![9, 1, 2];
    assert!(!t.is_strict_subset_of(&Value::from(tuple![1, 2, 3])).unwrap());
}

#[test]
fn test_is_disjoint() {
    let t = tuple![0, 1, 2, 3, false, "cuai"];
    let overlap = tuple![0, 1, 2, 3, false];
    assert!(!t.is_disjoint(&Value::from(overlap)).unwrap());
    let stranger = tuple!["-1"];
    assert!(t.is_disjoint(&Value::from(stranger.clone())).unwrap());
    let empty = Tuple::new();
    assert!(empty.is_disjoint(&Value::from(stranger)).unwrap());
    // a tuple is never disjoint from its own equal
    assert!(!t.is_disjoint(&Value::from(t.clone())).unwrap());
    assert!(!empty.is_disjoint(&Value::from(Tuple::new())).unwrap());
    assert!(matches!(
        t.is_disjoint(&Value::from('x')),
        Err(Error::NotATuple)
    ));
}

#[test]
fn test_symmetric_difference() {
    // the string "2" survives: it never matches the integer 2
    let t = tuple![0, 1, 2, 3, 4, 5, "2", false];
    let other = tuple![0, 1, 2, 3, false];
    let diff = t.symmetric_difference(&Value::from(other)).unwrap();
    assert_eq!(diff.to_string(), "[4, 5, 2]");
    assert_eq!(diff, tuple![4, 5, "2"]);

    let t = tuple![0, 1, 2, 3, 4, 5, false, "cuai"];
    let mut other = tuple![0, 1, 2, 3, false];
    assert_eq!(
        t.symmetric_difference(&Value::from(other.clone()))
            .unwrap()
            .to_string(),
        "[4, 5, cuai]"
    );
    other.push("-1");
    assert_eq!(
        t.symmetric_difference(&Value::from(other))
            .unwrap()
            .to_string(),
        "[4, 5, cuai, -1]"
    );
}

#[test]
fn test_subtract() {
    let t = tuple![0, 1, 2, 3, 4, 5, false, "cuai"];
    let mut other = tuple![0, 1, 2, 3, false];
    assert_eq!(
        t.subtract(&Value::from(other.clone())).unwrap().to_string(),
        "[4, 5, cuai]"
    );
    other.push("-1");
    assert_eq!(
        t.subtract(&Value::from(other)).unwrap().to_string(),
        "[4, 5, cuai]"
    );
    assert!(matches!(
        t.subtract(&Value::from(0)),
        Err(Error::NotATuple)
    ));
}

#[test]
fn test_filter() {
    let t = tuple![0, 1, 2, 3, 4, 5, false, "cuai"];
    let ints = t.filter(|v| v.kind() == Kind::Int);
    assert_eq!(ints.to_string(), "[0, 1, 2, 3, 4, 5]");
    let negatives = tuple![0, 1, -1].filter(|v| matches!(v, Value::Int(n) if *n < 0));
    assert_eq!(negatives, tuple![-1]);
}

#[test]
fn test_set_values_and_iteration() {
    let mut t = Tuple::new();
    t.set_values(vec![Value::from(1), Value::from(2)]);
    let collected: Vec<String> = t.iter().map(|v| v.to_string()).collect();
    assert_eq!(collected, vec!["1", "2"]);
    let owned: Vec<Value> = t.clone().into_iter().collect();
    assert_eq!(owned, vec![Value::from(1), Value::from(2)]);
}
