//! Convenience macros for building containers from literals.

/// Builds a [`Tuple`](crate::Tuple) from a list of literals.
///
/// Every element goes through `Value::from`, so any type with a
/// `From` conversion into [`Value`](crate::Value) works, mixed freely.
///
/// # Examples
///
/// ```rust
/// use bcml::{tuple, Value};
///
/// let t = tuple![1, "two", 3.0, false];
/// assert_eq!(t.len(), 4);
/// assert_eq!(t.get(1).unwrap(), &Value::from("two"));
///
/// let empty = tuple![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::Tuple::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut t = $crate::Tuple::new();
        $(t.push($crate::Value::from($value));)+
        t
    }};
}
